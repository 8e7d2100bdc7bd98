use soc_engine::catalog;
use soc_engine::tables::progress::ConditionKind;
use soc_engine::{
    Evaluator, JsonGameDataStore, LeftToRightEvaluator, LoadReport, LoaderConfig, LuaEvaluator,
    PatchLoader, SocContext, SocError,
};
use soc_formats::PatchSource;

fn load_with(
    context: &mut SocContext,
    evaluator: &dyn Evaluator,
    config: LoaderConfig,
    text: &str,
    mainfile: bool,
) -> Result<LoadReport, SocError> {
    let mut store = JsonGameDataStore::in_memory();
    let mut loader = PatchLoader::new(context, evaluator, &mut store, config);
    loader.load(PatchSource::from_text(text), mainfile)
}

fn load(context: &mut SocContext, text: &str) -> LoadReport {
    load_with(context, &LeftToRightEvaluator, LoaderConfig::default(), text, false)
        .expect("default policy never escalates")
}

#[test]
fn thing_speed_is_set_without_warnings() {
    let mut context = SocContext::new().unwrap();
    let report = load(&mut context, "THING 1\nSPEED = 10\n\n");
    assert_eq!(report.warning_count(), 0);
    assert_eq!(context.tables.mobjinfo[1].speed, 10);
    assert!(context.loaded);
}

#[test]
fn freeslotted_things_can_be_edited_by_name() {
    let mut context = SocContext::new().unwrap();
    let report = load(
        &mut context,
        "FREESLOT\nMT_FOO\n\nTHING MT_FOO\nSPEED = 5\n",
    );
    assert_eq!(report.warning_count(), 0);
    let slot = context.symbols.free.mobjs.find("FOO").unwrap();
    assert_eq!(slot, catalog::mt_firstfreeslot());
    assert_eq!(context.tables.mobjinfo[slot].speed, 5);
}

#[test]
fn out_of_range_thing_warns_once_and_skips_its_body() {
    let mut context = SocContext::new().unwrap();
    let before = context.tables.mobjinfo.clone();
    let report = load(&mut context, "THING 99999\nSPEED = 10\nRADIUS = 5\n");
    assert_eq!(report.warning_count(), 1);
    assert!(report.warnings[0].message.contains("out of range"));
    assert_eq!(context.tables.mobjinfo, before);
}

#[test]
fn directives_after_a_skipped_body_still_apply() {
    let mut context = SocContext::new().unwrap();
    let report = load(&mut context, "THING 99999\nSPEED = 5\n\nTHING 1\nSPEED = 3\n\n");
    assert_eq!(report.warning_count(), 1);
    assert_eq!(context.tables.mobjinfo[1].speed, 3);
}

#[test]
fn freeslot_names_on_the_directive_line_are_declared() {
    let mut context = SocContext::new().unwrap();
    let report = load(&mut context, "FREESLOT MT_FOO\nTHING MT_FOO\nSPEED = 5\n\n");
    assert_eq!(report.warning_count(), 0);
    let slot = context.symbols.free.mobjs.find("FOO").unwrap();
    assert_eq!(slot, catalog::mt_firstfreeslot());
    assert_eq!(context.tables.mobjinfo[slot].speed, 5);
}

#[test]
fn type_of_level_names_are_ored_together() {
    let mut context = SocContext::new().unwrap();
    let report = load(&mut context, "LEVEL AB\nTYPEOFLEVEL = RACE,TAG\n");
    assert_eq!(report.warning_count(), 0);

    let race = context.symbols.level_types.find("RACE").unwrap();
    let tag = context.symbols.level_types.find("TAG").unwrap();
    let header = &context.tables.map_headers[&111];
    assert_eq!(header.typeoflevel, race | tag);

    let report = load(&mut context, "LEVEL AB\nTYPEOFLEVEL = RACE,BOGUS,NOPE\n");
    assert_eq!(report.warning_count(), 2);
    assert_eq!(context.tables.map_headers[&111].typeoflevel, race);
}

#[test]
fn progress_directives_need_a_custom_gamedata() {
    let mut context = SocContext::new().unwrap();
    let patch = "EMBLEM 1\nMAPNUM = 1\n\nUNLOCKABLE 1\nNAME = Secret\n\nCLEAR ALL\n";
    let report = load(&mut context, patch);
    assert_eq!(report.warning_count(), 3);
    assert!(report.warnings.iter().all(|w| w.message.contains("custom gamedata")));
    assert_eq!(context.tables.num_emblems, 0);
    assert!(context.tables.unlockables[0].name.is_empty());

    let report = load_with(
        &mut context,
        &LeftToRightEvaluator,
        LoaderConfig::default(),
        "EMBLEM 1\nMAPNUM = 1\n\nUNLOCKABLE 1\nNAME = Secret\n",
        true,
    )
    .unwrap();
    assert_eq!(report.warning_count(), 0);
    assert_eq!(context.tables.num_emblems, 1);
    assert_eq!(context.tables.emblems[0].level, 1);
    assert_eq!(context.tables.unlockables[0].name, "Secret");
}

#[test]
fn gamedata_unlocks_the_rest_of_the_patch() {
    let mut context = SocContext::new().unwrap();
    let patch = "MAINCFG\nGAMEDATA = mymod.dat\n\nEMBLEM\nMAPNUM = A0\n";
    let report = load(&mut context, patch);
    assert_eq!(report.warning_count(), 0);
    assert!(report.side_effects.reload_gamedata);
    assert_eq!(context.tables.emblems[0].level, 100);
    assert_eq!(context.tables.maincfg.gamedata_file, "mymod.dat");
}

#[test]
fn conditions_must_come_in_order() {
    let mut context = SocContext::new().unwrap();
    let patch = "CONDITIONSET 1\nCondition2 = MAPBEATEN 5\nCondition1 = PLAYTIME 100\nCondition2 = TOTALEMBLEMS 3\n";
    let report = load_with(
        &mut context,
        &LeftToRightEvaluator,
        LoaderConfig::default(),
        patch,
        true,
    )
    .unwrap();
    assert_eq!(report.warning_count(), 1);
    assert!(report.warnings[0].message.contains("out of order"));

    let conditions = &context.tables.condition_sets[0].conditions;
    assert_eq!(conditions.len(), 2);
    assert_eq!(conditions[0].kind, ConditionKind::MapBeaten);
    assert_eq!(conditions[1].kind, ConditionKind::TotalEmblems);
    assert_eq!(conditions[1].requirement, 3);
}

#[test]
fn strict_policy_escalates_after_applying_the_patch() {
    let mut context = SocContext::new().unwrap();
    let config = LoaderConfig {
        strict: true,
        ..LoaderConfig::default()
    };
    let result = load_with(
        &mut context,
        &LeftToRightEvaluator,
        config,
        "THING 1\nSPEED = 7\nWOBBLE = 1\n",
        false,
    );
    assert!(matches!(result, Err(SocError::Escalated { warnings: 1 })));
    assert_eq!(context.tables.mobjinfo[1].speed, 7);
}

#[test]
fn lua_math_follows_operator_precedence() {
    let mut context = SocContext::new().unwrap();
    let lua = LuaEvaluator::new().unwrap();
    let report = load_with(
        &mut context,
        &lua,
        LoaderConfig::default(),
        "THING 1\nSPEED = 2+3*4\nFLAGS = MF_SOLID|MF_SHOOTABLE\n",
        false,
    )
    .unwrap();
    assert_eq!(report.warning_count(), 0);
    assert_eq!(context.tables.mobjinfo[1].speed, 14);
    assert_eq!(context.tables.mobjinfo[1].flags, 2 | 4);

    load(&mut context, "THING 1\nSPEED = 2+3*4\n");
    assert_eq!(context.tables.mobjinfo[1].speed, 20);
}

#[test]
fn title_screen_changes_ask_for_a_title_restart() {
    let mut context = SocContext::new().unwrap();
    let config = LoaderConfig {
        title_screen: true,
        ..LoaderConfig::default()
    };
    let report = load_with(
        &mut context,
        &LeftToRightEvaluator,
        config,
        "MAINCFG\nTITLESCROLLSPEED = 4\n",
        false,
    )
    .unwrap();
    assert!(report.side_effects.title_changed);
    assert_eq!(report.side_effects.console_commands, ["exitgame"]);
}

#[test]
fn version_lines_are_checked() {
    let mut context = SocContext::new().unwrap();
    assert_eq!(load(&mut context, "SRB2 220\n").warning_count(), 0);
    assert_eq!(load(&mut context, "SRB2 210\n").warning_count(), 1);
    assert_eq!(load(&mut context, "SRB2 two\n").warning_count(), 1);
}
