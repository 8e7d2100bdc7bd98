use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::rc::Rc;

use anyhow::{Context, Result};
use mlua::Lua;
use serde_json::Value;
use soc_engine::{
    lua_bridge, JsonGameDataStore, LeftToRightEvaluator, LoaderConfig, PatchLoader,
    SocContext, SocError,
};
use soc_formats::{build_pwad, LumpDirectory, MemoryLumps, PatchSource, WadCollection};
use tempfile::tempdir;

fn write_wad(path: &Path, lumps: &[(&str, &[u8])]) -> Result<()> {
    fs::write(path, build_pwad(lumps)).with_context(|| format!("writing {}", path.display()))
}

#[test]
fn soc_lumps_load_from_archives_with_their_config_scripts() -> Result<()> {
    let dir = tempdir()?;
    let wad = dir.path().join("mod.wad");
    write_wad(
        &wad,
        &[
            ("SOC_MOD", b"MAINCFG\nEXECCFG = MODCFG\nEXECCFG = extra.cfg\n\nTHING 2\nHEIGHT = 40\n"),
            ("MODCFG", b"bind x jump\n"),
        ],
    )?;
    let wads = WadCollection::open_all(&[&wad])?;

    let mut context = SocContext::new()?;
    let mut store = JsonGameDataStore::in_memory();
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    let report = loader.load_lump(&wads, "SOC_MOD", 0, false)?;
    assert_eq!(report.warning_count(), 0);
    assert_eq!(
        report.side_effects.console_commands,
        ["bind x jump\n", "exec EXTRA.CFG"]
    );
    assert_eq!(context.tables.mobjinfo[2].height, 40);

    let mut store = JsonGameDataStore::in_memory();
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    let missing = loader.load_lump(&wads, "SOC_NONE", 0, false);
    assert!(matches!(missing, Err(SocError::MissingLump(name)) if name == "SOC_NONE"));
    Ok(())
}

#[test]
fn lump_directories_and_files_load_too() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("soc_dir.txt"), "THING 3\nMASS = 100\n")?;
    let lumps = LumpDirectory::open(dir.path())?;
    let file = dir.path().join("loose.soc");
    fs::write(&file, "THING 3\nDAMAGE = 2\n")?;

    let mut context = SocContext::new()?;
    let mut store = JsonGameDataStore::in_memory();
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    loader.load_lump(&lumps, "SOC_DIR", 0, false)?;
    loader.load_file(&file, false)?;
    assert!(matches!(
        loader.load_file(&dir.path().join("absent.soc"), false),
        Err(SocError::Io { .. })
    ));

    assert_eq!(context.tables.mobjinfo[3].mass, 100);
    assert_eq!(context.tables.mobjinfo[3].damage, 2);
    Ok(())
}

#[test]
fn gamedata_redirect_saves_then_reloads_the_mod_file() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("mymod.json"),
        r#"{ "progress.emblem1": true }"#,
    )?;
    let mut store = JsonGameDataStore::open(dir.path())?;
    store.write("records.map01", 1234);

    let mut context = SocContext::new()?;
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    let report = loader.load(
        PatchSource::from_text("MAINCFG\nGAMEDATA = MyMod.dat\n"),
        false,
    )?;
    assert!(report.side_effects.reload_gamedata);

    assert_eq!(store.file(), "mymod.dat");
    assert_eq!(store.value("progress.emblem1"), Some(&Value::Bool(true)));
    let saved: Value = serde_json::from_str(&fs::read_to_string(dir.path().join("gamedata.json"))?)?;
    assert_eq!(saved["records.map01"], 1234);
    Ok(())
}

#[test]
fn unreadable_mod_gamedata_is_a_warning_and_the_session_continues() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mymod.json"), "{ not json")?;
    let mut store = JsonGameDataStore::open(dir.path())?;

    let mut context = SocContext::new()?;
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    let report = loader.load(
        PatchSource::from_text("FREESLOT\nMT_KEEP\n\nMAINCFG\nGAMEDATA = mymod.dat\n\n"),
        false,
    )?;
    assert_eq!(report.warning_count(), 1);
    assert!(report.warnings[0].message.contains("mymod.dat"));
    assert!(report.side_effects.reload_gamedata);

    let report = loader.load(PatchSource::from_text("THING MT_KEEP\nSPEED = 9\n\n"), false)?;
    assert_eq!(report.warning_count(), 0);

    assert!(context.loaded);
    let slot = context.symbols.free.mobjs.find("KEEP").context("MT_KEEP was declared")?;
    assert_eq!(context.tables.mobjinfo[slot].speed, 9);
    Ok(())
}

#[test]
fn bad_gamedata_names_are_refused() -> Result<()> {
    let mut context = SocContext::new()?;
    let mut store = JsonGameDataStore::in_memory();
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    let report = loader.load(
        PatchSource::from_text("MAINCFG\nGAMEDATA = gamedata.dat\n\nEMBLEM 1\nMAPNUM = 1\n"),
        false,
    )?;
    assert_eq!(report.warning_count(), 2);
    assert!(!report.side_effects.reload_gamedata);
    assert_eq!(store.file(), "gamedata.dat");
    Ok(())
}

#[test]
fn reset_data_clears_progress() -> Result<()> {
    let mut store = JsonGameDataStore::in_memory();
    store.write("progress.emblem1", true);
    store.write("records.map01", 99);
    let mut context = SocContext::new()?;
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    loader.load(PatchSource::from_text("MAINCFG\nRESETDATA = 1\n"), false)?;
    assert!(store.value("progress.emblem1").is_none());
    assert!(store.value("records.map01").is_some());
    Ok(())
}

fn patch_shared(shared: &Rc<RefCell<SocContext>>, text: &str) -> Result<usize> {
    let mut context = shared.borrow_mut();
    let mut store = JsonGameDataStore::in_memory();
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    Ok(loader.load(PatchSource::from_text(text), false)?.warning_count())
}

#[test]
fn scripts_and_patches_share_free_slots() -> Result<()> {
    let shared = Rc::new(RefCell::new(SocContext::new()?));
    let lua = Lua::new();
    lua_bridge::install(&lua, Rc::clone(&shared))?;

    assert_eq!(patch_shared(&shared, "FREESLOT\nMT_PATCHED\n")?, 0);
    let from_script: i64 = lua.load(r#"return freeslot("MT_SCRIPTED")"#).eval()?;
    assert_eq!(patch_shared(&shared, "THING MT_SCRIPTED\nSPEED = 3\n")?, 0);

    assert_eq!(shared.borrow().tables.mobjinfo[from_script as usize].speed, 3);
    let (patched, scripted): (i64, i64) = lua.load("return MT_PATCHED, MT_SCRIPTED").eval()?;
    assert_eq!(scripted, from_script);
    assert_eq!(patched + 1, from_script);
    Ok(())
}

#[test]
fn memory_lumps_feed_execcfg() -> Result<()> {
    let lumps = MemoryLumps::new()
        .with("SOC_A", "MAINCFG\nEXECCFG = EMPTY\nEXECCFG = SCRIPT\n")
        .with("EMPTY", "")
        .with("SCRIPT", "say hi\n");
    let mut context = SocContext::new()?;
    let mut store = JsonGameDataStore::in_memory();
    let mut loader = PatchLoader::new(
        &mut context,
        &LeftToRightEvaluator,
        &mut store,
        LoaderConfig::default(),
    );
    let report = loader.load_lump(&lumps, "SOC_A", 0, false)?;
    assert_eq!(report.side_effects.console_commands, ["say hi\n"]);
    Ok(())
}

#[test]
fn cli_dumps_changed_tables() -> Result<()> {
    let dir = tempdir()?;
    let patch = dir.path().join("speed.soc");
    fs::write(&patch, "THING 1\nSPEED = 10\n")?;
    let dump = dir.path().join("dump.json");

    let output = Command::new(env!("CARGO_BIN_EXE_soc_engine"))
        .arg(&patch)
        .arg("--dump-json")
        .arg(&dump)
        .output()
        .context("running soc_engine")?;
    assert!(
        output.status.success(),
        "soc_engine failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 warnings"), "unexpected output: {stdout}");

    let dumped: Value = serde_json::from_str(&fs::read_to_string(&dump)?)?;
    assert!(dumped.get("mobjinfo").is_some());
    Ok(())
}

#[test]
fn cli_strict_mode_fails_on_warnings() -> Result<()> {
    let dir = tempdir()?;
    let patch = dir.path().join("bad.soc");
    fs::write(&patch, "THING 1\nWOBBLE = 10\n")?;

    let output = Command::new(env!("CARGO_BIN_EXE_soc_engine"))
        .arg(&patch)
        .arg("--strict")
        .output()
        .context("running soc_engine")?;
    assert!(!output.status.success());
    Ok(())
}
