//! Patch driver: reads directive lines and hands each section body to its
//! parser.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use soc_formats::mapnum::map_number_str;
use soc_formats::tokens::{atoi, split_equals, split_whitespace, strip_comment, strip_newline};
use soc_formats::{LumpProvider, PatchSource};

use crate::catalog::{self, PATCHVERSION};
use crate::context::SocContext;
use crate::error::{SocError, Unresolved};
use crate::eval::Evaluator;
use crate::gamedata::GameDataStore;
use crate::resolve::Resolver;

/// Load policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Turn any warning into an error once the patch has been applied.
    pub strict: bool,
    /// The game is sitting on the title screen.
    pub title_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Zero-based line of the patch, `None` outside a file.
    pub line: Option<usize>,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Work the host has to do after a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SideEffects {
    pub reload_gamedata: bool,
    pub title_changed: bool,
    pub intro_changed: bool,
    /// Console text to run, in order.
    pub console_commands: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub warnings: Vec<Warning>,
    pub side_effects: SideEffects,
}

impl LoadReport {
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

/// Applies patches to a [`SocContext`].
pub struct PatchLoader<'a> {
    context: &'a mut SocContext,
    evaluator: &'a dyn Evaluator,
    store: &'a mut dyn GameDataStore,
    config: LoaderConfig,
}

impl<'a> PatchLoader<'a> {
    pub fn new(
        context: &'a mut SocContext,
        evaluator: &'a dyn Evaluator,
        store: &'a mut dyn GameDataStore,
        config: LoaderConfig,
    ) -> Self {
        Self {
            context,
            evaluator,
            store,
            config,
        }
    }

    pub fn context(&self) -> &SocContext {
        self.context
    }

    /// Runs one patch. Tables stay mutated even when the strict policy
    /// turns the warnings into an error.
    pub fn load(&mut self, source: PatchSource, mainfile: bool) -> Result<LoadReport, SocError> {
        self.run(source, mainfile, None)
    }

    /// Loads the SOC lump `name`. `EXECCFG` lumps are looked up through
    /// the same provider.
    pub fn load_lump(
        &mut self,
        provider: &dyn LumpProvider,
        name: &str,
        wad: u16,
        mainfile: bool,
    ) -> Result<LoadReport, SocError> {
        let data = provider
            .read_lump_by_name(name)
            .ok_or_else(|| SocError::MissingLump(name.to_string()))?;
        log::info!("loading SOC lump {name}");
        self.run(PatchSource::new(data, wad), mainfile, Some(provider))
    }

    pub fn load_file(&mut self, path: &Path, mainfile: bool) -> Result<LoadReport, SocError> {
        let data = fs::read(path).map_err(|source| SocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading SOC file {}", path.display());
        self.run(PatchSource::new(data, 0), mainfile, None)
    }

    fn run(
        &mut self,
        source: PatchSource,
        mainfile: bool,
        lumps: Option<&dyn LumpProvider>,
    ) -> Result<LoadReport, SocError> {
        let mut load = Load {
            source,
            context: &mut *self.context,
            evaluator: self.evaluator,
            store: &mut *self.store,
            lumps,
            config: self.config,
            mainfile,
            gamedata_added: false,
            report: LoadReport::default(),
        };
        load.run();
        let report = load.report;

        let count = report.warning_count();
        if count > 0 {
            log::warn!("{count} warning{} in the SOC lump", if count == 1 { "" } else { "s" });
            if self.config.strict {
                return Err(SocError::Escalated { warnings: count });
            }
        }
        Ok(report)
    }
}

/// One line of a section body.
pub(crate) struct FieldLine {
    /// As read, line break included.
    pub raw: String,
    /// Without its line break and comment.
    pub body: String,
}

/// State of a single patch run. Section parsers are methods on this.
pub(crate) struct Load<'l> {
    pub source: PatchSource,
    pub context: &'l mut SocContext,
    pub evaluator: &'l dyn Evaluator,
    pub store: &'l mut dyn GameDataStore,
    pub lumps: Option<&'l dyn LumpProvider>,
    pub config: LoaderConfig,
    pub mainfile: bool,
    pub gamedata_added: bool,
    pub report: LoadReport,
}

impl Load<'_> {
    pub fn warn(&mut self, message: impl Into<String>) {
        let warning = Warning {
            line: self.source.line(),
            message: message.into(),
        };
        log::warn!("{warning}");
        self.report.warnings.push(warning);
    }

    /// Next field line of the current section, or `None` once a blank
    /// line or the end of the patch closes it. Comment lines are skipped.
    pub fn next_field(&mut self) -> Option<FieldLine> {
        loop {
            let raw = self.source.read_line()?;
            if raw.starts_with('#') {
                continue;
            }
            let body = strip_comment(strip_newline(&raw)).trim_end().to_string();
            if body.trim_start().is_empty() {
                return None;
            }
            return Some(FieldLine { raw, body });
        }
    }

    /// `KEY = VALUE` split with the key uppercased. A line without `=` is
    /// a warning and yields `None`.
    pub fn equals_field(&mut self, line: &FieldLine, section: &str) -> Option<(String, String)> {
        match split_equals(&line.body) {
            Some((key, value)) => Some((key.to_ascii_uppercase(), value.to_string())),
            None => {
                self.warn(format!("{section}: missing '=' in '{}'", line.body.trim()));
                None
            }
        }
    }

    /// `KEY VALUE` split, both uppercased. A key without a value is a
    /// warning and yields `None`.
    pub fn word_field(&mut self, line: &FieldLine) -> Option<(String, String)> {
        match split_whitespace(&line.body) {
            (Some(key), Some(value)) => {
                Some((key.to_ascii_uppercase(), value.to_ascii_uppercase()))
            }
            (Some(key), None) => {
                self.warn(format!("No value for token {}", key.to_ascii_uppercase()));
                None
            }
            _ => None,
        }
    }

    /// Skips the rest of a section body.
    pub fn ignore_lines(&mut self) {
        while let Some(raw) = self.source.read_line() {
            if raw.starts_with('\n') {
                break;
            }
        }
    }

    /// Evaluates a numeric field; failures warn and give 0.
    pub fn number(&mut self, expr: &str) -> i32 {
        match self.evaluator.evaluate(&self.context.symbols, expr) {
            Ok(value) => value as i32,
            Err(err) => {
                self.warn(err.to_string());
                0
            }
        }
    }

    /// Runs a resolver; a miss warns and gives the resolver's fallback.
    pub fn resolve(
        &mut self,
        lookup: impl FnOnce(&Resolver<'_>) -> Result<i32, Unresolved>,
    ) -> i32 {
        let result = lookup(&Resolver::new(&self.context.symbols));
        match result {
            Ok(value) => value,
            Err(miss) => {
                let fallback = miss.fallback;
                self.warn(miss.to_string());
                fallback
            }
        }
    }

    /// Copies text into a fixed-size field of `size` bytes (terminator
    /// included), warning when it had to be cut.
    pub fn bounded(&mut self, text: &str, size: usize, what: impl fmt::Display) -> String {
        let (stored, cut) = soc_formats::tokens::truncate_to(text, size);
        if cut {
            self.warn(format!("{what} exceeds max length of {}", size - 1));
        }
        stored
    }

    fn run(&mut self) {
        if !self.context.loaded {
            self.context.symbols.reset_free_slots();
        }

        while let Some(raw) = self.source.read_line() {
            if raw.starts_with('\n') || raw.starts_with('#') {
                continue;
            }
            let line = strip_newline(&raw).to_string();
            let mut tokens = line.split(' ').filter(|token| !token.is_empty());
            let Some(word) = tokens.next() else {
                continue;
            };
            let word = word.to_ascii_uppercase();
            match word.as_str() {
                "FREESLOT" => {
                    let inline: Vec<String> = tokens.map(str::to_string).collect();
                    self.read_freeslots(&inline);
                    continue;
                }
                "MAINCFG" => {
                    self.read_maincfg();
                    continue;
                }
                "WIPES" => {
                    self.read_wipes();
                    continue;
                }
                _ => {}
            }
            let word2 = tokens.next().map(str::to_ascii_uppercase);
            self.directive(&word, word2.as_deref(), &line);
        }

        self.finish()
    }

    fn gated(&mut self, word: &str) -> bool {
        if self.mainfile || self.gamedata_added {
            return false;
        }
        self.warn(format!("You must define a custom gamedata to use \"{word}\""));
        true
    }

    fn directive(&mut self, word: &str, word2: Option<&str>, line: &str) {
        let mut i = word2.map_or(0, atoi);
        match word {
            "CHARACTER" => {
                if (0..catalog::MAXSKINS as i32).contains(&i) {
                    self.read_character(i as usize);
                } else {
                    self.warn(format!("Character {i} out of range (0 - 31)"));
                    self.ignore_lines();
                }
                return;
            }
            "EMBLEM" => {
                if self.gated(word) {
                    self.ignore_lines();
                    return;
                }
                if word2.is_none() {
                    i = self.context.tables.num_emblems as i32 + 1;
                }
                if i > 0 && i <= catalog::MAXEMBLEMS as i32 {
                    let tables = &mut self.context.tables;
                    tables.num_emblems = tables.num_emblems.max(i as usize);
                    self.read_emblem(i as usize - 1);
                } else {
                    self.warn(format!(
                        "Emblem number {i} out of range (1 - {})",
                        catalog::MAXEMBLEMS
                    ));
                    self.ignore_lines();
                }
                return;
            }
            "EXTRAEMBLEM" => {
                if self.gated(word) {
                    self.ignore_lines();
                    return;
                }
                if word2.is_none() {
                    i = self.context.tables.num_extra_emblems as i32 + 1;
                }
                if i > 0 && i <= catalog::MAXEXTRAEMBLEMS as i32 {
                    let tables = &mut self.context.tables;
                    tables.num_extra_emblems = tables.num_extra_emblems.max(i as usize);
                    self.read_extra_emblem(i as usize - 1);
                } else {
                    self.warn(format!(
                        "Extra emblem number {i} out of range (1 - {})",
                        catalog::MAXEXTRAEMBLEMS
                    ));
                    self.ignore_lines();
                }
                return;
            }
            _ => {}
        }

        let Some(word2) = word2 else {
            self.warn(format!("missing argument for '{word}'"));
            return;
        };
        let named = i == 0 && !word2.starts_with('0');

        match word {
            "THING" | "MOBJ" | "OBJECT" => {
                if named {
                    i = self.resolve(|r| r.mobjtype(word2));
                }
                if i > 0 && (i as usize) < catalog::nummobjtypes() {
                    self.read_thing(i as usize);
                } else {
                    self.out_of_range(format!(
                        "Thing {i} out of range (1 - {})",
                        catalog::nummobjtypes() - 1
                    ));
                }
            }
            "SPRITE2" => {
                if named {
                    i = self.resolve(|r| r.sprite2(word2));
                }
                let first = catalog::spr2_firstfreeslot();
                let free = self.context.symbols.sprite2.free_cursor();
                if i >= first as i32 && (i as usize) < free {
                    self.read_sprite2(i as usize);
                } else {
                    self.out_of_range(format!(
                        "Sprite2 number {i} out of range ({first} - {})",
                        free as i64 - 1
                    ));
                }
            }
            "SPRITE" | "SPRITEINFO" => {
                if named {
                    i = self.resolve(|r| r.sprite(word2));
                }
                if i > 0 && (i as usize) < catalog::numsprites() {
                    self.read_spriteinfo(i as usize, false);
                } else {
                    self.out_of_range(format!(
                        "Sprite number {i} out of range (0 - {})",
                        catalog::numsprites() - 1
                    ));
                }
            }
            "SPRITE2INFO" => {
                if named {
                    i = self.resolve(|r| r.sprite2(word2));
                }
                if (0..catalog::NUMPLAYERSPRITES as i32).contains(&i) {
                    self.read_spriteinfo(i as usize, true);
                } else {
                    self.out_of_range(format!(
                        "Sprite2 number {i} out of range (0 - {})",
                        catalog::NUMPLAYERSPRITES - 1
                    ));
                }
            }
            "LEVEL" => {
                if word2.starts_with(|c: char| c.is_ascii_uppercase()) {
                    i = map_number_str(word2);
                }
                if i > 0 && i <= catalog::NUMMAPS {
                    self.read_level(i);
                } else {
                    self.out_of_range(format!(
                        "Level number {i} out of range (1 - {})",
                        catalog::NUMMAPS
                    ));
                }
            }
            "GAMETYPE" => {
                if let Some((_, rest)) = line.split_once(' ') {
                    let name = rest.split(|c: char| (c as u32) < 32).next().unwrap_or("");
                    self.read_gametype(name.to_string());
                }
            }
            "CUTSCENE" => {
                if i > 0 && i <= catalog::MAX_CUTSCENES as i32 {
                    self.read_cutscene(i as usize - 1);
                } else {
                    self.out_of_range(format!(
                        "Cutscene number {i} out of range (1 - {})",
                        catalog::MAX_CUTSCENES
                    ));
                }
            }
            "PROMPT" => {
                if i > 0 && (i as usize) < catalog::MAX_PROMPTS {
                    self.read_prompt(i as usize - 1);
                } else {
                    self.out_of_range(format!(
                        "Prompt number {i} out of range (1 - {})",
                        catalog::MAX_PROMPTS - 1
                    ));
                }
            }
            "FRAME" | "STATE" => {
                if named {
                    i = self.resolve(|r| r.state(word2));
                }
                if i >= 0 && (i as usize) < catalog::numstates() {
                    self.read_frame(i as usize);
                } else {
                    self.out_of_range(format!(
                        "Frame {i} out of range (0 - {})",
                        catalog::numstates() - 1
                    ));
                }
            }
            "SOUND" => {
                if named {
                    i = self.resolve(|r| r.sfx(word2));
                }
                if i > 0 && (i as usize) < catalog::numsfx() {
                    self.read_sound(i as usize);
                } else {
                    self.out_of_range(format!(
                        "Sound {i} out of range (1 - {})",
                        catalog::numsfx() - 1
                    ));
                }
            }
            "HUDITEM" => {
                if named {
                    i = self.resolve(|r| r.huditem(word2));
                }
                if i >= 0 && (i as usize) < catalog::numhuditems() {
                    self.read_huditem(i as usize);
                } else {
                    self.out_of_range(format!(
                        "HUD item number {i} out of range (0 - {})",
                        catalog::numhuditems() - 1
                    ));
                }
            }
            "MENU" => {
                if named {
                    i = self.resolve(|r| r.menutype(word2));
                }
                if i >= 1 && (i as usize) < catalog::nummenutypes() {
                    self.read_menu(i as usize);
                } else {
                    self.out_of_range(format!(
                        "Menu number {i} out of range (1 - {})",
                        catalog::nummenutypes() - 1
                    ));
                }
            }
            "UNLOCKABLE" => {
                if self.gated(word) {
                    self.ignore_lines();
                } else if i > 0 && i <= catalog::MAXUNLOCKABLES as i32 {
                    self.read_unlockable(i as usize - 1);
                } else {
                    self.out_of_range(format!(
                        "Unlockable number {i} out of range (1 - {})",
                        catalog::MAXUNLOCKABLES
                    ));
                }
            }
            "CONDITIONSET" => {
                if self.gated(word) {
                    self.ignore_lines();
                } else if i > 0 && i <= catalog::MAXCONDITIONSETS as i32 {
                    self.read_condition_set(i as usize);
                } else {
                    self.out_of_range(format!(
                        "Condition set number {i} out of range (1 - {})",
                        catalog::MAXCONDITIONSETS
                    ));
                }
            }
            "SRB2" => {
                if word2.starts_with(|c: char| c.is_ascii_digit()) {
                    if i != PATCHVERSION {
                        self.warn(format!(
                            "Patch is for SRB2 version {i}, only version {PATCHVERSION} is supported"
                        ));
                    }
                } else {
                    self.warn(format!(
                        "SRB2 version definition has incorrect format, use \"SRB2 {PATCHVERSION}\""
                    ));
                }
            }
            "CLEAR" => self.clear(word, word2),
            _ => self.warn(format!("Unknown word: {word}")),
        }
    }

    fn out_of_range(&mut self, message: String) {
        self.warn(message);
        self.ignore_lines();
    }

    fn clear(&mut self, word: &str, what: &str) {
        if self.gated(word) {
            return;
        }
        let all = what == "ALL";
        let tables = &mut self.context.tables;
        if all || what == "UNLOCKABLES" {
            tables.clear_unlockables();
        }
        if all || what == "EMBLEMS" {
            tables.clear_emblems();
        }
        if all || what == "EXTRAEMBLEMS" {
            tables.clear_extra_emblems();
        }
        if all || what == "CONDITIONSETS" {
            tables.clear_condition_sets();
        }
        if all || what == "LEVELS" {
            tables.clear_levels();
        }
    }

    fn finish(&mut self) {
        if self.gamedata_added {
            self.report.side_effects.reload_gamedata = true;
            if let Err(err) = self.store.load() {
                let file = self.context.tables.maincfg.gamedata_file.clone();
                self.warn(format!("Couldn't load game data {file}: {err:#}"));
            }
        }
        let effects = &mut self.report.side_effects;
        if self.config.title_screen {
            if effects.intro_changed {
                effects.console_commands.push("playintro".to_string());
            } else if effects.title_changed {
                effects.console_commands.push("exitgame".to_string());
            }
        }
        self.context.loaded = true;
    }
}
