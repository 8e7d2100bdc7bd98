use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use soc_engine::{
    Evaluator, GameDataStore, JsonGameDataStore, LeftToRightEvaluator, LoadReport, LoaderConfig,
    LuaEvaluator, PatchLoader, SocContext,
};
use soc_formats::{LumpDirectory, LumpProvider, WadCollection};

mod cli;

/// Loose lump files first, then the archives.
struct LumpSources {
    dir: Option<LumpDirectory>,
    wads: WadCollection,
}

impl LumpSources {
    fn open(wads: &[impl AsRef<Path>], dir: Option<&Path>) -> Result<Self> {
        let dir = dir
            .map(|dir| {
                LumpDirectory::open(dir)
                    .with_context(|| format!("opening lump directory {}", dir.display()))
            })
            .transpose()?;
        let wads = WadCollection::open_all(wads)?;
        Ok(Self { dir, wads })
    }

    /// Wad tag for sprites declared by `name`'s patch.
    fn tag(&self, name: &str) -> u16 {
        match self.wads.find(name) {
            Some((tag, _)) if !self.in_dir(name) => tag,
            _ => self.wads.archives().len() as u16,
        }
    }

    fn in_dir(&self, name: &str) -> bool {
        self.dir.as_ref().is_some_and(|dir| dir.check_lump_exists(name))
    }
}

impl LumpProvider for LumpSources {
    fn read_lump_by_name(&self, name: &str) -> Option<Vec<u8>> {
        self.dir
            .as_ref()
            .and_then(|dir| dir.read_lump_by_name(name))
            .or_else(|| self.wads.read_lump_by_name(name))
    }

    fn lump_length(&self, name: &str) -> Option<usize> {
        self.dir
            .as_ref()
            .and_then(|dir| dir.lump_length(name))
            .or_else(|| self.wads.lump_length(name))
    }
}

fn print_report(source: &str, report: &LoadReport) {
    let count = report.warning_count();
    println!(
        "{source}: {count} warning{}",
        if count == 1 { "" } else { "s" }
    );
    for warning in &report.warnings {
        println!("  {warning}");
    }
    let effects = &report.side_effects;
    if effects.reload_gamedata {
        println!("  game data reloaded");
    }
    if effects.title_changed {
        println!("  title screen changed");
    }
    if effects.intro_changed {
        println!("  intro changed");
    }
    for command in &effects.console_commands {
        println!("  console: {}", command.trim_end());
    }
}

fn main() -> Result<()> {
    let args = cli::parse()?;

    env_logger::init();

    let mut context = SocContext::new().context("checking the built-in name tables")?;
    let mut store = match args.gamedata.as_deref() {
        Some(dir) => JsonGameDataStore::open(dir)
            .with_context(|| format!("opening game data in {}", dir.display()))?,
        None => JsonGameDataStore::in_memory(),
    };
    let evaluator: Box<dyn Evaluator> = if args.lua_math {
        Box::new(LuaEvaluator::new().context("starting the Lua evaluator")?)
    } else {
        Box::new(LeftToRightEvaluator)
    };
    let config = LoaderConfig {
        strict: args.strict,
        title_screen: args.title_screen,
    };

    let sources = if args.lump_names.is_empty() {
        None
    } else {
        Some(LumpSources::open(&args.wads, args.lumps.as_deref())?)
    };

    {
        let mut loader = PatchLoader::new(&mut context, evaluator.as_ref(), &mut store, config);
        if let Some(sources) = sources.as_ref() {
            for name in &args.lump_names {
                let report = loader
                    .load_lump(sources, name, sources.tag(name), args.mainfile)
                    .with_context(|| format!("loading lump {name}"))?;
                print_report(name, &report);
            }
        }
        for path in &args.files {
            let report = loader
                .load_file(path, args.mainfile)
                .with_context(|| format!("loading {}", path.display()))?;
            print_report(&path.display().to_string(), &report);
        }
    }

    store.save().context("saving game data")?;

    if let Some(path) = args.dump_json.as_ref() {
        let dump = context.tables.touched_json(&context.symbols);
        let serialized = serde_json::to_string_pretty(&dump)?;
        fs::write(path, serialized)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote changed tables to {}", path.display());
    }

    Ok(())
}
