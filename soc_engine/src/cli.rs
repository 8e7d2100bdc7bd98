use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Applies SOC patches and reports what they changed", version)]
pub struct Args {
    /// SOC text files to load, in order
    pub files: Vec<PathBuf>,

    /// WAD archive to search for lumps (repeatable; later archives win)
    #[arg(long = "wad", value_name = "WAD")]
    pub wads: Vec<PathBuf>,

    /// Directory of loose lump files, searched before the archives
    #[arg(long)]
    pub lumps: Option<PathBuf>,

    /// SOC lump to load from the archives (repeatable)
    #[arg(long = "lump", value_name = "NAME")]
    pub lump_names: Vec<String>,

    /// Directory holding the persistent game data JSON files
    #[arg(long, value_name = "DIR")]
    pub gamedata: Option<PathBuf>,

    /// Path to write the changed tables as JSON
    #[arg(long)]
    pub dump_json: Option<PathBuf>,

    /// Evaluate numeric expressions with Lua operator precedence
    #[arg(long)]
    pub lua_math: bool,

    /// Fail when a patch produced any warning
    #[arg(long)]
    pub strict: bool,

    /// Load as if the game were sitting on the title screen
    #[arg(long)]
    pub title_screen: bool,

    /// Treat the patches as the game's own main files
    #[arg(long)]
    pub mainfile: bool,
}

/// Validated run request.
#[derive(Debug)]
pub struct RunArgs {
    pub files: Vec<PathBuf>,
    pub wads: Vec<PathBuf>,
    pub lumps: Option<PathBuf>,
    pub lump_names: Vec<String>,
    pub gamedata: Option<PathBuf>,
    pub dump_json: Option<PathBuf>,
    pub lua_math: bool,
    pub strict: bool,
    pub title_screen: bool,
    pub mainfile: bool,
}

pub fn parse() -> Result<RunArgs> {
    Args::parse().into_run()
}

impl Args {
    fn into_run(self) -> Result<RunArgs> {
        if !self.lump_names.is_empty() && self.wads.is_empty() && self.lumps.is_none() {
            bail!("--lump requires --wad or --lumps");
        }
        if self.files.is_empty() && self.lump_names.is_empty() {
            bail!("nothing to load: pass SOC files or --lump names");
        }
        Ok(RunArgs {
            files: self.files,
            wads: self.wads,
            lumps: self.lumps,
            lump_names: self.lump_names,
            gamedata: self.gamedata,
            dump_json: self.dump_json,
            lua_math: self.lua_math,
            strict: self.strict,
            title_screen: self.title_screen,
            mainfile: self.mainfile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<RunArgs> {
        Args::try_parse_from(args)?.into_run()
    }

    #[test]
    fn lumps_need_a_source() {
        assert!(run(&["soc_engine", "--lump", "SOC_MAIN"]).is_err());
        let args = run(&["soc_engine", "--wad", "a.wad", "--lump", "SOC_MAIN", "--lump", "MAINCFG"])
            .unwrap();
        assert_eq!(args.lump_names, ["SOC_MAIN", "MAINCFG"]);
    }

    #[test]
    fn something_must_be_loaded() {
        assert!(run(&["soc_engine", "--strict"]).is_err());
        let args = run(&["soc_engine", "a.soc", "b.soc", "--lua-math"]).unwrap();
        assert_eq!(args.files.len(), 2);
        assert!(args.lua_math);
    }
}
