use std::env;

use anyhow::{Context, Result};
use soc_formats::{WadArchive, WadKind};

fn main() -> Result<()> {
    let path = env::args().nth(1).context("usage: wad_dump <WAD file>")?;
    let archive = WadArchive::open(&path)?;
    let kind = match archive.kind() {
        WadKind::Iwad => "IWAD",
        WadKind::Pwad => "PWAD",
    };
    println!(
        "{kind} with {} lumps in {}",
        archive.entries().len(),
        archive.path().display()
    );
    for entry in archive.entries() {
        println!(
            "{name:<8} {offset:>10} {size:>10}",
            name = entry.name,
            offset = entry.offset,
            size = entry.size
        );
    }
    Ok(())
}
