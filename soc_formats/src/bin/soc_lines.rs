use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use soc_formats::{PatchSource, strip_newline};

/// Print the decoded logical lines of a SOC patch, escapes applied.
#[derive(Parser)]
struct Args {
    /// Path to the SOC text to inspect
    path: PathBuf,

    /// Show color codes and escaped bytes as hex instead of raw characters
    #[arg(long)]
    hex: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let bytes =
        fs::read(&args.path).with_context(|| format!("reading {}", args.path.display()))?;
    let mut source = PatchSource::new(bytes, 0);

    while let Some(line) = source.read_line() {
        let number = source.line().unwrap_or(0);
        let text = strip_newline(&line);
        if args.hex {
            let rendered: String = text
                .chars()
                .map(|c| {
                    if (c as u32) < 0x80 {
                        c.to_string()
                    } else {
                        format!("<{:02x}>", c as u32)
                    }
                })
                .collect();
            println!("{number:>5}  {rendered}");
        } else {
            println!("{number:>5}  {text}");
        }
    }
    Ok(())
}
