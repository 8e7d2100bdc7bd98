//! Lump storage consumed by the patch loader.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::wad::WadArchive;

/// Lumps are addressed by names of at most this many characters.
pub const LUMP_NAME_LEN: usize = 8;

/// Opaque byte storage keyed by lump name (case-insensitive).
pub trait LumpProvider {
    fn read_lump_by_name(&self, name: &str) -> Option<Vec<u8>>;

    fn lump_length(&self, name: &str) -> Option<usize>;

    fn check_lump_exists(&self, name: &str) -> bool {
        self.lump_length(name).is_some()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .take(LUMP_NAME_LEN)
        .collect::<String>()
        .to_ascii_uppercase()
}

/// In-memory lumps, mostly for tests and embedding hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryLumps {
    lumps: HashMap<String, Vec<u8>>,
}

impl MemoryLumps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, bytes: impl Into<Vec<u8>>) {
        self.lumps.insert(normalize(name), bytes.into());
    }

    pub fn with(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl LumpProvider for MemoryLumps {
    fn read_lump_by_name(&self, name: &str) -> Option<Vec<u8>> {
        self.lumps.get(&normalize(name)).cloned()
    }

    fn lump_length(&self, name: &str) -> Option<usize> {
        self.lumps.get(&normalize(name)).map(Vec::len)
    }
}

/// A directory of loose lump files, named after each file's stem.
#[derive(Debug)]
pub struct LumpDirectory {
    root: PathBuf,
    files: HashMap<String, PathBuf>,
}

impl LumpDirectory {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            bail!("{} is not a directory", dir.display());
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();
        paths.sort();

        let mut files = HashMap::new();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            files.insert(normalize(stem), path);
        }

        Ok(Self {
            root: dir.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl LumpProvider for LumpDirectory {
    fn read_lump_by_name(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.files.get(&normalize(name))?;
        match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                log::warn!("failed to read lump {}: {err}", path.display());
                None
            }
        }
    }

    fn lump_length(&self, name: &str) -> Option<usize> {
        let path = self.files.get(&normalize(name))?;
        fs::metadata(path).ok().map(|meta| meta.len() as usize)
    }
}

/// Every loaded WAD; later archives take precedence over earlier ones.
#[derive(Debug, Default)]
pub struct WadCollection {
    archives: Vec<WadArchive>,
}

impl WadCollection {
    pub fn open_all<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut archives = Vec::new();
        for path in paths {
            let archive = WadArchive::open(path)
                .with_context(|| format!("loading {}", path.as_ref().display()))?;
            archives.push(archive);
        }
        Ok(Self { archives })
    }

    pub fn archives(&self) -> &[WadArchive] {
        &self.archives
    }

    /// Archive index (its wad tag) and lump bytes for `name`.
    pub fn find(&self, name: &str) -> Option<(u16, &[u8])> {
        self.archives
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, archive)| {
                archive
                    .find_entry(name)
                    .map(|entry| (index as u16, archive.read_entry_bytes(entry)))
            })
    }
}

impl LumpProvider for WadCollection {
    fn read_lump_by_name(&self, name: &str) -> Option<Vec<u8>> {
        self.find(name).map(|(_, bytes)| bytes.to_vec())
    }

    fn lump_length(&self, name: &str) -> Option<usize> {
        self.find(name).map(|(_, bytes)| bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::wad::build_pwad;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn memory_lumps_match_names_case_insensitively() {
        let lumps = MemoryLumps::new().with("soc_main", "MAINCFG\n");
        assert!(lumps.check_lump_exists("SOC_MAIN"));
        assert_eq!(lumps.lump_length("Soc_Main"), Some(8));
        assert!(!lumps.check_lump_exists("OTHER"));
    }

    #[test]
    fn directory_lumps_are_keyed_by_file_stem() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("nested"))?;
        fs::write(dir.path().join("nested").join("autoexec.cfg"), "bind x jump\n")?;
        fs::write(dir.path().join("soc_levl.txt"), "LEVEL 1\n")?;

        let lumps = LumpDirectory::open(dir.path())?;
        assert_eq!(lumps.len(), 2);
        assert_eq!(
            lumps.read_lump_by_name("AUTOEXEC").as_deref(),
            Some(&b"bind x jump\n"[..])
        );
        assert_eq!(lumps.lump_length("soc_levl"), Some(8));
        Ok(())
    }

    #[test]
    fn later_wads_override_earlier_ones() -> Result<()> {
        let mut first = NamedTempFile::new()?;
        first.write_all(&build_pwad(&[("SOC_X", b"first"), ("ONLYONE", b"1")]))?;
        let mut second = NamedTempFile::new()?;
        second.write_all(&build_pwad(&[("SOC_X", b"second")]))?;

        let wads = WadCollection::open_all(&[first.path(), second.path()])?;
        assert_eq!(wads.find("SOC_X").map(|(tag, bytes)| (tag, bytes.to_vec())), Some((1, b"second".to_vec())));
        assert_eq!(wads.find("ONLYONE").map(|(tag, _)| tag), Some(0));
        Ok(())
    }
}
