//! Persistent progress store that `MAINCFG` can redirect and reset.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::tables::maincfg::DEFAULT_GAMEDATA;

/// What a `RESETDATA` value wipes. Bit 0 clears collected progress
/// (emblems, unlockables, condition sets), bit 1 clears records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetScope(pub i32);

impl ResetScope {
    pub const PROGRESS: i32 = 1;
    pub const RECORDS: i32 = 2;

    pub fn progress(self) -> bool {
        self.0 & Self::PROGRESS != 0
    }

    pub fn records(self) -> bool {
        self.0 & Self::RECORDS != 0
    }
}

pub trait GameDataStore {
    fn save(&mut self) -> Result<()>;

    fn load(&mut self) -> Result<()>;

    fn reset(&mut self, scope: ResetScope);

    /// Points the store at another data file, named as `GAMEDATA` gives it.
    fn set_file(&mut self, name: &str);
}

static DATA_FILE_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").ok());

/// A mod data file name: only alphanumerics `_ - .`, ending in `.dat`
/// (any case) after at least one character, and not the base game's
/// `gamedata.dat`.
pub fn is_good_data_file_name(name: &str) -> bool {
    const TAIL: &str = ".dat";
    let charset_ok = DATA_FILE_NAME
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(name));
    if !charset_ok || name.len() <= TAIL.len() {
        return false;
    }
    let (_, tail) = name.split_at(name.len() - TAIL.len());
    tail.eq_ignore_ascii_case(TAIL) && !name.eq_ignore_ascii_case(DEFAULT_GAMEDATA)
}

/// Progress values kept as one JSON object per data file. Keys are
/// `<category>.<name>`; `progress.*` and `records.*` are what resets touch.
#[derive(Debug, Clone)]
pub struct JsonGameDataStore {
    values: BTreeMap<String, Value>,
    dirty: bool,
    dir: Option<PathBuf>,
    file: String,
}

impl Default for JsonGameDataStore {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
            dirty: false,
            dir: None,
            file: DEFAULT_GAMEDATA.to_string(),
        }
    }
}

impl JsonGameDataStore {
    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// A store rooted at `dir`, loading the default data file if present.
    pub fn open(dir: &Path) -> Result<Self> {
        let mut store = Self {
            dir: Some(dir.to_path_buf()),
            ..Self::default()
        };
        store.load()?;
        Ok(store)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Backing JSON file for the current data file, when rooted.
    pub fn path(&self) -> Option<PathBuf> {
        let stem = self
            .file
            .strip_suffix(".dat")
            .unwrap_or(self.file.as_str());
        self.dir.as_ref().map(|dir| dir.join(format!("{stem}.json")))
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn write(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if self.values.get(&key) != Some(&value) {
            self.values.insert(key, value);
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn remove_category(&mut self, category: &str) {
        let prefix = format!("{category}.");
        let before = self.values.len();
        self.values.retain(|key, _| !key.starts_with(&prefix));
        if self.values.len() != before {
            self.dirty = true;
        }
    }
}

impl GameDataStore for JsonGameDataStore {
    fn save(&mut self) -> Result<()> {
        let Some(path) = self.path() else {
            self.dirty = false;
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create game data directory: {}", parent.display())
                })?;
            }
        }
        let serialized = serde_json::to_string_pretty(&self.values)
            .with_context(|| format!("failed to serialize game data: {}", path.display()))?;
        fs::write(&path, serialized)
            .with_context(|| format!("failed to write game data file: {}", path.display()))?;
        log::debug!("saved game data to {}", path.display());
        self.dirty = false;
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        self.values.clear();
        self.dirty = false;
        let Some(path) = self.path() else {
            return Ok(());
        };
        if !path.exists() {
            log::debug!("no game data at {}, starting fresh", path.display());
            return Ok(());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read game data file: {}", path.display()))?;
        self.values = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse game data json: {}", path.display()))?;
        Ok(())
    }

    fn reset(&mut self, scope: ResetScope) {
        if scope.progress() {
            self.remove_category("progress");
        }
        if scope.records() {
            self.remove_category("records");
        }
    }

    fn set_file(&mut self, name: &str) {
        self.file = name.to_ascii_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_names_are_checked() {
        assert!(is_good_data_file_name("MYMOD.DAT"));
        assert!(is_good_data_file_name("my_mod-2.dat"));
        assert!(!is_good_data_file_name(".dat"));
        assert!(!is_good_data_file_name("GAMEDATA.DAT"));
        assert!(!is_good_data_file_name("../evil.dat"));
        assert!(!is_good_data_file_name("mod.sav"));
        assert!(!is_good_data_file_name("my mod.dat"));
    }

    #[test]
    fn resets_only_touch_their_category() {
        let mut store = JsonGameDataStore::in_memory();
        store.write("progress.emblem1", true);
        store.write("records.map01", 1234);
        store.reset(ResetScope(ResetScope::PROGRESS));
        assert!(store.value("progress.emblem1").is_none());
        assert!(store.value("records.map01").is_some());
        store.reset(ResetScope(3));
        assert!(store.value("records.map01").is_none());
    }

    #[test]
    fn in_memory_store_saves_as_a_no_op() {
        let mut store = JsonGameDataStore::in_memory();
        store.write("progress.x", 1);
        store.save().unwrap();
        assert!(!store.is_dirty());
        assert!(store.path().is_none());
    }
}
