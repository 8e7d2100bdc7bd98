use serde::Serialize;

use crate::catalog::{self, names};

/// Longest sound lump name, without the `DS` prefix.
pub const SOUND_NAME_LEN: usize = 6;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SoundInfo {
    pub name: Option<String>,
    pub singularity: bool,
    pub priority: i32,
    pub pitch: i32,
    pub caption: String,
}

/// Every sound slot, built-in and free.
#[derive(Debug, Clone)]
pub struct SoundTable {
    sounds: Vec<SoundInfo>,
}

impl Default for SoundTable {
    fn default() -> Self {
        let mut sounds: Vec<SoundInfo> = names::SOUND_LIST
            .iter()
            .map(|name| SoundInfo {
                name: (!name.is_empty()).then(|| name.to_string()),
                priority: if name.is_empty() { 0 } else { 64 },
                ..SoundInfo::default()
            })
            .collect();
        sounds.resize(catalog::numsfx(), SoundInfo::default());
        Self { sounds }
    }
}

impl SoundTable {
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SoundInfo> {
        self.sounds.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SoundInfo> {
        self.sounds.get_mut(index)
    }

    /// Names a free sound slot. The name is stored lowercase and cut to
    /// [`SOUND_NAME_LEN`]; `None` when every free slot is taken.
    pub fn add_sound(&mut self, name: &str) -> Option<usize> {
        let first = catalog::sfx_freeslot0();
        let index = (first..self.sounds.len()).find(|&i| self.sounds[i].name.is_none())?;
        let stored: String = name.to_ascii_lowercase().chars().take(SOUND_NAME_LEN).collect();
        self.sounds[index] = SoundInfo {
            name: Some(stored),
            priority: 60,
            ..SoundInfo::default()
        };
        Some(index)
    }

    /// Slot whose name matches ignoring case.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.sounds.iter().position(|sound| {
            sound
                .name
                .as_deref()
                .is_some_and(|known| known.eq_ignore_ascii_case(name))
        })
    }

    /// Slot whose name matches exactly, the way script code spells `sfx_` names.
    pub fn find_exact(&self, name: &str) -> Option<usize> {
        self.sounds
            .iter()
            .position(|sound| sound.name.as_deref() == Some(name))
    }

    /// Drops every sound added after startup.
    pub fn clear_free(&mut self) {
        let first = catalog::sfx_freeslot0();
        for sound in &mut self.sounds[first..] {
            *sound = SoundInfo::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_sounds_are_lowercased_and_searchable() {
        let mut sounds = SoundTable::default();
        let index = sounds.add_sound("MYBOOM1").unwrap();
        assert_eq!(index, catalog::sfx_freeslot0());
        assert_eq!(sounds.get(index).and_then(|s| s.name.as_deref()), Some("myboom"));
        assert_eq!(sounds.find("MYBOOM"), Some(index));
        assert_eq!(sounds.find_exact("MYBOOM"), None);
        assert_eq!(sounds.find("thok"), names::SOUND_LIST.iter().position(|n| *n == "thok"));
    }

    #[test]
    fn slot_zero_has_no_name() {
        let sounds = SoundTable::default();
        assert_eq!(sounds.find(""), None);
        assert!(sounds.get(0).unwrap().name.is_none());
    }
}
