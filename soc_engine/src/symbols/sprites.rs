//! Sprite and player sprite name tables.

use crate::catalog::{self, names};

use super::Claim;

/// First four characters of a name, the part sprite lumps are keyed by.
fn sprite_key(word: &str) -> String {
    word.chars().take(4).collect()
}

/// `SPR_` names: the static list followed by claimable free slots.
#[derive(Debug, Clone)]
pub struct SpriteNames {
    names: Vec<String>,
    used: Vec<bool>,
    tags: Vec<Option<u16>>,
}

impl Default for SpriteNames {
    fn default() -> Self {
        let total = catalog::numsprites();
        let mut sprite_names: Vec<String> =
            names::SPRITE_LIST.iter().map(|name| name.to_string()).collect();
        sprite_names.resize(total, String::new());
        Self {
            names: sprite_names,
            used: vec![false; catalog::NUMSPRITEFREESLOTS],
            tags: vec![None; total],
        }
    }
}

impl SpriteNames {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Archive that first claimed this sprite, if any.
    pub fn tag(&self, index: usize) -> Option<u16> {
        self.tags.get(index).copied().flatten()
    }

    fn is_live(&self, index: usize) -> bool {
        match index.checked_sub(catalog::spr_firstfreeslot()) {
            Some(free) => self.used[free],
            None => true,
        }
    }

    /// Claims a free sprite slot for `word`. A name already claimed (same
    /// four characters) returns its existing slot; an untagged match takes
    /// `wad` as its tag.
    pub fn claim(&mut self, word: &str, wad: u16) -> Option<Claim> {
        let key = sprite_key(word);
        let first = catalog::spr_firstfreeslot();
        for index in first..self.names.len() {
            if self.used[index - first] {
                if self.names[index] == key {
                    if self.tags[index].is_none() {
                        self.tags[index] = Some(wad);
                    }
                    return Some(Claim::Existing(index));
                }
                continue;
            }
            self.names[index] = key;
            self.used[index - first] = true;
            return Some(Claim::New(index));
        }
        None
    }

    /// Sprite index for a name, compared on its first four characters.
    pub fn find(&self, word: &str) -> Option<usize> {
        let key = sprite_key(word);
        (0..self.names.len()).find(|&index| self.is_live(index) && self.names[index] == key)
    }

    /// Forgets every claimed free slot.
    pub fn clear_free(&mut self) {
        let first = catalog::spr_firstfreeslot();
        self.used.iter_mut().for_each(|used| *used = false);
        for index in first..self.names.len() {
            self.names[index].clear();
            self.tags[index] = None;
        }
    }
}

/// `SPR2_` names with their fallback chain.
#[derive(Debug, Clone)]
pub struct Sprite2Names {
    names: Vec<String>,
    defaults: Vec<usize>,
}

impl Default for Sprite2Names {
    fn default() -> Self {
        let sprite2_names: Vec<String> =
            names::SPRITE2_LIST.iter().map(|name| name.to_string()).collect();
        let defaults = sprite2_names
            .iter()
            .map(|name| {
                names::SPRITE2_DEFAULTS
                    .iter()
                    .find(|(from, _)| from == name)
                    .and_then(|(_, to)| names::SPRITE2_LIST.iter().position(|n| n == to))
                    .unwrap_or(0)
            })
            .collect();
        Self {
            names: sprite2_names,
            defaults,
        }
    }
}

impl Sprite2Names {
    /// One past the last allocated player sprite.
    pub fn free_cursor(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn default_of(&self, index: usize) -> Option<usize> {
        self.defaults.get(index).copied()
    }

    pub fn set_default(&mut self, index: usize, fallback: usize) {
        if let Some(slot) = self.defaults.get_mut(index) {
            *slot = fallback;
        }
    }

    pub fn claim(&mut self, word: &str) -> Option<Claim> {
        let key = sprite_key(word);
        let first = catalog::spr2_firstfreeslot();
        if let Some(index) = (first..self.names.len()).find(|&i| self.names[i] == key) {
            return Some(Claim::Existing(index));
        }
        if self.names.len() >= catalog::NUMPLAYERSPRITES {
            return None;
        }
        self.names.push(key);
        self.defaults.push(0);
        Some(Claim::New(self.names.len() - 1))
    }

    /// Player sprite index for a name. Three-letter names also match their
    /// `_`-padded table entries, so `RUN` finds `RUN_`.
    pub fn find(&self, word: &str) -> Option<usize> {
        let key = sprite_key(word);
        self.names.iter().position(|name| {
            if name.ends_with('_') && key.chars().count() == 3 {
                name.starts_with(key.as_str())
            } else {
                *name == key
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claiming_a_known_sprite_reuses_its_slot() {
        let mut sprites = SpriteNames::default();
        let first = catalog::spr_firstfreeslot();
        assert_eq!(sprites.claim("MYSP", 3), Some(Claim::New(first)));
        assert_eq!(sprites.claim("MYSP", 4), Some(Claim::Existing(first)));
        assert_eq!(sprites.claim("MYSPRITE", 4), Some(Claim::Existing(first)));
        assert_eq!(sprites.claim("OTHR", 4), Some(Claim::New(first + 1)));
        assert_eq!(sprites.find("MYSP"), Some(first));
        assert_eq!(sprites.find("PLAY"), Some(3));
    }

    #[test]
    fn untagged_slots_take_the_claiming_archive() {
        let mut sprites = SpriteNames::default();
        let Some(Claim::New(index)) = sprites.claim("ABCD", 0) else {
            panic!("expected a new slot");
        };
        assert_eq!(sprites.tag(index), None);
        sprites.claim("ABCD", 7);
        assert_eq!(sprites.tag(index), Some(7));
        sprites.claim("ABCD", 9);
        assert_eq!(sprites.tag(index), Some(7));
    }

    #[test]
    fn unused_free_slots_never_resolve() {
        let mut sprites = SpriteNames::default();
        assert_eq!(sprites.find(""), None);
        sprites.claim("TEMP", 0);
        sprites.clear_free();
        assert_eq!(sprites.find("TEMP"), None);
    }

    #[test]
    fn three_letter_player_sprites_match_padded_names() {
        let sprite2 = Sprite2Names::default();
        let run = sprite2.find("RUN").unwrap();
        assert_eq!(sprite2.name(run), Some("RUN_"));
        assert_eq!(sprite2.find("RUN_"), Some(run));
        assert_eq!(sprite2.find("STND"), Some(0));
        assert_eq!(sprite2.default_of(run).and_then(|i| sprite2.name(i)), Some("WALK"));
    }

    #[test]
    fn player_sprite_claims_dedup_and_run_out() {
        let mut sprite2 = Sprite2Names::default();
        let first = sprite2.free_cursor();
        assert_eq!(sprite2.claim("NEWA"), Some(Claim::New(first)));
        assert_eq!(sprite2.claim("NEWA"), Some(Claim::Existing(first)));
        for n in 0..catalog::NUMPLAYERSPRITES {
            sprite2.claim(&format!("X{n:03}"));
        }
        assert_eq!(sprite2.free_cursor(), catalog::NUMPLAYERSPRITES);
        assert_eq!(sprite2.claim("LAST"), None);
    }
}
