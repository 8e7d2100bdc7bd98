//! Every name-to-number table a patch can read or extend.

pub mod actions;
pub mod freeslots;
pub mod gametypes;
pub mod sounds;
pub mod sprites;

use thiserror::Error;

use crate::catalog::{self, flags, names};

pub use actions::{Action, ActionId, ActionRegistry, ScriptHandle};
pub use freeslots::{FreeSlots, SlotPool};
pub use gametypes::{Gametype, GametypeRegistry};
pub use sounds::{SoundInfo, SoundTable};
pub use sprites::{Sprite2Names, SpriteNames};

/// Result of a free slot declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    New(usize),
    /// The name was already declared; nothing was allocated.
    Existing(usize),
}

impl Claim {
    pub fn value(self) -> usize {
        match self {
            Claim::New(value) | Claim::Existing(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FreeslotError {
    #[error("Ran out of free {0} slots!")]
    OutOfSlots(&'static str),
    #[error("Freeslots: unknown enum class '{class}' for '{class}_{name}'")]
    UnknownClass { class: String, name: String },
}

/// Level type flags: the built-in names followed by `FREESLOT TOL_` ones.
#[derive(Debug, Clone)]
pub struct LevelTypes {
    entries: Vec<(String, u32)>,
    next: u32,
}

impl Default for LevelTypes {
    fn default() -> Self {
        Self {
            entries: flags::TYPEOFLEVEL_NAMES
                .iter()
                .map(|(name, flag)| (name.to_string(), *flag))
                .collect(),
            next: catalog::TOL_FIRSTFREE,
        }
    }
}

impl LevelTypes {
    pub fn find(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, flag)| *flag)
    }

    pub fn find_ignore_case(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, flag)| *flag)
    }

    pub fn claim(&mut self, name: &str) -> Option<Claim> {
        if let Some(flag) = self.find(name) {
            return Some(Claim::Existing(flag as usize));
        }
        if self.next == catalog::MAXTOL {
            return None;
        }
        let flag = self.next;
        self.entries.push((name.to_string(), flag));
        self.next <<= 1;
        Some(Claim::New(flag as usize))
    }
}

/// The symbol half of the registry: names, free slots and the game type list.
#[derive(Debug, Clone)]
pub struct SymbolTables {
    pub free: FreeSlots,
    pub sprites: SpriteNames,
    pub sprite2: Sprite2Names,
    pub sounds: SoundTable,
    pub level_types: LevelTypes,
    pub gametypes: GametypeRegistry,
    pub actions: ActionRegistry,
    pub skins: Vec<String>,
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self {
            free: FreeSlots::default(),
            sprites: SpriteNames::default(),
            sprite2: Sprite2Names::default(),
            sounds: SoundTable::default(),
            level_types: LevelTypes::default(),
            gametypes: GametypeRegistry::default(),
            actions: ActionRegistry::default(),
            skins: names::DEFAULT_SKINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SymbolTables {
    /// Empties the state, object type and sprite free slots.
    pub fn reset_free_slots(&mut self) {
        self.free.clear();
        self.sprites.clear_free();
    }

    pub fn skin(&self, name: &str) -> Option<usize> {
        self.skins.iter().position(|skin| skin == name)
    }

    /// Declares `<class>_<name>` in its namespace. `class` and `name` are
    /// expected uppercase; `wad` tags newly seen sprites.
    pub fn declare(&mut self, class: &str, name: &str, wad: u16) -> Result<Claim, FreeslotError> {
        let claim = match class {
            "SFX" => self
                .sounds
                .add_sound(name)
                .map(Claim::New)
                .ok_or(FreeslotError::OutOfSlots("SFX"))?,
            "SPR" => self
                .sprites
                .claim(name, wad)
                .ok_or(FreeslotError::OutOfSlots("sprite"))?,
            "S" => self
                .free
                .states
                .allocate(name)
                .map(Claim::New)
                .ok_or(FreeslotError::OutOfSlots("State"))?,
            "MT" => self
                .free
                .mobjs
                .allocate(name)
                .map(Claim::New)
                .ok_or(FreeslotError::OutOfSlots("MobjType"))?,
            "SPR2" => self
                .sprite2
                .claim(name)
                .ok_or(FreeslotError::OutOfSlots("SPR2"))?,
            "TOL" => self
                .level_types
                .claim(name)
                .ok_or(FreeslotError::OutOfSlots("typeoflevel"))?,
            _ => {
                return Err(FreeslotError::UnknownClass {
                    class: class.to_string(),
                    name: name.to_string(),
                })
            }
        };
        if let Claim::New(value) = claim {
            log::info!("{} allocated ({value}).", describe(class, name));
        }
        Ok(claim)
    }
}

fn describe(class: &str, name: &str) -> String {
    match class {
        "SFX" => format!("Sound sfx_{}", name.to_ascii_lowercase()),
        "SPR" => format!("Sprite SPR_{name}"),
        "S" => format!("State S_{name}"),
        "MT" => format!("MobjType MT_{name}"),
        "SPR2" => format!("Sprite2 SPR2_{name}"),
        _ => format!("TypeOfLevel TOL_{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_route_to_their_namespace() {
        let mut symbols = SymbolTables::default();
        let mt = symbols.declare("MT", "FOO", 0).unwrap();
        assert_eq!(mt, Claim::New(catalog::mt_firstfreeslot()));
        assert_eq!(symbols.free.mobjs.find("FOO"), Some(mt.value()));

        let state = symbols.declare("S", "FOO", 0).unwrap();
        assert_eq!(state.value(), catalog::s_firstfreeslot());

        let sfx = symbols.declare("SFX", "BOOM", 0).unwrap();
        assert_eq!(symbols.sounds.find("boom"), Some(sfx.value()));
    }

    #[test]
    fn level_type_bits_are_handed_out_once() {
        let mut symbols = SymbolTables::default();
        assert_eq!(symbols.declare("TOL", "SKATE", 0), Ok(Claim::New(0x2000)));
        assert_eq!(symbols.declare("TOL", "SKATE", 0), Ok(Claim::Existing(0x2000)));
        assert_eq!(symbols.declare("TOL", "SURF", 0), Ok(Claim::New(0x4000)));
        assert_eq!(symbols.declare("TOL", "RACE", 0), Ok(Claim::Existing(0x8)));
        assert_eq!(symbols.level_types.find_ignore_case("surf"), Some(0x4000));
    }

    #[test]
    fn level_types_run_out_at_the_top_bit() {
        let mut types = LevelTypes::default();
        let mut allocated = 0;
        while types.claim(&format!("T{allocated}")).is_some() {
            allocated += 1;
        }
        assert_eq!(allocated, 18);
    }

    #[test]
    fn unknown_classes_are_reported_with_the_full_name() {
        let mut symbols = SymbolTables::default();
        let err = symbols.declare("XYZ", "THING", 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Freeslots: unknown enum class 'XYZ' for 'XYZ_THING'"
        );
    }

    #[test]
    fn resetting_free_slots_keeps_sounds_and_player_sprites() {
        let mut symbols = SymbolTables::default();
        symbols.declare("MT", "FOO", 0).unwrap();
        symbols.declare("SPR", "FOOO", 0).unwrap();
        symbols.declare("SPR2", "FOOO", 0).unwrap();
        symbols.reset_free_slots();
        assert_eq!(symbols.free.mobjs.find("FOO"), None);
        assert_eq!(symbols.sprites.find("FOOO"), None);
        assert!(symbols.sprite2.find("FOOO").is_some());
    }
}
