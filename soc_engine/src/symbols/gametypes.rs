//! Game type registry: built-in modes plus ones declared by `GAMETYPE` blocks.

use serde::Serialize;

use crate::catalog::{self, flags};

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Gametype {
    pub name: String,
    /// `GT_` constant name, prefix included.
    pub constant: String,
    pub rules: u32,
    pub type_of_level: u32,
    pub description: String,
    pub header_left_color: u8,
    pub header_right_color: u8,
    pub rankings_type: i16,
    pub intermission_type: i32,
    pub point_limit: i32,
    pub time_limit: i32,
}

/// Turns a display name or identifier into its `GT_` constant.
pub fn constant_name(name: &str) -> String {
    let body: String = name
        .chars()
        .map(|c| if c == ' ' { '_' } else { c.to_ascii_uppercase() })
        .collect();
    format!("GT_{body}")
}

#[derive(Debug, Clone)]
pub struct GametypeRegistry {
    entries: Vec<Gametype>,
}

const BUILTIN_NAMES: [&str; 8] = [
    "Co-op",
    "Competition",
    "Race",
    "Match",
    "Team Match",
    "Tag",
    "Hide & Seek",
    "CTF",
];

const BUILTIN_TOL: [u32; 8] = [0x2, 0x4, 0x8, 0x10, 0x10, 0x20, 0x20, 0x40];

impl Default for GametypeRegistry {
    fn default() -> Self {
        let entries = flags::GAMETYPE_LIST
            .iter()
            .zip(BUILTIN_NAMES)
            .zip(BUILTIN_TOL)
            .enumerate()
            .map(|(index, ((constant, name), tol))| Gametype {
                name: name.to_string(),
                constant: format!("GT_{constant}"),
                type_of_level: tol,
                rankings_type: index as i16,
                ..Gametype::default()
            })
            .collect();
        Self { entries }
    }
}

impl GametypeRegistry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= catalog::NUMGAMETYPEFREESLOTS
    }

    pub fn get(&self, index: usize) -> Option<&Gametype> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Gametype] {
        &self.entries
    }

    /// Registers a game type and returns its index. A negative
    /// `rankings_type` means "rank like itself"; an empty constant falls
    /// back to the display name.
    pub fn add(&mut self, mut gametype: Gametype) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let index = self.entries.len();
        if gametype.rankings_type < 0 {
            gametype.rankings_type = index as i16;
        }
        let source = if gametype.constant.is_empty() {
            gametype.name.clone()
        } else {
            gametype.constant.clone()
        };
        gametype.constant = constant_name(&source);
        self.entries.push(gametype);
        Some(index)
    }

    /// Index of the game type with this exact `GT_` constant.
    pub fn find_constant(&self, constant: &str) -> Option<usize> {
        self.entries.iter().position(|gt| gt.constant == constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_addressable_by_constant() {
        let registry = GametypeRegistry::default();
        assert_eq!(registry.find_constant("GT_COOP"), Some(0));
        assert_eq!(registry.find_constant("GT_CTF"), Some(7));
    }

    #[test]
    fn added_gametypes_default_their_constant_and_ranking() {
        let mut registry = GametypeRegistry::default();
        let index = registry
            .add(Gametype {
                name: "Capture the Chao".into(),
                rankings_type: -1,
                ..Gametype::default()
            })
            .unwrap();
        assert_eq!(index, 8);
        let added = registry.get(index).unwrap();
        assert_eq!(added.constant, "GT_CAPTURE_THE_CHAO");
        assert_eq!(added.rankings_type, 8);
    }

    #[test]
    fn registry_refuses_past_capacity() {
        let mut registry = GametypeRegistry::default();
        while !registry.is_full() {
            registry.add(Gametype {
                name: format!("Mode {}", registry.len()),
                ..Gametype::default()
            });
        }
        assert_eq!(registry.add(Gametype::default()), None);
    }
}
