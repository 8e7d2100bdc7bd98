//! Name lookups for every enumeration a patch can refer to.
//!
//! Each resolver takes a literal number when the word starts with a digit,
//! otherwise strips its namespace prefix (when present) and searches the
//! free slots before the static table. A miss is an [`Unresolved`] carrying
//! the value to fall back to.

use soc_formats::mapnum::{map_number, MAX_MAP_NUMBER};
use soc_formats::tokens::atoi;

use crate::catalog::{self, constants, flags};
use crate::error::Unresolved;
use crate::symbols::SymbolTables;

/// First music slot past the map range; special names count up from here.
pub const SPECIAL_MUSIC_BASE: i32 = MAX_MAP_NUMBER + 1;

fn starts_with_digit(word: &str) -> bool {
    word.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

fn strip<'w>(word: &'w str, prefix: &str) -> &'w str {
    word.strip_prefix(prefix).unwrap_or(word)
}

fn as_i32(index: usize) -> i32 {
    index as i32
}

pub struct Resolver<'a> {
    symbols: &'a SymbolTables,
}

impl<'a> Resolver<'a> {
    pub fn new(symbols: &'a SymbolTables) -> Self {
        Self { symbols }
    }

    pub fn mobjtype(&self, word: &str) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let name = strip(word, "MT_");
        if let Some(value) = self.symbols.free.mobjs.find(name) {
            return Ok(as_i32(value));
        }
        catalog::names::MOBJTYPE_LIST
            .iter()
            .position(|entry| &entry[3..] == name)
            .map(as_i32)
            .ok_or_else(|| Unresolved::new("mobjtype", format!("MT_{name}"), 0))
    }

    pub fn state(&self, word: &str) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let name = strip(word, "S_");
        if let Some(value) = self.symbols.free.states.find(name) {
            return Ok(as_i32(value));
        }
        catalog::names::STATE_LIST
            .iter()
            .position(|entry| &entry[2..] == name)
            .map(as_i32)
            .ok_or_else(|| Unresolved::new("state", format!("S_{name}"), 0))
    }

    pub fn sprite(&self, word: &str) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let name = strip(word, "SPR_");
        self.symbols
            .sprites
            .find(name)
            .map(as_i32)
            .ok_or_else(|| Unresolved::new("sprite", format!("SPR_{name}"), 0))
    }

    pub fn sprite2(&self, word: &str) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let name = strip(word, "SPR2_");
        self.symbols
            .sprite2
            .find(name)
            .map(as_i32)
            .ok_or_else(|| Unresolved::new("sprite", format!("SPR2_{name}"), 0))
    }

    pub fn sfx(&self, word: &str) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let name = word
            .strip_prefix("SFX_")
            .or_else(|| word.strip_prefix("DS"))
            .unwrap_or(word);
        self.symbols
            .sounds
            .find(name)
            .map(as_i32)
            .ok_or_else(|| Unresolved::new("sfx", format!("SFX_{name}"), 0))
    }

    /// Music slot: a map number (`1`..`1035`, also written as a map name
    /// or letter pair) or one of the special names counted from
    /// [`SPECIAL_MUSIC_BASE`].
    pub fn music(&self, word: &str) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let chars: Vec<char> = word.chars().collect();
        if chars.len() == 2 && chars[0].is_ascii_alphabetic() {
            return Ok(map_number(chars[0], chars[1]));
        }

        let name = word
            .strip_prefix("MUS_")
            .or_else(|| word.strip_prefix("O_"))
            .or_else(|| word.strip_prefix("D_"))
            .unwrap_or(word);
        let miss = || Unresolved::new("music", format!("MUS_{name}"), 0);

        let head: String = name.chars().take(3).collect();
        if head.eq_ignore_ascii_case("MAP") {
            let rest: Vec<char> = name.chars().skip(3).collect();
            if let Some(first) = rest.first().filter(|c| c.is_ascii_alphabetic()) {
                return Ok(map_number(*first, rest.get(1).copied().unwrap_or('\0')));
            }
            return match atoi(&name[3..]) {
                0 => Err(miss()),
                value => Ok(value),
            };
        }

        catalog::names::SPECIAL_MUSIC_SLOTS
            .iter()
            .position(|slot| slot.eq_ignore_ascii_case(name))
            .map(|index| SPECIAL_MUSIC_BASE + as_i32(index))
            .ok_or_else(miss)
    }

    pub fn huditem(&self, word: &str) -> Result<i32, Unresolved> {
        self.listed(word, "HUD_", flags::HUDITEMS_LIST, "huditem")
    }

    pub fn menutype(&self, word: &str) -> Result<i32, Unresolved> {
        self.listed(word, "MN_", flags::MENUTYPES_LIST, "menutype")
    }

    pub fn power(&self, word: &str) -> Result<i32, Unresolved> {
        self.listed(word, "PW_", flags::POWERS_LIST, "power")
    }

    pub fn gametype(&self, word: &str) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let constant = if word.starts_with("GT_") {
            word.to_string()
        } else {
            format!("GT_{word}")
        };
        self.symbols
            .gametypes
            .find_constant(&constant)
            .map(as_i32)
            .ok_or_else(|| Unresolved::new("gametype", constant, 0))
    }

    fn listed(
        &self,
        word: &str,
        prefix: &str,
        list: &[&str],
        kind: &'static str,
    ) -> Result<i32, Unresolved> {
        if starts_with_digit(word) {
            return Ok(atoi(word));
        }
        let name = strip(word, prefix);
        catalog::position(list, name)
            .map(as_i32)
            .ok_or_else(|| Unresolved::new(kind, format!("{prefix}{name}"), 0))
    }

    /// A named constant from any namespace, dispatched on its prefix.
    pub fn constant(&self, word: &str) -> Result<i64, Unresolved> {
        let flag = |list: &[&str], prefix: &str, kind: &'static str| {
            catalog::flag_bit(list, &word[prefix.len()..])
                .ok_or_else(|| Unresolved::new(kind, word, 0))
        };

        if word.starts_with("MF_") {
            flag(flags::MOBJFLAG_LIST, "MF_", "mobj flag")
        } else if word.starts_with("MF2_") {
            flag(flags::MOBJFLAG2_LIST, "MF2_", "mobj flag2")
        } else if word.starts_with("MFE_") {
            flag(flags::MOBJEFLAG_LIST, "MFE_", "mobj eflag")
        } else if word.starts_with("MTF_") {
            flag(flags::MAPTHINGFLAG_LIST, "MTF_", "mapthing flag")
        } else if word.starts_with("PF_") {
            if &word[3..] == "FULLSTASIS" {
                let stasis = catalog::flag_bit(flags::PLAYERFLAG_LIST, "STASIS").unwrap_or(0);
                let jump = catalog::flag_bit(flags::PLAYERFLAG_LIST, "JUMPSTASIS").unwrap_or(0);
                return Ok(stasis | jump);
            }
            flag(flags::PLAYERFLAG_LIST, "PF_", "player flag")
        } else if word.starts_with("GTR_") {
            flag(flags::GAMETYPERULE_LIST, "GTR_", "game type rule")
        } else if word.starts_with("ML_") {
            flag(flags::ML_LIST, "ML_", "linedef flag")
        } else if let Some(name) = word.strip_prefix("TOL_") {
            self.symbols
                .level_types
                .find(name)
                .map(i64::from)
                .ok_or_else(|| Unresolved::new("typeoflevel", word, 0))
        } else if word.starts_with("S_") {
            self.state(word).map(i64::from)
        } else if word.starts_with("MT_") {
            self.mobjtype(word).map(i64::from)
        } else if word.starts_with("SPR_") {
            self.sprite(word).map(i64::from)
        } else if word.starts_with("SPR2_") {
            self.sprite2(word).map(i64::from)
        } else if word.starts_with("SFX_") || word.starts_with("DS") {
            self.sfx(word).map(i64::from)
        } else if word.starts_with("MUS_") || word.starts_with("O_") || word.starts_with("D_") {
            self.music(word).map(i64::from)
        } else if word.starts_with("PW_") {
            self.power(word).map(i64::from)
        } else if word.starts_with("MN_") {
            self.menutype(word).map(i64::from)
        } else if word.starts_with("GT_") {
            self.gametype(word).map(i64::from)
        } else if word.starts_with("HUD_") {
            self.huditem(word).map(i64::from)
        } else if let Some(name) = word.strip_prefix("SKINCOLOR_") {
            catalog::position(flags::COLOR_ENUMS, name)
                .map(|index| index as i64)
                .ok_or_else(|| Unresolved::new("color", word, 0))
        } else if let Some(grade) = word.strip_prefix("GRADE_") {
            grade
                .chars()
                .next()
                .and_then(|c| flags::NIGHTS_GRADES.find(c))
                .map(|index| index as i64)
                .ok_or_else(|| Unresolved::new("NiGHTS grade", word, 0))
        } else {
            constants::int_const(word).ok_or_else(|| Unresolved::new("constant", word, 0))
        }
    }
}

/// Frame number for a sprite frame letter: `A`-`Z`, then `0`-`9`, then
/// `a`-`z`, then `!` and `@`. Anything else is 255.
pub fn char_to_frame(c: char) -> u32 {
    match c {
        'A'..='Z' => c as u32 - 'A' as u32,
        '0'..='9' => c as u32 - '0' as u32 + 26,
        'a'..='z' => c as u32 - 'a' as u32 + 36,
        '!' => 62,
        '@' => 63,
        _ => 255,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> SymbolTables {
        SymbolTables::default()
    }

    #[test]
    fn leading_digits_are_always_literals() {
        let mut tables = symbols();
        tables.declare("MT", "1UP", 0).unwrap();
        tables.declare("S", "9LIVES", 0).unwrap();
        let resolver = Resolver::new(&tables);
        assert_eq!(resolver.mobjtype("1UP"), Ok(1));
        assert_eq!(resolver.state("9LIVES"), Ok(9));
        assert_eq!(resolver.sfx("42"), Ok(42));
        assert_eq!(resolver.music("7"), Ok(7));
        assert_eq!(resolver.huditem("3"), Ok(3));
        assert_eq!(resolver.sprite("12"), Ok(12));
    }

    #[test]
    fn free_slots_resolve_with_or_without_prefix() {
        let mut tables = symbols();
        let value = tables.declare("MT", "FOO", 0).unwrap().value() as i32;
        let resolver = Resolver::new(&tables);
        assert_eq!(resolver.mobjtype("MT_FOO"), Ok(value));
        assert_eq!(resolver.mobjtype("FOO"), Ok(value));
        assert_eq!(resolver.mobjtype("MT_PLAYER"), Ok(3));
    }

    #[test]
    fn misses_carry_prefixed_name_and_fallback() {
        let tables = symbols();
        let resolver = Resolver::new(&tables);
        let err = resolver.state("S_NOPE").unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find state named 'S_NOPE'");
        assert_eq!(err.fallback, 0);
        let err = resolver.sfx("DSNOPE").unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find sfx named 'SFX_NOPE'");
    }

    #[test]
    fn sounds_match_any_case_and_legacy_prefix() {
        let tables = symbols();
        let resolver = Resolver::new(&tables);
        let thok = resolver.sfx("sfx_thok");
        assert!(thok.is_err(), "lowercase prefix is not stripped");
        let thok = resolver.sfx("SFX_THOK").unwrap();
        assert_eq!(resolver.sfx("DSTHOK"), Ok(thok));
        assert_eq!(resolver.sfx("THOK"), Ok(thok));
    }

    #[test]
    fn music_names_cover_maps_and_special_slots() {
        let tables = symbols();
        let resolver = Resolver::new(&tables);
        assert_eq!(resolver.music("AB"), Ok(111));
        assert_eq!(resolver.music("MUS_MAP05"), Ok(5));
        assert_eq!(resolver.music("MAPA0"), Ok(100));
        assert_eq!(resolver.music("O_MAPZZ"), Ok(1035));
        assert_eq!(resolver.music("MUS__TITLE"), Ok(SPECIAL_MUSIC_BASE));
        assert_eq!(resolver.music("_STJR"), Ok(1050));
        assert!(resolver.music("MUS_MAP").is_err());
        assert!(resolver.music("MUS_NOPE").is_err());
    }

    #[test]
    fn constants_dispatch_on_prefix() {
        let tables = symbols();
        let resolver = Resolver::new(&tables);
        assert_eq!(resolver.constant("MF_SOLID"), Ok(2));
        assert_eq!(resolver.constant("TOL_RACE"), Ok(0x8));
        assert_eq!(resolver.constant("SKINCOLOR_NONE"), Ok(0));
        assert_eq!(resolver.constant("GRADE_S"), Ok(6));
        assert_eq!(resolver.constant("TICRATE"), Ok(35));
        assert_eq!(resolver.constant("GT_RACE"), Ok(2));
        let err = resolver.constant("MF_NOTAFLAG").unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find mobj flag named 'MF_NOTAFLAG'");
    }

    #[test]
    fn full_stasis_combines_both_stasis_bits() {
        let tables = symbols();
        let resolver = Resolver::new(&tables);
        let stasis = resolver.constant("PF_STASIS").unwrap();
        let jump = resolver.constant("PF_JUMPSTASIS").unwrap();
        assert_eq!(resolver.constant("PF_FULLSTASIS"), Ok(stasis | jump));
    }

    #[test]
    fn frame_letters_follow_engine_order() {
        assert_eq!(char_to_frame('A'), 0);
        assert_eq!(char_to_frame('0'), 26);
        assert_eq!(char_to_frame('a'), 36);
        assert_eq!(char_to_frame('@'), 63);
        assert_eq!(char_to_frame('#'), 255);
    }
}
