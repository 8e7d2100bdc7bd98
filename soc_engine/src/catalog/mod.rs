//! Compiled-in name tables and the capacities derived from them.

pub mod constants;
pub mod flags;
pub mod names;

use thiserror::Error;

pub use constants::{int_const, INT_CONST};
pub use flags::{flag_bit, position};

pub const NUMMOBJFREESLOTS: usize = 512;
pub const NUMSTATEFREESLOTS: usize = 4096;
pub const NUMSPRITEFREESLOTS: usize = 512;
pub const NUMSFXFREESLOTS: usize = 1600;

pub fn mt_firstfreeslot() -> usize {
    names::MOBJTYPE_LIST.len()
}

pub fn nummobjtypes() -> usize {
    mt_firstfreeslot() + NUMMOBJFREESLOTS
}

pub fn s_firstfreeslot() -> usize {
    names::STATE_LIST.len()
}

pub fn numstates() -> usize {
    s_firstfreeslot() + NUMSTATEFREESLOTS
}

pub fn spr_firstfreeslot() -> usize {
    names::SPRITE_LIST.len()
}

pub fn numsprites() -> usize {
    spr_firstfreeslot() + NUMSPRITEFREESLOTS
}

pub fn sfx_freeslot0() -> usize {
    names::SOUND_LIST.len()
}

pub fn numsfx() -> usize {
    sfx_freeslot0() + NUMSFXFREESLOTS
}

pub fn spr2_firstfreeslot() -> usize {
    names::SPRITE2_LIST.len()
}

pub const NUMPLAYERSPRITES: usize = 128;

pub const NUMMAPS: i32 = soc_formats::mapnum::MAX_MAP_NUMBER;
pub const MAXUNLOCKABLES: usize = 80;
pub const MAXEMBLEMS: usize = 512;
pub const MAXEXTRAEMBLEMS: usize = 48;
pub const MAXCONDITIONSETS: usize = 128;
pub const MAX_PROMPTS: usize = 256;
pub const MAX_PAGES: usize = 128;
pub const MAX_PROMPT_PICS: usize = 8;
pub const MAX_CUTSCENES: usize = 128;
pub const MAX_SCENES: usize = 128;
pub const MAX_SCENE_PICS: usize = 8;
pub const MAXSKINS: usize = 32;
pub const MAX_CUSTOM_OPTIONS: usize = 128;
pub const MAX_FLICKIES: usize = 64;
pub const NUMGAMETYPEFREESLOTS: usize = 128;
pub const PATCHVERSION: i32 = 220;

/// First bit handed out to `FREESLOT TOL_` declarations.
pub const TOL_FIRSTFREE: u32 = 0x2000;
/// Once the allocation cursor reaches this bit no more level types fit.
pub const MAXTOL: u32 = 1 << 31;

pub fn numhuditems() -> usize {
    flags::HUDITEMS_LIST.len()
}

pub fn nummenutypes() -> usize {
    flags::MENUTYPES_LIST.len()
}

pub fn numskincolors() -> usize {
    flags::COLOR_ENUMS.len()
}

pub fn numpowers() -> usize {
    flags::POWERS_LIST.len()
}

/// Skin color index by name, 0 (`NONE`) when unknown.
pub fn skincolor(name: &str) -> i32 {
    position(flags::COLOR_ENUMS, name).map_or(0, |index| index as i32)
}

/// Enumeration counts the engine declares separately from the name
/// tables; the two must agree.
pub mod declared {
    pub const STATES: usize = 107;
    pub const MOBJ_TYPES: usize = 114;
    pub const POWERS: usize = 28;
    pub const SKIN_COLORS: usize = 114;
    pub const HUD_ITEMS: usize = 20;
    pub const MENU_TYPES: usize = 59;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMismatch {
    pub table: &'static str,
    pub declared: usize,
    pub listed: usize,
}

#[derive(Debug, Error)]
#[error("static name tables out of sync: {}", describe(.mismatches))]
pub struct ConsistencyError {
    pub mismatches: Vec<TableMismatch>,
}

fn describe(mismatches: &[TableMismatch]) -> String {
    mismatches
        .iter()
        .map(|m| format!("{} ({} declared, {} listed)", m.table, m.declared, m.listed))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compares every name table with its declared enumeration count.
pub fn check_tables() -> Result<(), ConsistencyError> {
    check_against(&[
        ("states", declared::STATES, names::STATE_LIST.len()),
        ("mobjtype", declared::MOBJ_TYPES, names::MOBJTYPE_LIST.len()),
        ("powers", declared::POWERS, flags::POWERS_LIST.len()),
        ("colors", declared::SKIN_COLORS, flags::COLOR_ENUMS.len()),
        ("huditems", declared::HUD_ITEMS, flags::HUDITEMS_LIST.len()),
        ("menutypes", declared::MENU_TYPES, flags::MENUTYPES_LIST.len()),
    ])
}

fn check_against(entries: &[(&'static str, usize, usize)]) -> Result<(), ConsistencyError> {
    let mismatches: Vec<TableMismatch> = entries
        .iter()
        .filter(|(_, declared, listed)| declared != listed)
        .map(|&(table, declared, listed)| TableMismatch {
            table,
            declared,
            listed,
        })
        .collect();
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(ConsistencyError { mismatches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_tables_match_declared_counts() {
        check_tables().unwrap();
    }

    #[test]
    fn mismatches_name_each_table() {
        let err = check_against(&[("states", 10, 10), ("powers", 3, 4), ("colors", 5, 2)])
            .unwrap_err();
        assert_eq!(err.mismatches.len(), 2);
        let text = err.to_string();
        assert!(text.contains("powers (3 declared, 4 listed)"), "{text}");
        assert!(text.contains("colors (5 declared, 2 listed)"), "{text}");
    }

    #[test]
    fn capacities_extend_past_the_static_lists() {
        assert_eq!(nummobjtypes(), names::MOBJTYPE_LIST.len() + NUMMOBJFREESLOTS);
        assert_eq!(numstates(), names::STATE_LIST.len() + NUMSTATEFREESLOTS);
        assert!(spr2_firstfreeslot() < NUMPLAYERSPRITES);
        assert_eq!(skincolor("NONE"), 0);
    }
}
