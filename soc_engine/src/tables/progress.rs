//! Emblems, unlockables and the condition sets that award them.

use serde::Serialize;

pub const EMBLEM_HINT_LEN: usize = 110;
pub const EXTRA_NAME_LEN: usize = 20;
pub const EXTRA_OBJECTIVE_LEN: usize = 40;
pub const UNLOCKABLE_TEXT_LEN: usize = 64;

pub const ET_GLOBAL: u8 = 0;
pub const ET_SKIN: u8 = 1;
pub const ET_MAP: u8 = 2;
pub const ET_SCORE: u8 = 3;
pub const ET_TIME: u8 = 4;
pub const ET_RINGS: u8 = 5;
pub const ET_NGRADE: u8 = 6;
pub const ET_NTIME: u8 = 7;

/// Emblem type by name, numeric otherwise.
pub fn emblem_type(word: &str) -> u8 {
    match word {
        "GLOBAL" => ET_GLOBAL,
        "SKIN" => ET_SKIN,
        "MAP" => ET_MAP,
        "SCORE" => ET_SCORE,
        "TIME" => ET_TIME,
        "RINGS" => ET_RINGS,
        "NGRADE" => ET_NGRADE,
        "NTIME" => ET_NTIME,
        _ => soc_formats::tokens::atoi(word) as u8,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Emblem {
    pub kind: u8,
    pub tag: i16,
    pub level: i16,
    pub sprite: char,
    pub color: u16,
    pub var: i32,
    pub hint: String,
}

impl Emblem {
    /// Sprite letter and color a `TYPE` implies when the block set neither.
    pub fn fill_defaults(&mut self, color_of: impl Fn(&str) -> i32) {
        if self.sprite == '\0' {
            self.sprite = match self.kind {
                ET_RINGS => 'R',
                ET_SCORE | ET_NGRADE => 'S',
                ET_TIME | ET_NTIME => 'T',
                _ => 'A',
            };
        }
        if self.color == 0 {
            let name = match self.kind {
                ET_RINGS => "GOLD",
                ET_SCORE => "BROWN",
                ET_NGRADE => "TEAL",
                ET_TIME | ET_NTIME => "GREY",
                _ => "BLUE",
            };
            self.color = color_of(name) as u16;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtraEmblem {
    pub name: String,
    pub description: String,
    pub conditionset: u8,
    pub showconditionset: u8,
    pub sprite: char,
    pub color: u16,
}

pub const SECRET_NONE: i16 = -6;
pub const SECRET_ITEMFINDER: i16 = -5;
pub const SECRET_EMBLEMHINTS: i16 = -4;
pub const SECRET_PANDORA: i16 = -3;
pub const SECRET_CREDITS: i16 = -2;
pub const SECRET_RECORDATTACK: i16 = -1;
pub const SECRET_NIGHTSMODE: i16 = 0;
pub const SECRET_HEADER: i16 = 1;
pub const SECRET_LEVELSELECT: i16 = 2;
pub const SECRET_WARP: i16 = 3;
pub const SECRET_SOUNDTEST: i16 = 4;

pub fn unlockable_type(word: &str) -> i16 {
    match word {
        "NONE" => SECRET_NONE,
        "ITEMFINDER" => SECRET_ITEMFINDER,
        "EMBLEMHINTS" => SECRET_EMBLEMHINTS,
        "PANDORA" => SECRET_PANDORA,
        "CREDITS" => SECRET_CREDITS,
        "RECORDATTACK" => SECRET_RECORDATTACK,
        "NIGHTSMODE" => SECRET_NIGHTSMODE,
        "HEADER" => SECRET_HEADER,
        "LEVELSELECT" => SECRET_LEVELSELECT,
        "WARP" => SECRET_WARP,
        "SOUNDTEST" => SECRET_SOUNDTEST,
        _ => soc_formats::tokens::atoi(word) as i16,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unlockable {
    pub name: String,
    pub objective: String,
    pub height: u16,
    pub conditionset: u8,
    pub showconditionset: u8,
    pub kind: i16,
    pub variable: i16,
    pub nocecho: bool,
    pub nochecklist: bool,
}

impl Default for Unlockable {
    fn default() -> Self {
        Self {
            name: String::new(),
            objective: "/".to_string(),
            height: 0,
            conditionset: 0,
            showconditionset: 0,
            kind: 0,
            variable: 0,
            nocecho: false,
            nochecklist: false,
        }
    }
}

/// Condition kinds in the engine's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConditionKind {
    PlayTime,
    GameClear,
    AllEmeralds,
    UltimateClear,
    OverallScore,
    OverallTime,
    OverallRings,
    MapVisited,
    MapBeaten,
    MapAllEmeralds,
    MapUltimate,
    MapPerfect,
    MapScore,
    MapTime,
    MapRings,
    NightsScore,
    NightsTime,
    NightsGrade,
    Trigger,
    TotalEmblems,
    Emblem,
    ExtraEmblem,
    ConditionSet,
}

impl ConditionKind {
    pub fn from_name(name: &str) -> Option<Self> {
        use ConditionKind::*;
        Some(match name {
            "PLAYTIME" => PlayTime,
            "GAMECLEAR" => GameClear,
            "ALLEMERALDS" => AllEmeralds,
            "ULTIMATECLEAR" => UltimateClear,
            "OVERALLSCORE" => OverallScore,
            "OVERALLTIME" => OverallTime,
            "OVERALLRINGS" => OverallRings,
            "MAPVISITED" => MapVisited,
            "MAPBEATEN" => MapBeaten,
            "MAPALLEMERALDS" => MapAllEmeralds,
            "MAPULTIMATE" => MapUltimate,
            "MAPPERFECT" => MapPerfect,
            "MAPSCORE" => MapScore,
            "MAPTIME" => MapTime,
            "MAPRINGS" => MapRings,
            "NIGHTSSCORE" => NightsScore,
            "NIGHTSTIME" => NightsTime,
            "NIGHTSGRADE" => NightsGrade,
            "TRIGGER" => Trigger,
            "TOTALEMBLEMS" => TotalEmblems,
            "EMBLEM" => Emblem,
            "EXTRAEMBLEM" => ExtraEmblem,
            "CONDITIONSET" => ConditionSet,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub id: u32,
    pub kind: ConditionKind,
    pub requirement: i32,
    pub extra1: i16,
    pub extra2: i16,
}

/// Conditions in written order; ids never decrease.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConditionSet {
    pub conditions: Vec<Condition>,
}

impl ConditionSet {
    pub fn last_id(&self) -> u32 {
        self.conditions.last().map_or(0, |condition| condition.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emblem_defaults_follow_type() {
        let mut emblem = Emblem {
            kind: ET_RINGS,
            ..Emblem::default()
        };
        emblem.fill_defaults(|name| if name == "GOLD" { 73 } else { 1 });
        assert_eq!(emblem.sprite, 'R');
        assert_eq!(emblem.color, 73);

        let mut set = Emblem {
            kind: ET_TIME,
            sprite: 'Q',
            color: 5,
            ..Emblem::default()
        };
        set.fill_defaults(|_| 99);
        assert_eq!((set.sprite, set.color), ('Q', 5));
    }

    #[test]
    fn type_names_fall_back_to_numbers() {
        assert_eq!(emblem_type("NTIME"), ET_NTIME);
        assert_eq!(emblem_type("3"), ET_SCORE);
        assert_eq!(unlockable_type("ITEMFINDER"), SECRET_ITEMFINDER);
        assert_eq!(unlockable_type("-2"), SECRET_CREDITS);
        assert_eq!(ConditionKind::from_name("MAPBEATEN"), Some(ConditionKind::MapBeaten));
        assert_eq!(ConditionKind::from_name("NOPE"), None);
    }
}
