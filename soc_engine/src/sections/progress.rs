//! Emblems, extra emblems, unlockables and condition sets. The directives
//! leading here are gated on a mod-owned game data file.

use soc_formats::mapnum::map_number_str;
use soc_formats::tokens::{atoi, FieldValue};

use crate::catalog::{self, flags::NIGHTS_GRADES, MAXCONDITIONSETS, MAXEMBLEMS, MAXEXTRAEMBLEMS};
use crate::loader::Load;
use crate::tables::progress::*;
use crate::tables::progress::ConditionKind as K;

/// Map written as a letter pair (`AB`) or as a plain number.
fn map_or_number(word: &str) -> i32 {
    if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        map_number_str(word)
    } else {
        atoi(word)
    }
}

/// Emblem sprite letter from `A`..`Z` or `1`..`26`.
fn emblem_sprite(value: &str) -> Option<char> {
    let code = match value.chars().next() {
        Some(c) if c.is_ascii_uppercase() => c as i32,
        _ => atoi(value) + 'A' as i32 - 1,
    };
    u8::try_from(code)
        .ok()
        .map(char::from)
        .filter(char::is_ascii_uppercase)
}

/// Why a condition line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConditionError {
    Empty,
    TooFewParameters(usize),
    Invalid(String),
    InvalidGrade(String),
    LevelOutOfRange(i32),
    TriggerOutOfRange(i32),
    EmblemOutOfRange(i32),
    ExtraEmblemOutOfRange(i32),
    ConditionSetOutOfRange(i32),
}

impl std::fmt::Display for ConditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("condition line is empty"),
            Self::TooFewParameters(n) => write!(f, "Too few parameters, need {n}"),
            Self::Invalid(name) => write!(f, "Invalid condition name {name}"),
            Self::InvalidGrade(grade) => write!(f, "Invalid NiGHTS grade {grade}"),
            Self::LevelOutOfRange(n) => {
                write!(f, "Level number {n} out of range (1 - {})", catalog::NUMMAPS)
            }
            Self::TriggerOutOfRange(n) => write!(f, "Trigger ID {n} out of range (0 - 31)"),
            Self::EmblemOutOfRange(n) => write!(f, "Emblem {n} out of range (1 - {MAXEMBLEMS})"),
            Self::ExtraEmblemOutOfRange(n) => {
                write!(f, "Extra emblem {n} out of range (1 - {MAXEXTRAEMBLEMS})")
            }
            Self::ConditionSetOutOfRange(n) => {
                write!(f, "Condition set {n} out of range (1 - {MAXCONDITIONSETS})")
            }
        }
    }
}

fn checked_map(word: &str) -> Result<i32, ConditionError> {
    let map = map_or_number(word);
    if (0..catalog::NUMMAPS).contains(&map) {
        Ok(map)
    } else {
        Err(ConditionError::LevelOutOfRange(map))
    }
}

fn in_range(value: i32, max: usize, err: fn(i32) -> ConditionError) -> Result<i32, ConditionError> {
    if value > 0 && value <= max as i32 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Parses `<KIND> <params...>`. Nothing is recorded unless the whole
/// line checks out.
fn parse_condition(id: u32, text: &str) -> Result<Condition, ConditionError> {
    let params: Vec<&str> = text.split(' ').filter(|p| !p.is_empty()).take(4).collect();
    let Some(&name) = params.first() else {
        return Err(ConditionError::Empty);
    };
    let param = |n: usize| params.get(n).copied().ok_or(ConditionError::TooFewParameters(n));
    let kind = ConditionKind::from_name(name).ok_or_else(|| ConditionError::Invalid(name.to_string()))?;

    let (mut requirement, mut extra1, mut extra2) = (0, 0, 0);
    match kind {
        K::PlayTime | K::OverallScore | K::OverallTime | K::OverallRings | K::TotalEmblems => {
            requirement = atoi(param(1)?);
        }
        K::GameClear | K::AllEmeralds | K::UltimateClear => {
            requirement = params.get(1).map_or(1, |p| atoi(p));
        }
        K::MapVisited | K::MapBeaten | K::MapAllEmeralds | K::MapUltimate | K::MapPerfect => {
            requirement = checked_map(param(1)?)?;
        }
        K::MapScore | K::MapTime | K::MapRings => {
            requirement = atoi(param(2)?);
            extra1 = checked_map(param(1)?)? as i16;
        }
        K::NightsScore | K::NightsTime | K::NightsGrade => {
            param(2)?;
            let mare_given = params.len() > 3;
            let wanted = if mare_given { params[3] } else { params[2] };
            requirement = match wanted.strip_prefix("GRADE_") {
                Some(grade) => grade
                    .chars()
                    .next()
                    .and_then(|letter| NIGHTS_GRADES.find(letter))
                    .map(|index| index as i32)
                    .ok_or_else(|| ConditionError::InvalidGrade(wanted.to_string()))?,
                None => atoi(wanted),
            };
            extra1 = checked_map(params[1])? as i16;
            if mare_given {
                extra2 = atoi(params[2]) as i16;
            }
        }
        K::Trigger => {
            requirement = atoi(param(1)?);
            if !(0..=31).contains(&requirement) {
                return Err(ConditionError::TriggerOutOfRange(requirement));
            }
        }
        K::Emblem => {
            requirement = in_range(atoi(param(1)?), MAXEMBLEMS, ConditionError::EmblemOutOfRange)?;
        }
        K::ExtraEmblem => {
            requirement = in_range(
                atoi(param(1)?),
                MAXEXTRAEMBLEMS,
                ConditionError::ExtraEmblemOutOfRange,
            )?;
        }
        K::ConditionSet => {
            requirement = in_range(
                atoi(param(1)?),
                MAXCONDITIONSETS,
                ConditionError::ConditionSetOutOfRange,
            )?;
        }
    }

    Ok(Condition {
        id,
        kind,
        requirement,
        extra1,
        extra2,
    })
}

impl Load<'_> {
    pub(crate) fn read_emblem(&mut self, index: usize) {
        let num = index + 1;
        let label = format!("Emblem {num}");
        let mut emblem = Emblem::default();

        while let Some(line) = self.next_field() {
            let Some((word, text)) = self.equals_field(&line, &label) else {
                continue;
            };
            if word == "HINT" {
                let hint = text.replace('\\', "\n");
                emblem.hint = self.bounded(&hint, EMBLEM_HINT_LEN, format!("{label}: hint"));
                continue;
            }
            let value = text.to_ascii_uppercase();
            let i = FieldValue::new(&value).as_int();
            match word.as_str() {
                "TYPE" => emblem.kind = emblem_type(&value),
                "TAG" => emblem.tag = i as i16,
                "MAPNUM" => emblem.level = map_or_number(&value) as i16,
                "SPRITE" => match emblem_sprite(&value) {
                    Some(sprite) => emblem.sprite = sprite,
                    None => self.warn(format!("{label}: sprite must be from A - Z (1 - 26)")),
                },
                "COLOR" => emblem.color = self.number(&value) as u16,
                "VAR" => emblem.var = self.number(&value),
                _ => self.warn(format!("{label}: unknown word '{word}'")),
            }
        }

        emblem.fill_defaults(catalog::skincolor);
        self.context.tables.emblems[index] = emblem;
    }

    pub(crate) fn read_extra_emblem(&mut self, index: usize) {
        let num = index + 1;
        let label = format!("Extra emblem {num}");
        let mut extra = ExtraEmblem::default();

        while let Some(line) = self.next_field() {
            let Some((word, text)) = self.equals_field(&line, &label) else {
                continue;
            };
            let i = atoi(&text);
            match word.as_str() {
                "NAME" => extra.name = self.bounded(&text, EXTRA_NAME_LEN, format!("{label}: name")),
                "OBJECTIVE" => {
                    extra.description =
                        self.bounded(&text, EXTRA_OBJECTIVE_LEN, format!("{label}: objective"));
                }
                "CONDITIONSET" => extra.conditionset = i as u8,
                "SHOWCONDITIONSET" => extra.showconditionset = i as u8,
                "SPRITE" => match emblem_sprite(&text.to_ascii_uppercase()) {
                    Some(sprite) => extra.sprite = sprite,
                    None => self.warn(format!("Emblem {num}: sprite must be from A - Z (1 - 26)")),
                },
                "COLOR" => extra.color = self.number(&text.to_ascii_uppercase()) as u16,
                _ => self.warn(format!("{label}: unknown word '{word}'")),
            }
        }

        if extra.sprite == '\0' {
            extra.sprite = 'X';
        }
        if extra.color == 0 {
            extra.color = catalog::skincolor("BLUE") as u16;
        }
        self.context.tables.extra_emblems[index] = extra;
    }

    pub(crate) fn read_unlockable(&mut self, index: usize) {
        let label = format!("Unlockable {}", index + 1);
        let mut unlockable = Unlockable::default();

        while let Some(line) = self.next_field() {
            let Some((word, text)) = self.equals_field(&line, &label) else {
                continue;
            };
            match word.as_str() {
                "NAME" => {
                    unlockable.name = self.bounded(&text, UNLOCKABLE_TEXT_LEN, format!("{label}: name"));
                    continue;
                }
                "OBJECTIVE" => {
                    unlockable.objective =
                        self.bounded(&text, UNLOCKABLE_TEXT_LEN, format!("{label}: objective"));
                    continue;
                }
                _ => {}
            }
            let value = text.to_ascii_uppercase();
            let field = FieldValue::new(&value);
            let i = field.as_int();
            match word.as_str() {
                "HEIGHT" => unlockable.height = i as u16,
                "CONDITIONSET" => unlockable.conditionset = i as u8,
                "SHOWCONDITIONSET" => unlockable.showconditionset = i as u8,
                "NOCECHO" => unlockable.nocecho = field.is_truthy(),
                "NOCHECKLIST" => unlockable.nochecklist = field.is_truthy(),
                "TYPE" => unlockable.kind = unlockable_type(&value),
                "VAR" => unlockable.variable = map_or_number(&value) as i16,
                _ => self.warn(format!("{label}: unknown word '{word}'")),
            }
        }

        self.context.tables.unlockables[index] = unlockable;
    }

    /// Replaces set `set` (one-based) with the conditions in the block.
    pub(crate) fn read_condition_set(&mut self, set: usize) {
        let label = format!("Condition set {set}");
        self.context.tables.condition_sets[set - 1] = ConditionSet::default();
        let mut previous = 0;

        while let Some(line) = self.next_field() {
            let Some((word, text)) = self.equals_field(&line, &label) else {
                continue;
            };
            let Some(id) = word.strip_prefix("CONDITION").map(|id| atoi(id) as u8) else {
                self.warn(format!("{label}: unknown word '{word}'"));
                continue;
            };
            if id == 0 {
                self.warn(format!("{label}: unknown word '{word}'"));
                continue;
            }
            if previous > id {
                self.warn(format!("{label}: conditions are out of order, ignoring this line"));
                continue;
            }
            previous = id;

            match parse_condition(id.into(), &text.to_ascii_uppercase()) {
                Ok(condition) => {
                    self.context.tables.condition_sets[set - 1].conditions.push(condition);
                }
                Err(err) => self.warn(err.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprites_accept_letters_and_numbers() {
        assert_eq!(emblem_sprite("B"), Some('B'));
        assert_eq!(emblem_sprite("3"), Some('C'));
        assert_eq!(emblem_sprite("27"), None);
        assert_eq!(emblem_sprite("0"), None);
    }

    #[test]
    fn map_conditions_read_letter_pairs() {
        let condition = parse_condition(1, "MAPBEATEN A0").unwrap();
        assert_eq!(condition.kind, ConditionKind::MapBeaten);
        assert_eq!(condition.requirement, 100);

        let score = parse_condition(2, "MAPSCORE 5 50000").unwrap();
        assert_eq!((score.extra1, score.requirement), (5, 50000));
    }

    #[test]
    fn nights_conditions_take_an_optional_mare() {
        let overall = parse_condition(1, "NIGHTSGRADE 10 GRADE_A").unwrap();
        assert_eq!((overall.extra1, overall.extra2, overall.requirement), (10, 0, 5));

        let mare = parse_condition(1, "NIGHTSSCORE 10 2 30000").unwrap();
        assert_eq!((mare.extra1, mare.extra2, mare.requirement), (10, 2, 30000));

        assert_eq!(
            parse_condition(1, "NIGHTSGRADE 10 GRADE_Q"),
            Err(ConditionError::InvalidGrade("GRADE_Q".into()))
        );
    }

    #[test]
    fn bad_conditions_are_dropped_whole() {
        assert_eq!(parse_condition(1, ""), Err(ConditionError::Empty));
        assert_eq!(parse_condition(1, "PLAYTIME"), Err(ConditionError::TooFewParameters(1)));
        assert_eq!(parse_condition(1, "MAPTIME 5"), Err(ConditionError::TooFewParameters(2)));
        assert_eq!(parse_condition(1, "TRIGGER 32"), Err(ConditionError::TriggerOutOfRange(32)));
        assert_eq!(parse_condition(1, "EMBLEM 0"), Err(ConditionError::EmblemOutOfRange(0)));
        assert_eq!(parse_condition(1, "MAPVISITED 2000"), Err(ConditionError::LevelOutOfRange(2000)));
        assert_eq!(parse_condition(1, "WINGAME"), Err(ConditionError::Invalid("WINGAME".into())));
    }

    #[test]
    fn clears_default_to_one() {
        assert_eq!(parse_condition(3, "GAMECLEAR").unwrap().requirement, 1);
        assert_eq!(parse_condition(3, "ALLEMERALDS 2").unwrap().requirement, 2);
    }
}
