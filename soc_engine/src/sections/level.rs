//! `LEVEL` blocks: map headers.

use soc_formats::mapnum::{is_letter_pair, map_number_str};
use soc_formats::tokens::{atof, atoi, truncate_to, FieldValue};

use crate::catalog::constants::*;
use crate::catalog::{self, flags, names, MAXUNLOCKABLES, MAX_CUSTOM_OPTIONS, MAX_FLICKIES};
use crate::loader::Load;
use crate::resolve::SPECIAL_MUSIC_BASE;
use crate::tables::level::*;

/// Grade thresholds a mare carries.
const GRADES_PER_MARE: usize = 6;

fn set_bit(flags: &mut u16, bit: i32, on: bool) {
    if on {
        *flags |= bit as u16;
    } else {
        *flags &= !(bit as u16);
    }
}

fn set_menu_bit(flags: &mut u8, bit: i32, on: bool) {
    if on {
        *flags |= bit as u8;
    } else {
        *flags &= !(bit as u8);
    }
}

/// `GRADESn` value: up to six comma separated thresholds, missing ones 0.
fn parse_grades(value: &str) -> Vec<u32> {
    let mut parts = value.split(',');
    (0..GRADES_PER_MARE)
        .map(|_| parts.next().map_or(0, |part| atoi(part) as u32))
        .collect()
}

fn mobj_number(name: &str) -> Option<i32> {
    catalog::position(names::MOBJTYPE_LIST, name).map(|index| index as i32)
}

fn level_flag(word: &str) -> Option<i32> {
    Some(match word {
        "SCRIPTISFILE" => LF_SCRIPTISFILE,
        "SPEEDMUSIC" => LF_SPEEDMUSIC,
        "NOSSMUSIC" => LF_NOSSMUSIC,
        "NORELOAD" => LF_NORELOAD,
        "NOZONE" => LF_NOZONE,
        "SAVEGAME" => LF_SAVEGAME,
        "MIXNIGHTSCOUNTDOWN" => LF_MIXNIGHTSCOUNTDOWN,
        "WARNINGTITLE" => LF_WARNINGTITLE,
        "NOTITLECARD" => LF_NOTITLECARD,
        _ => return None,
    })
}

fn menu_flag(word: &str) -> Option<i32> {
    Some(match word {
        "HIDDEN" => LF2_HIDEINMENU,
        "HIDEINSTATS" => LF2_HIDEINSTATS,
        "RECORDATTACK" | "TIMEATTACK" => LF2_RECORDATTACK,
        "NIGHTSATTACK" => LF2_NIGHTSATTACK,
        "NOVISITNEEDED" => LF2_NOVISITNEEDED,
        "WIDEICON" => LF2_WIDEICON,
        _ => return None,
    })
}

impl Load<'_> {
    fn header(&mut self, num: i32) -> &mut MapHeader {
        self.context
            .tables
            .map_headers
            .entry(num)
            .or_insert_with(|| MapHeader::new(num))
    }

    /// Starts map `num` from a fresh header and applies the block to it.
    pub(crate) fn read_level(&mut self, num: i32) {
        self.context.tables.map_headers.insert(num, MapHeader::new(num));
        let label = format!("Level header {num}");

        while let Some(line) = self.next_field() {
            let Some((word, text)) = self.equals_field(&line, &label) else {
                continue;
            };

            match word.as_str() {
                "LEVELNAME" => {
                    let title = self.bounded(&text, LEVEL_TITLE_LEN, format!("{label}: levelname"));
                    let header = self.header(num);
                    header.selectheading = truncate_to(&text, LEVEL_TITLE_LEN).0;
                    header.lvlttl = title;
                    continue;
                }
                "SUBTITLE" => {
                    let subtitle = self.bounded(&text, SUBTITLE_LEN, format!("{label}: subtitle"));
                    self.header(num).subttl = subtitle;
                    continue;
                }
                _ => {}
            }
            if word.starts_with("LUA.") {
                self.custom_option(num, &label, &word, &text);
                continue;
            }

            let value = text.to_ascii_uppercase();
            let field = FieldValue::new(&value);
            let i = field.as_int();

            if let Some(bit) = level_flag(&word) {
                set_bit(&mut self.header(num).levelflags, bit, field.is_truthy());
                continue;
            }
            if let Some(bit) = menu_flag(&word) {
                set_menu_bit(&mut self.header(num).menuflags, bit, field.is_truthy());
                continue;
            }
            if let Some(mare) = word.strip_prefix("GRADES") {
                let mare = atoi(mare);
                if !(1..=MAX_MARES as i32).contains(&mare) {
                    self.warn(format!("{label}: unknown word '{word}'"));
                    continue;
                }
                self.header(num).grades[mare as usize - 1] = Some(parse_grades(&value));
                continue;
            }

            match word.as_str() {
                "FLICKYLIST" | "ANIMALLIST" => self.flicky_list(num, &label, &value),
                "SELECTHEADING" => {
                    let text = self.bounded(&value, LEVEL_TITLE_LEN, format!("{label}: selectheading"));
                    self.header(num).selectheading = text;
                }
                "SCRIPTNAME" => {
                    let text = self.bounded(&value, SCRIPT_NAME_LEN, format!("{label}: scriptname"));
                    self.header(num).scriptname = text;
                }
                "RUNSOC" => {
                    let text = self.bounded(&value, SCRIPT_NAME_LEN, format!("{label}: runsoc"));
                    self.header(num).runsoc = text;
                }
                "ACT" => {
                    if (0..20).contains(&i) {
                        self.header(num).actnum = i as u8;
                    } else {
                        self.warn(format!("{label}: invalid act number {i}"));
                    }
                }
                "NEXTLEVEL" => {
                    let next = match value.as_str() {
                        "TITLE" => NEXTLEVEL_TITLE,
                        "EVALUATION" => NEXTLEVEL_EVALUATION,
                        "CREDITS" => NEXTLEVEL_CREDITS,
                        "ENDING" => NEXTLEVEL_ENDING,
                        pair if is_letter_pair(pair) => map_number_str(pair),
                        _ => i,
                    };
                    self.header(num).nextlevel = next as i16;
                }
                "TYPEOFLEVEL" => {
                    let mask = self.level_types(&value, &label);
                    self.header(num).typeoflevel = mask;
                }
                "KEYWORDS" => {
                    let text = self.bounded(&value, KEYWORDS_LEN, format!("{label}: keywords"));
                    self.header(num).keywords = text;
                }
                "MUSIC" => {
                    let music = if value == "NONE" {
                        String::new()
                    } else {
                        self.bounded(&value, MUSIC_NAME_LEN, format!("{label}: music"))
                    };
                    self.header(num).musname = music;
                }
                "MUSICSLOT" => {
                    let slot = self.resolve(|r| r.music(&value));
                    self.header(num).musname = music_slot_name(slot);
                }
                "MUSICTRACK" => self.header(num).mustrack = (i as u16).wrapping_sub(1),
                "MUSICPOS" => {
                    let pos = self.number(&value);
                    self.header(num).muspos = pos as u32;
                }
                "MUSICINTERFADEOUT" => {
                    let fade = self.number(&value);
                    self.header(num).musinterfadeout = fade as u32;
                }
                "MUSICINTER" => {
                    let text = self.bounded(&value, MUSIC_NAME_LEN, format!("{label}: intermission music"));
                    self.header(num).musintername = text;
                }
                "MUSICPOSTBOSS" => {
                    let text = self.bounded(&value, MUSIC_NAME_LEN, format!("{label}: post-boss music"));
                    self.header(num).muspostbossname = text;
                }
                "MUSICPOSTBOSSTRACK" => {
                    self.header(num).muspostbosstrack = (i as u16).wrapping_sub(1);
                }
                "MUSICPOSTBOSSPOS" => {
                    let pos = self.number(&value);
                    self.header(num).muspostbosspos = pos as u32;
                }
                "MUSICPOSTBOSSFADEIN" => {
                    let fade = self.number(&value);
                    self.header(num).muspostbossfadein = fade as u32;
                }
                "FORCERESETMUSIC" => {
                    let reset = if value == "OFF" || value.starts_with(['F', 'N']) {
                        0
                    } else if value == "ON" || value.starts_with(['T', 'Y']) {
                        1
                    } else {
                        -1
                    };
                    self.header(num).musforcereset = reset;
                }
                "FORCECHARACTER" => {
                    self.header(num).forcecharacter =
                        value.to_ascii_lowercase().chars().take(SKIN_NAME_LEN).collect();
                }
                "WEATHER" => {
                    let weather = self.number(&value);
                    self.header(num).weather = weather as u8;
                }
                "SKYNUM" => self.header(num).skynum = i as i16,
                "INTERSCREEN" => {
                    self.header(num).interscreen = value.chars().take(PATCH_NAME_LEN - 1).collect();
                }
                "PRECUTSCENENUM" => self.header(num).precutscenenum = i as u8,
                "CUTSCENENUM" => self.header(num).cutscenenum = i as u8,
                "COUNTDOWN" => self.header(num).countdown = i as i16,
                "PALETTE" => self.header(num).palette = i as u16,
                "NUMLAPS" => self.header(num).numlaps = i as u8,
                "UNLOCKABLE" => {
                    if (0..=MAXUNLOCKABLES as i32).contains(&i) {
                        self.header(num).unlockrequired = (i - 1) as i8;
                    } else {
                        self.warn(format!("{label}: invalid unlockable number {i}"));
                    }
                }
                "LEVELSELECT" => self.header(num).levelselect = i as u8,
                "SKYBOXSCALE" => {
                    let header = self.header(num);
                    header.skybox_scalex = i as i16;
                    header.skybox_scaley = i as i16;
                    header.skybox_scalez = i as i16;
                }
                "SKYBOXSCALEX" => self.header(num).skybox_scalex = i as i16,
                "SKYBOXSCALEY" => self.header(num).skybox_scaley = i as i16,
                "SKYBOXSCALEZ" => self.header(num).skybox_scalez = i as i16,
                "BONUSTYPE" => {
                    let bonus = match value.as_str() {
                        "NONE" => -1,
                        "NORMAL" => 0,
                        "BOSS" => 1,
                        "ERZ3" => 2,
                        "NIGHTS" => 3,
                        "NIGHTSLINK" => 4,
                        _ => i,
                    };
                    if (-1..=4).contains(&bonus) {
                        self.header(num).bonustype = bonus as i8;
                    } else {
                        self.warn(format!("{label}: invalid bonus type number {bonus}"));
                    }
                }
                "TITLECARDZIGZAG" => {
                    let text = self.bounded(&value, PATCH_NAME_LEN, format!("{label}: title card zigzag patch name"));
                    self.header(num).ltzzpatch = text;
                }
                "TITLECARDZIGZAGTEXT" => {
                    let text = self.bounded(&value, PATCH_NAME_LEN, format!("{label}: title card zigzag text patch name"));
                    self.header(num).ltzztext = text;
                }
                "TITLECARDACTDIAMOND" => {
                    let text = self.bounded(&value, PATCH_NAME_LEN, format!("{label}: title card act diamond patch name"));
                    self.header(num).ltactdiamond = text;
                }
                "MAXBONUSLIVES" => self.header(num).maxbonuslives = i as i8,
                "LEVELFLAGS" => self.header(num).levelflags = i as u16,
                "MENUFLAGS" => self.header(num).menuflags = i as u8,
                "SHOWTITLECARDFOR" => self.title_card_for(num, &label, &value),
                "STARTRINGS" => self.header(num).startrings = i as u16,
                "SPECIALSTAGETIME" => self.header(num).sstimer = i,
                "SPECIALSTAGESPHERES" => self.header(num).ssspheres = i as u32,
                "GRAVITY" => {
                    self.header(num).gravity = (atof(&value) * FRACUNIT as f64) as i32;
                }
                _ => self.warn(format!("{label}: unknown word '{word}'")),
            }
        }
    }

    /// `LUA.<name> = value`, appended with the name lowercased.
    fn custom_option(&mut self, num: i32, label: &str, word: &str, text: &str) {
        let name = word[4..].to_ascii_lowercase();
        if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
            self.warn(format!("{label}: invalid custom option name \"{name}\""));
            return;
        }
        if self.header(num).custom_options.len() == MAX_CUSTOM_OPTIONS {
            self.warn(format!("{label}: too many custom parameters"));
            return;
        }
        let option = CustomOption {
            option: name.chars().take(CUSTOM_OPTION_NAME_LEN - 1).collect(),
            value: text.chars().take(CUSTOM_OPTION_VALUE_LEN - 1).collect(),
        };
        self.header(num).custom_options.push(option);
    }

    fn flicky_list(&mut self, num: i32, label: &str, value: &str) {
        let flickies: Vec<i32> = match value {
            "NONE" => Vec::new(),
            "DEMO" => demo_flickies(),
            "ALL" => flags::FLICKY_NAMES[..flags::ALL_FLICKIES]
                .iter()
                .filter_map(|(_, mobj)| mobj_number(mobj))
                .collect(),
            _ => {
                let mut list = Vec::new();
                for name in value.split(',') {
                    if list.len() == MAX_FLICKIES {
                        self.warn(format!("{label}: too many flickies"));
                        break;
                    }
                    if name.starts_with("MT_") {
                        let mobj = self.resolve(|r| r.mobjtype(name));
                        if mobj != 0 {
                            list.push(mobj);
                        }
                        continue;
                    }
                    match flags::FLICKY_NAMES
                        .iter()
                        .find(|(flicky, _)| *flicky == name)
                        .and_then(|(_, mobj)| mobj_number(mobj))
                    {
                        Some(mobj) => list.push(mobj),
                        None => self.warn(format!("{label}: unknown flicky selection {name}")),
                    }
                }
                if list.is_empty() {
                    self.warn(format!("{label}: no valid flicky types found"));
                }
                list
            }
        };
        self.header(num).flickies = flickies;
    }

    fn title_card_for(&mut self, num: i32, label: &str, value: &str) {
        let mut level_flags = self.header(num).levelflags | LF_NOTITLECARD as u16;
        for option in value.split(',') {
            let shown = match option {
                "FIRST" => LF_NOTITLECARDFIRST,
                "RESPAWN" => LF_NOTITLECARDRESPAWN,
                "RECORDATTACK" => LF_NOTITLECARDRECORDATTACK,
                "ALL" => LF_NOTITLECARD,
                "NONE" => 0,
                _ => {
                    self.warn(format!("{label}: unknown titlecard show option {option}"));
                    0
                }
            };
            level_flags &= !(shown as u16);
        }
        self.header(num).levelflags = level_flags;
    }
}

/// Music lump for a compatibility music slot number.
pub(super) fn music_slot_name(slot: i32) -> String {
    if (1..=catalog::NUMMAPS).contains(&slot) {
        return default_music(slot);
    }
    let special = usize::try_from(slot - SPECIAL_MUSIC_BASE)
        .ok()
        .and_then(|index| names::SPECIAL_MUSIC_SLOTS.get(index));
    match special {
        Some(name) => name.chars().take(MUSIC_NAME_LEN - 1).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_fill_missing_thresholds_with_zero() {
        assert_eq!(parse_grades("100,200,300"), vec![100, 200, 300, 0, 0, 0]);
    }

    #[test]
    fn music_slots_cover_maps_and_specials() {
        assert_eq!(music_slot_name(1), "MAP01M");
        assert_eq!(music_slot_name(SPECIAL_MUSIC_BASE), "_title");
        assert_eq!(music_slot_name(0), "");
        assert_eq!(music_slot_name(5000), "");
    }

    #[test]
    fn flag_bits_set_and_clear() {
        let mut flags = 0u16;
        set_bit(&mut flags, LF_NOZONE, true);
        set_bit(&mut flags, LF_SAVEGAME, true);
        set_bit(&mut flags, LF_NOZONE, false);
        assert_eq!(flags, LF_SAVEGAME as u16);
    }
}
