//! `MAINCFG` and `WIPES` blocks.

use soc_formats::mapnum::map_number_str;
use soc_formats::tokens::{atoi, truncate_to, FieldValue};

use crate::catalog::flags::{self, WIPE_LEVEL_TOBLACK, WIPE_SPECLEVEL_TOWHITE};
use crate::gamedata::{is_good_data_file_name, ResetScope};
use crate::loader::Load;
use crate::tables::maincfg::*;
use crate::tables::{TitlePicsMode, WIPE_NONE};

/// Cutscene and intro numbers stop at the cutscene table size.
const MAX_CUTSCENE_NUMBER: u8 = 128;
const TIMEATTACK_FOLDER_LEN: usize = 64;
const LUMP_NAME_LEN: usize = 8;

/// Which parts of the host a main config key touches.
enum Touches {
    Nothing,
    Title,
    Intro,
}

impl Load<'_> {
    /// A map given as a letter pair, otherwise an expression.
    fn map_value(&mut self, value: &str) -> i16 {
        if value.starts_with(|c: char| c.is_ascii_uppercase()) {
            map_number_str(value) as i16
        } else {
            self.number(value) as i16
        }
    }

    fn exec_config(&mut self, value: &str) {
        if value.contains('.') {
            self.report
                .side_effects
                .console_commands
                .push(format!("exec {value}"));
            return;
        }
        let name: String = value.chars().take(LUMP_NAME_LEN).collect();
        let script = self
            .lumps
            .and_then(|lumps| lumps.read_lump_by_name(&name))
            .filter(|data| !data.is_empty());
        match script {
            Some(data) => {
                let text = String::from_utf8_lossy(&data).into_owned();
                self.report.side_effects.console_commands.push(text);
            }
            None => log::debug!("SOC Error: script lump {name} not found/not valid."),
        }
    }

    /// Saves progress under the current file and points the store at the
    /// mod's own file. Bad names are refused.
    fn redirect_gamedata(&mut self, value: &str) -> bool {
        if !is_good_data_file_name(value) {
            self.warn(format!("Maincfg: bad data file name '{value}'"));
            return false;
        }
        if let Err(err) = self.store.save() {
            self.warn(format!("Maincfg: could not save game data: {err:#}"));
        }

        let file = value.to_ascii_lowercase();
        let stem = &file[..file.len() - ".dat".len()];
        let cfg = &mut self.context.tables.maincfg;
        cfg.timeattack_folder = truncate_to(stem, TIMEATTACK_FOLDER_LEN).0;
        cfg.gamedata_file = file.clone();
        self.store.set_file(&file);
        log::info!("game data redirected to {file}");
        self.gamedata_added = true;
        true
    }

    pub(crate) fn read_maincfg(&mut self) {
        while let Some(line) = self.next_field() {
            let Some((word, value)) = self.equals_field(&line, "Maincfg") else {
                continue;
            };
            let value = value.to_ascii_uppercase();
            let field = FieldValue::new(&value);
            let yes = field.is_truthy();

            let touches = match word.as_str() {
                "EXECCFG" => {
                    self.exec_config(&value);
                    Touches::Nothing
                }
                "SPSTAGE_START" => {
                    let map = self.map_value(&value);
                    self.context.tables.maincfg.spstage_start = map;
                    Touches::Nothing
                }
                "SSTAGE_START" => {
                    let map = self.map_value(&value);
                    let cfg = &mut self.context.tables.maincfg;
                    cfg.sstage_start = map;
                    // Seven special stages plus the extra one.
                    cfg.sstage_end = map.wrapping_add(7);
                    Touches::Nothing
                }
                "SMPSTAGE_START" => {
                    let map = self.map_value(&value);
                    let cfg = &mut self.context.tables.maincfg;
                    cfg.smpstage_start = map;
                    cfg.smpstage_end = map.wrapping_add(6);
                    Touches::Nothing
                }
                "REDTEAM" | "BLUETEAM" | "REDRING" | "BLUERING" => {
                    let color = u16::from(self.number(&value) as u8);
                    let cfg = &mut self.context.tables.maincfg;
                    match word.as_str() {
                        "REDTEAM" => cfg.skincolor_redteam = color,
                        "BLUETEAM" => cfg.skincolor_blueteam = color,
                        "REDRING" => cfg.skincolor_redring = color,
                        _ => cfg.skincolor_bluering = color,
                    }
                    Touches::Nothing
                }
                "INVULNTICS" | "SNEAKERTICS" | "FLASHINGTICS" | "TAILSFLYTICS"
                | "UNDERWATERTICS" | "SPACETIMETICS" | "EXTRALIFETICS" | "NIGHTSLINKTICS" => {
                    let tics = self.number(&value) as u16;
                    let cfg = &mut self.context.tables.maincfg;
                    let slot = match word.as_str() {
                        "INVULNTICS" => &mut cfg.invulntics,
                        "SNEAKERTICS" => &mut cfg.sneakertics,
                        "FLASHINGTICS" => &mut cfg.flashingtics,
                        "TAILSFLYTICS" => &mut cfg.tailsflytics,
                        "UNDERWATERTICS" => &mut cfg.underwatertics,
                        "SPACETIMETICS" => &mut cfg.spacetimetics,
                        "EXTRALIFETICS" => &mut cfg.extralifetics,
                        _ => &mut cfg.nightslinktics,
                    };
                    *slot = tics;
                    Touches::Nothing
                }
                "GAMEOVERTICS" => {
                    let tics = self.number(&value);
                    self.context.tables.maincfg.gameovertics = tics;
                    Touches::Nothing
                }
                "AMMOREMOVALTICS" => {
                    let tics = self.number(&value);
                    self.context.tables.maincfg.ammoremovaltics = tics;
                    Touches::Nothing
                }
                "INTROTOPLAY" => {
                    let intro = (self.number(&value) as u8).min(MAX_CUTSCENE_NUMBER);
                    self.context.tables.maincfg.introtoplay = intro;
                    Touches::Intro
                }
                "LOOPTITLE" => {
                    self.context.tables.maincfg.looptitle = yes;
                    Touches::Title
                }
                "TITLEMAP" => {
                    let map = self.map_value(&value);
                    self.context.tables.maincfg.titlemap = map;
                    Touches::Title
                }
                "HIDETITLEPICS" | "TITLEPICSHIDE" => {
                    self.context.tables.maincfg.hidetitlepics = yes;
                    Touches::Title
                }
                "TITLEPICSMODE" => {
                    let cfg = &mut self.context.tables.maincfg;
                    if TitlePicsMode::hides(&value) {
                        cfg.ttmode = TitlePicsMode::User;
                        cfg.ttname.clear();
                        cfg.hidetitlepics = true;
                    } else {
                        cfg.ttmode = TitlePicsMode::parse(&value);
                    }
                    Touches::Title
                }
                "TITLEPICSSCALE" => {
                    let scale = (self.number(&value) as u8).clamp(1, 8);
                    self.context.tables.maincfg.ttscale = scale;
                    Touches::Title
                }
                // Comma separated resolutions the title art exists in.
                "TITLEPICSSCALESAVAILABLE" => {
                    let cfg = &mut self.context.tables.maincfg;
                    for (scale, available) in cfg.ttavailable.iter_mut().enumerate() {
                        let digit = char::from(b'1' + scale as u8);
                        *available = value.contains(digit);
                    }
                    Touches::Title
                }
                "TITLEPICSNAME" => {
                    self.context.tables.maincfg.ttname =
                        value.chars().take(TITLE_PICS_NAME_LEN - 1).collect();
                    Touches::Title
                }
                "TITLEPICSX" => {
                    let x = self.number(&value) as i16;
                    self.context.tables.maincfg.ttx = x;
                    Touches::Title
                }
                "TITLEPICSY" => {
                    let y = self.number(&value) as i16;
                    self.context.tables.maincfg.tty = y;
                    Touches::Title
                }
                "TITLEPICSLOOP" => {
                    let count = self.number(&value) as i16;
                    self.context.tables.maincfg.ttloop = count;
                    Touches::Title
                }
                "TITLEPICSTICS" => {
                    let tics = self.number(&value) as u16;
                    self.context.tables.maincfg.tttics = tics;
                    Touches::Title
                }
                "TITLESCROLLSPEED" | "TITLESCROLLXSPEED" => {
                    let speed = self.number(&value);
                    self.context.tables.maincfg.titlescrollxspeed = speed;
                    Touches::Title
                }
                "TITLESCROLLYSPEED" => {
                    let speed = self.number(&value);
                    self.context.tables.maincfg.titlescrollyspeed = speed;
                    Touches::Title
                }
                "CREDITSCUTSCENE" => {
                    let scene = (self.number(&value) as u8).min(MAX_CUTSCENE_NUMBER);
                    self.context.tables.maincfg.creditscutscene = scene;
                    Touches::Nothing
                }
                "DISABLESPEEDADJUST" => {
                    self.context.tables.maincfg.disable_speed_adjust = yes;
                    Touches::Nothing
                }
                "NUMDEMOS" => {
                    let demos = self.number(&value) as u8;
                    self.context.tables.maincfg.num_demos = demos;
                    Touches::Title
                }
                "DEMODELAYTIME" => {
                    let time = self.number(&value);
                    self.context.tables.maincfg.demo_delay_time = time;
                    Touches::Title
                }
                "DEMOIDLETIME" => {
                    let time = self.number(&value);
                    self.context.tables.maincfg.demo_idle_time = time;
                    Touches::Title
                }
                "USE1UPSOUND" => {
                    self.context.tables.maincfg.use_1up_sound = yes;
                    Touches::Nothing
                }
                "MAXXTRALIFE" => {
                    let lives = self.number(&value) as u8;
                    self.context.tables.maincfg.max_xtra_life = lives;
                    Touches::Nothing
                }
                "USECONTINUES" => {
                    self.context.tables.maincfg.use_continues = yes;
                    Touches::Nothing
                }
                "GAMEDATA" => {
                    if self.redirect_gamedata(&value) {
                        Touches::Title
                    } else {
                        Touches::Nothing
                    }
                }
                "RESETDATA" => {
                    self.store.reset(ResetScope(field.as_int()));
                    Touches::Title
                }
                "CUSTOMVERSION" => {
                    self.context.tables.maincfg.custom_version =
                        truncate_to(&value, CUSTOM_VERSION_LEN).0;
                    Touches::Nothing
                }
                "BOOTMAP" => {
                    let map = self.map_value(&value);
                    self.context.tables.maincfg.bootmap = map;
                    Touches::Nothing
                }
                "STARTCHAR" => {
                    self.context.tables.maincfg.startchar = field.as_int() as i16;
                    Touches::Nothing
                }
                "TUTORIALMAP" => {
                    let map = self.map_value(&value);
                    self.context.tables.maincfg.tutorialmap = map;
                    Touches::Nothing
                }
                _ => {
                    self.warn(format!("Maincfg: unknown word '{word}'"));
                    Touches::Nothing
                }
            };

            let effects = &mut self.report.side_effects;
            match touches {
                Touches::Title => effects.title_changed = true,
                Touches::Intro => effects.intro_changed = true,
                Touches::Nothing => {}
            }
        }
    }

    pub(crate) fn read_wipes(&mut self) {
        while let Some(line) = self.next_field() {
            let Some((word, value)) = self.equals_field(&line, "Wipes") else {
                continue;
            };
            let number = atoi(&value);
            let wipe = match number {
                -1 => WIPE_NONE,
                0..=99 => number as u8,
                _ => {
                    self.warn(format!("Wipes: bad value '{value}'"));
                    continue;
                }
            };

            let Some(slot) = flags::position(flags::WIPE_LIST, &word) else {
                self.warn(format!("Wipes: unknown word '{word}'"));
                continue;
            };
            if wipe == WIPE_NONE && (slot <= WIPE_LEVEL_TOBLACK || slot >= WIPE_SPECLEVEL_TOWHITE) {
                self.warn(format!("Wipes: can't disable wipe of type '{word}'"));
                continue;
            }
            self.context.tables.wipes[slot] = wipe;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_middle_to_black_wipes_can_be_disabled() {
        let level = flags::position(flags::WIPE_LIST, "LEVEL_TOBLACK").unwrap();
        let intermission = flags::position(flags::WIPE_LIST, "INTERMISSION_TOBLACK").unwrap();
        let final_wipe = flags::position(flags::WIPE_LIST, "LEVEL_FINAL").unwrap();
        assert!(level <= WIPE_LEVEL_TOBLACK);
        assert!(intermission > WIPE_LEVEL_TOBLACK && intermission < WIPE_SPECLEVEL_TOWHITE);
        assert!(final_wipe >= WIPE_SPECLEVEL_TOWHITE);
    }
}
