//! Global one-shot settings and character select descriptions.

use serde::Serialize;

use crate::catalog;

use super::menus::TitlePicsMode;

pub const DEFAULT_GAMEDATA: &str = "gamedata.dat";
pub const DEFAULT_TIMEATTACK_FOLDER: &str = "main";
pub const TITLE_PICS_NAME_LEN: usize = 9;
pub const CUSTOM_VERSION_LEN: usize = 32;
pub const TITLE_SCALES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainConfig {
    pub spstage_start: i16,
    pub sstage_start: i16,
    pub sstage_end: i16,
    pub smpstage_start: i16,
    pub smpstage_end: i16,
    pub skincolor_redteam: u16,
    pub skincolor_blueteam: u16,
    pub skincolor_redring: u16,
    pub skincolor_bluering: u16,
    pub invulntics: u16,
    pub sneakertics: u16,
    pub flashingtics: u16,
    pub tailsflytics: u16,
    pub underwatertics: u16,
    pub spacetimetics: u16,
    pub extralifetics: u16,
    pub nightslinktics: u16,
    pub gameovertics: i32,
    pub ammoremovaltics: i32,
    pub introtoplay: u8,
    pub creditscutscene: u8,
    pub looptitle: bool,
    pub titlemap: i16,
    pub hidetitlepics: bool,
    pub ttmode: TitlePicsMode,
    pub ttscale: u8,
    pub ttavailable: [bool; TITLE_SCALES],
    pub ttname: String,
    pub ttx: i16,
    pub tty: i16,
    pub ttloop: i16,
    pub tttics: u16,
    pub titlescrollxspeed: i32,
    pub titlescrollyspeed: i32,
    pub disable_speed_adjust: bool,
    pub num_demos: u8,
    pub demo_delay_time: i32,
    pub demo_idle_time: i32,
    pub use_1up_sound: bool,
    pub max_xtra_life: u8,
    pub use_continues: bool,
    pub gamedata_file: String,
    pub timeattack_folder: String,
    pub custom_version: String,
    pub bootmap: i16,
    pub tutorialmap: i16,
    pub startchar: i16,
}

impl Default for MainConfig {
    fn default() -> Self {
        let color = |name| catalog::skincolor(name) as u16;
        Self {
            spstage_start: 1,
            sstage_start: 50,
            sstage_end: 57,
            smpstage_start: 60,
            smpstage_end: 66,
            skincolor_redteam: color("RED"),
            skincolor_blueteam: color("BLUE"),
            skincolor_redring: color("SALMON"),
            skincolor_bluering: color("CORNFLOWER"),
            invulntics: 700,
            sneakertics: 700,
            flashingtics: 105,
            tailsflytics: 280,
            underwatertics: 1050,
            spacetimetics: 402,
            extralifetics: 140,
            nightslinktics: 70,
            gameovertics: 385,
            ammoremovaltics: 70,
            introtoplay: 0,
            creditscutscene: 0,
            looptitle: true,
            titlemap: 0,
            hidetitlepics: false,
            ttmode: TitlePicsMode::Old,
            ttscale: 1,
            ttavailable: [false; TITLE_SCALES],
            ttname: String::new(),
            ttx: 0,
            tty: 0,
            ttloop: -1,
            tttics: 1,
            titlescrollxspeed: 20,
            titlescrollyspeed: 0,
            disable_speed_adjust: false,
            num_demos: 0,
            demo_delay_time: 525,
            demo_idle_time: 105,
            use_1up_sound: false,
            max_xtra_life: 2,
            use_continues: false,
            gamedata_file: DEFAULT_GAMEDATA.to_string(),
            timeattack_folder: DEFAULT_TIMEATTACK_FOLDER.to_string(),
            custom_version: String::new(),
            bootmap: 0,
            tutorialmap: 0,
            startchar: 0,
        }
    }
}

pub const PLAYER_NOTES_LEN: usize = 441;
pub const CHARACTER_PIC_LEN: usize = 8;
pub const CHARACTER_NAME_LEN: usize = 16;
/// `PLAYERTEXT` keeps at most this many lines.
pub const PLAYER_TEXT_LINES: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterDescription {
    pub used: bool,
    pub notes: String,
    pub picname: String,
    pub displayname: String,
    pub skinname: String,
    pub nametag: String,
    pub oppositecolor: u16,
    pub tagtextcolor: u16,
    pub tagoutlinecolor: u16,
}

impl CharacterDescription {
    /// Marks the slot used and blanks its select screen presentation.
    /// Notes and skin name survive.
    pub fn claim(&mut self) {
        self.used = true;
        self.picname.clear();
        self.nametag.clear();
        self.displayname.clear();
        self.oppositecolor = 0;
        self.tagtextcolor = 0;
        self.tagoutlinecolor = 0;
    }
}
