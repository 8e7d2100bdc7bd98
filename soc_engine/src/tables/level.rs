//! Map headers.

use serde::Serialize;

use soc_formats::mapnum::map_name;

use crate::catalog::{self, constants::FRACUNIT, flags, names};

pub const LEVEL_TITLE_LEN: usize = 22;
pub const SUBTITLE_LEN: usize = 33;
pub const SCRIPT_NAME_LEN: usize = 33;
pub const KEYWORDS_LEN: usize = 33;
pub const MUSIC_NAME_LEN: usize = 7;
pub const PATCH_NAME_LEN: usize = 9;
pub const SKIN_NAME_LEN: usize = 16;
pub const CUSTOM_OPTION_NAME_LEN: usize = 32;
pub const CUSTOM_OPTION_VALUE_LEN: usize = 256;
pub const MAX_MARES: usize = 8;

/// `NEXTLEVEL` targets past the map range.
pub const NEXTLEVEL_TITLE: i32 = 1100;
pub const NEXTLEVEL_EVALUATION: i32 = 1101;
pub const NEXTLEVEL_CREDITS: i32 = 1102;
pub const NEXTLEVEL_ENDING: i32 = 1103;

/// A `LUA.<name>` entry. Names are stored lowercased and never overwrite
/// earlier entries with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomOption {
    pub option: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapHeader {
    pub lvlttl: String,
    pub subttl: String,
    pub selectheading: String,
    pub actnum: u8,
    pub typeoflevel: u32,
    pub nextlevel: i16,
    pub keywords: String,
    pub musname: String,
    pub mustrack: u16,
    pub muspos: u32,
    pub musinterfadeout: u32,
    pub musintername: String,
    pub muspostbossname: String,
    pub muspostbosstrack: u16,
    pub muspostbosspos: u32,
    pub muspostbossfadein: u32,
    pub musforcereset: i8,
    pub forcecharacter: String,
    pub weather: u8,
    pub skynum: i16,
    pub skybox_scalex: i16,
    pub skybox_scaley: i16,
    pub skybox_scalez: i16,
    pub interscreen: String,
    pub runsoc: String,
    pub scriptname: String,
    pub precutscenenum: u8,
    pub cutscenenum: u8,
    pub countdown: i16,
    pub palette: u16,
    pub numlaps: u8,
    pub unlockrequired: i8,
    pub levelselect: u8,
    pub bonustype: i8,
    pub maxbonuslives: i8,
    pub levelflags: u16,
    pub menuflags: u8,
    pub ltzzpatch: String,
    pub ltzztext: String,
    pub ltactdiamond: String,
    pub startrings: u16,
    pub sstimer: i32,
    pub ssspheres: u32,
    pub gravity: i32,
    /// Object type numbers.
    pub flickies: Vec<i32>,
    /// Grade thresholds per mare, `None` for mares without grades.
    pub grades: Vec<Option<Vec<u32>>>,
    pub custom_options: Vec<CustomOption>,
}

impl MapHeader {
    /// The header a `LEVEL` block starts from.
    pub fn new(num: i32) -> Self {
        Self {
            lvlttl: String::new(),
            subttl: String::new(),
            selectheading: String::new(),
            actnum: 0,
            typeoflevel: 0,
            nextlevel: (num + 1) as i16,
            keywords: String::new(),
            musname: default_music(num),
            mustrack: 0,
            muspos: 0,
            musinterfadeout: 0,
            musintername: String::new(),
            muspostbossname: String::new(),
            muspostbosstrack: 0,
            muspostbosspos: 0,
            muspostbossfadein: 0,
            musforcereset: -1,
            forcecharacter: String::new(),
            weather: 0,
            skynum: 1,
            skybox_scalex: 32,
            skybox_scaley: 32,
            skybox_scalez: 32,
            interscreen: String::new(),
            runsoc: "#".to_string(),
            scriptname: "#".to_string(),
            precutscenenum: 0,
            cutscenenum: 0,
            countdown: 0,
            palette: 0,
            numlaps: 4,
            unlockrequired: -1,
            levelselect: 0,
            bonustype: 0,
            maxbonuslives: -1,
            levelflags: 0,
            menuflags: 0,
            ltzzpatch: String::new(),
            ltzztext: String::new(),
            ltactdiamond: String::new(),
            startrings: 0,
            sstimer: 90,
            ssspheres: 1,
            gravity: (FRACUNIT / 2) as i32,
            flickies: demo_flickies(),
            grades: vec![None; MAX_MARES],
            custom_options: Vec::new(),
        }
    }
}

/// `MAPxxM`, the music lump a map plays unless told otherwise.
pub fn default_music(num: i32) -> String {
    let mut name = format!("{}M", map_name(num));
    name.truncate(MUSIC_NAME_LEN - 1);
    name
}

/// Object type numbers for `FLICKYLIST = DEMO`.
pub fn demo_flickies() -> Vec<i32> {
    flags::DEMO_FLICKIES
        .iter()
        .filter_map(|name| catalog::position(names::MOBJTYPE_LIST, name))
        .map(|index| index as i32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_headers_point_at_the_next_map_and_its_music() {
        let header = MapHeader::new(1);
        assert_eq!(header.nextlevel, 2);
        assert_eq!(header.musname, "MAP01M");
        assert_eq!(MapHeader::new(110).musname, "MAPAAM");
    }

    #[test]
    fn demo_flickies_resolve_to_object_types() {
        assert_eq!(demo_flickies().len(), flags::DEMO_FLICKIES.len());
    }
}
