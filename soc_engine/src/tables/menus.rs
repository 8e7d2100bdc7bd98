use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TitlePicsMode {
    Old,
    Alacroix,
    User,
}

impl TitlePicsMode {
    /// `USER`, `ALACROIX`, or anything else for the classic layout. The
    /// hiding names are handled by the caller since they also clear the
    /// picture name.
    pub fn parse(word: &str) -> Self {
        match word {
            "USER" => TitlePicsMode::User,
            "ALACROIX" => TitlePicsMode::Alacroix,
            _ => TitlePicsMode::Old,
        }
    }

    pub fn hides(word: &str) -> bool {
        matches!(word, "HIDE" | "HIDDEN" | "NONE")
    }
}

/// Presentation of one menu screen. `None` and negative values inherit
/// from the parent menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuPres {
    pub bgname: String,
    pub bghide: bool,
    pub bgcolor: i32,
    pub hidetitlepics: Option<bool>,
    pub ttmode: Option<TitlePicsMode>,
    pub ttscale: Option<u8>,
    pub ttname: String,
    pub ttx: i16,
    pub tty: i16,
    pub ttloop: i16,
    pub tttics: u16,
    pub titlescrollxspeed: i32,
    pub titlescrollyspeed: i32,
    pub musname: String,
    pub mustrack: u16,
    pub muslooping: bool,
    pub musstop: bool,
    pub musignore: bool,
    pub fadestrength: i32,
    pub enterbubble: bool,
    pub exitbubble: bool,
    pub entertag: i32,
    pub exittag: i32,
    pub enterwipe: i32,
    pub exitwipe: i32,
}

impl Default for MenuPres {
    fn default() -> Self {
        Self {
            bgname: String::new(),
            bghide: false,
            bgcolor: -1,
            hidetitlepics: None,
            ttmode: None,
            ttscale: None,
            ttname: String::new(),
            ttx: 0,
            tty: 0,
            ttloop: -1,
            tttics: 1,
            titlescrollxspeed: i32::MAX,
            titlescrollyspeed: i32::MAX,
            musname: String::new(),
            mustrack: 0,
            muslooping: true,
            musstop: false,
            musignore: false,
            fadestrength: -1,
            enterbubble: true,
            exitbubble: true,
            entertag: -1,
            exittag: -1,
            enterwipe: -1,
            exitwipe: -1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HudItem {
    pub x: i32,
    pub y: i32,
    pub f: i32,
}
