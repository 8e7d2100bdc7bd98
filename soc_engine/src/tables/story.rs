//! Cutscenes and text prompts.

use serde::Serialize;

use crate::catalog::{MAX_PAGES, MAX_PROMPT_PICS, MAX_SCENES, MAX_SCENE_PICS};

/// Longest scene or page text, terminator included.
pub const STORY_TEXT_LEN: usize = 4096;
/// Music switch flags keep only the track number bits.
pub const MUSIC_TRACKMASK: u16 = 0x0FFF;
pub const SPEAKER_NAME_LEN: usize = 32;
pub const PROMPT_TAG_LEN: usize = 33;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Picture {
    pub name: String,
    pub hires: bool,
    pub duration: u16,
    pub xcoord: u16,
    pub ycoord: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub text: Option<String>,
    pub numpics: u8,
    pub pics: Vec<Picture>,
    pub musswitch: String,
    pub musswitchflags: u16,
    pub musswitchposition: u32,
    pub musicloop: bool,
    pub textxpos: u16,
    pub textypos: u16,
    pub fadeinid: u8,
    pub fadeoutid: u8,
    pub fadecolor: u8,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            text: None,
            numpics: 0,
            pics: vec![Picture::default(); MAX_SCENE_PICS],
            musswitch: String::new(),
            musswitchflags: 0,
            musswitchposition: 0,
            musicloop: false,
            textxpos: 0,
            textypos: 0,
            fadeinid: 0,
            fadeoutid: 0,
            fadecolor: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cutscene {
    pub numscenes: i32,
    pub scenes: Vec<Scene>,
}

impl Default for Cutscene {
    fn default() -> Self {
        Self {
            numscenes: 0,
            scenes: vec![Scene::default(); MAX_SCENES],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PicMode {
    #[default]
    Persist,
    Loop,
    Destroy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPage {
    pub text: Option<String>,
    pub name: String,
    pub iconname: String,
    pub rightside: bool,
    pub iconflip: bool,
    pub lines: u16,
    pub backcolor: i32,
    pub align: u8,
    pub verticalalign: u8,
    pub textspeed: i32,
    pub textsfx: i32,
    pub hidehud: u8,
    pub numpics: u8,
    pub picmode: PicMode,
    pub pictoloop: u8,
    pub pictostart: u8,
    pub pics: Vec<Picture>,
    pub musswitch: String,
    pub musswitchflags: u16,
    pub musicloop: bool,
    pub tag: String,
    pub nextprompt: u16,
    pub nextpage: u16,
    pub nexttag: String,
    pub timetonext: i32,
}

impl Default for PromptPage {
    fn default() -> Self {
        Self {
            text: None,
            name: String::new(),
            iconname: String::new(),
            rightside: false,
            iconflip: false,
            lines: 0,
            backcolor: 0,
            align: 0,
            verticalalign: 0,
            textspeed: 0,
            textsfx: 0,
            hidehud: 0,
            numpics: 0,
            picmode: PicMode::Persist,
            pictoloop: 0,
            pictostart: 0,
            pics: vec![Picture::default(); MAX_PROMPT_PICS],
            musswitch: String::new(),
            musswitchflags: 0,
            musicloop: false,
            tag: String::new(),
            nextprompt: 0,
            nextpage: 0,
            nexttag: String::new(),
            timetonext: 0,
        }
    }
}

impl PromptPage {
    /// `METAPAGE`: speaker and box presentation. Music is left alone so
    /// paging through does not restart it.
    pub fn copy_presentation_from(&mut self, other: &PromptPage) {
        self.name = other.name.clone();
        self.iconname = other.iconname.clone();
        self.rightside = other.rightside;
        self.iconflip = other.iconflip;
        self.lines = other.lines;
        self.backcolor = other.backcolor;
        self.align = other.align;
        self.verticalalign = other.verticalalign;
        self.textspeed = other.textspeed;
        self.textsfx = other.textsfx;
        self.hidehud = other.hidehud;
    }

    /// `PICSMETAPAGE`: the picture sequence and every picture slot.
    pub fn copy_pictures_from(&mut self, other: &PromptPage) {
        self.numpics = other.numpics;
        self.picmode = other.picmode;
        self.pictoloop = other.pictoloop;
        self.pictostart = other.pictostart;
        self.pics = other.pics.clone();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPrompt {
    pub numpages: usize,
    pub pages: Vec<PromptPage>,
}

impl Default for TextPrompt {
    fn default() -> Self {
        Self {
            numpages: 0,
            pages: vec![PromptPage::default(); MAX_PAGES],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled_page() -> PromptPage {
        let mut page = PromptPage {
            name: "\u{82}Tails".into(),
            iconname: "TAILICON".into(),
            lines: 4,
            backcolor: 12,
            hidehud: 2,
            numpics: 2,
            picmode: PicMode::Loop,
            musswitch: "MAP01M".into(),
            ..PromptPage::default()
        };
        page.pics[0].name = "PIC1".into();
        page
    }

    #[test]
    fn presentation_copy_leaves_music_and_pictures() {
        let source = styled_page();
        let mut page = PromptPage::default();
        page.copy_presentation_from(&source);
        assert_eq!(page.name, source.name);
        assert_eq!(page.backcolor, 12);
        assert_eq!(page.hidehud, 2);
        assert_eq!(page.musswitch, "");
        assert_eq!(page.numpics, 0);
        assert_eq!(page.pics[0].name, "");
    }

    #[test]
    fn picture_copy_leaves_presentation() {
        let source = styled_page();
        let mut page = PromptPage::default();
        page.copy_pictures_from(&source);
        assert_eq!(page.numpics, 2);
        assert_eq!(page.picmode, PicMode::Loop);
        assert_eq!(page.pics[0].name, "PIC1");
        assert_eq!(page.name, "");
        assert_eq!(page.lines, 0);
    }
}
