//! `CUTSCENE` and `PROMPT` blocks along with their nested scenes and pages.

use soc_formats::tokens::{atoi, split_whitespace, text_after_equals};

use crate::catalog::{MAX_PAGES, MAX_PROMPT_PICS, MAX_SCENES, MAX_SCENE_PICS};
use crate::loader::{FieldLine, Load};
use crate::tables::story::*;

use super::level::music_slot_name;

/// Patch names are eight characters.
const PIC_NAME_LEN: usize = 8;

/// `T...`/`Y...` or any nonzero number.
fn yes(value: &str, number: i32) -> bool {
    number != 0 || value.starts_with(['T', 'Y'])
}

/// Applies `PIC<n><FIELD>` to a picture list. `false` when the key names
/// no picture field.
fn picture_field(pics: &mut [Picture], word: &str, value: &str, number: i32) -> bool {
    let Some(rest) = word.strip_prefix("PIC") else {
        return false;
    };
    let Some(digit) = rest.chars().next().and_then(|c| c.to_digit(10)) else {
        return false;
    };
    if digit == 0 || digit as usize > pics.len() {
        return false;
    }
    let pic = &mut pics[digit as usize - 1];
    match &rest[1..] {
        "NAME" => pic.name = value.chars().take(PIC_NAME_LEN).collect(),
        "HIRES" => pic.hires = yes(value, number),
        "DURATION" => pic.duration = number as u16,
        "XCOORD" => pic.xcoord = number as u16,
        "YCOORD" => pic.ycoord = number as u16,
        _ => return false,
    }
    true
}

fn backcolor(value: &str, i: i32) -> i32 {
    const NAMED: &[&[&str]] = &[
        &["WHITE"],
        &["GRAY", "GREY", "BLACK"],
        &["SEPIA"],
        &["BROWN"],
        &["PINK"],
        &["RASPBERRY"],
        &["RED"],
        &["CREAMSICLE"],
        &["ORANGE"],
        &["GOLD"],
        &["YELLOW"],
        &["EMERALD"],
        &["GREEN"],
        &["CYAN", "AQUA"],
        &["STEEL"],
        &["PERIWINKLE"],
        &["BLUE"],
        &["PURPLE"],
        &["LAVENDER"],
    ];
    if let Some(index) = NAMED
        .iter()
        .enumerate()
        .position(|(index, names)| i == index as i32 || names.contains(&value))
    {
        return index as i32;
    }
    match i {
        256..=511 => i,
        // Follows the console's configured color.
        i if i < 0 => i32::MAX,
        _ => 1,
    }
}

fn hide_hud(value: &str, usi: u16) -> u8 {
    let bytes = value.as_bytes();
    let second = bytes.get(1).copied();
    match bytes.first() {
        Some(b'F') if matches!(second, Some(b'A') | None) => 0,
        Some(b'N') => 0,
        _ if usi == 1 || value.starts_with(['T', 'Y']) => 1,
        _ if usi == 2 || value.starts_with('A') || value.starts_with("FO") => 2,
        _ => 0,
    }
}

fn align(value: &str, usi: u16, second: char) -> u8 {
    if usi == 1 || value.starts_with(second) {
        1
    } else if usi == 2 || value.starts_with(['C', 'M']) {
        2
    } else {
        0
    }
}

/// Speaker names are drawn yellow and use `_` for spaces.
fn speaker_name(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    std::iter::once('\u{82}')
        .chain(value.chars().take(SPEAKER_NAME_LEN))
        .take(SPEAKER_NAME_LEN)
        .map(|c| if c == '_' { ' ' } else { c })
        .collect()
}

impl Load<'_> {
    /// Free text after `KEY = ` up to the next `#`, line breaks kept.
    /// `None` when the line has no `=`.
    fn story_text(&mut self, line: &FieldLine) -> Option<String> {
        let first = text_after_equals(&line.raw)?;
        let mut text = first.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        let cap = STORY_TEXT_LEN.saturating_sub(text.len() + 1);
        text.push_str(&self.source.read_hash_capped(cap).unwrap_or_default());
        Some(text)
    }

    /// Outer `KEY VALUE` line of a cutscene or prompt block.
    fn story_field(&mut self) -> Option<Option<(String, String)>> {
        let line = self.next_field()?;
        Some(self.word_field(&line))
    }

    pub(crate) fn read_cutscene(&mut self, num: usize) {
        self.context.tables.cutscenes.entry(num).or_default();

        while let Some(field) = self.story_field() {
            let Some((word, value)) = field else {
                continue;
            };
            let number = atoi(&value);
            match word.as_str() {
                "NUMSCENES" => {
                    if let Some(cutscene) = self.context.tables.cutscenes.get_mut(&num) {
                        cutscene.numscenes = number;
                    }
                }
                "SCENE" => {
                    if (1..=MAX_SCENES as i32).contains(&number) {
                        self.read_scene(num, number as usize - 1);
                    } else {
                        self.warn(format!("Scene number {number} out of range (1 - {MAX_SCENES})"));
                    }
                }
                _ => self.warn(format!(
                    "Cutscene {num}: unknown word '{word}', Scene <num> expected."
                )),
            }
        }
    }

    fn scene(&mut self, num: usize, scene: usize) -> &mut Scene {
        &mut self.context.tables.cutscenes.entry(num).or_default().scenes[scene]
    }

    fn read_scene(&mut self, num: usize, scene: usize) {
        while let Some(line) = self.next_field() {
            let (Some(key), value) = split_whitespace(&line.body) else {
                break;
            };
            let word = key.to_ascii_uppercase();

            if word == "SCENETEXT" {
                let text = self.story_text(&line);
                self.scene(num, scene).text = text;
                continue;
            }

            let Some(value) = value else {
                self.warn(format!("No value for token {word}"));
                continue;
            };
            let value = value.to_ascii_uppercase();
            let i = atoi(&value);
            let usi = i as u16;

            if picture_field(&mut self.scene(num, scene).pics, &word, &value, i) {
                continue;
            }
            match word.as_str() {
                "NUMBEROFPICS" => self.scene(num, scene).numpics = i as u8,
                "MUSIC" => self.scene(num, scene).musswitch = value.chars().take(6).collect(),
                "MUSICSLOT" => {
                    let slot = self.resolve(|r| r.music(&value));
                    self.scene(num, scene).musswitch = music_slot_name(slot);
                }
                "MUSICTRACK" => self.scene(num, scene).musswitchflags = usi & MUSIC_TRACKMASK,
                "MUSICPOS" => {
                    let position = self.number(&value);
                    self.scene(num, scene).musswitchposition = position as u32;
                }
                "MUSICLOOP" => self.scene(num, scene).musicloop = yes(&value, i),
                "TEXTXPOS" => self.scene(num, scene).textxpos = usi,
                "TEXTYPOS" => self.scene(num, scene).textypos = usi,
                "FADEINID" => self.scene(num, scene).fadeinid = i as u8,
                "FADEOUTID" => self.scene(num, scene).fadeoutid = i as u8,
                "FADECOLOR" => self.scene(num, scene).fadecolor = i as u8,
                _ => self.warn(format!("CutSceneScene {num}: unknown word '{word}'")),
            }
        }
    }

    pub(crate) fn read_prompt(&mut self, num: usize) {
        self.context.tables.prompts.entry(num).or_default();

        while let Some(field) = self.story_field() {
            let Some((word, value)) = field else {
                continue;
            };
            let number = atoi(&value);
            match word.as_str() {
                "NUMPAGES" => {
                    if let Some(prompt) = self.context.tables.prompts.get_mut(&num) {
                        prompt.numpages = number.clamp(0, MAX_PAGES as i32) as usize;
                    }
                }
                "PAGE" => {
                    if (1..=MAX_PAGES as i32).contains(&number) {
                        let page = number as usize - 1;
                        let fresh = self.page(num, page);
                        fresh.backcolor = 1;
                        fresh.hidehud = 1;
                        self.read_page(num, page);
                    } else {
                        self.warn(format!("Page number {number} out of range (1 - {MAX_PAGES})"));
                    }
                }
                _ => self.warn(format!(
                    "Prompt {num}: unknown word '{word}', Page <num> expected."
                )),
            }
        }
    }

    fn page(&mut self, num: usize, page: usize) -> &mut PromptPage {
        &mut self.context.tables.prompts.entry(num).or_default().pages[page]
    }

    /// Earlier page `usi` of the same prompt, if it names one.
    fn meta_page(&self, num: usize, usi: u16) -> Option<PromptPage> {
        let prompt = self.context.tables.prompts.get(&num)?;
        if usi == 0 || usi as usize > prompt.numpages {
            return None;
        }
        prompt.pages.get(usi as usize - 1).cloned()
    }

    fn read_page(&mut self, num: usize, page: usize) {
        while let Some(line) = self.next_field() {
            let (Some(key), value) = split_whitespace(&line.body) else {
                break;
            };
            let word = key.to_ascii_uppercase();

            if word == "PAGETEXT" {
                let text = self.story_text(&line);
                self.page(num, page).text = text;
                continue;
            }

            let Some(value) = value else {
                self.warn(format!("No value for token {word}"));
                continue;
            };
            let value = value.to_ascii_uppercase();
            let i = atoi(&value);
            let usi = i as u16;

            match word.as_str() {
                "NUMBEROFPICS" => self.page(num, page).numpics = i as u8,
                "PICMODE" => {
                    self.page(num, page).picmode = if usi == 1 || value.starts_with('L') {
                        PicMode::Loop
                    } else if usi == 2 || value.starts_with(['D', 'H']) {
                        PicMode::Destroy
                    } else {
                        PicMode::Persist
                    };
                }
                "PICTOLOOP" => self.page(num, page).pictoloop = i as u8,
                "PICTOSTART" => self.page(num, page).pictostart = i as u8,
                "PICSMETAPAGE" => {
                    if let Some(source) = self.meta_page(num, usi) {
                        self.page(num, page).copy_pictures_from(&source);
                    }
                }
                word if word.starts_with("PIC") => {
                    if !picture_field(&mut self.page(num, page).pics, word, &value, i) {
                        self.warn(format!("textpromptscene {num}: unknown word '{word}'"));
                    }
                }
                "MUSIC" => self.page(num, page).musswitch = value.chars().take(6).collect(),
                "MUSICSLOT" => {
                    let slot = self.resolve(|r| r.music(&value));
                    self.page(num, page).musswitch = music_slot_name(slot);
                }
                "MUSICTRACK" => self.page(num, page).musswitchflags = usi & MUSIC_TRACKMASK,
                "MUSICLOOP" => self.page(num, page).musicloop = yes(&value, i),
                "NAME" => self.page(num, page).name = speaker_name(&value),
                "ICON" => self.page(num, page).iconname = value.chars().take(PIC_NAME_LEN).collect(),
                "ICONALIGN" => self.page(num, page).rightside = i != 0 || value.starts_with('R'),
                "ICONFLIP" => self.page(num, page).iconflip = yes(&value, i),
                "LINES" => self.page(num, page).lines = usi,
                "BACKCOLOR" => self.page(num, page).backcolor = backcolor(&value, i),
                "ALIGN" => self.page(num, page).align = align(&value, usi, 'R'),
                "VERTICALALIGN" => self.page(num, page).verticalalign = align(&value, usi, 'B'),
                "TEXTSPEED" => {
                    let speed = self.number(&value);
                    self.page(num, page).textspeed = speed;
                }
                "TEXTSFX" => {
                    let sfx = self.number(&value);
                    self.page(num, page).textsfx = sfx;
                }
                "HIDEHUD" => self.page(num, page).hidehud = hide_hud(&value, usi),
                "METAPAGE" => {
                    if let Some(source) = self.meta_page(num, usi) {
                        self.page(num, page).copy_presentation_from(&source);
                    }
                }
                "TAG" => self.page(num, page).tag = value.chars().take(PROMPT_TAG_LEN).collect(),
                "NEXTPROMPT" => self.page(num, page).nextprompt = usi,
                "NEXTPAGE" => self.page(num, page).nextpage = usi,
                "NEXTTAG" => {
                    self.page(num, page).nexttag = value.chars().take(PROMPT_TAG_LEN).collect();
                }
                "TIMETONEXT" => {
                    let tics = self.number(&value);
                    self.page(num, page).timetonext = tics;
                }
                _ => self.warn(format!("PromptPage {num}: unknown word '{word}'")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_keys_address_one_based_slots() {
        let mut pics = vec![Picture::default(); MAX_SCENE_PICS];
        assert!(picture_field(&mut pics, "PIC2NAME", "CUTSCN02", 0));
        assert!(picture_field(&mut pics, "PIC1HIRES", "TRUE", 0));
        assert!(picture_field(&mut pics, "PIC1DURATION", "35", 35));
        assert_eq!(pics[1].name, "CUTSCN02");
        assert!(pics[0].hires);
        assert_eq!(pics[0].duration, 35);

        assert!(!picture_field(&mut pics, "PIC0NAME", "X", 0));
        assert!(!picture_field(&mut pics, "PIC9NAME", "X", 0));
        assert!(!picture_field(&mut pics, "PIC1SIZE", "X", 0));
        assert_eq!(pics.len(), MAX_PROMPT_PICS);
    }

    #[test]
    fn back_colors_accept_names_and_palette_indices() {
        assert_eq!(backcolor("WHITE", 0), 0);
        assert_eq!(backcolor("12", 12), 12);
        assert_eq!(backcolor("300", 300), 300);
        assert_eq!(backcolor("-1", -1), i32::MAX);
        assert_eq!(backcolor("MAUVE", 99), 1);
    }

    #[test]
    fn hud_hiding_reads_words_and_numbers() {
        assert_eq!(hide_hud("FALSE", 0), 0);
        assert_eq!(hide_hud("F", 0), 0);
        assert_eq!(hide_hud("YES", 0), 1);
        assert_eq!(hide_hud("FORCE", 0), 2);
        assert_eq!(hide_hud("ALL", 0), 2);
        assert_eq!(hide_hud("2", 2), 2);
    }

    #[test]
    fn speaker_names_are_tinted_and_spaced() {
        assert_eq!(speaker_name("DR_EGGMAN"), "\u{82}DR EGGMAN");
        assert_eq!(speaker_name(""), "");
    }
}
