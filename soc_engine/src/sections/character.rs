//! `CHARACTER` blocks: character select screen entries.

use soc_formats::tokens::{atoi, split_whitespace, text_after_equals};

use crate::catalog::MAXSKINS;
use crate::loader::Load;
use crate::tables::maincfg::{
    CHARACTER_NAME_LEN, CHARACTER_PIC_LEN, PLAYER_NOTES_LEN, PLAYER_TEXT_LINES,
};

use super::cut_text_lines;

impl Load<'_> {
    /// Moves `num` to the first unused entry at or after it and claims it.
    fn find_free_description(&mut self, num: &mut usize) -> bool {
        let descriptions = &mut self.context.tables.descriptions;
        while *num < MAXSKINS && descriptions[*num].used {
            *num += 1;
        }
        match descriptions.get_mut(*num) {
            Some(description) => {
                description.claim();
                true
            }
            None => false,
        }
    }

    pub(crate) fn read_character(&mut self, mut num: usize) {
        let mut slot_found = false;

        while let Some(line) = self.next_field() {
            let (Some(key), value) = split_whitespace(&line.body) else {
                break;
            };
            let word = key.to_ascii_uppercase();

            if word == "PLAYERTEXT" {
                if !slot_found && !self.find_free_description(&mut num) {
                    return;
                }
                slot_found = true;
                let notes = match text_after_equals(&line.raw) {
                    Some(first) => {
                        let rest = self.source.read_hash_capped(PLAYER_NOTES_LEN).unwrap_or_default();
                        let mut text = format!("{first}{rest}");
                        text = text.chars().take(PLAYER_NOTES_LEN - 1).collect();
                        cut_text_lines(&text, PLAYER_TEXT_LINES)
                    }
                    None => String::new(),
                };
                self.context.tables.descriptions[num].notes = notes;
                continue;
            }

            let Some(value) = value else {
                self.warn(format!("No value for token {word}"));
                continue;
            };
            let value = value.to_ascii_uppercase();
            let known = matches!(
                word.as_str(),
                "PICNAME"
                    | "DISPLAYNAME"
                    | "OPPOSITECOLOR"
                    | "OPPOSITECOLOUR"
                    | "NAMETAG"
                    | "TAGNAME"
                    | "TAGTEXTCOLOR"
                    | "TAGTEXTCOLOUR"
                    | "TAGOUTLINECOLOR"
                    | "TAGOUTLINECOLOUR"
                    | "SKINNAME"
            );
            if !known && word != "STATUS" {
                self.warn(format!("readPlayer {num}: unknown word '{word}'"));
                continue;
            }

            if word == "STATUS" {
                let enabled = atoi(&value) != 0;
                if enabled && !slot_found {
                    if !self.find_free_description(&mut num) {
                        return;
                    }
                    slot_found = true;
                }
                self.context.tables.descriptions[num].used = enabled;
                continue;
            }

            if !slot_found {
                if !self.find_free_description(&mut num) {
                    return;
                }
                slot_found = true;
            }

            match word.as_str() {
                "PICNAME" => {
                    self.context.tables.descriptions[num].picname =
                        value.chars().take(CHARACTER_PIC_LEN).collect();
                }
                "DISPLAYNAME" => {
                    let display = display_name(&line.raw);
                    self.context.tables.descriptions[num].displayname = display;
                }
                "OPPOSITECOLOR" | "OPPOSITECOLOUR" => {
                    let color = self.number(&value) as u8;
                    self.context.tables.descriptions[num].oppositecolor = color.into();
                }
                "NAMETAG" | "TAGNAME" => {
                    self.context.tables.descriptions[num].nametag =
                        value.chars().take(CHARACTER_PIC_LEN).collect();
                }
                "TAGTEXTCOLOR" | "TAGTEXTCOLOUR" => {
                    let color = self.number(&value) as u8;
                    self.context.tables.descriptions[num].tagtextcolor = color.into();
                }
                "TAGOUTLINECOLOR" | "TAGOUTLINECOLOUR" => {
                    let color = self.number(&value) as u8;
                    self.context.tables.descriptions[num].tagoutlinecolor = color.into();
                }
                _ => {
                    self.context.tables.descriptions[num].skinname = value
                        .to_ascii_lowercase()
                        .chars()
                        .take(CHARACTER_NAME_LEN)
                        .collect();
                }
            }
        }
    }
}

/// Text after `= ` with its case kept, cut to the name length, `#`
/// turned into line breaks.
fn display_name(raw: &str) -> String {
    let text = text_after_equals(raw).unwrap_or_default();
    text.chars()
        .take(CHARACTER_NAME_LEN)
        .take_while(|c| *c != '\n')
        .map(|c| if c == '#' { '\n' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_keep_case_and_break_on_hash() {
        assert_eq!(display_name("DISPLAYNAME = Metal#Sonic\n"), "Metal\nSonic");
        assert_eq!(display_name("DISPLAYNAME = An Extremely Long Name\n"), "An Extremely Lon");
    }
}
