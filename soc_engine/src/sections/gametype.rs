//! `GAMETYPE` blocks.

use soc_formats::tokens::{split_whitespace, text_after_equals, FieldValue};

use crate::catalog::flags::GAMETYPERULE_LIST;
use crate::loader::Load;
use crate::symbols::Gametype;
use crate::tables::maincfg::{PLAYER_NOTES_LEN, PLAYER_TEXT_LINES};

use super::cut_text_lines;

impl Load<'_> {
    /// Reads the block into a new game type and registers it once the
    /// block ends.
    pub(crate) fn read_gametype(&mut self, name: String) {
        let mut gametype = Gametype {
            name,
            rankings_type: -1,
            ..Gametype::default()
        };
        let owner = format!("readgametype {}", gametype.name);

        while let Some(line) = self.next_field() {
            let (Some(key), value) = split_whitespace(&line.body) else {
                break;
            };
            let word = key.to_ascii_uppercase();

            if word == "DESCRIPTION" {
                gametype.description = match text_after_equals(&line.raw) {
                    Some(first) => {
                        let rest = self.source.read_hash_capped(PLAYER_NOTES_LEN).unwrap_or_default();
                        let text: String =
                            format!("{first}{rest}").chars().take(PLAYER_NOTES_LEN - 1).collect();
                        cut_text_lines(&text, PLAYER_TEXT_LINES)
                    }
                    None => String::new(),
                };
                continue;
            }

            let Some(raw_value) = value else {
                self.warn(format!("No value for token {word}"));
                continue;
            };
            let value = raw_value.to_ascii_uppercase();
            let field = FieldValue::new(&value);

            match word.as_str() {
                "RULES" => gametype.rules = self.number(&value) as u32,
                "IDENTIFIER" => gametype.constant = value.clone(),
                "DEFAULTPOINTLIMIT" => gametype.point_limit = field.as_int(),
                "DEFAULTTIMELIMIT" => gametype.time_limit = field.as_int(),
                "HEADERCOLOR" | "HEADERCOLOUR" => {
                    let color = self.number(&value) as u8;
                    gametype.header_left_color = color;
                    gametype.header_right_color = color;
                }
                "HEADERLEFTCOLOR" | "HEADERLEFTCOLOUR" => {
                    gametype.header_left_color = self.number(&value) as u8;
                }
                "HEADERRIGHTCOLOR" | "HEADERRIGHTCOLOUR" => {
                    gametype.header_right_color = self.number(&value) as u8;
                }
                "RANKINGTYPE" => gametype.rankings_type = self.number(&value) as i16,
                // Evaluated with the case it was written in.
                "INTERMISSIONTYPE" => gametype.intermission_type = self.number(raw_value),
                "TYPEOFLEVEL" => gametype.type_of_level = self.level_types(&value, &owner),
                _ => match GAMETYPERULE_LIST.iter().position(|rule| *rule == word) {
                    Some(bit) => {
                        if field.is_truthy() {
                            gametype.rules |= 1 << bit;
                        }
                    }
                    None => self.warn(format!("{owner}: unknown word '{word}'")),
                },
            }
        }

        let name = gametype.name.clone();
        match self.context.symbols.gametypes.add(gametype) {
            Some(index) => log::info!("Added gametype {name} ({index})"),
            None => self.warn("Ran out of free gametype slots!"),
        }
    }
}
