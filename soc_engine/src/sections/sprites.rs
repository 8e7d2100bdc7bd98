//! `SPRITEINFO`, `SPRITE2INFO` and `SPRITE2` blocks.

use soc_formats::tokens::atoi;

use crate::catalog;
use crate::loader::Load;
use crate::resolve::char_to_frame;
use crate::tables::objects::{SpriteInfo, SPRITE_FRAMES};

/// `KEY = VALUE`, or `KEY VALUE` when there is no `=`. Only the key is
/// uppercased.
fn loose_pair(body: &str) -> Option<(String, &str)> {
    let body = body.trim_start_matches([' ', '\t']);
    let (key, value) = match body.find('=') {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => body.split_once(' ')?,
    };
    Some((key.trim().to_ascii_uppercase(), value.trim()))
}

impl Load<'_> {
    fn sprite_label(&self, num: usize, sprite2: bool) -> String {
        let symbols = &self.context.symbols;
        let name = if sprite2 {
            symbols.sprite2.name(num)
        } else {
            symbols.sprites.name(num)
        };
        let kind = if sprite2 { "Sprite2" } else { "Sprite" };
        format!("{kind} {}", name.unwrap_or("?"))
    }

    /// Pivot info for sprite `num`, or for player sprite `num` of the
    /// listed skins. Each `FRAME` stores everything read so far.
    pub(crate) fn read_spriteinfo(&mut self, num: usize, sprite2: bool) {
        let label = self.sprite_label(num, sprite2);
        let mut info = SpriteInfo::fresh();
        let mut skins: Vec<String> = Vec::new();

        while let Some(line) = self.next_field() {
            let Some((word, value)) = loose_pair(&line.body) else {
                break;
            };
            match word.as_str() {
                "SKIN" | "DEFAULT" if !sprite2 => {
                    self.warn(format!(
                        "{label}: {word} keyword found outside of SPRITE2INFO block, ignoring"
                    ));
                }
                "SKIN" => {
                    let skin = value.to_ascii_lowercase();
                    if self.context.symbols.skin(&skin).is_none() {
                        self.warn(format!("{label}: unknown skin {skin}"));
                        break;
                    }
                    skins.push(skin);
                }
                "DEFAULT" => {
                    let first = catalog::spr2_firstfreeslot();
                    let free = self.context.symbols.sprite2.free_cursor();
                    if (first..free).contains(&num) {
                        let fallback = self.number(value);
                        self.context
                            .symbols
                            .sprite2
                            .set_default(num, usize::try_from(fallback).unwrap_or(0));
                    } else {
                        self.warn(format!(
                            "{label}: out of range ({first} - {}), ignoring",
                            free as i64 - 1
                        ));
                    }
                }
                "FRAME" => {
                    let frame = value.chars().next().map_or(255, char_to_frame) as usize;
                    if frame >= SPRITE_FRAMES {
                        self.warn(format!("{label}: invalid frame {value}"));
                        break;
                    }
                    self.read_sprite_frame(&mut info, frame);
                    if !sprite2 {
                        self.context.tables.spriteinfo[num] = info.clone();
                        continue;
                    }
                    if skins.is_empty() {
                        self.warn(format!("{label}: no skins specified"));
                        break;
                    }
                    for skin in &skins {
                        self.context
                            .tables
                            .skin_spriteinfo
                            .entry(skin.clone())
                            .or_default()
                            .insert(num, info.clone());
                    }
                }
                _ => {
                    self.source.rewind_line();
                    break;
                }
            }
        }
    }

    fn read_sprite_frame(&mut self, info: &mut SpriteInfo, frame: usize) {
        while let Some(line) = self.next_field() {
            let Some((word, value)) = loose_pair(&line.body) else {
                break;
            };
            let pivot = &mut info.pivots[frame];
            match word.as_str() {
                "XPIVOT" => pivot.x = atoi(value),
                "YPIVOT" => pivot.y = atoi(value),
                "ROTAXIS" => pivot.rotaxis = atoi(value),
                _ => {
                    self.source.rewind_line();
                    break;
                }
            }
        }
    }

    pub(crate) fn read_sprite2(&mut self, num: usize) {
        while let Some(line) = self.next_field() {
            let Some((word, value)) = self.word_field(&line) else {
                continue;
            };
            if word == "DEFAULT" {
                let fallback = self.number(&value);
                self.context
                    .symbols
                    .sprite2
                    .set_default(num, usize::try_from(fallback).unwrap_or(0));
            } else {
                let label = self.sprite_label(num, true);
                self.warn(format!("{label}: unknown word '{word}'"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_pairs_accept_both_separators() {
        assert_eq!(loose_pair("  XPivot = 12"), Some(("XPIVOT".into(), "12")));
        assert_eq!(loose_pair("FRAME a"), Some(("FRAME".into(), "a")));
        assert_eq!(loose_pair("LONELY"), None);
    }
}
