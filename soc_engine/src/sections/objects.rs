//! `THING`, `FRAME` and `SOUND` blocks.

use soc_formats::tokens::{atoi, split_whitespace};

use crate::loader::Load;
use crate::symbols::Action;
use crate::tables::MobjInfo;

/// Action names are compared on at most this many characters.
const ACTION_NAME_LEN: usize = 31;

impl Load<'_> {
    pub(crate) fn read_thing(&mut self, num: usize) {
        while let Some(line) = self.next_field() {
            let Some((word, value)) = self.word_field(&line) else {
                continue;
            };
            let info = &mut self.context.tables.mobjinfo[num];
            if mobj_field(info, &word).is_none() {
                self.warn(format!("Thing {num}: unknown word '{word}'"));
                continue;
            }
            let number = match word.as_str() {
                "MAPTHINGNUM" | "DOOMEDNUM" => atoi(&value),
                _ => self.number(&value),
            };
            if let Some(field) = mobj_field(&mut self.context.tables.mobjinfo[num], &word) {
                *field = number;
            }
        }
    }

    pub(crate) fn read_frame(&mut self, num: usize) {
        while let Some(line) = self.next_field() {
            let Some((word, value)) = self.word_field(&line) else {
                continue;
            };
            let value = value.as_str();
            match word.as_str() {
                "SPRITENUMBER" | "SPRITENAME" => {
                    let sprite = self.resolve(|r| r.sprite(value));
                    self.context.tables.states[num].sprite = sprite;
                }
                "SPRITESUBNUMBER" | "SPRITEFRAME" => {
                    self.context.tables.states[num].frame = self.number(value);
                }
                "DURATION" => self.context.tables.states[num].tics = self.number(value),
                "NEXT" => {
                    let next = self.resolve(|r| r.state(value));
                    self.context.tables.states[num].nextstate = next;
                }
                "VAR1" => self.context.tables.states[num].var1 = self.number(value),
                "VAR2" => self.context.tables.states[num].var2 = self.number(value),
                "ACTION" => self.set_action(num, value),
                _ => self.warn(format!("Frame {num}: unknown word '{word}'")),
            }
        }
    }

    /// Scripted actions win over native ones of the same name.
    fn set_action(&mut self, num: usize, word: &str) {
        let name: String = word.chars().take(ACTION_NAME_LEN).collect();
        let Some(action) = self.context.symbols.actions.resolve(&name) else {
            self.warn(format!("Unknown action {name}"));
            return;
        };
        let state = &mut self.context.tables.states[num];
        if state.action == action {
            log::debug!("Frame {num}: action {name} already set");
        }
        state.action = action;
        if let Action::Scripted(handle) = action {
            log::debug!("Frame {num}: scripted action {name} ({})", handle.0);
        }
    }

    pub(crate) fn read_sound(&mut self, num: usize) {
        while let Some(line) = self.next_field() {
            let (Some(key), value) = split_whitespace(&line.body) else {
                continue;
            };
            let word = key.to_ascii_uppercase();
            let Some(value) = value else {
                self.warn(format!("No value for token {word}"));
                continue;
            };
            let number = atoi(value);
            let caption = match word.as_str() {
                "CAPTION" | "DESCRIPTION" => Some(self.bounded(
                    caption_text(&line.body, key),
                    CAPTION_LEN,
                    format!("Sound effect {num}: caption"),
                )),
                "SINGULAR" | "PRIORITY" | "FLAGS" => None,
                _ => {
                    self.warn(format!("Sound {num} : unknown word '{word}'"));
                    continue;
                }
            };
            let Some(sound) = self.context.symbols.sounds.get_mut(num) else {
                continue;
            };
            match word.as_str() {
                "SINGULAR" => sound.singularity = number != 0,
                "PRIORITY" => sound.priority = number,
                "FLAGS" => sound.pitch = number,
                _ => sound.caption = caption.unwrap_or_default(),
            }
        }
    }
}

fn mobj_field<'m>(info: &'m mut MobjInfo, word: &str) -> Option<&'m mut i32> {
    let field = match word {
        "MAPTHINGNUM" | "DOOMEDNUM" => &mut info.doomednum,
        "SPAWNSTATE" => &mut info.spawnstate,
        "SPAWNHEALTH" => &mut info.spawnhealth,
        "SEESTATE" => &mut info.seestate,
        "SEESOUND" => &mut info.seesound,
        "REACTIONTIME" => &mut info.reactiontime,
        "ATTACKSOUND" => &mut info.attacksound,
        "PAINSTATE" => &mut info.painstate,
        "PAINCHANCE" => &mut info.painchance,
        "PAINSOUND" => &mut info.painsound,
        "MELEESTATE" => &mut info.meleestate,
        "MISSILESTATE" => &mut info.missilestate,
        "DEATHSTATE" => &mut info.deathstate,
        "DEATHSOUND" => &mut info.deathsound,
        "XDEATHSTATE" => &mut info.xdeathstate,
        "SPEED" => &mut info.speed,
        "RADIUS" => &mut info.radius,
        "HEIGHT" => &mut info.height,
        "DISPOFFSET" => &mut info.dispoffset,
        "MASS" => &mut info.mass,
        "DAMAGE" => &mut info.damage,
        "ACTIVESOUND" => &mut info.activesound,
        "FLAGS" => &mut info.flags,
        "RAISESTATE" => &mut info.raisestate,
        _ => return None,
    };
    Some(field)
}

/// Caption buffer size, terminator included.
const CAPTION_LEN: usize = 30;

/// Everything after the key and its separator, case kept.
fn caption_text<'a>(body: &'a str, key: &str) -> &'a str {
    let start = body.find(key).map_or(0, |idx| idx + key.len());
    body[start..].trim_start_matches([' ', '=']).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_keep_spaces_and_case() {
        assert_eq!(caption_text("CAPTION = Big Boom", "CAPTION"), "Big Boom");
        assert_eq!(caption_text("  Caption Spring", "Caption"), "Spring");
    }
}
