//! `MENU` and `HUDITEM` blocks.

use soc_formats::tokens::FieldValue;

use crate::loader::Load;
use crate::tables::{MenuPres, TitlePicsMode};

use super::level::music_slot_name;

const MENU_PATCH_LEN: usize = 8;

impl Load<'_> {
    fn menu(&mut self, num: usize) -> &mut MenuPres {
        &mut self.context.tables.menus[num]
    }

    /// Every recognised key changes what the title screen shows.
    pub(crate) fn read_menu(&mut self, num: usize) {
        let label = format!("Menu {num}");

        while let Some(line) = self.next_field() {
            let Some((word, value)) = self.equals_field(&line, &label) else {
                continue;
            };
            let value = value.to_ascii_uppercase();
            let field = FieldValue::new(&value);
            let yes = field.is_truthy();

            match word.as_str() {
                "BACKGROUNDNAME" => {
                    self.menu(num).bgname = value.chars().take(MENU_PATCH_LEN).collect();
                }
                "HIDEBACKGROUND" => self.menu(num).bghide = yes,
                "BACKGROUNDCOLOR" => {
                    let color = self.number(&value);
                    self.menu(num).bgcolor = color;
                }
                "HIDETITLEPICS" | "HIDEPICS" | "TITLEPICSHIDE" => {
                    self.menu(num).hidetitlepics = Some(yes);
                }
                "TITLEPICSMODE" => {
                    let menu = self.menu(num);
                    if TitlePicsMode::hides(&value) {
                        menu.ttmode = Some(TitlePicsMode::User);
                        menu.ttname.clear();
                        menu.hidetitlepics = Some(true);
                    } else {
                        menu.ttmode = Some(TitlePicsMode::parse(&value));
                    }
                }
                "TITLEPICSSCALE" => {
                    let scale = (self.number(&value) as u8).clamp(1, 8);
                    self.menu(num).ttscale = Some(scale);
                }
                "TITLEPICSNAME" => {
                    self.menu(num).ttname = value.chars().take(MENU_PATCH_LEN).collect();
                }
                "TITLEPICSX" => {
                    let x = self.number(&value);
                    self.menu(num).ttx = x as i16;
                }
                "TITLEPICSY" => {
                    let y = self.number(&value);
                    self.menu(num).tty = y as i16;
                }
                "TITLEPICSLOOP" => {
                    let count = self.number(&value);
                    self.menu(num).ttloop = count as i16;
                }
                "TITLEPICSTICS" => {
                    let tics = self.number(&value);
                    self.menu(num).tttics = tics as u16;
                }
                "TITLESCROLLSPEED" | "TITLESCROLLXSPEED" | "SCROLLSPEED" | "SCROLLXSPEED" => {
                    let speed = self.number(&value);
                    self.menu(num).titlescrollxspeed = speed;
                }
                "TITLESCROLLYSPEED" | "SCROLLYSPEED" => {
                    let speed = self.number(&value);
                    self.menu(num).titlescrollyspeed = speed;
                }
                "MUSIC" => self.menu(num).musname = value.chars().take(6).collect(),
                "MUSICSLOT" => {
                    let slot = self.resolve(|r| r.music(&value));
                    self.menu(num).musname = music_slot_name(slot);
                }
                "MUSICTRACK" => self.menu(num).mustrack = (field.as_int() as u16).wrapping_sub(1),
                "MUSICLOOP" => self.menu(num).muslooping = yes,
                "NOMUSIC" => self.menu(num).musstop = yes,
                "IGNOREMUSIC" => self.menu(num).musignore = yes,
                // One-based in patches; zero or less keeps the default.
                "FADESTRENGTH" => {
                    let strength = self.number(&value);
                    self.menu(num).fadestrength = strength - 1;
                }
                "NOENTERBUBBLE" => self.menu(num).enterbubble = !yes,
                "NOEXITBUBBLE" => self.menu(num).exitbubble = !yes,
                "ENTERTAG" => {
                    let tag = self.number(&value);
                    self.menu(num).entertag = tag;
                }
                "EXITTAG" => {
                    let tag = self.number(&value);
                    self.menu(num).exittag = tag;
                }
                "ENTERWIPE" => {
                    let wipe = self.number(&value);
                    self.menu(num).enterwipe = wipe;
                }
                "EXITWIPE" => {
                    let wipe = self.number(&value);
                    self.menu(num).exitwipe = wipe;
                }
                _ => {
                    self.warn(format!("{label}: unknown word '{word}'"));
                    continue;
                }
            }
            self.report.side_effects.title_changed = true;
        }
    }

    pub(crate) fn read_huditem(&mut self, num: usize) {
        let label = format!("HUD item {num}");

        while let Some(line) = self.next_field() {
            let Some((word, value)) = self.equals_field(&line, &label) else {
                continue;
            };
            let i = FieldValue::new(&value).as_int();
            let item = &mut self.context.tables.hud[num];
            match word.as_str() {
                "X" => item.x = i,
                "Y" => item.y = i,
                "F" => item.f = i,
                _ => self.warn(format!("{label}: unknown word '{word}'")),
            }
        }
    }
}
