//! Engine data tables a patch writes into.

pub mod level;
pub mod maincfg;
pub mod menus;
pub mod objects;
pub mod progress;
pub mod story;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::catalog::{self, flags};
use crate::symbols::SymbolTables;

pub use level::MapHeader;
pub use maincfg::{CharacterDescription, MainConfig};
pub use menus::{HudItem, MenuPres, TitlePicsMode};
pub use objects::{MobjInfo, Pivot, SpriteInfo, State};
pub use progress::{Condition, ConditionKind, ConditionSet, Emblem, ExtraEmblem, Unlockable};
pub use story::{Cutscene, PromptPage, Scene, TextPrompt};

/// Wipe number meaning "no wipe".
pub const WIPE_NONE: u8 = u8::MAX;

#[derive(Debug, Clone)]
pub struct EngineTables {
    pub mobjinfo: Vec<MobjInfo>,
    pub states: Vec<State>,
    pub spriteinfo: Vec<SpriteInfo>,
    /// Player sprite info per skin name, then per `SPR2_` number.
    pub skin_spriteinfo: BTreeMap<String, BTreeMap<usize, SpriteInfo>>,
    /// Allocated by the first `LEVEL` block naming the map.
    pub map_headers: BTreeMap<i32, MapHeader>,
    /// Zero-based, allocated on first use.
    pub cutscenes: BTreeMap<usize, Cutscene>,
    pub prompts: BTreeMap<usize, TextPrompt>,
    pub menus: Vec<MenuPres>,
    pub hud: Vec<HudItem>,
    pub emblems: Vec<Emblem>,
    pub num_emblems: usize,
    pub extra_emblems: Vec<ExtraEmblem>,
    pub num_extra_emblems: usize,
    pub unlockables: Vec<Unlockable>,
    /// Indexed by set number minus one.
    pub condition_sets: Vec<ConditionSet>,
    pub descriptions: Vec<CharacterDescription>,
    pub maincfg: MainConfig,
    pub wipes: Vec<u8>,
}

impl Default for EngineTables {
    fn default() -> Self {
        Self {
            mobjinfo: vec![MobjInfo::default(); catalog::nummobjtypes()],
            states: vec![State::default(); catalog::numstates()],
            spriteinfo: vec![SpriteInfo::default(); catalog::numsprites()],
            skin_spriteinfo: BTreeMap::new(),
            map_headers: BTreeMap::new(),
            cutscenes: BTreeMap::new(),
            prompts: BTreeMap::new(),
            menus: vec![MenuPres::default(); catalog::nummenutypes()],
            hud: vec![HudItem::default(); catalog::numhuditems()],
            emblems: vec![Emblem::default(); catalog::MAXEMBLEMS],
            num_emblems: 0,
            extra_emblems: vec![ExtraEmblem::default(); catalog::MAXEXTRAEMBLEMS],
            num_extra_emblems: 0,
            unlockables: vec![Unlockable::default(); catalog::MAXUNLOCKABLES],
            condition_sets: vec![ConditionSet::default(); catalog::MAXCONDITIONSETS],
            descriptions: vec![CharacterDescription::default(); catalog::MAXSKINS],
            maincfg: MainConfig::default(),
            wipes: vec![0; flags::WIPE_LIST.len()],
        }
    }
}

impl EngineTables {
    pub fn clear_unlockables(&mut self) {
        self.unlockables.fill(Unlockable::default());
    }

    pub fn clear_emblems(&mut self) {
        self.emblems.fill(Emblem::default());
        self.num_emblems = 0;
    }

    pub fn clear_extra_emblems(&mut self) {
        self.extra_emblems.fill(ExtraEmblem::default());
        self.num_extra_emblems = 0;
    }

    pub fn clear_condition_sets(&mut self) {
        self.condition_sets.fill(ConditionSet::default());
    }

    pub fn clear_levels(&mut self) {
        self.map_headers.clear();
    }

    /// Every record that differs from its default, as JSON. Untouched
    /// slots are left out so a dump only shows what patches changed.
    pub fn touched_json(&self, symbols: &SymbolTables) -> Value {
        json!({
            "mobjinfo": changed(&self.mobjinfo),
            "states": changed(&self.states),
            "spriteinfo": changed(&self.spriteinfo),
            "skin_spriteinfo": self.skin_spriteinfo,
            "map_headers": self.map_headers,
            "cutscenes": self.cutscenes,
            "prompts": self.prompts,
            "menus": changed(&self.menus),
            "hud": changed(&self.hud),
            "emblems": &self.emblems[..self.num_emblems],
            "extra_emblems": &self.extra_emblems[..self.num_extra_emblems],
            "unlockables": changed(&self.unlockables),
            "condition_sets": changed(&self.condition_sets),
            "descriptions": changed(&self.descriptions),
            "maincfg": self.maincfg,
            "wipes": self.wipes,
            "gametypes": symbols.gametypes.entries(),
        })
    }
}

fn changed<T: Default + PartialEq + Serialize>(records: &[T]) -> BTreeMap<usize, &T> {
    let blank = T::default();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| **record != blank)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dumps_only_show_changed_records() {
        let mut tables = EngineTables::default();
        tables.mobjinfo[1].speed = 10;
        let dump = tables.touched_json(&SymbolTables::default());
        let mobjs = dump["mobjinfo"].as_object().unwrap();
        assert_eq!(mobjs.len(), 1);
        assert_eq!(mobjs["1"]["speed"], 10);
        assert!(dump["states"].as_object().unwrap().is_empty());
    }

    #[test]
    fn clearing_emblems_resets_the_count() {
        let mut tables = EngineTables::default();
        tables.emblems[0].hint = "behind the waterfall".into();
        tables.num_emblems = 1;
        tables.clear_emblems();
        assert_eq!(tables.num_emblems, 0);
        assert_eq!(tables.emblems[0], Emblem::default());
    }
}
