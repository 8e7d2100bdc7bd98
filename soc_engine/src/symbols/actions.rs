//! State actions: native engine functions and script-registered ones.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::names::ACTION_LIST;

/// Index into the native action table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActionId(pub u16);

/// Handle of a script-side action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScriptHandle(pub u32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Action {
    #[default]
    None,
    Native(ActionId),
    Scripted(ScriptHandle),
}

impl ActionId {
    pub fn name(self) -> Option<&'static str> {
        ACTION_LIST.get(self.0 as usize).copied()
    }
}

/// Native action by name, ignoring case.
pub fn native_action(name: &str) -> Option<ActionId> {
    ACTION_LIST
        .iter()
        .position(|entry| entry.eq_ignore_ascii_case(name))
        .map(|index| ActionId(index as u16))
}

/// Script-registered actions, keyed by uppercase name.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    by_name: HashMap<String, ScriptHandle>,
    names: Vec<String>,
}

impl ActionRegistry {
    /// Registers (or re-registers) a scripted action.
    pub fn register(&mut self, name: &str) -> ScriptHandle {
        let key = name.to_ascii_uppercase();
        if let Some(handle) = self.by_name.get(&key) {
            return *handle;
        }
        let handle = ScriptHandle(self.names.len() as u32);
        self.names.push(key.clone());
        self.by_name.insert(key, handle);
        handle
    }

    pub fn get(&self, name: &str) -> Option<ScriptHandle> {
        self.by_name.get(&name.to_ascii_uppercase()).copied()
    }

    pub fn name_of(&self, handle: ScriptHandle) -> Option<&str> {
        self.names.get(handle.0 as usize).map(String::as_str)
    }

    /// Scripted actions first, then native ones.
    pub fn resolve(&self, name: &str) -> Option<Action> {
        if let Some(handle) = self.get(name) {
            return Some(Action::Scripted(handle));
        }
        native_action(name).map(Action::Native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_actions_shadow_native_ones() {
        let mut registry = ActionRegistry::default();
        let native = registry.resolve("A_Look").unwrap();
        assert!(matches!(native, Action::Native(id) if id.name() == Some("A_LOOK")));

        let handle = registry.register("a_look");
        assert_eq!(registry.resolve("A_LOOK"), Some(Action::Scripted(handle)));
        assert_eq!(registry.name_of(handle), Some("A_LOOK"));
        assert_eq!(registry.register("A_Look"), handle);
    }

    #[test]
    fn unknown_actions_do_not_resolve() {
        assert_eq!(ActionRegistry::default().resolve("A_NOSUCHTHING"), None);
    }
}
