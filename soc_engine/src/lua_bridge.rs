//! Script-side access to the patch tables: `freeslot`, enumeration names
//! as globals and `getActionName`.

use std::cell::RefCell;
use std::rc::Rc;

use mlua::{Lua, Table, Value, Variadic};

use crate::context::SocContext;
use crate::resolve::Resolver;
use crate::symbols::{Action, ActionId, Claim};

fn runtime(message: impl Into<String>) -> mlua::Error {
    mlua::Error::RuntimeError(message.into())
}

/// Installs the bridge globals into `lua`. The context is shared with the
/// loader, so names declared on either side are visible to the other.
pub fn install(lua: &Lua, context: Rc<RefCell<SocContext>>) -> mlua::Result<()> {
    let globals = lua.globals();

    let slots = Rc::clone(&context);
    let freeslot = lua.create_function(move |_, names: Variadic<String>| {
        let mut context = slots.borrow_mut();
        let mut values = Variadic::new();
        for full in names.iter() {
            let Some((class, name)) = full.split_once('_') else {
                return Err(runtime(format!("Unknown enum type in '{full}'")));
            };
            let class = class.to_ascii_uppercase();
            let name = name.to_ascii_uppercase();
            match context.symbols.declare(&class, &name, 0) {
                Ok(Claim::New(value)) => values.push(value as i64),
                Ok(Claim::Existing(value)) => {
                    log::debug!("{full} already declared ({value})");
                    values.push(value as i64);
                }
                Err(crate::symbols::FreeslotError::UnknownClass { .. }) => {
                    return Err(runtime(format!("Unknown enum type in '{full}'")));
                }
                Err(err) => log::warn!("{err}"),
            }
        }
        Ok(values)
    })?;
    globals.set("freeslot", freeslot)?;

    let names = Rc::clone(&context);
    let get_action_name = lua.create_function(move |lua, action: Value| {
        let name = match action {
            Value::Integer(id) => u16::try_from(id)
                .ok()
                .and_then(|id| ActionId(id).name())
                .map(str::to_string),
            Value::String(text) => {
                let text = text.to_str()?;
                names
                    .borrow()
                    .symbols
                    .actions
                    .resolve(text)
                    .map(|_| text.to_ascii_uppercase())
            }
            _ => None,
        };
        match name {
            Some(name) => Ok(Value::String(lua.create_string(&name)?)),
            None => Ok(Value::Nil),
        }
    })?;
    globals.set("getActionName", get_action_name)?;

    let lookup = Rc::clone(&context);
    let index = lua.create_function(move |lua, (_globals, key): (Table, Value)| {
        let Value::String(key) = key else {
            return Ok(Value::Nil);
        };
        let word = key.to_str()?.to_string();
        let context = lookup.borrow();
        enum_value(lua, &context, &word)
    })?;
    let meta = lua.create_table()?;
    meta.set("__index", index)?;
    globals.set_metatable(Some(meta));
    Ok(())
}

/// Global lookup for names no script defined. Unknown plain names are
/// nil so ordinary globals keep working; unknown names in a known
/// namespace are errors.
fn enum_value<'lua>(lua: &'lua Lua, context: &SocContext, word: &str) -> mlua::Result<Value<'lua>> {
    if word == "super" {
        let super_call = lua.create_function(|_, ()| -> mlua::Result<()> {
            Err(runtime("super can only be called from inside an action"))
        })?;
        return Ok(Value::Function(super_call));
    }

    if word.len() > 2 && word.get(..2).is_some_and(|head| head.eq_ignore_ascii_case("A_")) {
        let name = word.to_ascii_uppercase();
        return match context.symbols.actions.resolve(&name) {
            Some(Action::Native(_)) | Some(Action::Scripted(_)) => {
                Ok(Value::String(lua.create_string(&name)?))
            }
            _ => Err(runtime(format!("action '{word}' does not exist."))),
        };
    }

    // Sound, music and power names are commonly written in lowercase.
    let word = match word.get(..4) {
        Some(head) if head == "sfx_" || head == "mus_" => word.to_ascii_uppercase(),
        _ if word.starts_with("pw_") => word.to_ascii_uppercase(),
        _ => word.to_string(),
    };

    match Resolver::new(&context.symbols).constant(&word) {
        Ok(value) => Ok(Value::Integer(value)),
        Err(miss) if miss.kind == "constant" => Ok(Value::Nil),
        Err(miss) => Err(runtime(miss.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn bridge() -> (Lua, Rc<RefCell<SocContext>>) {
        let lua = Lua::new();
        let context = Rc::new(RefCell::new(SocContext::new().unwrap()));
        install(&lua, Rc::clone(&context)).unwrap();
        (lua, context)
    }

    #[test]
    fn freeslot_declares_into_the_shared_tables() {
        let (lua, context) = bridge();
        let (mt, state): (i64, i64) = lua
            .load(r#"return freeslot("MT_SCRIPTED", "S_SCRIPTED")"#)
            .eval()
            .unwrap();
        assert_eq!(mt as usize, catalog::mt_firstfreeslot());
        assert_eq!(state as usize, catalog::s_firstfreeslot());
        assert_eq!(context.borrow().symbols.free.mobjs.find("SCRIPTED"), Some(mt as usize));

        let again: i64 = lua.load(r#"return freeslot("MT_SCRIPTED")"#).eval().unwrap();
        assert_eq!(again, mt);
    }

    #[test]
    fn globals_resolve_enumeration_names() {
        let (lua, _context) = bridge();
        lua.load(r#"freeslot("sfx_boing")"#).exec().unwrap();
        let (solid, boing): (i64, i64) = lua.load("return MF_SOLID, sfx_boing").eval().unwrap();
        assert_eq!(solid, 2);
        assert!(boing as usize >= catalog::sfx_freeslot0());

        let plain: Value = lua.load("return some_script_global").eval().unwrap();
        assert!(matches!(plain, Value::Nil));
        assert!(lua.load("return MT_NOT_DECLARED").eval::<Value>().is_err());
    }

    #[test]
    fn action_names_round_trip() {
        let (lua, _context) = bridge();
        let name: String = lua.load("return getActionName(A_Look)").eval().unwrap();
        assert_eq!(name, "A_LOOK");
        let by_id: String = lua.load("return getActionName(0)").eval().unwrap();
        assert_eq!(Some(by_id.as_str()), ActionId(0).name());
    }

    #[test]
    fn unknown_freeslot_classes_are_script_errors() {
        let (lua, _context) = bridge();
        assert!(lua.load(r#"freeslot("XYZ_THING")"#).exec().is_err());
    }
}
