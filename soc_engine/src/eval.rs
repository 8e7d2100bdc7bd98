//! Numeric field evaluation: literals, frame letters and named constants
//! joined by arithmetic and bitwise operators.

use mlua::{HookTriggers, Lua, LuaOptions, StdLib, Table, Value};

use crate::error::EvalError;
use crate::resolve::Resolver;
use crate::symbols::SymbolTables;

pub trait Evaluator {
    fn evaluate(&self, symbols: &SymbolTables, expr: &str) -> Result<i64, EvalError>;
}

/// Value of one operand word that is not a number literal: a frame
/// letter (`A`..`~`) or a constant from any namespace.
pub fn operand_value(resolver: &Resolver<'_>, word: &str) -> Result<i64, EvalError> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if ('A'..='~').contains(&c) => Ok(c as i64 - 'A' as i64),
        (Some(_), None) | (None, _) => Err(EvalError::MissingOperand(word.to_string())),
        _ => Ok(resolver.constant(word)?),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Mul,
    Div,
    Add,
    Sub,
    Or,
    And,
    Shl,
    Shr,
}

impl Op {
    fn apply(self, lhs: i64, rhs: i64, expr: &str) -> Result<i64, EvalError> {
        Ok(match self {
            Op::Mul => lhs.wrapping_mul(rhs),
            Op::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero(expr.to_string()));
                }
                lhs.wrapping_div(rhs)
            }
            Op::Add => lhs.wrapping_add(rhs),
            Op::Sub => lhs.wrapping_sub(rhs),
            Op::Or => lhs | rhs,
            Op::And => lhs & rhs,
            Op::Shl => lhs.wrapping_shl(rhs as u32),
            Op::Shr => lhs.wrapping_shr(rhs as u32),
        })
    }
}

/// Applies operators strictly left to right with no precedence, so
/// `1+2*3` is 9. Patches written against the engine rely on this.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeftToRightEvaluator;

struct Cursor<'e> {
    expr: &'e str,
    pos: usize,
}

const OPERATOR_CHARS: &[char] = &['*', '/', '+', '-', '|', '&', '<', '>'];

impl<'e> Cursor<'e> {
    fn skip_spaces(&mut self) {
        let rest = &self.expr[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn at_end(&self) -> bool {
        self.pos >= self.expr.len()
    }

    fn operand(&mut self) -> &'e str {
        self.skip_spaces();
        let rest = &self.expr[self.pos..];
        // a leading '-' belongs to a number literal
        let body_start = usize::from(rest.starts_with('-'));
        let len = rest[body_start..]
            .find(|c: char| c.is_whitespace() || OPERATOR_CHARS.contains(&c))
            .map_or(rest.len(), |end| end + body_start);
        self.pos += len;
        &rest[..len]
    }

    fn operator(&mut self) -> Result<Op, EvalError> {
        self.skip_spaces();
        let rest = &self.expr[self.pos..];
        let first = rest.chars().next().unwrap_or('\0');
        let (op, len) = match first {
            '*' => (Op::Mul, 1),
            '/' => (Op::Div, 1),
            '+' => (Op::Add, 1),
            '-' => (Op::Sub, 1),
            '|' => (Op::Or, 1),
            '&' => (Op::And, 1),
            '<' if rest.starts_with("<<") => (Op::Shl, 2),
            '>' if rest.starts_with(">>") => (Op::Shr, 2),
            other => return Err(EvalError::UnknownOperator(other)),
        };
        self.pos += len;
        Ok(op)
    }
}

impl LeftToRightEvaluator {
    fn value(resolver: &Resolver<'_>, word: &str) -> Result<i64, EvalError> {
        let starts_numeric = word
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '-');
        if starts_numeric {
            return Ok(i64::from(soc_formats::tokens::atoi(word)));
        }
        operand_value(resolver, word)
    }
}

impl Evaluator for LeftToRightEvaluator {
    fn evaluate(&self, symbols: &SymbolTables, expr: &str) -> Result<i64, EvalError> {
        let resolver = Resolver::new(symbols);
        let mut cursor = Cursor { expr, pos: 0 };
        let mut total = Self::value(&resolver, cursor.operand())?;
        loop {
            cursor.skip_spaces();
            if cursor.at_end() {
                return Ok(total);
            }
            let op = cursor.operator()?;
            let rhs = Self::value(&resolver, cursor.operand())?;
            total = op.apply(total, rhs, expr)?;
        }
    }
}

/// Evaluates the value as a Lua expression (`return <value>`) in an
/// environment whose globals are the patch constants. Operator precedence
/// is Lua's.
pub struct LuaEvaluator {
    lua: Lua,
}

impl LuaEvaluator {
    pub fn new() -> Result<Self, EvalError> {
        let lua = Lua::new_with(StdLib::MATH, LuaOptions::default())
            .map_err(|err| EvalError::Script(err.to_string()))?;
        Ok(Self { lua })
    }
}

/// Instructions one field value may run before it is abandoned.
const INSTRUCTION_BUDGET: u32 = 100_000;

fn script_error(err: mlua::Error) -> EvalError {
    EvalError::Script(err.to_string())
}

impl Evaluator for LuaEvaluator {
    fn evaluate(&self, symbols: &SymbolTables, expr: &str) -> Result<i64, EvalError> {
        let resolver = Resolver::new(symbols);
        // Re-arming the hook restarts its count for this expression.
        self.lua.set_hook(
            HookTriggers::new().every_nth_instruction(INSTRUCTION_BUDGET),
            |_, _| {
                Err(mlua::Error::RuntimeError(
                    "expression exceeded its instruction budget".to_string(),
                ))
            },
        );
        let value = self
            .lua
            .scope(|scope| {
                let index = scope.create_function(|_, (_env, key): (Table, String)| {
                    operand_value(&resolver, &key)
                        .map_err(|err| mlua::Error::RuntimeError(err.to_string()))
                })?;
                let meta = self.lua.create_table()?;
                meta.set("__index", index)?;
                let env = self.lua.create_table()?;
                env.set_metatable(Some(meta));
                self.lua
                    .load(format!("return {expr}"))
                    .set_name("=soc")
                    .set_environment(env)
                    .eval::<Value>()
            })
            .map_err(script_error)?;

        match value {
            Value::Integer(i) => Ok(i),
            Value::Number(n) => Ok(n as i64),
            Value::Boolean(b) => Ok(i64::from(b)),
            other => Err(EvalError::Script(format!(
                "'{expr}' evaluated to {}",
                other.type_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &str) -> Result<i64, EvalError> {
        LeftToRightEvaluator.evaluate(&SymbolTables::default(), expr)
    }

    #[test]
    fn operators_apply_left_to_right() {
        assert_eq!(eval("1+2*3"), Ok(9));
        assert_eq!(eval("10 - 4 / 2"), Ok(3));
        assert_eq!(eval("1<<4|1"), Ok(17));
        assert_eq!(eval("-5+2"), Ok(-3));
        assert_eq!(eval("256>>4"), Ok(16));
    }

    #[test]
    fn flag_names_combine() {
        assert_eq!(eval("MF_SPECIAL|MF_SOLID"), Ok(3));
        assert_eq!(eval("MF_SOLID | MF_SHOOTABLE"), Ok(6));
        assert_eq!(eval("TICRATE*2"), Ok(70));
    }

    #[test]
    fn single_characters_are_frame_numbers() {
        assert_eq!(eval("A"), Ok(0));
        assert_eq!(eval("C"), Ok(2));
        assert_eq!(eval("a"), Ok(32));
    }

    #[test]
    fn lone_angle_brackets_are_rejected() {
        assert_eq!(eval("1<2"), Err(EvalError::UnknownOperator('<')));
        assert_eq!(eval("4%2"), Err(EvalError::UnknownOperator('%')));
    }

    #[test]
    fn unknown_names_surface_as_unresolved() {
        let err = eval("MF_SOLID|MF_WHATEVER").unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find mobj flag named 'MF_WHATEVER'");
    }

    #[test]
    fn lua_evaluator_uses_lua_precedence_and_the_same_names() {
        let lua = LuaEvaluator::new().unwrap();
        let symbols = SymbolTables::default();
        assert_eq!(lua.evaluate(&symbols, "1+2*3"), Ok(7));
        assert_eq!(lua.evaluate(&symbols, "MF_SPECIAL|MF_SOLID"), Ok(3));
        assert_eq!(lua.evaluate(&symbols, "FRACUNIT*2"), Ok(131072));
        assert!(lua.evaluate(&symbols, "MF_NOPE").is_err());
    }

    #[test]
    fn lua_evaluator_stops_runaway_expressions() {
        let lua = LuaEvaluator::new().unwrap();
        let symbols = SymbolTables::default();
        let err = lua
            .evaluate(&symbols, "(function() while true do end end)()")
            .unwrap_err();
        assert!(err.to_string().contains("instruction budget"));
        assert_eq!(lua.evaluate(&symbols, "2+3*4"), Ok(14));
    }
}
