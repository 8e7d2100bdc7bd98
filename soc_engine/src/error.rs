use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ConsistencyError;

/// Failures that end a patch load.
#[derive(Debug, Error)]
pub enum SocError {
    #[error("{warnings} warning{} in the SOC lump", if *.warnings == 1 { "" } else { "s" })]
    Escalated { warnings: usize },
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
    #[error("lump {0} not found")]
    MissingLump(String),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A name no table knows. Carries the value the caller should use instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Couldn't find {kind} named '{name}'")]
pub struct Unresolved {
    pub kind: &'static str,
    pub name: String,
    pub fallback: i32,
}

impl Unresolved {
    pub fn new(kind: &'static str, name: impl Into<String>, fallback: i32) -> Self {
        Self {
            kind,
            name: name.into(),
            fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Unresolved(#[from] Unresolved),
    #[error("Unknown operation '{0}'")]
    UnknownOperator(char),
    #[error("Missing operand in '{0}'")]
    MissingOperand(String),
    #[error("Division by zero in '{0}'")]
    DivisionByZero(String),
    #[error("Lua error: {0}")]
    Script(String),
}
