//! SOC patch loading: the name tables, the engine tables patches edit and
//! the loader that applies them.

pub mod catalog;
pub mod context;
pub mod error;
pub mod eval;
pub mod gamedata;
pub mod loader;
pub mod lua_bridge;
pub mod resolve;
mod sections;
pub mod symbols;
pub mod tables;

pub use context::SocContext;
pub use error::{EvalError, SocError, Unresolved};
pub use eval::{Evaluator, LeftToRightEvaluator, LuaEvaluator};
pub use gamedata::{GameDataStore, JsonGameDataStore, ResetScope};
pub use loader::{LoadReport, LoaderConfig, PatchLoader, SideEffects, Warning};
