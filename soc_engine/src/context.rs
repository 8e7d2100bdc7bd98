use crate::catalog::{self, ConsistencyError};
use crate::symbols::SymbolTables;
use crate::tables::EngineTables;

/// Everything patches read and write during a session.
#[derive(Debug, Clone)]
pub struct SocContext {
    pub symbols: SymbolTables,
    pub tables: EngineTables,
    /// Set after the first load; free slots are only reset before it.
    pub loaded: bool,
}

impl SocContext {
    /// A fresh session. Name tables that disagree with their declared
    /// counts fail here in debug builds and are logged in release ones.
    pub fn new() -> Result<Self, ConsistencyError> {
        if let Err(err) = catalog::check_tables() {
            if cfg!(debug_assertions) {
                return Err(err);
            }
            log::error!("{err}");
        }
        Ok(Self {
            symbols: SymbolTables::default(),
            tables: EngineTables::default(),
            loaded: false,
        })
    }

    /// Makes the next load start with empty free slots again.
    pub fn reset_session(&mut self) {
        self.loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_starts_unloaded() {
        let mut context = SocContext::new().unwrap();
        assert!(!context.loaded);
        context.loaded = true;
        context.reset_session();
        assert!(!context.loaded);
    }
}
