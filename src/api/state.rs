//! Application state for the salary draft API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{InMemoryEmployeeDirectory, SalaryLedger};

/// Shared application state.
///
/// Holds the loaded configuration, the employee directory built from it and
/// the salary ledger.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    directory: Arc<InMemoryEmployeeDirectory>,
    ledger: Arc<SalaryLedger>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let directory = Arc::new(InMemoryEmployeeDirectory::from_config(&config));
        let ledger = Arc::new(SalaryLedger::new(Arc::clone(&directory)));
        Self {
            config: Arc::new(config),
            directory,
            ledger,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &InMemoryEmployeeDirectory {
        &self.directory
    }

    /// Returns the salary ledger.
    pub fn ledger(&self) -> &SalaryLedger {
        &self.ledger
    }
}
