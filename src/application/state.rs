// src/application/state.rs

use std::sync::{Arc, Mutex};

use crate::domain::DomainResult;
use crate::error::{AppError, AppResult};
use crate::services::Catalog;

/// Application state shared by commands.
/// The catalog is single-owner; this mutex serializes every call into it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<Catalog>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run `f` with exclusive access to the catalog
    pub fn with_catalog<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Catalog) -> T,
    {
        let mut catalog = self.catalog.lock().map_err(|_| AppError::StatePoisoned)?;
        Ok(f(&mut catalog))
    }

    /// Like [`AppState::with_catalog`] for fallible catalog operations
    pub fn try_with_catalog<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Catalog) -> DomainResult<T>,
    {
        Ok(self.with_catalog(f)??)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
