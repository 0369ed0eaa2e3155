// src/config/store.rs
use std::sync::{PoisonError, RwLock};

use super::options::{ConfigUpdate, Configuration};

/// The single shared configuration.
///
/// Readers get a whole-struct clone; writers go through [`ConfigStore::update`].
/// A run never observes a half-applied update.
#[derive(Debug, Default)]
pub struct ConfigStore {
    inner: RwLock<Configuration>,
}

impl ConfigStore {
    pub fn new(initial: Configuration) -> Self {
        Self { inner: RwLock::new(initial) }
    }

    pub fn snapshot(&self) -> Configuration {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `update` and return the resulting snapshot.
    pub fn update(&self, update: ConfigUpdate) -> Configuration {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        logd!("Config update: {update:?}");
        guard.apply(update);
        guard.clone()
    }
}
