//! Shared configuration storage.
//!
//! Configuration is read-only after start-up; the store only exists so
//! that every consumer (HTTP client, layout rules, CLI) reads the same
//! value.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Load the config at `path` (defaults if missing) into a new store.
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-memory override (e.g. from CLI flags) and re-validate.
    ///
    /// On validation failure the previous config is kept.
    pub fn update<F>(&self, apply: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut candidate = self.get();
        apply(&mut candidate);
        candidate.validate()?;
        *self.inner.write() = candidate;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
