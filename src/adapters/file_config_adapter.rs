//! Configuration file adapter.

use crate::domain::error::ConfigError;
use crate::domain::options::ParseOptions;
use crate::domain::store::ConfigStore;
use crate::ports::config_port::ConfigPort;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileConfigAdapter {
    path: PathBuf,
    store: ConfigStore,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_file_with(path, &ParseOptions::default())
    }

    pub fn from_file_with<P: AsRef<Path>>(
        path: P,
        options: &ParseOptions,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let store = ConfigStore::parse(&content, options);
        debug!(
            path = %path.display(),
            lines = content.lines().count(),
            entries = store.len(),
            "loaded config"
        );
        Ok(Self {
            path: path.to_path_buf(),
            store,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn into_store(self) -> ConfigStore {
        self.store
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.store.get_string(key)
    }

    fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.store.get_int(key)
    }

    fn get_double(&self, key: &str) -> Result<f64, ConfigError> {
        self.store.get_double(key)
    }
}
