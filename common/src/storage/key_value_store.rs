use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate};
use crate::log;

/// String-keyed store for small preferences.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| "Store lock poisoned".to_string())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| "Store lock poisoned".to_string())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct StoreEntries(BTreeMap<String, String>);

impl Validate for StoreEntries {
    fn validate(&self) -> Result<(), String> {
        if self.0.keys().any(|k| k.is_empty()) {
            return Err("store keys must not be empty".to_string());
        }
        Ok(())
    }
}

/// Flat YAML map on disk, rewritten on every `set`.
pub struct YamlFileStore {
    manager: ConfigManager<FileContentConfigProvider, StoreEntries>,
}

impl YamlFileStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl KeyValueStore for YamlFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.manager.get_config()?.0.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        // An unreadable file is replaced rather than blocking every later write.
        let mut entries = self.manager.get_config().unwrap_or_else(|e| {
            log!("Discarding unreadable store: {}", e);
            StoreEntries::default()
        });
        entries.0.insert(key.to_string(), value.to_string());
        self.manager.set_config(&entries)
    }
}
