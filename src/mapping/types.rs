//! Mapping table types

use std::collections::HashMap;

/// Old key to new key translations for one registry
pub type RegistryMapping = HashMap<String, String>;

/// Registry name to per-registry translations.
///
/// A registry or key that is not present simply means "leave it alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingTable {
    registries: HashMap<String, RegistryMapping>,
}

impl MappingTable {
    pub fn new(registries: HashMap<String, RegistryMapping>) -> Self {
        Self { registries }
    }

    /// Translations for `registry`, if the table mentions it
    pub fn registry(&self, registry: &str) -> Option<&RegistryMapping> {
        self.registries.get(registry)
    }

    /// Replacement for `key` within `registry`
    pub fn lookup(&self, registry: &str, key: &str) -> Option<&str> {
        self.registry(registry)?.get(key).map(String::as_str)
    }

    /// Number of registries named by the table
    pub fn registry_count(&self) -> usize {
        self.registries.len()
    }

    /// Total number of translations across all registries
    pub fn entry_count(&self) -> usize {
        self.registries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}
