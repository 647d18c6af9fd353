// Pure parsing functions for mapping documents (no I/O)

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::types::{MappingTable, RegistryMapping};

/// Document syntax, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingFormat {
    Json,
    Yaml,
}

impl MappingFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => MappingFormat::Yaml,
            _ => MappingFormat::Json,
        }
    }
}

/// Accepted document shapes.
///
/// `Flat` is tried first: `{ registry: { old: new } }`. A document whose
/// values are not string maps falls through to `Sectioned`, which reads the
/// same table from a top-level `registries` key and ignores other sections.
#[derive(Deserialize)]
#[serde(untagged)]
enum MappingDocument {
    Flat(HashMap<String, RegistryMapping>),
    Sectioned {
        registries: HashMap<String, RegistryMapping>,
    },
}

/// Parse mapping text. The error string is the parser's own message.
pub fn parse_mapping(text: &str, format: MappingFormat) -> Result<MappingTable, String> {
    let doc: MappingDocument = match format {
        MappingFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string())?,
        MappingFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string())?,
    };

    let registries = match doc {
        MappingDocument::Flat(registries) => registries,
        MappingDocument::Sectioned { registries } => registries,
    };
    Ok(MappingTable::new(registries))
}
