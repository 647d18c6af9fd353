// Mapping document I/O

use log::info;
use std::path::Path;

use super::pure::{parse_mapping, MappingFormat};
use super::types::MappingTable;
use crate::error::{RemapError, Result};

/// Read and parse a mapping document
pub fn load_mapping(path: &Path) -> Result<MappingTable> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => RemapError::InvalidMappingFormat {
            path: path.to_path_buf(),
            reason: "document is not valid UTF-8".to_string(),
        },
        _ => RemapError::io(path, e),
    })?;

    let table = parse_mapping(&text, MappingFormat::from_path(path)).map_err(|reason| {
        RemapError::InvalidMappingFormat {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    info!(
        "[remapper] Loaded {} mappings across {} registries from {}",
        table.entry_count(),
        table.registry_count(),
        path.display()
    );
    Ok(table)
}
