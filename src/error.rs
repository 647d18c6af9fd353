use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::nbt::NbtError;

#[derive(Debug, Error)]
pub enum RemapError {
    #[error("no valid save found in {}: tried {}", .world.display(), join_paths(.tried))]
    NoValidSaveFound { world: PathBuf, tried: Vec<PathBuf> },

    #[error("missing registry table: '{segment}' is absent or not a compound (unsupported save format?)")]
    MissingRegistryTable { segment: String },

    #[error("malformed registry '{registry}': {reason}")]
    MalformedRegistry { registry: String, reason: String },

    #[error("malformed entry #{index} in registry '{registry}': {reason}")]
    MalformedEntry {
        registry: String,
        index: usize,
        reason: String,
    },

    #[error("invalid mapping format in {}: {reason}", .path.display())]
    InvalidMappingFormat { path: PathBuf, reason: String },

    #[error("failed to decode {}: {source}", .path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: NbtError,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    EncodeFailure {
        path: PathBuf,
        #[source]
        source: NbtError,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RemapError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        RemapError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, RemapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_valid_save_lists_every_candidate() {
        let err = RemapError::NoValidSaveFound {
            world: PathBuf::from("/saves/w"),
            tried: vec![
                PathBuf::from("/saves/w/level.dat"),
                PathBuf::from("/saves/w/level.dat_old"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "no valid save found in /saves/w: tried /saves/w/level.dat, /saves/w/level.dat_old"
        );
    }

    #[test]
    fn malformed_entry_names_registry() {
        let err = RemapError::MalformedEntry {
            registry: "minecraft:item".to_string(),
            index: 3,
            reason: "'K' is missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed entry #3 in registry 'minecraft:item': 'K' is missing"
        );
    }
}
