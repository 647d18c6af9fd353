//! Remap result types

use std::path::PathBuf;

/// Outcome of one remap pass over a registry table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapResult {
    /// Entries rewritten across every registry
    pub total: usize,
    /// Per-registry counts, in the order registries appear in the save.
    /// Only registries named by the mapping are listed.
    pub per_registry: Vec<(String, usize)>,
}

impl RemapResult {
    pub fn count(&self) -> usize {
        self.total
    }
}

/// Options for a full world transform
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Save file names checked inside the world directory, in order
    pub save_candidates: Vec<String>,
    /// Copy the save into remap_backups/ before it is overwritten
    pub backup: bool,
    /// Run the remap but never write to disk
    pub dry_run: bool,
}

/// What a world transform did
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub save: PathBuf,
    pub result: RemapResult,
    /// False for dry runs and for runs that changed nothing
    pub written: bool,
    pub backup: Option<PathBuf>,
}
