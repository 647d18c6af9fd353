// Orchestration pipeline for remapping a world save
// Combines mapping load, save selection, codec and tree transforms

use log::{debug, info};
use std::path::Path;

use super::pure::{locate_registries, remap};
use super::types::{TransformOptions, TransformReport};
use crate::error::{RemapError, Result};
use crate::mapping::{load_mapping, MappingTable};
use crate::nbt;
use crate::world::{backup_save, replace_save, select_save};

/// Remap the registry IDs of the world at `world` using the mapping document
/// at `mapping_path`.
///
/// The mapping is loaded before any save is opened. The save is read in full,
/// transformed in memory and only written back once the whole remap succeeded.
pub fn transform_world(
    world: &Path,
    mapping_path: &Path,
    options: &TransformOptions,
) -> Result<TransformReport> {
    let mapping = load_mapping(mapping_path)?;
    transform_world_with(world, &mapping, options)
}

/// Same as [`transform_world`] with an already loaded mapping
pub fn transform_world_with(
    world: &Path,
    mapping: &MappingTable,
    options: &TransformOptions,
) -> Result<TransformReport> {
    if mapping.is_empty() {
        info!("[remapper] Mapping is empty, no entry can change");
    }

    let save = select_save(world, &options.save_candidates)?;

    let original = std::fs::read(&save).map_err(|e| RemapError::io(&save, e))?;
    let mut doc = nbt::decode(&original).map_err(|source| RemapError::DecodeFailure {
        path: save.clone(),
        source,
    })?;
    debug!(
        "[remapper] Decoded {} ({} bytes, {:?})",
        save.display(),
        original.len(),
        doc.compression
    );

    let registries = locate_registries(&mut doc.root)?;
    if registries.is_empty() {
        info!("[remapper] Registry table is empty");
    } else {
        debug!("[remapper] Found {} registries", registries.len());
    }
    let result = remap(registries, mapping)?;

    let mut report = TransformReport {
        save,
        result,
        written: false,
        backup: None,
    };

    if report.result.total == 0 {
        info!("[remapper] Nothing to remap, leaving save untouched");
        return Ok(report);
    }

    if options.dry_run {
        info!(
            "[remapper] Dry run: {} entries would be remapped",
            report.result.total
        );
        return Ok(report);
    }

    // Encode before touching the disk so an encode failure leaves no trace
    let bytes = nbt::encode(&doc).map_err(|source| RemapError::EncodeFailure {
        path: report.save.clone(),
        source,
    })?;

    if options.backup {
        report.backup = Some(backup_save(&report.save)?);
    }
    replace_save(&report.save, &bytes)?;
    report.written = true;

    Ok(report)
}
