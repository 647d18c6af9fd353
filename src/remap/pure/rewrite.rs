// Registry key rewriting
//
// Each registry compound under FML.Registries looks like:
//   "minecraft:item": { ids: [ { K: "modid:name", V: 42 }, ... ], ... }
// Only K strings are touched. Matching is on the whole qualified key.

use log::{debug, info};

use crate::error::{RemapError, Result};
use crate::mapping::MappingTable;
use crate::nbt::{Compound, Node};
use crate::remap::types::RemapResult;

/// Field holding the entry list of a registry
pub const IDS_KEY: &str = "ids";
/// Field holding an entry's qualified key
pub const KEY_FIELD: &str = "K";

/// Rewrite every entry key the mapping knows about, in place.
///
/// Registries the mapping does not name are skipped without being inspected.
/// On error the table may already be partly rewritten and must not be saved.
pub fn remap(registries: &mut Compound, mapping: &MappingTable) -> Result<RemapResult> {
    let mut result = RemapResult::default();

    for (name, registry) in registries.iter_mut() {
        if mapping.registry(name).is_none() {
            continue;
        }

        let count = remap_registry(name, registry, mapping)?;
        if count > 0 {
            info!("[remapper] {}: remapped {} entries", name, count);
        }
        result.total += count;
        result.per_registry.push((name.to_string(), count));
    }

    Ok(result)
}

fn remap_registry(name: &str, registry: &mut Node, mapping: &MappingTable) -> Result<usize> {
    let found = registry.tag();
    let Node::Compound(registry) = registry else {
        return Err(malformed_registry(
            name,
            format!("expected a compound, found {}", found),
        ));
    };

    let ids = match registry.get_mut(IDS_KEY) {
        Some(Node::List(ids)) => ids,
        Some(other) => {
            return Err(malformed_registry(
                name,
                format!("'{}' is a {}, expected a list", IDS_KEY, other.tag()),
            ));
        }
        None => {
            return Err(malformed_registry(name, format!("'{}' is missing", IDS_KEY)));
        }
    };

    if ids.is_empty() {
        debug!("[remapper] {}: no entries", name);
        return Ok(0);
    }

    let mut count = 0;
    for (index, entry) in ids.iter_mut().enumerate() {
        let Some(key) = entry_key(name, index, entry)? else {
            debug!("[remapper] {}: entry #{} has a non-Unicode key, skipped", name, index);
            continue;
        };
        if let Some(replacement) = mapping.lookup(name, key.as_str()) {
            debug!("[remapper] {}: {} -> {}", name, key, replacement);
            key.clear();
            key.push_str(replacement);
            count += 1;
        }
    }
    Ok(count)
}

/// The entry's K string, borrowed for rewriting. A key holding unpaired
/// surrogates cannot equal any mapping key and comes back as `None`.
fn entry_key<'a>(
    registry: &str,
    index: usize,
    entry: &'a mut Node,
) -> Result<Option<&'a mut String>> {
    let found = entry.tag();
    let Node::Compound(entry) = entry else {
        return Err(malformed_entry(
            registry,
            index,
            format!("expected a compound, found {}", found),
        ));
    };

    match entry.get_mut(KEY_FIELD) {
        Some(Node::String(key)) => Ok(Some(key)),
        Some(Node::RawString(_)) => Ok(None),
        Some(other) => Err(malformed_entry(
            registry,
            index,
            format!("'{}' is a {}, expected a string", KEY_FIELD, other.tag()),
        )),
        None => Err(malformed_entry(
            registry,
            index,
            format!("'{}' is missing", KEY_FIELD),
        )),
    }
}

fn malformed_registry(registry: &str, reason: String) -> RemapError {
    RemapError::MalformedRegistry {
        registry: registry.to_string(),
        reason,
    }
}

fn malformed_entry(registry: &str, index: usize, reason: String) -> RemapError {
    RemapError::MalformedEntry {
        registry: registry.to_string(),
        index,
        reason,
    }
}
