// Locating the registry table inside a decoded level.dat

use crate::error::{RemapError, Result};
use crate::nbt::{Compound, Node};

/// Compound keys leading from the root to the registry table
pub const REGISTRY_PATH: [&str; 2] = ["FML", "Registries"];

/// Walk `root` -> FML -> Registries. Every step must be a compound; the first
/// step that is missing or has another type is named in the error.
pub fn locate_registries(root: &mut Node) -> Result<&mut Compound> {
    let mut current = root
        .as_compound_mut()
        .ok_or_else(|| RemapError::MissingRegistryTable {
            segment: "<root>".to_string(),
        })?;

    for segment in REGISTRY_PATH {
        current = match current.get_mut(segment) {
            Some(Node::Compound(next)) => next,
            _ => {
                return Err(RemapError::MissingRegistryTable {
                    segment: segment.to_string(),
                });
            }
        };
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_with(fml: Option<Node>) -> Node {
        let mut root = Compound::new();
        root.insert("Data", Node::Compound(Compound::new()));
        if let Some(fml) = fml {
            root.insert("FML", fml);
        }
        Node::Compound(root)
    }

    fn missing_segment(result: Result<&mut Compound>) -> String {
        match result {
            Err(RemapError::MissingRegistryTable { segment }) => segment,
            other => panic!("expected MissingRegistryTable, got {:?}", other),
        }
    }

    #[test]
    fn finds_registries() {
        let mut registries = Compound::new();
        registries.insert("minecraft:item", Node::Compound(Compound::new()));
        let mut fml = Compound::new();
        fml.insert("Registries", Node::Compound(registries));
        let mut root = root_with(Some(Node::Compound(fml)));

        let table = locate_registries(&mut root).unwrap();
        assert!(table.contains_key("minecraft:item"));
    }

    #[test]
    fn missing_fml() {
        let mut root = root_with(None);
        assert_eq!(missing_segment(locate_registries(&mut root)), "FML");
    }

    #[test]
    fn fml_of_wrong_type() {
        let mut root = root_with(Some(Node::Int(1)));
        assert_eq!(missing_segment(locate_registries(&mut root)), "FML");
    }

    #[test]
    fn missing_registries() {
        let mut root = root_with(Some(Node::Compound(Compound::new())));
        assert_eq!(missing_segment(locate_registries(&mut root)), "Registries");
    }

    #[test]
    fn registries_of_wrong_type() {
        let mut fml = Compound::new();
        fml.insert("Registries", Node::String("nope".to_string()));
        let mut root = root_with(Some(Node::Compound(fml)));
        assert_eq!(missing_segment(locate_registries(&mut root)), "Registries");
    }

    #[test]
    fn non_compound_root() {
        let mut root = Node::List(crate::nbt::types::List::new(crate::nbt::types::TagId::End));
        assert_eq!(missing_segment(locate_registries(&mut root)), "<root>");
    }
}
