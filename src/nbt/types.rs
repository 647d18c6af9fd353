//! NBT tree types
//!
//! An owned, ordered node tree. Every container keeps the exact shape it was
//! decoded with so that an untouched tree encodes back to the same bytes.

use std::fmt;

use super::error::NbtError;

/// Tag ids as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TagId {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagId {
    pub fn from_byte(b: u8) -> Option<Self> {
        let id = match b {
            0 => TagId::End,
            1 => TagId::Byte,
            2 => TagId::Short,
            3 => TagId::Int,
            4 => TagId::Long,
            5 => TagId::Float,
            6 => TagId::Double,
            7 => TagId::ByteArray,
            8 => TagId::String,
            9 => TagId::List,
            10 => TagId::Compound,
            11 => TagId::IntArray,
            12 => TagId::LongArray,
            _ => return None,
        };
        Some(id)
    }

    pub fn name(self) -> &'static str {
        match self {
            TagId::End => "end",
            TagId::Byte => "byte",
            TagId::Short => "short",
            TagId::Int => "int",
            TagId::Long => "long",
            TagId::Float => "float",
            TagId::Double => "double",
            TagId::ByteArray => "byte array",
            TagId::String => "string",
            TagId::List => "list",
            TagId::Compound => "compound",
            TagId::IntArray => "int array",
            TagId::LongArray => "long array",
        }
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    /// String payload with unpaired surrogates, kept as its modified UTF-8
    /// bytes. Encodes back unchanged.
    RawString(Vec<u8>),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Node {
    pub fn tag(&self) -> TagId {
        match self {
            Node::Byte(_) => TagId::Byte,
            Node::Short(_) => TagId::Short,
            Node::Int(_) => TagId::Int,
            Node::Long(_) => TagId::Long,
            Node::Float(_) => TagId::Float,
            Node::Double(_) => TagId::Double,
            Node::ByteArray(_) => TagId::ByteArray,
            Node::String(_) | Node::RawString(_) => TagId::String,
            Node::List(_) => TagId::List,
            Node::Compound(_) => TagId::Compound,
            Node::IntArray(_) => TagId::IntArray,
            Node::LongArray(_) => TagId::LongArray,
        }
    }

    #[cfg(test)]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Node::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Node::Compound(c) => Some(c),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Homogeneous list. The element tag is fixed when the list is created and is
/// kept even when the list is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: TagId,
    items: Vec<Node>,
}

impl List {
    /// Empty list with the given element tag.
    pub fn new(element: TagId) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Build a list from nodes that must all carry `element`'s tag.
    pub fn from_items(element: TagId, items: Vec<Node>) -> Result<Self, NbtError> {
        if let Some(bad) = items.iter().find(|n| n.tag() != element) {
            return Err(NbtError::ListElementMismatch {
                expected: element,
                found: bad.tag(),
            });
        }
        Ok(Self { element, items })
    }

    pub fn element(&self) -> TagId {
        self.element
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }

    /// Mutable access to the items. Callers may rewrite values in place but
    /// must not change an item's variant.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.items.iter_mut()
    }
}

/// Ordered string-keyed record. Keys are unique; insertion order is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: Vec<(String, Node)>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace. A replaced key keeps its original position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        let key = key.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Node)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

/// Outer framing of a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    None,
    Gzip,
    Zlib,
}

/// A decoded file: the named root tag plus the framing it came in.
#[derive(Debug, Clone, PartialEq)]
pub struct NbtDocument {
    pub root_name: String,
    pub root: Node,
    pub compression: Compression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_keeps_insertion_order() {
        let mut c = Compound::new();
        c.insert("b", Node::Int(1));
        c.insert("a", Node::Int(2));
        c.insert("c", Node::Int(3));
        let keys: Vec<&str> = c.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn compound_insert_replaces_in_place() {
        let mut c = Compound::new();
        c.insert("x", Node::Int(1));
        c.insert("y", Node::Int(2));
        let old = c.insert("x", Node::Int(9));
        assert_eq!(old, Some(Node::Int(1)));
        let keys: Vec<&str> = c.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(c.get("x"), Some(&Node::Int(9)));
    }

    #[test]
    fn list_rejects_mixed_items() {
        let items = vec![Node::Int(1), Node::String("a".to_string())];
        assert!(matches!(
            List::from_items(TagId::Int, items),
            Err(NbtError::ListElementMismatch {
                expected: TagId::Int,
                found: TagId::String
            })
        ));
    }

    #[test]
    fn empty_list_keeps_element_tag() {
        let list = List::new(TagId::Compound);
        assert!(list.is_empty());
        assert_eq!(list.element(), TagId::Compound);
    }

    #[test]
    fn tag_id_from_byte_rejects_unknown() {
        assert_eq!(TagId::from_byte(10), Some(TagId::Compound));
        assert_eq!(TagId::from_byte(13), None);
    }
}
