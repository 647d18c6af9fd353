// Decoding of uncompressed NBT payloads
// Input is a complete byte slice; nothing here touches the filesystem.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

use super::mutf8;
use crate::nbt::error::NbtError;
use crate::nbt::types::{Compound, List, Node, TagId};

/// Same limit the game applies when reading NBT.
pub const MAX_DEPTH: usize = 512;

/// Decode a single named root tag. Returns the root name and its node.
pub fn decode_payload(bytes: &[u8]) -> Result<(String, Node), NbtError> {
    let mut reader = Reader::new(bytes);

    let tag = reader.tag()?;
    if tag == TagId::End {
        return Err(NbtError::InvalidRoot(tag));
    }
    let name = reader.string()?;
    let root = reader.payload(tag, 0)?;

    let remaining = reader.remaining();
    if remaining > 0 {
        return Err(NbtError::TrailingBytes(remaining));
    }
    Ok((name, root))
}

struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len();
        len.saturating_sub(self.cursor.position() as usize)
    }

    fn tag(&mut self) -> Result<TagId, NbtError> {
        let b = self.cursor.read_u8().map_err(eof)?;
        TagId::from_byte(b).ok_or(NbtError::UnknownTag(b))
    }

    /// Read an i32 length prefix and check it against the bytes left, so a
    /// corrupt length cannot trigger a huge allocation.
    fn length(&mut self, element_size: usize) -> Result<usize, NbtError> {
        let len = self.cursor.read_i32::<BigEndian>().map_err(eof)?;
        if len < 0 {
            return Err(NbtError::NegativeLength(len));
        }
        let len = len as usize;
        if len.saturating_mul(element_size) > self.remaining() {
            return Err(NbtError::UnexpectedEof);
        }
        Ok(len)
    }

    /// Length-prefixed string bytes, still in modified UTF-8.
    fn raw_string(&mut self) -> Result<&'a [u8], NbtError> {
        let len = self.cursor.read_u16::<BigEndian>().map_err(eof)? as usize;
        if len > self.remaining() {
            return Err(NbtError::UnexpectedEof);
        }
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.cursor.position() as usize;
        self.cursor.set_position((start + len) as u64);
        Ok(&data[start..start + len])
    }

    /// Names and keys must be valid Unicode.
    fn string(&mut self) -> Result<String, NbtError> {
        mutf8::decode(self.raw_string()?)
    }

    /// String values may also carry unpaired surrogates.
    fn string_value(&mut self) -> Result<Node, NbtError> {
        let raw = self.raw_string()?;
        match mutf8::decode(raw) {
            Ok(s) => Ok(Node::String(s)),
            Err(_) => {
                mutf8::decode_units(raw)?;
                Ok(Node::RawString(raw.to_vec()))
            }
        }
    }

    fn payload(&mut self, tag: TagId, depth: usize) -> Result<Node, NbtError> {
        let node = match tag {
            TagId::End => return Err(NbtError::InvalidRoot(tag)),
            TagId::Byte => Node::Byte(self.cursor.read_i8().map_err(eof)?),
            TagId::Short => Node::Short(self.cursor.read_i16::<BigEndian>().map_err(eof)?),
            TagId::Int => Node::Int(self.cursor.read_i32::<BigEndian>().map_err(eof)?),
            TagId::Long => Node::Long(self.cursor.read_i64::<BigEndian>().map_err(eof)?),
            TagId::Float => Node::Float(self.cursor.read_f32::<BigEndian>().map_err(eof)?),
            TagId::Double => Node::Double(self.cursor.read_f64::<BigEndian>().map_err(eof)?),
            TagId::ByteArray => {
                let len = self.length(1)?;
                let mut out = vec![0i8; len];
                self.cursor.read_i8_into(&mut out).map_err(eof)?;
                Node::ByteArray(out)
            }
            TagId::String => self.string_value()?,
            TagId::List => Node::List(self.list(depth + 1)?),
            TagId::Compound => Node::Compound(self.compound(depth + 1)?),
            TagId::IntArray => {
                let len = self.length(4)?;
                let mut out = vec![0i32; len];
                self.cursor
                    .read_i32_into::<BigEndian>(&mut out)
                    .map_err(eof)?;
                Node::IntArray(out)
            }
            TagId::LongArray => {
                let len = self.length(8)?;
                let mut out = vec![0i64; len];
                self.cursor
                    .read_i64_into::<BigEndian>(&mut out)
                    .map_err(eof)?;
                Node::LongArray(out)
            }
        };
        Ok(node)
    }

    fn list(&mut self, depth: usize) -> Result<List, NbtError> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthExceeded(MAX_DEPTH));
        }
        let element = self.tag()?;
        let len = self.cursor.read_i32::<BigEndian>().map_err(eof)?;
        if len < 0 {
            return Err(NbtError::NegativeLength(len));
        }
        if element == TagId::End {
            if len > 0 {
                return Err(NbtError::EndList(len));
            }
            return Ok(List::new(element));
        }

        // Every element takes at least one byte
        let len = len as usize;
        if len > self.remaining() {
            return Err(NbtError::UnexpectedEof);
        }

        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(self.payload(element, depth)?);
        }
        List::from_items(element, items)
    }

    fn compound(&mut self, depth: usize) -> Result<Compound, NbtError> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthExceeded(MAX_DEPTH));
        }
        let mut compound = Compound::new();
        loop {
            let tag = self.tag()?;
            if tag == TagId::End {
                return Ok(compound);
            }
            let key = self.string()?;
            if compound.contains_key(&key) {
                return Err(NbtError::DuplicateKey(key));
            }
            let value = self.payload(tag, depth)?;
            compound.insert(key, value);
        }
    }
}

fn eof(_: std::io::Error) -> NbtError {
    NbtError::UnexpectedEof
}
