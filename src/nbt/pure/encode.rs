// Encoding of NBT trees into uncompressed payload bytes

use byteorder::{BigEndian, WriteBytesExt};

use super::mutf8;
use crate::nbt::error::NbtError;
use crate::nbt::types::{Compound, List, Node, TagId};

/// Encode a named root tag.
pub fn encode_payload(name: &str, root: &Node) -> Result<Vec<u8>, NbtError> {
    let mut out = Vec::new();
    out.push(root.tag() as u8);
    write_string(&mut out, name)?;
    write_payload(&mut out, root)?;
    Ok(out)
}

fn write_payload(out: &mut Vec<u8>, node: &Node) -> Result<(), NbtError> {
    // Writes into a Vec never fail
    match node {
        Node::Byte(v) => out.write_i8(*v)?,
        Node::Short(v) => out.write_i16::<BigEndian>(*v)?,
        Node::Int(v) => out.write_i32::<BigEndian>(*v)?,
        Node::Long(v) => out.write_i64::<BigEndian>(*v)?,
        Node::Float(v) => out.write_f32::<BigEndian>(*v)?,
        Node::Double(v) => out.write_f64::<BigEndian>(*v)?,
        Node::ByteArray(values) => {
            write_length(out, values.len())?;
            for v in values {
                out.write_i8(*v)?;
            }
        }
        Node::String(s) => write_string(out, s)?,
        Node::RawString(bytes) => write_raw_string(out, bytes)?,
        Node::List(list) => write_list(out, list)?,
        Node::Compound(compound) => write_compound(out, compound)?,
        Node::IntArray(values) => {
            write_length(out, values.len())?;
            for v in values {
                out.write_i32::<BigEndian>(*v)?;
            }
        }
        Node::LongArray(values) => {
            write_length(out, values.len())?;
            for v in values {
                out.write_i64::<BigEndian>(*v)?;
            }
        }
    }
    Ok(())
}

fn write_list(out: &mut Vec<u8>, list: &List) -> Result<(), NbtError> {
    out.push(list.element() as u8);
    write_length(out, list.len())?;
    for item in list.iter() {
        if item.tag() != list.element() {
            return Err(NbtError::ListElementMismatch {
                expected: list.element(),
                found: item.tag(),
            });
        }
        write_payload(out, item)?;
    }
    Ok(())
}

fn write_compound(out: &mut Vec<u8>, compound: &Compound) -> Result<(), NbtError> {
    for (key, value) in compound.iter() {
        out.push(value.tag() as u8);
        write_string(out, key)?;
        write_payload(out, value)?;
    }
    out.push(TagId::End as u8);
    Ok(())
}

fn write_string(out: &mut Vec<u8>, s: &str) -> Result<(), NbtError> {
    write_raw_string(out, &mutf8::encode(s))
}

fn write_raw_string(out: &mut Vec<u8>, bytes: &[u8]) -> Result<(), NbtError> {
    let len = u16::try_from(bytes.len()).map_err(|_| NbtError::StringTooLong(bytes.len()))?;
    out.write_u16::<BigEndian>(len)?;
    out.extend_from_slice(bytes);
    Ok(())
}

fn write_length(out: &mut Vec<u8>, len: usize) -> Result<(), NbtError> {
    let len = i32::try_from(len).map_err(|_| NbtError::LengthOverflow(len))?;
    out.write_i32::<BigEndian>(len)?;
    Ok(())
}
