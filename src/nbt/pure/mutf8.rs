// Java "modified UTF-8" as used by NBT strings
// NUL is written as C0 80 and characters outside the BMP as two 3-byte
// surrogate sequences. Only the canonical form is accepted so that a decoded
// string always encodes back to the bytes it came from.
//
// Java strings may hold unpaired surrogates, which have no `String` form.
// `decode` rejects them; `decode_units` still accepts them.

use crate::nbt::error::NbtError;

pub fn decode(bytes: &[u8]) -> Result<String, NbtError> {
    // Fast path: plain ASCII without NUL is identical in both encodings
    if bytes.iter().all(|&b| b != 0 && b < 0x80) {
        return String::from_utf8(bytes.to_vec()).map_err(|_| NbtError::InvalidString);
    }

    String::from_utf16(&decode_units(bytes)?).map_err(|_| NbtError::InvalidString)
}

/// UTF-16 code units of a canonical modified UTF-8 sequence, surrogates
/// included as they are.
pub fn decode_units(bytes: &[u8]) -> Result<Vec<u16>, NbtError> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != 0 && b < 0x80 {
            units.push(b as u16);
            i += 1;
        } else if b & 0xE0 == 0xC0 {
            let b2 = continuation(bytes, i + 1)?;
            let unit = ((b as u16 & 0x1F) << 6) | b2;
            if unit != 0 && unit < 0x80 {
                return Err(NbtError::InvalidString);
            }
            units.push(unit);
            i += 2;
        } else if b & 0xF0 == 0xE0 {
            let b2 = continuation(bytes, i + 1)?;
            let b3 = continuation(bytes, i + 2)?;
            let unit = ((b as u16 & 0x0F) << 12) | (b2 << 6) | b3;
            if unit < 0x800 {
                return Err(NbtError::InvalidString);
            }
            units.push(unit);
            i += 3;
        } else {
            return Err(NbtError::InvalidString);
        }
    }

    Ok(units)
}

fn continuation(bytes: &[u8], at: usize) -> Result<u16, NbtError> {
    match bytes.get(at) {
        Some(&b) if b & 0xC0 == 0x80 => Ok((b & 0x3F) as u16),
        _ => Err(NbtError::InvalidString),
    }
}

pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
    out
}
