// Framing operations for NBT documents
// Detects and applies the gzip/zlib wrapper around a payload.

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression as Level;
use std::io::{Read, Write};

use super::error::NbtError;
use super::pure::{decode_payload, encode_payload};
use super::types::{Compression, NbtDocument};

/// Guess the framing from the leading bytes.
pub fn detect_compression(bytes: &[u8]) -> Compression {
    match bytes {
        [0x1f, 0x8b, ..] => Compression::Gzip,
        [cmf, flg, ..] if (cmf & 0x0f) == 8 && ((u16::from(*cmf) << 8) | u16::from(*flg)) % 31 == 0 => {
            Compression::Zlib
        }
        _ => Compression::None,
    }
}

/// Decode a whole file's contents.
pub fn decode(bytes: &[u8]) -> Result<NbtDocument, NbtError> {
    let compression = detect_compression(bytes);
    let (root_name, root) = match compression {
        Compression::None => decode_payload(bytes)?,
        Compression::Gzip => {
            let mut payload = Vec::new();
            GzDecoder::new(bytes)
                .read_to_end(&mut payload)
                .map_err(NbtError::Compression)?;
            decode_payload(&payload)?
        }
        Compression::Zlib => {
            let mut payload = Vec::new();
            ZlibDecoder::new(bytes)
                .read_to_end(&mut payload)
                .map_err(NbtError::Compression)?;
            decode_payload(&payload)?
        }
    };

    Ok(NbtDocument {
        root_name,
        root,
        compression,
    })
}

/// Encode a document using the framing it was decoded with.
pub fn encode(doc: &NbtDocument) -> Result<Vec<u8>, NbtError> {
    let payload = encode_payload(&doc.root_name, &doc.root)?;
    let bytes = match doc.compression {
        Compression::None => payload,
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Level::default());
            encoder
                .write_all(&payload)
                .map_err(NbtError::Compression)?;
            encoder.finish().map_err(NbtError::Compression)?
        }
        Compression::Zlib => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Level::default());
            encoder
                .write_all(&payload)
                .map_err(NbtError::Compression)?;
            encoder.finish().map_err(NbtError::Compression)?
        }
    };
    Ok(bytes)
}
