//! Codec errors

use thiserror::Error;

use super::types::TagId;

#[derive(Debug, Error)]
pub enum NbtError {
    #[error("unexpected end of data")]
    UnexpectedEof,

    #[error("unknown tag id {0}")]
    UnknownTag(u8),

    #[error("root tag is {0}, expected a named tag")]
    InvalidRoot(TagId),

    #[error("negative length {0}")]
    NegativeLength(i32),

    #[error("list of {0} end tags")]
    EndList(i32),

    #[error("invalid modified UTF-8 in string")]
    InvalidString,

    #[error("string of {0} bytes exceeds the 65535 byte limit")]
    StringTooLong(usize),

    #[error("{0} elements exceed the i32 length limit")]
    LengthOverflow(usize),

    #[error("nesting deeper than {0} levels")]
    DepthExceeded(usize),

    #[error("duplicate key '{0}' in compound")]
    DuplicateKey(String),

    #[error("{0} trailing bytes after root tag")]
    TrailingBytes(usize),

    #[error("list of {expected} holds a {found}")]
    ListElementMismatch { expected: TagId, found: TagId },

    #[error("compression stream error: {0}")]
    Compression(#[source] std::io::Error),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}
