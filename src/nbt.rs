//! Minecraft NBT codec
//!
//! Decodes `level.dat` style files into an owned [`Node`] tree and encodes
//! them back. Compound key order, list element tags (including on empty
//! lists), the root name and the outer gzip/zlib framing all survive a
//! decode/encode cycle, so an unmodified tree produces the same payload bytes.

pub mod error;
pub mod operations;
pub mod pure;
pub mod types;

pub use error::NbtError;
pub use operations::{decode, encode};
pub use types::{Compound, Node};
