// Pure NBT codec functions
// Bytes in, trees out (and back). No filesystem access.

pub mod decode;
pub mod encode;
pub mod mutf8;

pub use decode::decode_payload;
pub use encode::encode_payload;
