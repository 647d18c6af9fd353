// Registry ID mapping tables
// Loaded once from a JSON or YAML document and read-only afterwards.

pub mod operations;
pub mod pure;
pub mod types;

pub use operations::load_mapping;
pub use types::MappingTable;
