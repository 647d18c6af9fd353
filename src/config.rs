pub mod operations;
pub mod types;

// Re-export operations
pub use operations::load_cfg;
