// Pure tree transforms for registry remapping
// Operate on decoded trees only, no I/O.

pub mod locate;
pub mod rewrite;

pub use locate::locate_registries;
pub use rewrite::remap;
