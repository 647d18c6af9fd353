// World save handling
//
// Picks which save file inside a world directory gets remapped, and owns the
// writes back to it:
//   - candidates are checked in order (level.dat, then level.dat_old by default)
//   - a candidate must exist and be non-empty; deeper corruption is left to the decoder
//   - rewritten bytes replace the save through a temp file + rename in the same directory
//   - an optional timestamped copy goes to <world>/remap_backups/ first

pub mod operations;
pub mod pure;

pub use operations::{backup_save, replace_save, select_save};
