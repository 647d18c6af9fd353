// Pure path helpers for world saves

use std::path::{Path, PathBuf};

/// Directory inside the world that receives pre-write backups
pub const BACKUP_DIR: &str = "remap_backups";

/// Candidate save files inside `world`, in the order they are checked
pub fn candidate_paths(world: &Path, names: &[String]) -> Vec<PathBuf> {
    names.iter().map(|name| world.join(name)).collect()
}

/// Backup destination for `save`, stamped with `timestamp` seconds.
/// `attempt` > 0 adds a suffix for saves backed up more than once a second.
pub fn backup_path(save: &Path, timestamp: u64, attempt: u32) -> PathBuf {
    let world = save.parent().unwrap_or_else(|| Path::new("."));
    let name = save
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "level.dat".to_string());
    let file = match attempt {
        0 => format!("{}_{}", name, timestamp),
        n => format!("{}_{}.{}", name, timestamp, n),
    };
    world.join(BACKUP_DIR).join(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_keep_order() {
        let names = vec!["level.dat".to_string(), "level.dat_old".to_string()];
        let paths = candidate_paths(Path::new("/w"), &names);
        assert_eq!(
            paths,
            vec![PathBuf::from("/w/level.dat"), PathBuf::from("/w/level.dat_old")]
        );
    }

    #[test]
    fn backup_goes_under_world() {
        let p = backup_path(Path::new("/w/level.dat_old"), 42, 0);
        assert_eq!(p, PathBuf::from("/w/remap_backups/level.dat_old_42"));
    }

    #[test]
    fn later_attempts_get_a_suffix() {
        let p = backup_path(Path::new("/w/level.dat"), 42, 2);
        assert_eq!(p, PathBuf::from("/w/remap_backups/level.dat_42.2"));
    }
}
