// Filesystem operations for world saves

use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::NamedTempFile;

use super::pure::{backup_path, candidate_paths};
use crate::error::{RemapError, Result};

/// Return the first candidate that exists as a non-empty file
pub fn select_save(world: &Path, names: &[String]) -> Result<PathBuf> {
    let tried = candidate_paths(world, names);

    for candidate in &tried {
        match std::fs::metadata(candidate) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => {
                info!("[remapper] Using save: {}", candidate.display());
                return Ok(candidate.clone());
            }
            Ok(meta) if meta.is_file() => {
                debug!("[remapper] Skipping empty save: {}", candidate.display());
            }
            Ok(_) => {
                debug!("[remapper] Skipping non-file: {}", candidate.display());
            }
            Err(e) => {
                debug!("[remapper] Skipping {}: {}", candidate.display(), e);
            }
        }
    }

    Err(RemapError::NoValidSaveFound {
        world: world.to_path_buf(),
        tried,
    })
}

/// Copy the save to a timestamped file under remap_backups/.
/// An existing backup is never overwritten; later copies within the same
/// second get a numbered suffix.
pub fn backup_save(save: &Path) -> Result<PathBuf> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let first = backup_path(save, timestamp, 0);
    if let Some(parent) = first.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RemapError::io(parent, e))?;
    }

    let mut source = File::open(save).map_err(|e| RemapError::io(save, e))?;
    let mut attempt = 0;
    let (dest, mut file) = loop {
        let dest = backup_path(save, timestamp, attempt);
        match OpenOptions::new().write(true).create_new(true).open(&dest) {
            Ok(file) => break (dest, file),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("[remapper] Backup {} exists, trying next name", dest.display());
                attempt += 1;
            }
            Err(e) => return Err(RemapError::io(&dest, e)),
        }
    };

    info!("[remapper] Backing up: {}", dest.display());
    std::io::copy(&mut source, &mut file).map_err(|e| RemapError::io(&dest, e))?;
    file.sync_all().map_err(|e| RemapError::io(&dest, e))?;

    Ok(dest)
}

/// Replace `save` with `bytes`. The data is written to a temp file next to
/// the save, flushed to disk and renamed over it, so an interrupted run leaves
/// the previous contents in place. The save's permissions carry over to the
/// new file.
pub fn replace_save(save: &Path, bytes: &[u8]) -> Result<()> {
    let dir = save.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RemapError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| RemapError::io(tmp.path(), e))?;

    match std::fs::metadata(save) {
        Ok(meta) => tmp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| RemapError::io(tmp.path(), e))?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(RemapError::io(save, e)),
    }

    tmp.as_file()
        .sync_all()
        .map_err(|e| RemapError::io(tmp.path(), e))?;

    tmp.persist(save)
        .map_err(|e| RemapError::io(save, e.error))?;

    debug!("[remapper] Wrote {} bytes to {}", bytes.len(), save.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["level.dat".to_string(), "level.dat_old".to_string()]
    }

    #[test]
    fn prefers_primary_save() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("level.dat"), b"a").unwrap();
        std::fs::write(dir.path().join("level.dat_old"), b"b").unwrap();
        let picked = select_save(dir.path(), &names()).unwrap();
        assert_eq!(picked, dir.path().join("level.dat"));
    }

    #[test]
    fn empty_primary_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("level.dat"), b"").unwrap();
        std::fs::write(dir.path().join("level.dat_old"), b"b").unwrap();
        let picked = select_save(dir.path(), &names()).unwrap();
        assert_eq!(picked, dir.path().join("level.dat_old"));
    }

    #[test]
    fn missing_primary_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("level.dat_old"), b"b").unwrap();
        let picked = select_save(dir.path(), &names()).unwrap();
        assert_eq!(picked, dir.path().join("level.dat_old"));
    }

    #[test]
    fn directory_named_like_save_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("level.dat")).unwrap();
        std::fs::write(dir.path().join("level.dat_old"), b"b").unwrap();
        let picked = select_save(dir.path(), &names()).unwrap();
        assert_eq!(picked, dir.path().join("level.dat_old"));
    }

    #[test]
    fn nothing_usable_lists_candidates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("level.dat"), b"").unwrap();
        match select_save(dir.path(), &names()) {
            Err(RemapError::NoValidSaveFound { tried, .. }) => {
                assert_eq!(tried.len(), 2);
                assert_eq!(tried[0], dir.path().join("level.dat"));
            }
            other => panic!("expected NoValidSaveFound, got {:?}", other),
        }
    }

    #[test]
    fn replace_overwrites_contents() {
        let dir = tempfile::tempdir().unwrap();
        let save = dir.path().join("level.dat");
        std::fs::write(&save, b"old contents").unwrap();
        replace_save(&save, b"new").unwrap();
        assert_eq!(std::fs::read(&save).unwrap(), b"new");
        // no stray temp files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn backup_copies_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let save = dir.path().join("level.dat");
        std::fs::write(&save, b"payload").unwrap();
        let backup = backup_save(&save).unwrap();
        assert!(backup.starts_with(dir.path().join("remap_backups")));
        assert_eq!(std::fs::read(&backup).unwrap(), b"payload");
    }

    #[test]
    #[cfg(unix)]
    fn replace_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let save = dir.path().join("level.dat");
        std::fs::write(&save, b"old contents").unwrap();
        std::fs::set_permissions(&save, std::fs::Permissions::from_mode(0o644)).unwrap();

        replace_save(&save, b"new").unwrap();

        let mode = std::fs::metadata(&save).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn replace_creates_missing_save() {
        let dir = tempfile::tempdir().unwrap();
        let save = dir.path().join("level.dat");
        replace_save(&save, b"fresh").unwrap();
        assert_eq!(std::fs::read(&save).unwrap(), b"fresh");
    }

    #[test]
    fn repeated_backups_never_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let save = dir.path().join("level.dat");
        std::fs::write(&save, b"original").unwrap();
        let first = backup_save(&save).unwrap();

        std::fs::write(&save, b"modified").unwrap();
        let second = backup_save(&save).unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), b"original");
        assert_eq!(std::fs::read(&second).unwrap(), b"modified");
    }
}
