use crate::config::types::RemapperConfig;

use log::warn;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load settings from `path`. A missing file yields the defaults; a file that
/// does not parse is reported and also falls back to the defaults.
pub fn load_cfg(path: &Path) -> RemapperConfig {
    let Ok(file) = File::open(path) else {
        return RemapperConfig::default();
    };

    match serde_json::from_reader::<_, RemapperConfig>(BufReader::new(file)) {
        Ok(mut config) => {
            if config.save_candidates.is_empty() {
                warn!(
                    "[remapper] {} lists no save candidates, using defaults",
                    path.display()
                );
                config.save_candidates = RemapperConfig::default().save_candidates;
            }
            config
        }
        Err(e) => {
            warn!(
                "[remapper] Ignoring unreadable settings {}: {}",
                path.display(),
                e
            );
            RemapperConfig::default()
        }
    }
}
