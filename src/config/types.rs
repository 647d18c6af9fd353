use serde::{Deserialize, Serialize};

/// Settings read from settings.json. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemapperConfig {
    /// File names checked inside the world directory, in order
    pub save_candidates: Vec<String>,
    /// Copy the selected save into remap_backups/ before overwriting it
    pub backup_before_write: bool,
}

impl Default for RemapperConfig {
    fn default() -> Self {
        Self {
            save_candidates: vec!["level.dat".to_string(), "level.dat_old".to_string()],
            backup_before_write: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg: RemapperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, RemapperConfig::default());
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let cfg: RemapperConfig =
            serde_json::from_str(r#"{ "backup_before_write": true }"#).unwrap();
        assert!(cfg.backup_before_write);
        assert_eq!(cfg.save_candidates, vec!["level.dat", "level.dat_old"]);
    }
}
