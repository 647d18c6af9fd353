use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap_or_default()));

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config_home).join("remapper");
    }
    PATH_HOME.join(".config/remapper")
});

/// Settings file read when no `--config` is given
pub static PATH_SETTINGS: LazyLock<PathBuf> = LazyLock::new(|| PATH_CONFIG.join("settings.json"));

/// Expand ~ and $HOME in path
pub fn expand_path(path: &str) -> PathBuf {
    let mut s = path.to_string();
    if s == "~" || s.starts_with("~/") {
        s = s.replacen("~", &PATH_HOME.to_string_lossy(), 1);
    }
    s = s.replace("$HOME", &PATH_HOME.to_string_lossy());
    PathBuf::from(s)
}
