//! Configuration paths for rainbow-braces
//!
//! All files live under:
//! - Unix/macOS: `~/.config/rainbow-braces/`
//! - Windows: `%APPDATA%\rainbow-braces\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "rainbow-braces";

/// Prefix of the daily rotated log files (`rainbow.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "rainbow.log";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/rainbow-braces`
///   - Else: `~/.config/rainbow-braces`
///
/// Windows:
///   - `%APPDATA%\rainbow-braces`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/rainbow-braces/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/rainbow-braces/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_the_app_dir() {
        let (Some(dir), Some(file), Some(logs)) = (config_dir(), config_file(), logs_dir()) else {
            // No home directory in this environment
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert_eq!(file.file_name().and_then(|n| n.to_str()), Some("config.yaml"));
        assert_eq!(logs.parent(), Some(dir.as_path()));
    }
}
