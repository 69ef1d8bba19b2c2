// pwforge platform paths
//
// Linux:   $XDG_CONFIG_HOME/pwforge, $XDG_DATA_HOME/pwforge (falling back to ~/.config, ~/.local/share)
// macOS:   ~/Library/Application Support/pwforge
// Windows: %APPDATA%/pwforge

use std::env;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "pwforge";

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "pwforge.db";

/// Joins the app directory onto `override_dir` if set, otherwise onto
/// `home` followed by `default_segments`.
fn resolve_dir(
    override_dir: Option<String>,
    home: Option<String>,
    default_segments: &[&str],
) -> PathBuf {
    match override_dir.filter(|d| !d.is_empty()) {
        Some(dir) => PathBuf::from(dir).join(APP_DIR_NAME),
        None => {
            let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
            for segment in default_segments {
                path.push(segment);
            }
            path.join(APP_DIR_NAME)
        }
    }
}

/// Returns the platform-specific configuration directory.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        resolve_dir(env::var("APPDATA").ok(), env::var("USERPROFILE").ok(), &["AppData", "Roaming"])
    }
    #[cfg(target_os = "macos")]
    {
        resolve_dir(None, env::var("HOME").ok(), &["Library", "Application Support"])
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        resolve_dir(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok(), &[".config"])
    }
}

/// Returns the platform-specific data directory.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        resolve_dir(env::var("APPDATA").ok(), env::var("USERPROFILE").ok(), &["AppData", "Roaming"])
    }
    #[cfg(target_os = "macos")]
    {
        resolve_dir(None, env::var("HOME").ok(), &["Library", "Application Support"])
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        resolve_dir(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok(), &[".local", "share"])
    }
}

/// Default location of the settings file.
pub fn default_settings_path() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE_NAME)
}

/// Default location of the history database.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE_NAME)
}
