//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "HireAI";

/// Get the base application directory (`HireAI`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// Get the config file path.
pub fn get_config_path() -> PathBuf {
    get_app_dir()
        .unwrap_or_else(|_| PathBuf::from(APP_DIR))
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_app_dir_is_under_local_share() {
        let Ok(home) = std::env::var("HOME") else {
            return;
        };
        let expected = PathBuf::from(home).join(".local/share").join(APP_DIR);
        assert_eq!(get_app_dir().unwrap(), expected);
        assert_eq!(get_config_path(), expected.join("config.json"));
    }
}
