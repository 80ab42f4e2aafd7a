use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Event poll interval and clock refresh, in milliseconds
    pub tick_ms: u64,
    /// Log filter used when TASKFLOW_LOG is not set
    pub log_level: String,
    /// chrono format string for the header clock
    pub clock_format: String,
    /// chrono format string for the header date
    pub date_format: String,
    /// Capture the mouse for drag-and-drop
    pub mouse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            log_level: "info".to_string(),
            clock_format: "%H:%M:%S".to_string(),
            date_format: "%A, %d %B %Y".to_string(),
            mouse: true,
        }
    }
}

/// Load settings, returning defaults if the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    let settings: Settings = toml::from_str(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    Ok(settings)
}

/// Write settings, e.g. the defaults on `init`
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let content = toml::to_string_pretty(settings).context("Failed to encode settings")?;
    crate::persistence::atomic_write(path, &content).context("Failed to write settings")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let settings = load_settings(temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = 1000\nmouse = false\n").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.tick_ms, 1000);
        assert!(!settings.mouse);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.clock_format = "%H:%M".to_string();
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_invalid_settings_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = \"fast\"").unwrap();

        assert!(load_settings(&path).is_err());
    }
}
