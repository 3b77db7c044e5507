//! Settings persistence using TOML
//!
//! Stored at ~/.config/gridfall/settings.toml (or platform equivalent).
//! A missing or unreadable file silently falls back to the defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Key bindings
    pub keys: KeyBindings,
    /// Gameplay settings
    pub gameplay: GameplaySettings,
    /// Visual settings
    pub visual: VisualSettings,
}

/// Key bindings, stored as key-name strings for easy editing.
/// Each action accepts one or more keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub soft_drop: Vec<String>,
    pub rotate_cw: Vec<String>,
    pub rotate_ccw: Vec<String>,
    pub restart: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["Left".to_string()],
            move_right: vec!["Right".to_string()],
            soft_drop: vec!["Down".to_string()],
            rotate_cw: vec!["w".to_string(), "Up".to_string()],
            rotate_ccw: vec!["q".to_string()],
            restart: vec!["r".to_string()],
            quit: vec!["Esc".to_string()],
        }
    }
}

/// Gameplay settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    /// Time between gravity steps, in milliseconds
    pub drop_interval_ms: u64,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            drop_interval_ms: 500,
        }
    }
}

/// Visual settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    /// Block style: "solid", "bracket", "round"
    pub block_style: String,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            block_style: "solid".to_string(),
        }
    }
}

impl VisualSettings {
    /// Get the two-column block glyph for the configured style
    pub fn block_char(&self) -> &'static str {
        match self.block_style.as_str() {
            "bracket" => "[]",
            "round" => "()",
            _ => "██", // "solid" or default
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "gridfall", "gridfall").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or create default
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };
        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;
        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;
        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_and_interval() {
        let settings = Settings::default();
        assert_eq!(settings.keys.rotate_ccw, vec!["q"]);
        assert_eq!(settings.keys.rotate_cw[0], "w");
        assert_eq!(settings.gameplay.drop_interval_ms, 500);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [gameplay]
            drop_interval_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(settings.gameplay.drop_interval_ms, 250);
        assert_eq!(settings.keys.move_left, vec!["Left"]);
        assert_eq!(settings.visual.block_style, "solid");
    }

    #[test]
    fn block_style_fallback() {
        let mut visual = VisualSettings::default();
        assert_eq!(visual.block_char(), "██");
        visual.block_style = "bracket".to_string();
        assert_eq!(visual.block_char(), "[]");
        visual.block_style = "nonsense".to_string();
        assert_eq!(visual.block_char(), "██");
    }
}
