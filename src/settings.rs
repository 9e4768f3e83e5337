//! Startup settings
//!
//! Read once at startup from an optional JSON file; every field falls back to
//! its default when missing.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SettingsResult;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Logical window width in pixels
    pub window_width: u32,
    /// Logical window height in pixels
    pub window_height: u32,

    // === Level ===
    /// Tile grid loaded into the first (and only) level
    pub level_path: PathBuf,
    /// Fraction of the window height the brick area occupies
    pub level_height_fraction: f32,

    // === Input ===
    /// Paddle speed (units/second) while a move signal is held
    pub paddle_speed: f32,

    // === Headless driver ===
    /// Frames to simulate before the driver closes
    pub frame_budget: u32,
    /// Let the simulation steer and launch by itself
    pub idle_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,

            level_path: PathBuf::from("levels/level_one.lvl"),
            level_height_fraction: 1.0 / 3.0,

            paddle_speed: 500.0,

            frame_budget: 60 * 60,
            idle_mode: true,
        }
    }
}

impl Settings {
    /// Environment variable naming an optional settings file
    pub const ENV_VAR: &'static str = "BREAKOUT_SETTINGS";

    /// Window dimensions as a vector
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    /// Target area the level's tile grid is stretched over
    pub fn level_size(&self) -> Vec2 {
        Vec2::new(
            self.window_width as f32,
            self.window_height as f32 * self.level_height_fraction,
        )
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }

    /// Load from the file named by `BREAKOUT_SETTINGS`, or use defaults.
    ///
    /// A named file that cannot be read or parsed is an error: the caller asked
    /// for it explicitly.
    pub fn load() -> SettingsResult<Self> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => {
                let settings = Self::load_from_file(&path)?;
                log::info!("Loaded settings from {:?}", path);
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Collect human-readable problems with these settings
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window_width == 0 || self.window_height == 0 {
            w.push(format!(
                "window dimensions must be > 0 (got {}x{})",
                self.window_width, self.window_height
            ));
        }
        if !(self.level_height_fraction > 0.0 && self.level_height_fraction <= 1.0) {
            w.push(format!(
                "level_height_fraction {} outside (0, 1]",
                self.level_height_fraction
            ));
        }
        if self.paddle_speed < 0.0 {
            w.push(format!("paddle_speed {} negative", self.paddle_speed));
        }
        if self.frame_budget == 0 {
            w.push("frame_budget is 0, nothing will be simulated".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_window_and_level_area() {
        let s = Settings::default();
        assert_eq!(s.window_size(), Vec2::new(800.0, 600.0));
        assert!((s.level_size().y - 200.0).abs() < 0.001);
        assert!(s.validate().is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "window_width": 1024, "idle_mode": false }"#)
            .unwrap();

        let s = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(s.window_width, 1024);
        assert!(!s.idle_mode);
        assert_eq!(s.window_height, 600);
        assert_eq!(s.level_path, PathBuf::from("levels/level_one.lvl"));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ window_width: ").unwrap_err();
        assert!(matches!(err, crate::SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, crate::SettingsError::Io(_)));
    }

    #[test]
    fn test_validate_flags_problems() {
        let bad = Settings {
            window_width: 0,
            level_height_fraction: 1.5,
            frame_budget: 0,
            ..Default::default()
        };
        assert_eq!(bad.validate().len(), 3);
    }
}
