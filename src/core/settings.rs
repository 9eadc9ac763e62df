//! Display settings loaded from an optional TOML file.
//!
//! These cover presentation only (window title, resolution, caption
//! overlay). The scene itself is fully hard-coded.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/display.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawDisplayConfig {
    #[serde(default)]
    window: RawWindowSection,
    #[serde(default)]
    overlay: RawOverlaySection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawWindowSection {
    title: String,
    width: u32,
    height: u32,
}

impl Default for RawWindowSection {
    fn default() -> Self {
        Self {
            title: "Desert Rally Flyover".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawOverlaySection {
    show_caption: bool,
}

impl Default for RawOverlaySection {
    fn default() -> Self {
        Self { show_caption: true }
    }
}

/// Resolved display settings used by the window and the caption overlay.
#[derive(Resource, Debug, Clone)]
pub struct DisplaySettings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub show_caption: bool,
}

impl DisplaySettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        if !path.exists() {
            return RawDisplayConfig::default().into();
        }

        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawDisplayConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    // Loaded before the App (and its log subscriber) exists.
                    eprintln!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawDisplayConfig::default().into()
                }
            },
            Err(err) => {
                eprintln!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawDisplayConfig::default().into()
            }
        }
    }
}

impl From<RawDisplayConfig> for DisplaySettings {
    fn from(value: RawDisplayConfig) -> Self {
        let window = value.window;
        Self {
            window_title: window.title,
            window_width: window.width.max(1),
            window_height: window.height.max(1),
            show_caption: value.overlay.show_caption,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_caption() {
        let settings: DisplaySettings = RawDisplayConfig::default().into();
        assert!(settings.show_caption);
        assert_eq!(settings.window_width, 1280);
        assert_eq!(settings.window_height, 720);
    }

    #[test]
    fn partial_config_keeps_missing_sections_default() {
        let raw: RawDisplayConfig = toml::from_str(
            r#"
            [window]
            title = "demo"
            width = 640
            height = 480
            "#,
        )
        .unwrap();
        let settings: DisplaySettings = raw.into();

        assert_eq!(settings.window_title, "demo");
        assert_eq!(settings.window_width, 640);
        assert!(settings.show_caption);
    }

    #[test]
    fn window_dimensions_are_clamped_positive() {
        let raw: RawDisplayConfig = toml::from_str(
            r#"
            [window]
            width = 0
            "#,
        )
        .unwrap();
        let settings: DisplaySettings = raw.into();
        assert_eq!(settings.window_width, 1);
    }
}
