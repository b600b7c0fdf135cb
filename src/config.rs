//! Configuration handling for the TUI

use crate::ui::ColorScheme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Requested color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeSetting {
    Light,
    Dark,
    /// Follow the terminal (COLORFGBG), dark when unknown
    #[default]
    Auto,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Color scheme
    pub color_scheme: Option<ColorSchemeSetting>,
    /// Capture mouse events (click to focus, wheel to scroll)
    pub mouse_capture: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "form-screen", "form-screen")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaults if the file is missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }

    /// Scheme to render with, resolving `auto` from the environment
    pub fn resolved_scheme(&self) -> ColorScheme {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        resolve_scheme(
            self.color_scheme.unwrap_or_default(),
            colorfgbg.as_deref(),
        )
    }
}

/// COLORFGBG is "fg;bg" (sometimes "fg;default;bg"); bg 7 or 15 is a light terminal
fn resolve_scheme(setting: ColorSchemeSetting, colorfgbg: Option<&str>) -> ColorScheme {
    match setting {
        ColorSchemeSetting::Light => ColorScheme::Light,
        ColorSchemeSetting::Dark => ColorScheme::Dark,
        ColorSchemeSetting::Auto => {
            let bg = colorfgbg
                .and_then(|value| value.rsplit(';').next())
                .and_then(|bg| bg.trim().parse::<u8>().ok());
            match bg {
                Some(7) | Some(15) => ColorScheme::Light,
                _ => ColorScheme::Dark,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("form-screen-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.color_scheme.is_none());
        assert!(config.mouse_capture.is_none());
        assert!(config.mouse_capture());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            color_scheme: Some(ColorSchemeSetting::Light),
            mouse_capture: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"light\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.color_scheme, Some(ColorSchemeSetting::Light));
        assert_eq!(parsed.mouse_capture, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.color_scheme.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"color_scheme": "dark", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.color_scheme, Some(ColorSchemeSetting::Dark));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let config = TuiConfig::load_from(Path::new("/nonexistent/form-screen/config.json"));
        assert!(config.unwrap().color_scheme.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config_path("load");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"color_scheme": "dark"}"#).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.color_scheme, Some(ColorSchemeSetting::Dark));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let err = TuiConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    mod scheme {
        use super::*;

        #[test]
        fn test_explicit_settings_win() {
            assert_eq!(
                resolve_scheme(ColorSchemeSetting::Light, Some("15;0")),
                ColorScheme::Light
            );
            assert_eq!(
                resolve_scheme(ColorSchemeSetting::Dark, Some("0;15")),
                ColorScheme::Dark
            );
        }

        #[test]
        fn test_auto_light_background() {
            assert_eq!(
                resolve_scheme(ColorSchemeSetting::Auto, Some("0;15")),
                ColorScheme::Light
            );
            assert_eq!(
                resolve_scheme(ColorSchemeSetting::Auto, Some("0;default;7")),
                ColorScheme::Light
            );
        }

        #[test]
        fn test_auto_dark_background() {
            assert_eq!(
                resolve_scheme(ColorSchemeSetting::Auto, Some("15;0")),
                ColorScheme::Dark
            );
        }

        #[test]
        fn test_auto_without_hint_is_dark() {
            assert_eq!(resolve_scheme(ColorSchemeSetting::Auto, None), ColorScheme::Dark);
            assert_eq!(
                resolve_scheme(ColorSchemeSetting::Auto, Some("garbage")),
                ColorScheme::Dark
            );
        }
    }
}
