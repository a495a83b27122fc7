//! Default style preference for newly dropped nodes
//!
//! The preference is a TOML file holding one attribute bag under `[style]`.
//! It is read once at startup and written back whenever it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::AttributeBag;

/// Errors that can occur when loading or saving the preference
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to access style preference file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style preference TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize style preference: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// TOML layout of the preference file
#[derive(Serialize, Deserialize)]
struct TomlPreference {
    #[serde(default)]
    style: AttributeBag,
}

/// The preferred attribute bag, optionally backed by a file
#[derive(Debug, Clone, Default)]
pub struct StylePreference {
    path: Option<PathBuf>,
    style: AttributeBag,
}

impl StylePreference {
    /// Keep the preference in memory only
    pub fn in_memory(style: AttributeBag) -> Self {
        Self { path: None, style }
    }

    /// Load the preference from `path`, starting from defaults when the file does not exist yet
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let style = if path.exists() {
            Self::read(&path)?
        } else {
            AttributeBag::default()
        };
        Ok(Self {
            path: Some(path),
            style,
        })
    }

    /// Read a bag from a preference file
    pub fn read(path: &Path) -> Result<AttributeBag, PreferenceError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a bag from preference TOML; missing fields take their defaults
    pub fn parse(content: &str) -> Result<AttributeBag, PreferenceError> {
        let parsed: TomlPreference = toml::from_str(content)?;
        Ok(parsed.style)
    }

    /// Render a bag as preference TOML
    pub fn to_toml(style: &AttributeBag) -> Result<String, PreferenceError> {
        Ok(toml::to_string(&TomlPreference {
            style: style.clone(),
        })?)
    }

    pub fn style(&self) -> &AttributeBag {
        &self.style
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Change the preference, writing it through to the backing file
    pub fn set(&mut self, style: AttributeBag) -> Result<(), PreferenceError> {
        if style == self.style {
            return Ok(());
        }
        if let Some(path) = &self.path {
            std::fs::write(path, Self::to_toml(&style)?)?;
        }
        self.style = style;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnSpan, Shadow};

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("grid-composer-{}-{}.toml", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_parse_partial_style() {
        let toml_str = r##"
[style]
backgroundColor = "#ffeeaa"
cols = 6
"##;
        let style = StylePreference::parse(toml_str).expect("Should parse");
        assert_eq!(style.background_color, "#ffeeaa");
        assert_eq!(style.cols, ColumnSpan::clamped(6));
        assert_eq!(style.padding, "10px");
    }

    #[test]
    fn test_parse_empty_file() {
        let style = StylePreference::parse("").expect("Should parse");
        assert_eq!(style, AttributeBag::default());
    }

    #[test]
    fn test_parse_shadow() {
        let toml_str = r##"
[style.shadow]
kind = "custom"
color = "#000000"
blur = 8
spread = 1
offsetX = 2
offsetY = 3
"##;
        let style = StylePreference::parse(toml_str).expect("Should parse");
        assert_eq!(style.shadow.css(), "2px 3px 8px 1px #000000");
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(StylePreference::parse("this is not valid toml {{{{").is_err());
        assert!(StylePreference::parse("[style]\ncols = 40").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = scratch_path("missing");
        let preference = StylePreference::load(&path).expect("Should load");
        assert_eq!(preference.style(), &AttributeBag::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_writes_through() {
        let path = scratch_path("write");
        let mut preference = StylePreference::load(&path).expect("Should load");
        let style = AttributeBag::new()
            .with_background("#101010")
            .with_shadow(Shadow::Custom {
                color: "#222222".to_string(),
                blur: 5,
                spread: 0,
                offset_x: 1,
                offset_y: 1,
            });
        preference.set(style.clone()).expect("Should save");

        let reloaded = StylePreference::load(&path).expect("Should reload");
        assert_eq!(reloaded.style(), &style);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_in_memory_set() {
        let mut preference = StylePreference::default();
        preference.set(AttributeBag::new().with_height("100px")).unwrap();
        assert_eq!(preference.style().height, "100px");
        assert!(preference.path().is_none());
    }
}
