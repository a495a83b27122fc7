//! Top-level error type
//!
//! Edits never fail; errors only arise at the edges where trees and
//! preferences are read or written.

use thiserror::Error;

use crate::defaults::PreferenceError;
use crate::export::ExportError;

#[derive(Debug, Error)]
pub enum ComposerError {
    /// Error reading or writing the tree
    #[error("tree error: {0}")]
    Export(#[from] ExportError),

    /// Error loading or saving the default style
    #[error("style preference error: {0}")]
    Preference(#[from] PreferenceError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = ComposerError::from(ExportError::DuplicateId {
            id: "div-7".to_string(),
        });
        assert!(err.to_string().contains("div-7"));
    }

    #[test]
    fn test_preference_display() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err = ComposerError::from(PreferenceError::from(toml_err));
        assert!(err.to_string().starts_with("style preference error"));
    }
}
