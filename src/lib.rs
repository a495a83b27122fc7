//! Grid Composer - edit engine for nested 12-column grid layouts
//!
//! This library holds the component tree behind a drag-and-drop layout
//! builder: insertion at the pointer position, removal, duplication and
//! attribute updates over an immutable tree, even column redistribution
//! inside a row, and a linear undo/redo history.
//!
//! # Example
//!
//! ```rust
//! use grid_composer::{ComponentKind, NoGeometry, Session};
//!
//! let mut session = Session::default();
//! let row = session
//!     .drop_component(ComponentKind::Div, None, 0.0, &NoGeometry)
//!     .unwrap();
//! session.drop_component(ComponentKind::Div, Some(&row), 0.0, &NoGeometry);
//! session.drop_component(ComponentKind::Div, Some(&row), 0.0, &NoGeometry);
//!
//! let children = &session.tree().roots()[0].children;
//! assert!(children.iter().all(|c| c.config.cols.get() == 6));
//!
//! assert!(session.undo());
//! assert_eq!(session.tree().roots()[0].children.len(), 1);
//! ```

pub mod defaults;
pub mod edit;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod model;
pub mod preview;
pub mod session;
pub mod tree;

pub use defaults::{PreferenceError, StylePreference};
pub use edit::Edit;
pub use error::ComposerError;
pub use export::{from_json, to_json, ExportError};
pub use geometry::{BoundingBox, GeometryProvider, NoGeometry, StaticGeometry};
pub use history::HistoryStack;
pub use model::{
    AttributeBag, ColumnSpan, ComponentKind, Node, NodeId, NodeRef, Shadow, UnknownKind,
};
pub use preview::{render_html, PreviewConfig};
pub use session::Session;
pub use tree::ComponentTree;

/// Render a JSON tree as a standalone HTML preview
///
/// # Example
///
/// ```rust
/// use grid_composer::preview_json;
///
/// let html = preview_json(r#"[{"id": "div-1", "config": {"cols": 6}}]"#).unwrap();
/// assert!(html.contains("<!DOCTYPE html>"));
/// assert!(html.contains("width: calc(50% - 10px)"));
/// ```
pub fn preview_json(source: &str) -> Result<String, ComposerError> {
    preview_json_with_config(source, &PreviewConfig::default())
}

/// Render a JSON tree as HTML with custom configuration
pub fn preview_json_with_config(
    source: &str,
    config: &PreviewConfig,
) -> Result<String, ComposerError> {
    let tree = from_json(source)?;
    Ok(render_html(&tree, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_json() {
        let html = preview_json(r#"[{"id": "div-1", "config": {}}]"#).unwrap();
        assert!(html.contains(r#"id="div-1""#));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_preview_json_fragment() {
        let config = PreviewConfig::new().with_standalone(false);
        let html = preview_json_with_config(r#"[{"id": "text-1", "kind": "text", "config": {"content": "hi"}}]"#, &config)
            .unwrap();
        assert!(!html.contains("<html>"));
        assert!(html.contains(">hi</p>"));
    }

    #[test]
    fn test_preview_json_invalid() {
        let err = preview_json("not json").unwrap_err();
        assert!(matches!(err, ComposerError::Export(ExportError::Json(_))));
    }
}
