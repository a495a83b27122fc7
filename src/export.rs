//! JSON view of the component tree
//!
//! The tree serializes as nested `{id, kind, config, children}` records;
//! `kind` is omitted for containers. Nesting depth is unbounded: every
//! level costs two JSON levels, so parsing grows the stack on demand
//! instead of applying serde_json's recursion limit.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::tree::ComponentTree;

/// Errors that can occur when importing or exporting a tree
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read tree file: {0}")]
    Io(#[from] std::io::Error),

    /// Two nodes share one id
    #[error("duplicate node id '{id}'")]
    DuplicateId { id: String },
}

/// Serialize a tree as indented JSON
pub fn to_json(tree: &ComponentTree) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Parse a tree from JSON, rejecting repeated ids
pub fn from_json(source: &str) -> Result<ComponentTree, ExportError> {
    let mut json = serde_json::Deserializer::from_str(source);
    json.disable_recursion_limit();
    let tree = ComponentTree::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    if let Some(id) = tree.first_duplicate_id() {
        return Err(ExportError::DuplicateId { id: id.to_string() });
    }
    Ok(tree)
}

/// Read a tree from a JSON file
pub fn from_file(path: &Path) -> Result<ComponentTree, ExportError> {
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeBag, ComponentKind, Node};

    #[test]
    fn test_record_shape() {
        let child = Node::new(ComponentKind::Title, AttributeBag::new().with_content("Hi"));
        let tree = ComponentTree::from_nodes(vec![Node::container(AttributeBag::new(), vec![child])]);
        let value: serde_json::Value = serde_json::from_str(&to_json(&tree).unwrap()).unwrap();

        let root = &value[0];
        assert!(root["id"].as_str().unwrap().starts_with("div-"));
        assert!(root.get("kind").is_none());
        assert_eq!(root["config"]["cols"], 12);
        assert_eq!(root["children"][0]["kind"], "title");
        assert_eq!(root["children"][0]["config"]["content"], "Hi");
    }

    #[test]
    fn test_round_trip() {
        let child = Node::new(ComponentKind::Input, AttributeBag::new().with_content("name"));
        let tree = ComponentTree::from_nodes(vec![
            Node::container(AttributeBag::new().with_background("#fafafa"), vec![child]),
            Node::new(ComponentKind::Text, AttributeBag::new()),
        ]);
        let restored = from_json(&to_json(&tree).unwrap()).unwrap();
        assert_eq!(restored, tree);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": "div-1", "config": {}, "children": [{"id": "div-1", "config": {}}]}
        ]"#;
        match from_json(json) {
            Err(ExportError::DuplicateId { id }) => assert_eq!(id, "div-1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_span_rejected() {
        let json = r#"[{"id": "div-1", "config": {"cols": 0}}]"#;
        assert!(matches!(from_json(json), Err(ExportError::Json(_))));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(matches!(from_json("[] []"), Err(ExportError::Json(_))));
    }

    #[test]
    fn test_empty_tree() {
        let tree = from_json("[]").unwrap();
        assert!(tree.is_empty());
        assert_eq!(to_json(&tree).unwrap(), "[]");
    }
}
