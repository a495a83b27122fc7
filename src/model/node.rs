//! Nodes of the component tree

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::attrs::{AttributeBag, ColumnSpan};

/// Shared handle to an immutable node
///
/// Snapshots held by the history share unchanged subtrees through these handles.
pub type NodeRef = Arc<Node>;

/// Process-unique node identifier
///
/// Generated from a random v4 UUID and never reused, even after the node is removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generate a fresh identifier for a node of the given kind
    pub fn generate(kind: ComponentKind) -> Self {
        Self(format!("{}-{}", kind.name(), Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The component types offered by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Container box laid out on the 12-column grid
    #[default]
    Div,
    Title,
    Text,
    Input,
    /// Drop-down list; `content` holds one option label per line
    Select,
}

/// A kind name that is not in the palette
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component kind '{0}' (expected one of: div, title, text, input, select)")]
pub struct UnknownKind(pub String);

impl ComponentKind {
    /// Every kind in palette order
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Div,
        ComponentKind::Title,
        ComponentKind::Text,
        ComponentKind::Input,
        ComponentKind::Select,
    ];

    /// Only containers accept children
    pub fn is_container(self) -> bool {
        matches!(self, ComponentKind::Div)
    }

    pub fn is_div(&self) -> bool {
        *self == ComponentKind::Div
    }

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Div => "div",
            ComponentKind::Title => "title",
            ComponentKind::Text => "text",
            ComponentKind::Input => "input",
            ComponentKind::Select => "select",
        }
    }
}

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// One element of the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "ComponentKind::is_div")]
    pub kind: ComponentKind,
    pub config: AttributeBag,
    #[serde(default)]
    pub children: Vec<NodeRef>,
}

impl Node {
    /// Create a childless node with a fresh id
    pub fn new(kind: ComponentKind, config: AttributeBag) -> Self {
        Self {
            id: NodeId::generate(kind),
            kind,
            config,
            children: Vec::new(),
        }
    }

    /// Create a container with the given children and a fresh id
    pub fn container(config: AttributeBag, children: Vec<Node>) -> Self {
        Self {
            children: children.into_iter().map(Arc::new).collect(),
            ..Self::new(ComponentKind::Div, config)
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Copy of this node with a different attribute bag, sharing the children
    pub fn replace_config(&self, config: AttributeBag) -> Node {
        Node {
            id: self.id.clone(),
            kind: self.kind,
            config,
            children: self.children.clone(),
        }
    }

    /// Copy of this node with a different child list
    pub fn replace_children(&self, children: Vec<NodeRef>) -> Node {
        Node {
            id: self.id.clone(),
            kind: self.kind,
            config: self.config.clone(),
            children,
        }
    }

    /// Copy of this node with a different column span
    pub fn replace_cols(&self, cols: ColumnSpan) -> Node {
        self.replace_config(self.config.clone().with_cols(cols))
    }

    /// Deep copy of this subtree where every node gets a fresh id
    pub fn clone_with_fresh_ids(&self) -> Node {
        Node {
            id: NodeId::generate(self.kind),
            kind: self.kind,
            config: self.config.clone(),
            children: self
                .children
                .iter()
                .map(|child| Arc::new(child.clone_with_fresh_ids()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_ids_do_not_collide() {
        let ids: HashSet<NodeId> = (0..100_000)
            .map(|_| NodeId::generate(ComponentKind::Div))
            .collect();
        assert_eq!(ids.len(), 100_000);
    }

    #[test]
    fn test_id_carries_kind_prefix() {
        assert!(NodeId::generate(ComponentKind::Title)
            .as_str()
            .starts_with("title-"));
        assert!(NodeId::generate(ComponentKind::Div).as_str().starts_with("div-"));
    }

    #[test]
    fn test_only_div_is_container() {
        assert!(ComponentKind::Div.is_container());
        assert!(!ComponentKind::Title.is_container());
        assert!(!ComponentKind::Text.is_container());
        assert!(!ComponentKind::Input.is_container());
        assert!(!ComponentKind::Select.is_container());
    }

    #[test]
    fn test_kind_from_name() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.name().parse::<ComponentKind>(), Ok(kind));
        }
        assert_eq!("Select".parse::<ComponentKind>(), Ok(ComponentKind::Select));
        assert_eq!(
            "button".parse::<ComponentKind>(),
            Err(UnknownKind("button".to_string()))
        );
    }

    #[test]
    fn test_kind_name_matches_serde() {
        for kind in ComponentKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_clone_with_fresh_ids_keeps_attributes() {
        let inner = Node::new(
            ComponentKind::Text,
            AttributeBag::new().with_content("hello"),
        );
        let outer = Node::container(AttributeBag::new().with_background("#fff"), vec![inner]);

        let copy = outer.clone_with_fresh_ids();
        assert_ne!(copy.id, outer.id);
        assert_ne!(copy.children[0].id, outer.children[0].id);
        assert_eq!(copy.config, outer.config);
        assert_eq!(copy.children[0].config, outer.children[0].config);
        assert_eq!(copy.children[0].kind, ComponentKind::Text);
    }

    #[test]
    fn test_kind_defaults_to_div_when_absent() {
        let node: Node = serde_json::from_str(r#"{"id": "div-1", "config": {}}"#).unwrap();
        assert_eq!(node.kind, ComponentKind::Div);
        assert!(node.children.is_empty());
        assert_eq!(node.id.as_str(), "div-1");
    }
}
