//! HTML generation from a component tree
//!
//! Rendering is a pure function of the tree: every node's inline style is
//! derived from its attribute bag alone.

use crate::model::{ComponentKind, Node};
use crate::tree::ComponentTree;

use super::PreviewConfig;

/// Build HTML elements incrementally
pub struct HtmlBuilder {
    config: PreviewConfig,
    body: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: PreviewConfig) -> Self {
        let indent = usize::from(config.standalone);
        Self {
            config,
            body: vec![],
            indent,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_attr(&self, names: &[&str]) -> String {
        let prefix = self.prefix();
        names
            .iter()
            .map(|name| format!("{}{}", prefix, name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn push(&mut self, line: String) {
        let line = format!("{}{}", self.indent_str(), line);
        self.body.push(line);
    }

    /// Open an element that will hold children
    pub fn open(&mut self, tag: &str, attrs: &str) {
        self.push(format!("<{}{}>", tag, attrs));
        self.indent += 1;
    }

    /// Close the most recently opened element
    pub fn close(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push(format!("</{}>", tag));
    }

    /// Add an element with text content
    pub fn add_text_element(&mut self, tag: &str, attrs: &str, text: &str) {
        self.push(format!("<{}{}>{}</{}>", tag, attrs, escape_html(text), tag));
    }

    /// Add a void element
    pub fn add_void(&mut self, tag: &str, attrs: &str) {
        self.push(format!("<{}{} />", tag, attrs));
    }

    /// Render one node and its descendants
    pub fn add_node(&mut self, node: &Node) {
        let class = self.class_attr(&["node", node.kind.name()]);
        let style = node_style(node, &self.config);
        let attrs = format!(
            r#" id="{}" class="{}" style="{}""#,
            escape_html(node.id.as_str()),
            class,
            escape_html(&style)
        );
        let content = node.config.content.as_deref().unwrap_or("");

        match node.kind {
            ComponentKind::Div => {
                self.open("div", &attrs);
                for child in &node.children {
                    self.add_node(child);
                }
                self.close("div");
            }
            ComponentKind::Title => self.add_text_element("h1", &attrs, content),
            ComponentKind::Text => self.add_text_element("p", &attrs, content),
            ComponentKind::Input => {
                let attrs = if content.is_empty() {
                    attrs
                } else {
                    format!(r#"{} placeholder="{}""#, attrs, escape_html(content))
                };
                self.add_void("input", &attrs);
            }
            ComponentKind::Select => {
                self.open("select", &attrs);
                for option in content.lines().map(str::trim).filter(|o| !o.is_empty()) {
                    self.add_text_element("option", "", option);
                }
                self.close("select");
            }
        }
    }

    /// Build the final HTML string
    pub fn build(self) -> String {
        let nl = self.newline().to_string();
        let mut out = String::new();
        if self.config.standalone {
            for line in ["<!DOCTYPE html>", "<html>", "<head>"] {
                out.push_str(line);
                out.push_str(&nl);
            }
            let pad = if self.config.pretty_print { "  " } else { "" };
            out.push_str(&format!("{}<meta charset=\"utf-8\">{}", pad, nl));
            out.push_str(&format!("{}<title>Preview</title>{}", pad, nl));
            out.push_str(&format!("</head>{}<body>{}", nl, nl));
        }
        for line in &self.body {
            out.push_str(line);
            out.push_str(&nl);
        }
        if self.config.standalone {
            out.push_str(&format!("</body>{}</html>{}", nl, nl));
        }
        out
    }
}

/// Render `tree` as HTML
pub fn render_html(tree: &ComponentTree, config: &PreviewConfig) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    let canvas = format!(
        r#" class="{}" style="padding: 20px; text-align: left""#,
        builder.class_attr(&["canvas"])
    );
    builder.open("div", &canvas);
    for root in tree.roots() {
        builder.add_node(root);
    }
    builder.close("div");
    builder.build()
}

/// Inline CSS for one node
pub fn node_style(node: &Node, config: &PreviewConfig) -> String {
    let bag = &node.config;
    let display = if node.is_container() {
        "inline-block"
    } else {
        bag.display.as_str()
    };

    let mut parts = vec![
        format!(
            "width: calc({}% - {}px)",
            format_percent(bag.cols.percent()),
            config.gutter_px
        ),
        format!("height: {}", bag.height),
        format!("background-color: {}", bag.background_color),
        format!("border-style: {}", bag.border_style),
        format!("border-color: {}", bag.border_color),
        format!("border-width: {}", bag.border_width),
        format!("border-radius: {}", bag.border_radius),
        format!("padding: {}", bag.padding),
        format!("margin: {}", bag.margin),
        format!("display: {}", display),
        "vertical-align: top".to_string(),
        "box-sizing: border-box".to_string(),
    ];
    if node.is_container() {
        parts.push("min-height: 50px".to_string());
    }
    if !node.children.is_empty() {
        parts.push("overflow: auto".to_string());
    }
    parts.push(format!("box-shadow: {}", bag.shadow.css()));
    parts.join("; ")
}

/// Percentage with at most four decimals and no trailing zeros
fn format_percent(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}

/// Escape special HTML characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
