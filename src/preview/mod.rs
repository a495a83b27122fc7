//! HTML preview of a component tree

pub mod config;
pub mod html;

pub use config::PreviewConfig;
pub use html::{node_style, render_html};
