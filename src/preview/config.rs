//! Options for the HTML preview

/// How the preview markup is produced
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Pixels taken off every node's width so neighbours do not touch
    pub gutter_px: u32,

    /// Emit a full document rather than a bare canvas fragment
    pub standalone: bool,

    /// One element per line, indented by depth
    pub pretty_print: bool,

    /// Prepended to every class name; `None` leaves them bare
    pub class_prefix: Option<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            gutter_px: 10,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("gc-".to_string()),
        }
    }
}

impl PreviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gutter(mut self, gutter_px: u32) -> Self {
        self.gutter_px = gutter_px;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
