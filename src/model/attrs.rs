//! Visual configuration carried by every node

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of columns in one grid row
pub const GRID_COLUMNS: u8 = 12;

/// Column span of a node within its parent row
///
/// Always an integer in `1..=12`. A node with span `n` claims `n/12` of the
/// row it shares with its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ColumnSpan(u8);

impl ColumnSpan {
    /// A span covering the whole row
    pub const FULL: ColumnSpan = ColumnSpan(GRID_COLUMNS);

    /// Create a span, rejecting values outside `1..=12`
    pub fn new(value: u8) -> Option<Self> {
        (1..=GRID_COLUMNS).contains(&value).then_some(Self(value))
    }

    /// Create a span, clamping the value into `1..=12`
    pub fn clamped(value: usize) -> Self {
        Self(value.clamp(1, GRID_COLUMNS as usize) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Share of the row covered by this span, in percent
    pub fn percent(self) -> f64 {
        f64::from(self.0) / f64::from(GRID_COLUMNS) * 100.0
    }
}

impl Default for ColumnSpan {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for ColumnSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ColumnSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        ColumnSpan::new(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "column span {} is outside 1..={}",
                value, GRID_COLUMNS
            ))
        })
    }
}

/// Drop shadow of a node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shadow {
    #[default]
    None,
    Custom {
        color: String,
        blur: u32,
        spread: i32,
        #[serde(rename = "offsetX")]
        offset_x: i32,
        #[serde(rename = "offsetY")]
        offset_y: i32,
    },
}

impl Shadow {
    /// CSS `box-shadow` value for this shadow
    pub fn css(&self) -> String {
        match self {
            Shadow::None => "none".to_string(),
            Shadow::Custom {
                color,
                blur,
                spread,
                offset_x,
                offset_y,
            } => format!(
                "{}px {}px {}px {}px {}",
                offset_x, offset_y, blur, spread, color
            ),
        }
    }
}

/// The attribute bag of one node
///
/// Sizes and spacing are kept as CSS expressions (`"30%"`, `"10px"`);
/// validating them belongs to whoever edits the bag. Missing fields take
/// their defaults, and the flat `boxShadow`/`shadowColor`/`shadowBlur`/...
/// fields of older layouts are read into [`Shadow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawBag")]
pub struct AttributeBag {
    pub cols: ColumnSpan,
    pub height: String,
    pub background_color: String,
    pub border_style: String,
    pub border_color: String,
    pub border_width: String,
    pub border_radius: String,
    pub padding: String,
    pub margin: String,
    pub display: String,
    pub shadow: Shadow,
    /// Text of titles and paragraphs, placeholder of inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Height given to freshly dropped nodes
pub const NEW_NODE_HEIGHT: &str = "30%";

impl Default for AttributeBag {
    fn default() -> Self {
        Self {
            cols: ColumnSpan::FULL,
            height: NEW_NODE_HEIGHT.to_string(),
            background_color: "#d1d1d1".to_string(),
            border_style: "none".to_string(),
            border_color: "#000000".to_string(),
            border_width: "1px".to_string(),
            border_radius: "0px".to_string(),
            padding: "10px".to_string(),
            margin: "0px".to_string(),
            display: "block".to_string(),
            shadow: Shadow::None,
            content: None,
        }
    }
}

/// Wire form of [`AttributeBag`], accepting both shadow layouts
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawBag {
    cols: ColumnSpan,
    height: String,
    background_color: String,
    border_style: String,
    border_color: String,
    border_width: String,
    border_radius: String,
    padding: String,
    margin: String,
    display: String,
    shadow: Option<Shadow>,
    content: Option<String>,
    box_shadow: Option<String>,
    shadow_color: Option<String>,
    shadow_blur: Option<FlatNumber>,
    shadow_spread: Option<FlatNumber>,
    shadow_offset_x: Option<FlatNumber>,
    shadow_offset_y: Option<FlatNumber>,
}

impl Default for RawBag {
    fn default() -> Self {
        let bag = AttributeBag::default();
        Self {
            cols: bag.cols,
            height: bag.height,
            background_color: bag.background_color,
            border_style: bag.border_style,
            border_color: bag.border_color,
            border_width: bag.border_width,
            border_radius: bag.border_radius,
            padding: bag.padding,
            margin: bag.margin,
            display: bag.display,
            shadow: None,
            content: bag.content,
            box_shadow: None,
            shadow_color: None,
            shadow_blur: None,
            shadow_spread: None,
            shadow_offset_x: None,
            shadow_offset_y: None,
        }
    }
}

/// Pixel amount stored either as a number or as its decimal text
#[derive(Deserialize)]
#[serde(untagged)]
enum FlatNumber {
    Number(f64),
    Text(String),
}

impl FlatNumber {
    /// Rounded value; unreadable text counts as 0
    fn value(field: &Option<FlatNumber>) -> i64 {
        let value = match field {
            Some(FlatNumber::Number(n)) => *n,
            Some(FlatNumber::Text(text)) => text.trim().parse().unwrap_or(0.0),
            None => 0.0,
        };
        value.round().clamp(i32::MIN as f64, i32::MAX as f64) as i64
    }
}

impl RawBag {
    fn flat_shadow(&self) -> Shadow {
        if self.box_shadow.as_deref() != Some("custom") {
            return Shadow::None;
        }
        Shadow::Custom {
            color: self
                .shadow_color
                .clone()
                .unwrap_or_else(|| "#000000".to_string()),
            blur: FlatNumber::value(&self.shadow_blur).max(0) as u32,
            spread: FlatNumber::value(&self.shadow_spread) as i32,
            offset_x: FlatNumber::value(&self.shadow_offset_x) as i32,
            offset_y: FlatNumber::value(&self.shadow_offset_y) as i32,
        }
    }
}

impl From<RawBag> for AttributeBag {
    fn from(raw: RawBag) -> Self {
        let shadow = match raw.shadow.clone() {
            Some(shadow) => shadow,
            None => raw.flat_shadow(),
        };
        Self {
            cols: raw.cols,
            height: raw.height,
            background_color: raw.background_color,
            border_style: raw.border_style,
            border_color: raw.border_color,
            border_width: raw.border_width,
            border_radius: raw.border_radius,
            padding: raw.padding,
            margin: raw.margin,
            display: raw.display,
            shadow,
            content: raw.content,
        }
    }
}

impl AttributeBag {
    /// Create a bag with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Bag for a freshly dropped node: the preferred style, full width, default height
    pub fn for_new_node(&self) -> Self {
        Self {
            cols: ColumnSpan::FULL,
            height: NEW_NODE_HEIGHT.to_string(),
            ..self.clone()
        }
    }

    /// Set the column span
    pub fn with_cols(mut self, cols: ColumnSpan) -> Self {
        self.cols = cols;
        self
    }

    /// Set the height expression
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the border style, color and width at once
    pub fn with_border(
        mut self,
        style: impl Into<String>,
        color: impl Into<String>,
        width: impl Into<String>,
    ) -> Self {
        self.border_style = style.into();
        self.border_color = color.into();
        self.border_width = width.into();
        self
    }

    /// Set the shadow
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// Set the text content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_span_bounds() {
        assert_eq!(ColumnSpan::new(0), None);
        assert_eq!(ColumnSpan::new(13), None);
        assert_eq!(ColumnSpan::new(6).map(ColumnSpan::get), Some(6));
        assert_eq!(ColumnSpan::clamped(0).get(), 1);
        assert_eq!(ColumnSpan::clamped(40).get(), 12);
    }

    #[test]
    fn test_column_span_percent() {
        assert_eq!(ColumnSpan::FULL.percent(), 100.0);
        assert_eq!(ColumnSpan::clamped(6).percent(), 50.0);
    }

    #[test]
    fn test_column_span_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<ColumnSpan>("0").is_err());
        assert!(serde_json::from_str::<ColumnSpan>("13").is_err());
        assert_eq!(
            serde_json::from_str::<ColumnSpan>("4").unwrap(),
            ColumnSpan::clamped(4)
        );
    }

    #[test]
    fn test_default_bag() {
        let bag = AttributeBag::default();
        assert_eq!(bag.cols, ColumnSpan::FULL);
        assert_eq!(bag.height, "30%");
        assert_eq!(bag.background_color, "#d1d1d1");
        assert_eq!(bag.shadow, Shadow::None);
    }

    #[test]
    fn test_for_new_node_resets_size() {
        let preferred = AttributeBag::new()
            .with_cols(ColumnSpan::clamped(3))
            .with_height("200px")
            .with_background("#ff0000");
        let bag = preferred.for_new_node();
        assert_eq!(bag.cols, ColumnSpan::FULL);
        assert_eq!(bag.height, "30%");
        assert_eq!(bag.background_color, "#ff0000");
    }

    #[test]
    fn test_shadow_css() {
        assert_eq!(Shadow::None.css(), "none");
        let shadow = Shadow::Custom {
            color: "#333".to_string(),
            blur: 4,
            spread: 0,
            offset_x: 2,
            offset_y: -1,
        };
        assert_eq!(shadow.css(), "2px -1px 4px 0px #333");
    }

    #[test]
    fn test_camel_case_fields() {
        let json = serde_json::to_value(AttributeBag::default()).unwrap();
        assert_eq!(json["backgroundColor"], "#d1d1d1");
        assert_eq!(json["shadow"]["kind"], "none");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn test_flat_shadow_fields() {
        let bag: AttributeBag = serde_json::from_str(
            r##"{
                "boxShadow": "custom",
                "shadowColor": "#123456",
                "shadowBlur": "6",
                "shadowSpread": 2,
                "shadowOffsetX": "-1",
                "shadowOffsetY": "3.6"
            }"##,
        )
        .unwrap();
        assert_eq!(
            bag.shadow,
            Shadow::Custom {
                color: "#123456".to_string(),
                blur: 6,
                spread: 2,
                offset_x: -1,
                offset_y: 4,
            }
        );
        assert_eq!(bag.background_color, "#d1d1d1");
    }

    #[test]
    fn test_flat_shadow_none_and_bad_numbers() {
        let bag: AttributeBag =
            serde_json::from_str(r#"{"boxShadow": "none", "shadowBlur": "4"}"#).unwrap();
        assert_eq!(bag.shadow, Shadow::None);

        let bag: AttributeBag =
            serde_json::from_str(r#"{"boxShadow": "custom", "shadowBlur": "wide"}"#).unwrap();
        assert_eq!(bag.shadow.css(), "0px 0px 0px 0px #000000");
    }

    #[test]
    fn test_nested_shadow_wins_over_flat_fields() {
        let bag: AttributeBag = serde_json::from_str(
            r##"{"shadow": {"kind": "none"}, "boxShadow": "custom", "shadowBlur": "4"}"##,
        )
        .unwrap();
        assert_eq!(bag.shadow, Shadow::None);
    }

    #[test]
    fn test_partial_bag_uses_defaults() {
        let bag: AttributeBag = serde_json::from_str(r#"{"cols": 4}"#).unwrap();
        assert_eq!(bag.cols.get(), 4);
        assert_eq!(bag.padding, "10px");
    }
}
