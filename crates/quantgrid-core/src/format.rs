//! Column display formatting

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// How a column's values are rendered by the grid surface
///
/// The render type is a display-mode tag consumed by the rendering layer;
/// this crate stores and serializes it without interpreting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderType {
    /// Plain value rendering
    #[default]
    Default,
    /// Color-scaled rendering across the column
    Heatmap,
}

impl RenderType {
    /// Get the wire tag for this render type
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderType::Default => "default",
            RenderType::Heatmap => "heatmap",
        }
    }

    /// Parse from a wire tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(RenderType::Default),
            "heatmap" => Some(RenderType::Heatmap),
            _ => None,
        }
    }
}

/// Display format for a column's computed values
///
/// A plain value record. Every field has a default, so any subset of keys
/// may be supplied during reconstruction and the rest are filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnFormat {
    /// Render mode tag (wire key `renderType`)
    pub render_type: RenderType,
    /// Decimal display precision
    pub precision: u32,
    /// Abbreviate large values for display (wire key `humanReadable`)
    pub human_readable: bool,
}

impl Default for ColumnFormat {
    fn default() -> Self {
        Self {
            render_type: RenderType::Default,
            precision: 2,
            human_readable: true,
        }
    }
}

impl ColumnFormat {
    /// Create a format with the given precision, other fields default
    pub fn with_precision(precision: u32) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Serialize to an ordered mapping of exactly the three fields
    pub fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("renderType".into(), Value::from(self.render_type.as_str()));
        map.insert("precision".into(), Value::from(self.precision));
        map.insert("humanReadable".into(), Value::from(self.human_readable));
        map
    }

    /// Reconstruct from a mapping; missing keys take their defaults
    pub fn from_dict(obj: &Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(obj.clone()))
            .map_err(|e| Error::invalid_field("format", e.to_string()))
    }
}
