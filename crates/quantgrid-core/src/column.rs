//! Grid column definitions

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::format::ColumnFormat;
use crate::processor::{Processor, ProcessorRegistry};
use crate::reference::ReferenceList;

/// Default column width in pixels
pub const DEFAULT_WIDTH: u32 = 100;

/// Keys owned by the column itself; processor fields may not use them
const RESERVED_KEYS: [&str; 4] = ["name", "processorName", "format", "width"];

/// One column of a data grid
///
/// Aggregates a name, the processor that computes the column's values, a
/// display format, and a pixel width. Construction stores the fields
/// verbatim: no validation of the name or width is performed, callers are
/// responsible for validity (including name uniqueness within a grid).
#[derive(Debug, Clone)]
pub struct DataColumn {
    /// Column name, unique within a containing grid
    pub name: String,
    /// Computation unit for the column's values
    pub processor: Box<dyn Processor>,
    /// Display format for computed values
    pub format: ColumnFormat,
    /// Display width in pixels
    pub width: u32,
}

// Field-wise equality; written out because `derive(PartialEq)` cannot expand
// for a `Box<dyn Trait>` field even though the comparison itself type-checks.
impl PartialEq for DataColumn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && *self.processor == *other.processor
            && self.format == other.format
            && self.width == other.width
    }
}

impl DataColumn {
    /// Create a column with default format and width
    pub fn new(name: impl Into<String>, processor: Box<dyn Processor>) -> Self {
        Self {
            name: name.into(),
            processor,
            format: ColumnFormat::default(),
            width: DEFAULT_WIDTH,
        }
    }

    /// Set the display format
    pub fn with_format(mut self, format: ColumnFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the width in pixels
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Serialize to an ordered mapping
    ///
    /// Key order is `name`, `processorName`, the processor's own fields
    /// flattened at the same level, `format`, `width`. The column's own keys
    /// take precedence: a processor field named like one of them is dropped
    /// from the output.
    pub fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::from(self.name.as_str()));
        map.insert("processorName".into(), Value::from(self.processor.name()));
        for (key, value) in self.processor.as_dict() {
            if RESERVED_KEYS.contains(&key.as_str()) {
                log::warn!(
                    "processor {} field {key} collides with a column key; dropping it",
                    self.processor.name()
                );
                continue;
            }
            map.insert(key, value);
        }
        map.insert("format".into(), Value::Object(self.format.as_dict()));
        map.insert("width".into(), Value::from(self.width));
        map
    }

    /// Reconstruct a column from a mapping
    ///
    /// `name` is required; `format` and `width` are optional and take their
    /// defaults when absent. Processor reconstruction is delegated to the
    /// registry, which resolves cross-references through `references`; any
    /// error it returns propagates unchanged.
    pub fn from_dict(
        obj: &Map<String, Value>,
        references: &ReferenceList,
        registry: &ProcessorRegistry,
    ) -> Result<Self> {
        let name = obj
            .get("name")
            .ok_or(Error::MissingField("name"))?
            .as_str()
            .ok_or_else(|| Error::invalid_field("name", "expected a string"))?;

        let processor = registry.deserialize(obj, references)?;

        let format = match obj.get("format") {
            Some(Value::Object(map)) => ColumnFormat::from_dict(map)?,
            Some(_) => return Err(Error::invalid_field("format", "expected an object")),
            None => ColumnFormat::default(),
        };

        let width = match obj.get("width") {
            Some(value) => value
                .as_u64()
                .and_then(|w| u32::try_from(w).ok())
                .ok_or_else(|| Error::invalid_field("width", "expected an unsigned integer"))?,
            None => DEFAULT_WIDTH,
        };

        Ok(Self {
            name: name.to_string(),
            processor,
            format,
            width,
        })
    }
}
