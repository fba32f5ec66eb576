//! Grid definitions
//!
//! A grid definition is the document a set of columns is embedded in. On
//! deserialization a single [`ReferenceList`] is threaded through the columns
//! in order: each reconstructed column contributes a column reference, so a
//! later column's processor can refer to an earlier one.

use serde_json::{Map, Value};

use crate::column::DataColumn;
use crate::error::{Error, Result};
use crate::processor::ProcessorRegistry;
use crate::reference::{Reference, ReferenceList};

/// An ordered set of columns with a name
#[derive(Debug, Clone, PartialEq)]
pub struct GridDefinition {
    /// Grid name
    pub name: String,
    /// Columns in display order
    pub columns: Vec<DataColumn>,
}

impl GridDefinition {
    /// Create an empty grid definition
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    pub fn add_column(&mut self, column: DataColumn) {
        self.columns.push(column);
    }

    /// Serialize to an ordered mapping of `name` and `columns`
    pub fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::from(self.name.as_str()));
        map.insert(
            "columns".into(),
            Value::Array(
                self.columns
                    .iter()
                    .map(|c| Value::Object(c.as_dict()))
                    .collect(),
            ),
        );
        map
    }

    /// Reconstruct a grid from a mapping
    ///
    /// `name` and `columns` are required. Columns deserialize in order with a
    /// shared reference list that grows by one column reference per column,
    /// so cross-column references only resolve backwards.
    pub fn from_dict(obj: &Map<String, Value>, registry: &ProcessorRegistry) -> Result<Self> {
        let name = obj
            .get("name")
            .ok_or(Error::MissingField("name"))?
            .as_str()
            .ok_or_else(|| Error::invalid_field("name", "expected a string"))?;

        let entries = obj
            .get("columns")
            .ok_or(Error::MissingField("columns"))?
            .as_array()
            .ok_or_else(|| Error::invalid_field("columns", "expected an array"))?;

        let mut references = ReferenceList::new();
        let mut columns = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry
                .as_object()
                .ok_or_else(|| Error::invalid_field("columns", "expected an array of objects"))?;
            let column = DataColumn::from_dict(entry, &references, registry)?;
            references.push(Reference::column(column.name.clone()));
            columns.push(column);
        }

        Ok(Self {
            name: name.to_string(),
            columns,
        })
    }
}
