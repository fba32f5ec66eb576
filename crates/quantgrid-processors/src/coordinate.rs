//! Cross-column processor

use quantgrid_core::{Error, Processor, ReferenceKind, ReferenceList, Result};
use serde_json::{Map, Value};

/// Displays the result of another column in the same grid
///
/// Unlike the series processors, deserialization always requires the named
/// column to resolve: a column reference is this processor's entire payload,
/// and within a grid only earlier columns are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateProcessor {
    /// Name of the referenced column
    pub column: String,
}

impl CoordinateProcessor {
    /// Tag stored as `processorName`
    pub const NAME: &'static str = "CoordinateProcessor";

    /// Create a cross-column processor
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Deserialize from a column mapping
    pub fn from_dict(
        obj: &Map<String, Value>,
        references: &ReferenceList,
    ) -> Result<Box<dyn Processor>> {
        let column = obj
            .get("column")
            .ok_or(Error::MissingField("column"))?
            .as_str()
            .ok_or_else(|| Error::invalid_field("column", "expected a string"))?;
        if references.resolve(ReferenceKind::Column, column).is_none() {
            return Err(Error::ReferenceNotFound {
                kind: ReferenceKind::Column,
                id: column.to_string(),
            });
        }
        Ok(Box::new(Self::new(column)))
    }
}

impl Processor for CoordinateProcessor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("column".into(), Value::from(self.column.as_str()));
        map
    }

    fn clone_box(&self) -> Box<dyn Processor> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantgrid_core::Reference;

    #[test]
    fn test_resolves_against_earlier_column() {
        let processor = CoordinateProcessor::new("Spot");
        let refs = ReferenceList::from(vec![Reference::column("Spot")]);
        let back = CoordinateProcessor::from_dict(&processor.as_dict(), &refs).unwrap();
        assert_eq!(back.as_dict(), processor.as_dict());
    }

    #[test]
    fn test_requires_resolution_even_with_empty_list() {
        let processor = CoordinateProcessor::new("Spot");
        let err =
            CoordinateProcessor::from_dict(&processor.as_dict(), &ReferenceList::new())
                .unwrap_err();
        assert!(matches!(
            err,
            Error::ReferenceNotFound {
                kind: ReferenceKind::Column,
                ..
            }
        ));
    }
}
