//! Entity field processor

use quantgrid_core::{Error, Processor, ReferenceKind, ReferenceList, Result};
use serde_json::{Map, Value};

/// A raw field of an entity (asset, portfolio, ...), displayed as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityProcessor {
    /// Entity identifier, resolvable through the caller's reference list
    pub entity_id: String,
    /// Field on the entity to display
    pub field: String,
}

impl EntityProcessor {
    /// Tag stored as `processorName`
    pub const NAME: &'static str = "EntityProcessor";

    /// Create an entity-field processor
    pub fn new(entity_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            field: field.into(),
        }
    }

    /// Deserialize from a column mapping
    ///
    /// With a non-empty reference list the entity id must resolve; an empty
    /// list skips resolution, matching the series processors.
    pub fn from_dict(
        obj: &Map<String, Value>,
        references: &ReferenceList,
    ) -> Result<Box<dyn Processor>> {
        let entity_id = obj
            .get("entityId")
            .ok_or(Error::MissingField("entityId"))?
            .as_str()
            .ok_or_else(|| Error::invalid_field("entityId", "expected a string"))?;
        let field = obj
            .get("field")
            .ok_or(Error::MissingField("field"))?
            .as_str()
            .ok_or_else(|| Error::invalid_field("field", "expected a string"))?;
        if !references.is_empty()
            && references.resolve(ReferenceKind::Entity, entity_id).is_none()
        {
            return Err(Error::ReferenceNotFound {
                kind: ReferenceKind::Entity,
                id: entity_id.to_string(),
            });
        }
        Ok(Box::new(Self::new(entity_id, field)))
    }
}

impl Processor for EntityProcessor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("entityId".into(), Value::from(self.entity_id.as_str()));
        map.insert("field".into(), Value::from(self.field.as_str()));
        map
    }

    fn clone_box(&self) -> Box<dyn Processor> {
        Box::new(self.clone())
    }
}
