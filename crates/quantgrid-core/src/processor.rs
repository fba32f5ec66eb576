//! Processor abstraction
//!
//! A processor is the computation unit attached to a column. This crate does
//! not evaluate processors; it only relies on their serialization contract:
//! a concrete variant tag (stored under the `processorName` key) and a flat
//! mapping of the variant's own parameters. Reconstruction is dispatched
//! through a [`ProcessorRegistry`] that maps tag strings to deserialize
//! functions.

use std::fmt;

use ahash::AHashMap;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::reference::ReferenceList;

/// Serialization contract for column processors
pub trait Processor: fmt::Debug + Send + Sync {
    /// Concrete variant tag, stored as `processorName`
    fn name(&self) -> &'static str;

    /// Serialize the variant's parameters into a flat mapping
    ///
    /// The mapping is merged into the column's own mapping at the same
    /// level, so keys should not collide with `name`, `processorName`,
    /// `format`, or `width` (colliding keys are dropped by the column).
    fn as_dict(&self) -> Map<String, Value>;

    /// Clone into a new box
    fn clone_box(&self) -> Box<dyn Processor>;
}

impl Clone for Box<dyn Processor> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Two processors are equal when their tags and serialized parameters match
impl PartialEq for dyn Processor {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.as_dict() == other.as_dict()
    }
}

/// Deserialize function for one processor variant
///
/// Receives the full column mapping (processor fields are flattened into it)
/// and the caller's reference list for resolving cross-references.
pub type ProcessorFromDict = fn(&Map<String, Value>, &ReferenceList) -> Result<Box<dyn Processor>>;

/// Maps processor tag strings to their deserialize functions
///
/// The registry is passed explicitly into [`DataColumn::from_dict`]; there is
/// no process-wide registry.
///
/// [`DataColumn::from_dict`]: crate::column::DataColumn::from_dict
#[derive(Default)]
pub struct ProcessorRegistry {
    entries: AHashMap<&'static str, ProcessorFromDict>,
    fallback: Option<ProcessorFromDict>,
}

impl ProcessorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a deserialize function under a tag
    ///
    /// Registering the same tag twice replaces the earlier entry.
    pub fn register(&mut self, name: &'static str, from_dict: ProcessorFromDict) {
        if self.entries.insert(name, from_dict).is_some() {
            log::warn!("processor {name} registered twice; replacing earlier entry");
        }
    }

    /// Install a fallback used when a mapping carries no `processorName`
    ///
    /// Without a fallback, a missing tag is a missing-field error.
    pub fn with_fallback(mut self, from_dict: ProcessorFromDict) -> Self {
        self.fallback = Some(from_dict);
        self
    }

    /// Whether a tag is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Reconstruct a processor from a column mapping
    ///
    /// Reads the `processorName` tag from `obj` and dispatches to the
    /// registered deserialize function. Any error from the variant's own
    /// deserialization propagates unchanged.
    pub fn deserialize(
        &self,
        obj: &Map<String, Value>,
        references: &ReferenceList,
    ) -> Result<Box<dyn Processor>> {
        let Some(tag) = obj.get("processorName") else {
            return match self.fallback {
                Some(from_dict) => from_dict(obj, references),
                None => Err(Error::MissingField("processorName")),
            };
        };
        let tag = tag
            .as_str()
            .ok_or_else(|| Error::invalid_field("processorName", "expected a string"))?;
        let from_dict = self
            .entries
            .get(tag)
            .ok_or_else(|| Error::UnknownProcessor(tag.to_string()))?;
        from_dict(obj, references)
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.entries.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("ProcessorRegistry")
            .field("tags", &tags)
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! A minimal processor for exercising serialization paths in tests

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct StubProcessor {
        pub label: String,
    }

    impl StubProcessor {
        pub const NAME: &'static str = "StubProcessor";

        pub fn boxed(label: &str) -> Box<dyn Processor> {
            Box::new(Self {
                label: label.to_string(),
            })
        }

        pub fn from_dict(
            obj: &Map<String, Value>,
            _references: &ReferenceList,
        ) -> Result<Box<dyn Processor>> {
            let label = obj
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Ok(Box::new(Self { label }))
        }
    }

    impl Processor for StubProcessor {
        fn name(&self) -> &'static str {
            Self::NAME
        }

        fn as_dict(&self) -> Map<String, Value> {
            let mut map = Map::new();
            map.insert("label".into(), Value::from(self.label.as_str()));
            map
        }

        fn clone_box(&self) -> Box<dyn Processor> {
            Box::new(self.clone())
        }
    }

    pub fn registry() -> ProcessorRegistry {
        let mut registry = ProcessorRegistry::new();
        registry.register(StubProcessor::NAME, StubProcessor::from_dict);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::stub::{registry, StubProcessor};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_by_tag() {
        let mut obj = Map::new();
        obj.insert("processorName".into(), json!("StubProcessor"));
        obj.insert("label".into(), json!("spot"));

        let processor = registry()
            .deserialize(&obj, &ReferenceList::new())
            .unwrap();
        assert_eq!(processor.name(), "StubProcessor");
        assert_eq!(processor.as_dict()["label"], json!("spot"));
    }

    #[test]
    fn test_unknown_tag() {
        let mut obj = Map::new();
        obj.insert("processorName".into(), json!("NoSuchProcessor"));

        let err = registry()
            .deserialize(&obj, &ReferenceList::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownProcessor(tag) if tag == "NoSuchProcessor"));
    }

    #[test]
    fn test_missing_tag_without_fallback() {
        let err = registry()
            .deserialize(&Map::new(), &ReferenceList::new())
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("processorName")));
    }

    #[test]
    fn test_missing_tag_with_fallback() {
        let registry = registry().with_fallback(StubProcessor::from_dict);
        let processor = registry
            .deserialize(&Map::new(), &ReferenceList::new())
            .unwrap();
        assert_eq!(processor.name(), "StubProcessor");
    }

    #[test]
    fn test_non_string_tag() {
        let mut obj = Map::new();
        obj.insert("processorName".into(), json!(7));

        let err = registry()
            .deserialize(&obj, &ReferenceList::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidField { field, .. } if field == "processorName"));
    }

    #[test]
    fn test_boxed_equality_is_tag_plus_fields() {
        let a = StubProcessor::boxed("spot");
        let b = StubProcessor::boxed("spot");
        let c = StubProcessor::boxed("vol");
        assert_eq!(&a, &b);
        assert_ne!(&a, &c);
    }
}
