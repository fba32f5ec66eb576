//! Series-backed processors
//!
//! These variants all read from a single data series identified by id. Only
//! the serialization contract lives here; evaluation belongs to the
//! computation layer.

use quantgrid_core::{
    Error, Processor, Reference, ReferenceKind, ReferenceList, Result,
};
use serde_json::{Map, Value};

/// A data series identified by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRef {
    /// Series identifier, resolvable through the caller's reference list
    pub id: String,
}

impl SeriesRef {
    /// Create a series reference
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Write the `seriesId` key into a processor mapping
    fn write_to(&self, map: &mut Map<String, Value>) {
        map.insert("seriesId".into(), Value::from(self.id.as_str()));
    }

    /// Read the `seriesId` key from a processor mapping
    ///
    /// When the reference list is non-empty the id must resolve to a series
    /// reference; an empty list skips resolution so standalone columns can
    /// round trip without one.
    fn read_from(obj: &Map<String, Value>, references: &ReferenceList) -> Result<Self> {
        let id = obj
            .get("seriesId")
            .ok_or(Error::MissingField("seriesId"))?
            .as_str()
            .ok_or_else(|| Error::invalid_field("seriesId", "expected a string"))?;
        if !references.is_empty() && references.resolve(ReferenceKind::Series, id).is_none() {
            return Err(Error::ReferenceNotFound {
                kind: ReferenceKind::Series,
                id: id.to_string(),
            });
        }
        Ok(Self::new(id))
    }

    /// The reference-list entry this series resolves against
    pub fn reference(&self) -> Reference {
        Reference::series(self.id.clone())
    }
}

/// Latest value of a series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastValueProcessor {
    /// Series to read
    pub series: SeriesRef,
}

impl LastValueProcessor {
    /// Tag stored as `processorName`
    pub const NAME: &'static str = "LastValueProcessor";

    /// Create a last-value processor over a series
    pub fn new(series: SeriesRef) -> Self {
        Self { series }
    }

    /// Deserialize from a column mapping
    pub fn from_dict(
        obj: &Map<String, Value>,
        references: &ReferenceList,
    ) -> Result<Box<dyn Processor>> {
        Ok(Box::new(Self::new(SeriesRef::read_from(obj, references)?)))
    }
}

impl Processor for LastValueProcessor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.series.write_to(&mut map);
        map
    }

    fn clone_box(&self) -> Box<dyn Processor> {
        Box::new(self.clone())
    }
}

/// Change over a series window (last value minus first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeProcessor {
    /// Series to read
    pub series: SeriesRef,
}

impl ChangeProcessor {
    /// Tag stored as `processorName`
    pub const NAME: &'static str = "ChangeProcessor";

    /// Create a change processor over a series
    pub fn new(series: SeriesRef) -> Self {
        Self { series }
    }

    /// Deserialize from a column mapping
    pub fn from_dict(
        obj: &Map<String, Value>,
        references: &ReferenceList,
    ) -> Result<Box<dyn Processor>> {
        Ok(Box::new(Self::new(SeriesRef::read_from(obj, references)?)))
    }
}

impl Processor for ChangeProcessor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.series.write_to(&mut map);
        map
    }

    fn clone_box(&self) -> Box<dyn Processor> {
        Box::new(self.clone())
    }
}

/// Percentile of a series window
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileProcessor {
    /// Series to read
    pub series: SeriesRef,
    /// Percentile in [0, 100]; not validated here
    pub percentile: f64,
}

impl PercentileProcessor {
    /// Tag stored as `processorName`
    pub const NAME: &'static str = "PercentileProcessor";

    /// Create a percentile processor over a series
    pub fn new(series: SeriesRef, percentile: f64) -> Self {
        Self { series, percentile }
    }

    /// Deserialize from a column mapping
    pub fn from_dict(
        obj: &Map<String, Value>,
        references: &ReferenceList,
    ) -> Result<Box<dyn Processor>> {
        let series = SeriesRef::read_from(obj, references)?;
        let percentile = obj
            .get("percentile")
            .ok_or(Error::MissingField("percentile"))?
            .as_f64()
            .ok_or_else(|| Error::invalid_field("percentile", "expected a number"))?;
        Ok(Box::new(Self::new(series, percentile)))
    }
}

impl Processor for PercentileProcessor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.series.write_to(&mut map);
        map.insert("percentile".into(), Value::from(self.percentile));
        map
    }

    fn clone_box(&self) -> Box<dyn Processor> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn refs_with(series_id: &str) -> ReferenceList {
        ReferenceList::from(vec![Reference::series(series_id)])
    }

    #[test]
    fn test_last_value_roundtrip() {
        let processor = LastValueProcessor::new(SeriesRef::new("spot-series"));
        let back =
            LastValueProcessor::from_dict(&processor.as_dict(), &refs_with("spot-series")).unwrap();
        assert_eq!(back.name(), LastValueProcessor::NAME);
        assert_eq!(back.as_dict(), processor.as_dict());
    }

    #[test]
    fn test_empty_reference_list_skips_resolution() {
        let processor = ChangeProcessor::new(SeriesRef::new("spot-series"));
        assert!(ChangeProcessor::from_dict(&processor.as_dict(), &ReferenceList::new()).is_ok());
    }

    #[test]
    fn test_unresolved_series_fails() {
        let processor = ChangeProcessor::new(SeriesRef::new("spot-series"));
        let err =
            ChangeProcessor::from_dict(&processor.as_dict(), &refs_with("other-series"))
                .unwrap_err();
        assert!(matches!(
            err,
            Error::ReferenceNotFound {
                kind: ReferenceKind::Series,
                ..
            }
        ));
    }

    #[test]
    fn test_percentile_fields() {
        let processor = PercentileProcessor::new(SeriesRef::new("vol-series"), 95.0);
        let dict = processor.as_dict();
        assert_eq!(dict["seriesId"], json!("vol-series"));
        assert_eq!(dict["percentile"], json!(95.0));

        let back = PercentileProcessor::from_dict(&dict, &ReferenceList::new()).unwrap();
        assert_eq!(back.as_dict(), dict);
    }

    #[test]
    fn test_percentile_requires_number() {
        let mut obj = Map::new();
        obj.insert("seriesId".into(), json!("vol-series"));
        obj.insert("percentile".into(), json!("95"));

        let err = PercentileProcessor::from_dict(&obj, &ReferenceList::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field, .. } if field == "percentile"));
    }

    #[test]
    fn test_missing_series_id() {
        let err = LastValueProcessor::from_dict(&Map::new(), &ReferenceList::new()).unwrap_err();
        assert!(matches!(err, Error::MissingField("seriesId")));
    }
}
