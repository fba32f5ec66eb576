//! # quantgrid-processors
//!
//! Concrete processor variants for quantgrid columns.
//!
//! Each variant implements the [`Processor`] serialization contract from
//! quantgrid-core: a tag, a flat parameter mapping, and a `from_dict` that
//! resolves cross-references through the caller's reference list. Evaluation
//! is out of scope; these types carry a column's computation description, not
//! its computation.
//!
//! [`default_registry`] wires every variant into a [`ProcessorRegistry`]:
//!
//! ```rust
//! use quantgrid_core::{DataColumn, ReferenceList};
//! use quantgrid_processors::{default_registry, LastValueProcessor, SeriesRef};
//!
//! let column = DataColumn::new(
//!     "Spot",
//!     Box::new(LastValueProcessor::new(SeriesRef::new("spot-series"))),
//! );
//!
//! let registry = default_registry();
//! let back = DataColumn::from_dict(&column.as_dict(), &ReferenceList::new(), &registry).unwrap();
//! assert_eq!(back, column);
//! ```

pub mod coordinate;
pub mod entity;
pub mod series;

pub use coordinate::CoordinateProcessor;
pub use entity::EntityProcessor;
pub use series::{ChangeProcessor, LastValueProcessor, PercentileProcessor, SeriesRef};

pub use quantgrid_core::{Processor, ProcessorRegistry};

/// Build a registry with every processor variant in this crate registered
pub fn default_registry() -> ProcessorRegistry {
    let mut registry = ProcessorRegistry::new();
    registry.register(LastValueProcessor::NAME, LastValueProcessor::from_dict);
    registry.register(ChangeProcessor::NAME, ChangeProcessor::from_dict);
    registry.register(PercentileProcessor::NAME, PercentileProcessor::from_dict);
    registry.register(EntityProcessor::NAME, EntityProcessor::from_dict);
    registry.register(CoordinateProcessor::NAME, CoordinateProcessor::from_dict);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_all_variants() {
        let registry = default_registry();
        for tag in [
            LastValueProcessor::NAME,
            ChangeProcessor::NAME,
            PercentileProcessor::NAME,
            EntityProcessor::NAME,
            CoordinateProcessor::NAME,
        ] {
            assert!(registry.contains(tag), "missing {tag}");
        }
        assert!(!registry.contains("AppendProcessor"));
    }
}
