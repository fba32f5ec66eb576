//! # quantgrid-core
//!
//! Core data structures for quantgrid data-grid definitions.
//!
//! This crate provides the fundamental types used throughout quantgrid:
//! - [`DataColumn`] - One column of a grid: name, processor, format, width
//! - [`ColumnFormat`] and [`RenderType`] - Display formatting for a column
//! - [`Processor`] and [`ProcessorRegistry`] - The serialization contract of
//!   the computation layer, and the tag-dispatched factory that reconstructs
//!   processor variants
//! - [`Reference`] and [`ReferenceList`] - Cross-reference resolution during
//!   deserialization
//! - [`GridDefinition`] - The document columns are embedded in
//!
//! Columns serialize to ordered mappings (`as_dict`/`from_dict`) intended to
//! nest inside a larger grid-definition document. This crate carries no
//! computation semantics: processors are opaque capabilities and only their
//! serialization contract is used here.
//!
//! ## Example
//!
//! ```rust
//! use quantgrid_core::{ColumnFormat, DataColumn, GridDefinition};
//! # use quantgrid_core::Processor;
//! # use serde_json::{Map, Value};
//! # #[derive(Debug, Clone)]
//! # struct SpotProcessor;
//! # impl Processor for SpotProcessor {
//! #     fn name(&self) -> &'static str { "SpotProcessor" }
//! #     fn as_dict(&self) -> Map<String, Value> { Map::new() }
//! #     fn clone_box(&self) -> Box<dyn Processor> { Box::new(self.clone()) }
//! # }
//!
//! let column = DataColumn::new("Spot", Box::new(SpotProcessor))
//!     .with_format(ColumnFormat::with_precision(4))
//!     .with_width(120);
//!
//! let mut grid = GridDefinition::new("fx-majors");
//! grid.add_column(column);
//!
//! let document = grid.as_dict();
//! assert_eq!(document["columns"][0]["processorName"], "SpotProcessor");
//! ```

pub mod column;
pub mod error;
pub mod format;
pub mod grid;
pub mod processor;
pub mod reference;

// Re-exports for convenience
pub use column::{DataColumn, DEFAULT_WIDTH};
pub use error::{Error, Result};
pub use format::{ColumnFormat, RenderType};
pub use grid::GridDefinition;
pub use processor::{Processor, ProcessorFromDict, ProcessorRegistry};
pub use reference::{Reference, ReferenceKind, ReferenceList};
