//! Cross-reference resolution for processor deserialization
//!
//! A grid document can contain processors that refer to previously-defined
//! entities: other columns, data series, or raw entities. The caller collects
//! those into a [`ReferenceList`] and threads it through every processor's
//! deserialization. The list is read-only during a single `from_dict` call
//! and is always an explicit parameter, never global state.

use std::fmt;

/// What kind of entity a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Another column in the same grid
    Column,
    /// A data series
    Series,
    /// A raw entity (asset, portfolio, ...)
    Entity,
}

impl ReferenceKind {
    /// Get the wire tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Column => "column",
            ReferenceKind::Series => "series",
            ReferenceKind::Entity => "entity",
        }
    }

    /// Parse from a wire tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "column" => Some(ReferenceKind::Column),
            "series" => Some(ReferenceKind::Series),
            "entity" => Some(ReferenceKind::Entity),
            _ => None,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resolvable entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Kind of entity
    pub kind: ReferenceKind,
    /// Identifier unique within the kind (a column name, a series id, ...)
    pub id: String,
}

impl Reference {
    /// Create a reference
    pub fn new(kind: ReferenceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Reference to a column by name
    pub fn column(name: impl Into<String>) -> Self {
        Self::new(ReferenceKind::Column, name)
    }

    /// Reference to a data series by id
    pub fn series(id: impl Into<String>) -> Self {
        Self::new(ReferenceKind::Series, id)
    }

    /// Reference to an entity by id
    pub fn entity(id: impl Into<String>) -> Self {
        Self::new(ReferenceKind::Entity, id)
    }
}

/// Read-only lookup table of previously-defined entities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList {
    references: Vec<Reference>,
}

impl ReferenceList {
    /// Create an empty reference list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reference
    pub fn push(&mut self, reference: Reference) {
        self.references.push(reference);
    }

    /// Find a reference by kind and id
    pub fn resolve(&self, kind: ReferenceKind, id: &str) -> Option<&Reference> {
        self.references
            .iter()
            .find(|r| r.kind == kind && r.id == id)
    }

    /// Number of references
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Iterate over the references in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.references.iter()
    }
}

impl From<Vec<Reference>> for ReferenceList {
    fn from(references: Vec<Reference>) -> Self {
        Self { references }
    }
}
