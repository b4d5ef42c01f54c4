
use crate::value::CellValue;
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Closed kind surface used by comparator dispatch.
/// Aligned with `CellValue` variants; optionality is a flag on the
/// accessor, not a separate kind.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    Bool,
    Decimal,
    Float,
    Int,
    Long,
    Text,
    Timestamp,

    /// Marker for field types outside the recognized scalar set.
    /// Such fields sort by the canonical fallback comparator.
    Opaque,
}

impl FieldKind {
    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Decimal => "Decimal",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Opaque => "Opaque",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
        }
    }
}

///
/// FieldAccessor
///
/// One registry entry: field name, declared kind, and a typed read
/// function. The static accessor table is the lookup cache; no runtime
/// metadata inspection happens anywhere.
///

pub struct FieldAccessor<T> {
    /// Field name as used in sort requests, case-sensitive.
    pub name: &'static str,
    /// Declared kind driving comparator dispatch.
    pub kind: FieldKind,
    /// Whether the field may produce `CellValue::Null`.
    pub nullable: bool,
    /// Read the field out of a row.
    pub get: fn(&T) -> CellValue,
}

impl<T> FieldAccessor<T> {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind, get: fn(&T) -> CellValue) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            get,
        }
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Read this field from `row`.
    #[must_use]
    pub fn read(&self, row: &T) -> CellValue {
        (self.get)(row)
    }
}

impl<T> std::fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("nullable", &self.nullable)
            .finish_non_exhaustive()
    }
}

///
/// GridRow
///
/// Implemented once per entity type shown in a grid. `FIELDS` is the
/// authoritative, ordered accessor table for that type.
///

pub trait GridRow: Sized + 'static {
    /// Ordered accessor table (authoritative for sort-field resolution).
    const FIELDS: &'static [FieldAccessor<Self>];

    /// Resolve a field name to its accessor, case-sensitive exact match.
    ///
    /// Unknown names are a missing-entry lookup, not a failure.
    #[must_use]
    fn resolve(field: &str) -> Option<&'static FieldAccessor<Self>> {
        Self::FIELDS.iter().find(|a| a.name == field)
    }
}
