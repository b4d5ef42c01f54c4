mod compare;


use crate::types::{Float64, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, cmp::Ordering};

///
/// CellValue
///
/// One grid cell, read out of a row by a field accessor.
///
/// Null → the field's value is Option::None; it orders below every
/// present value under the ascending canonical order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CellValue {
    Bool(bool),
    Decimal(Decimal),
    Float(Float64),
    Int(i32),
    Long(i64),
    Null,
    /// Fallback for unrecognized field types; carries a caller-rendered
    /// textual form so ordering stays deterministic.
    Opaque(String),
    Text(String),
    Timestamp(Timestamp),
}

impl CellValue {
    /// Returns true if the value is one of the numeric variants.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Decimal(_) | Self::Float(_) | Self::Int(_) | Self::Long(_)
        )
    }

    /// Returns true if the value is Text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if the value is Null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Total canonical comparator used by the opaque-fallback sort path.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        compare::canonical_cmp(left, right)
    }

    /// Strict comparator for identical orderable variants.
    ///
    /// Returns `None` for mismatched variants; `Null` matches only `Null`.
    #[must_use]
    pub fn strict_cmp(left: &Self, right: &Self) -> Option<Ordering> {
        compare::strict_cmp(left, right)
    }

    ///
    /// TEXT COMPARISON
    ///

    /// Case-insensitive ordinal fold used by the text comparator.
    ///
    /// ASCII lowercases byte-wise; non-ASCII falls back to `to_lowercase`.
    #[must_use]
    pub fn fold_ci(s: &str) -> Cow<'_, str> {
        if s.is_ascii() {
            return Cow::Owned(s.to_ascii_lowercase());
        }
        Cow::Owned(s.to_lowercase())
    }

    /// Case-insensitive ordinal comparison for text values.
    ///
    /// Returns `None` unless both sides are Text.
    #[must_use]
    pub fn text_cmp_ci(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = (self.as_text()?, other.as_text()?);

        Some(Self::fold_ci(a).cmp(&Self::fold_ci(b)))
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for CellValue {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool      => Bool,
    Decimal   => Decimal,
    Float64   => Float,
    i8        => Int,
    i16       => Int,
    i32       => Int,
    i64       => Long,
    &str      => Text,
    String    => Text,
    Timestamp => Timestamp,
}

impl<V: Into<Self>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
