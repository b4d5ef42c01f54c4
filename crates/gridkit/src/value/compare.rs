use crate::value::CellValue;
use std::cmp::Ordering;

///
/// Canonical CellValue Rank
///
/// Stable rank used for cross-variant ordering on the opaque-fallback path.
///
/// IMPORTANT:
/// Null holds the lowest rank so that missing values order below every
/// present value, matching the nullable comparator paths.
///
#[must_use]
pub(crate) const fn canonical_rank(value: &CellValue) -> u8 {
    match value {
        CellValue::Null => 0,
        CellValue::Bool(_) => 1,
        CellValue::Decimal(_) => 2,
        CellValue::Float(_) => 3,
        CellValue::Int(_) => 4,
        CellValue::Long(_) => 5,
        CellValue::Opaque(_) => 6,
        CellValue::Text(_) => 7,
        CellValue::Timestamp(_) => 8,
    }
}

/// Total canonical comparator used by the opaque-fallback sort path.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub(crate) fn canonical_cmp(left: &CellValue, right: &CellValue) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched variants.
#[must_use]
pub(crate) fn strict_cmp(left: &CellValue, right: &CellValue) -> Option<Ordering> {
    match (left, right) {
        (CellValue::Bool(a), CellValue::Bool(b)) => Some(a.cmp(b)),
        (CellValue::Decimal(a), CellValue::Decimal(b)) => Some(a.cmp(b)),
        (CellValue::Float(a), CellValue::Float(b)) => Some(a.cmp(b)),
        (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
        (CellValue::Long(a), CellValue::Long(b)) => Some(a.cmp(b)),
        (CellValue::Null, CellValue::Null) => Some(Ordering::Equal),
        (CellValue::Opaque(a), CellValue::Opaque(b)) => Some(a.cmp(b)),
        (CellValue::Text(a), CellValue::Text(b)) => Some(a.cmp(b)),
        (CellValue::Timestamp(a), CellValue::Timestamp(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn canonical_cmp_same_rank(left: &CellValue, right: &CellValue) -> Ordering {
    match (left, right) {
        (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
        (CellValue::Decimal(a), CellValue::Decimal(b)) => a.cmp(b),
        (CellValue::Float(a), CellValue::Float(b)) => a.cmp(b),
        (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
        (CellValue::Long(a), CellValue::Long(b)) => a.cmp(b),
        (CellValue::Opaque(a), CellValue::Opaque(b)) => a.cmp(b),
        (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
        (CellValue::Timestamp(a), CellValue::Timestamp(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
