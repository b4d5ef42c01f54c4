//! Typed grid sorting, paged views, and observable form validation for
//! in-process data-grid UIs.
//!
//! Sorting is field-name driven: each row type registers a static accessor
//! table (`GridRow::FIELDS`) mapping field names to typed read functions
//! and declared kinds, and the sorter dispatches a total comparator per
//! kind. Sort requests are fail-soft: a request that cannot run returns
//! the caller's inputs unchanged instead of erroring.
#![warn(unreachable_pub)]

pub mod error;
pub mod model;
pub mod observe;
pub mod paging;
pub mod sort;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Domain vocabulary only; no internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{FieldAccessor, FieldKind, GridRow},
        observe::{FieldRules, FormState},
        paging::PagedView,
        sort::{Direction, SortOutcome, SortScope, sort_with_scope},
        value::CellValue,
    };
}
