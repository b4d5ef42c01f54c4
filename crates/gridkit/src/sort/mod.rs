
use crate::{
    error::SortError,
    model::{FieldAccessor, FieldKind, GridRow},
    paging::PagedView,
    value::CellValue,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Direction
///
/// Canonical sort direction. Descending is the exact reverse of the
/// ascending total order (one `Ordering::reverse` at the top), so null
/// placement flips with direction and repeated sorts stay idempotent.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Map a UI toggle state onto a direction.
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Asc } else { Self::Desc }
    }

    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }

    const fn apply(self, cmp: Ordering) -> Ordering {
        match self {
            Self::Asc => cmp,
            Self::Desc => cmp.reverse(),
        }
    }
}

///
/// SortScope
///
/// Whether a sort request addresses the whole dataset or only the rows
/// materialized by the view's current page.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortScope {
    #[default]
    AllRows,
    CurrentPage,
}

///
/// SortOutcome
///
/// Result triple of one sort request: the full row sequence, a paged view
/// rebuilt over it, and the resulting page index.
///

#[derive(Clone, Debug)]
pub struct SortOutcome<T> {
    pub rows: Vec<T>,
    pub view: PagedView<T>,
    pub page: usize,
}

impl<T> SortOutcome<T> {
    /// Consume this outcome and return `(rows, view, page)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PagedView<T>, usize) {
        (self.rows, self.view, self.page)
    }
}

/// Build the ordering function for one resolved field and direction.
///
/// Dispatch is by the accessor's declared kind, not by a value's runtime
/// variant, so behavior is deterministic per field even under
/// heterogeneous or null values. The returned comparator is total and
/// never panics.
pub fn comparator<T>(
    accessor: &'static FieldAccessor<T>,
    direction: Direction,
) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| {
        let cmp = ascending_cmp(accessor.kind, &accessor.read(a), &accessor.read(b));

        direction.apply(cmp)
    }
}

/// Stable-sort `rows` in place by `field`.
///
/// Unknown field names are reported, not panicked on.
pub fn sort_rows<T: GridRow>(
    rows: &mut [T],
    field: &str,
    direction: Direction,
) -> Result<(), SortError> {
    let accessor = T::resolve(field).ok_or_else(|| SortError::UnknownField {
        field: field.to_string(),
    })?;

    rows.sort_by(comparator(accessor, direction));

    Ok(())
}

/// Sort a paged dataset by one field, scoped to the whole dataset or to
/// the view's current page.
///
/// Whole-dataset scope rebuilds the view at page 0 over the fully sorted
/// sequence. Current-page scope sorts only the rows the current page
/// materializes, splices them back at the page offset (truncating at the
/// dataset end), and preserves the current page index.
///
/// Fail-soft: an empty field name, empty dataset, empty view, or unknown
/// field degrades to returning the inputs unchanged, including the current
/// page index. The degraded path logs a diagnostic and never panics.
pub fn sort_with_scope<T: GridRow + Clone>(
    all_rows: &[T],
    view: &PagedView<T>,
    field: &str,
    direction: Direction,
    scope: SortScope,
    page_size: usize,
) -> SortOutcome<T> {
    match try_sort(all_rows, view, field, direction, scope, page_size) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("sort by '{field}' skipped: {err}");

            SortOutcome {
                rows: all_rows.to_vec(),
                view: view.clone(),
                page: view.current_page(),
            }
        }
    }
}

fn try_sort<T: GridRow + Clone>(
    all_rows: &[T],
    view: &PagedView<T>,
    field: &str,
    direction: Direction,
    scope: SortScope,
    page_size: usize,
) -> Result<SortOutcome<T>, SortError> {
    if field.is_empty() {
        return Err(SortError::EmptyField);
    }
    if all_rows.is_empty() {
        return Err(SortError::EmptyRows);
    }

    let accessor = T::resolve(field).ok_or_else(|| SortError::UnknownField {
        field: field.to_string(),
    })?;

    let outcome = match scope {
        SortScope::AllRows => sort_all_rows(all_rows, accessor, direction, page_size),
        SortScope::CurrentPage => sort_current_page(all_rows, view, accessor, direction)?,
    };

    let kind = accessor.kind.label();
    log::debug!("sorted {scope:?} by '{field}' ({kind}) {direction:?}");

    Ok(outcome)
}

fn sort_all_rows<T: GridRow + Clone>(
    all_rows: &[T],
    accessor: &'static FieldAccessor<T>,
    direction: Direction,
    page_size: usize,
) -> SortOutcome<T> {
    let mut rows = all_rows.to_vec();
    rows.sort_by(comparator(accessor, direction));

    let view = PagedView::new(rows.clone(), page_size);

    SortOutcome {
        rows,
        view,
        page: 0,
    }
}

fn sort_current_page<T: GridRow + Clone>(
    all_rows: &[T],
    view: &PagedView<T>,
    accessor: &'static FieldAccessor<T>,
    direction: Direction,
) -> Result<SortOutcome<T>, SortError> {
    if view.is_empty() {
        return Err(SortError::EmptyView);
    }

    let page = view.current_page();
    let mut page_rows = view.current_rows().to_vec();
    page_rows.sort_by(comparator(accessor, direction));

    // Splice the sorted slice back at the page offset, truncating if the
    // last page is shorter than the page size.
    let mut rows = all_rows.to_vec();
    let start = page * view.page_size();
    for (i, row) in page_rows.into_iter().enumerate() {
        let Some(slot) = rows.get_mut(start + i) else {
            break;
        };
        *slot = row;
    }

    let new_view = PagedView::new(rows.clone(), view.page_size()).with_current_page(page);

    Ok(SortOutcome {
        rows,
        view: new_view,
        page,
    })
}

/// Ascending total order for one declared kind.
///
/// Null orders below every present value. Misdeclared values (an accessor
/// producing a variant outside its declared kind) fall back to the
/// canonical comparator rather than panicking.
fn ascending_cmp(kind: FieldKind, a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Null, CellValue::Null) => Ordering::Equal,
        (CellValue::Null, _) => Ordering::Less,
        (_, CellValue::Null) => Ordering::Greater,
        _ => match kind {
            FieldKind::Text => a
                .text_cmp_ci(b)
                .unwrap_or_else(|| CellValue::canonical_cmp(a, b)),
            FieldKind::Opaque => CellValue::canonical_cmp(a, b),
            _ => CellValue::strict_cmp(a, b).unwrap_or_else(|| CellValue::canonical_cmp(a, b)),
        },
    }
}
