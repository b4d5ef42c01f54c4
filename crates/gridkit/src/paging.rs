use serde::{Deserialize, Serialize};

///
/// PagedView
///
/// Projection of an ordered row sequence into fixed-size pages, with one
/// selected page. The view owns its sequence, so the pages and the rows
/// can never disagree; re-sorting rebuilds the view rather than mutating
/// it in place.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PagedView<T> {
    rows: Vec<T>,
    page_size: usize,
    current_page: usize,
}

// Deserialization re-applies the constructor clamps so a decoded payload
// cannot carry a zero page size or an out-of-range page.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for PagedView<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            rows: Vec<T>,
            page_size: usize,
            current_page: usize,
        }

        let raw = Raw::deserialize(deserializer)?;

        Ok(Self::new(raw.rows, raw.page_size).with_current_page(raw.current_page))
    }
}

impl<T> PagedView<T> {
    /// Create a view over `rows` positioned at page 0.
    ///
    /// A zero `page_size` is clamped to 1.
    #[must_use]
    pub fn new(rows: Vec<T>, page_size: usize) -> Self {
        Self {
            rows,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    /// Select `page`, clamped to the last page.
    #[must_use]
    pub fn with_current_page(mut self, page: usize) -> Self {
        self.current_page = self.clamp_page(page);
        self
    }

    /// Select `page`; returns false and leaves the view unchanged when the
    /// page is out of range.
    pub fn set_current_page(&mut self, page: usize) -> bool {
        if page >= self.page_count() {
            return false;
        }

        self.current_page = page;
        true
    }

    /// Number of pages; the last page may be shorter than `page_size`.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the full underlying row sequence.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Borrow the rows materialized by the selected page.
    #[must_use]
    pub fn current_rows(&self) -> &[T] {
        self.page_rows(self.current_page)
    }

    /// Borrow the rows materialized by `page`; empty when out of range.
    #[must_use]
    pub fn page_rows(&self, page: usize) -> &[T] {
        let start = page.saturating_mul(self.page_size);
        if start >= self.rows.len() {
            return &[];
        }

        let end = (start + self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Consume the view and return the underlying row sequence.
    #[must_use]
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Consume the view and return `(rows, page_size, current_page)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, usize, usize) {
        (self.rows, self.page_size, self.current_page)
    }

    fn clamp_page(&self, page: usize) -> usize {
        let count = self.page_count();
        if count == 0 {
            0
        } else if page >= count {
            count - 1
        } else {
            page
        }
    }
}

impl<T> From<PagedView<T>> for (Vec<T>, usize, usize) {
    fn from(view: PagedView<T>) -> Self {
        view.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(n: usize, page_size: usize) -> PagedView<u32> {
        PagedView::new((0..n as u32).collect(), page_size)
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(view(25, 10).page_count(), 3);
        assert_eq!(view(30, 10).page_count(), 3);
        assert_eq!(view(0, 10).page_count(), 0);
    }

    #[test]
    fn last_page_is_short() {
        let v = view(25, 10).with_current_page(2);
        assert_eq!(v.current_rows(), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn set_current_page_rejects_out_of_range() {
        let mut v = view(25, 10);
        assert!(v.set_current_page(2));
        assert!(!v.set_current_page(3));
        assert_eq!(v.current_page(), 2);
    }

    #[test]
    fn with_current_page_clamps() {
        assert_eq!(view(25, 10).with_current_page(99).current_page(), 2);
        assert_eq!(view(0, 10).with_current_page(5).current_page(), 0);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let v = view(3, 0);
        assert_eq!(v.page_size(), 1);
        assert_eq!(v.page_count(), 3);
    }

    #[test]
    fn page_rows_out_of_range_is_empty() {
        assert!(view(25, 10).page_rows(3).is_empty());
    }

    #[test]
    fn deserialize_clamps_page_size_and_page() {
        let v: PagedView<u32> =
            serde_json::from_str(r#"{"rows":[1,2,3],"page_size":0,"current_page":9}"#)
                .expect("well-formed payload");

        assert_eq!(v.page_size(), 1);
        assert_eq!(v.current_page(), 2);
        assert_eq!(v.page_count(), 3);
    }

    #[test]
    fn serde_round_trip_preserves_view() {
        let v = view(25, 10).with_current_page(1);
        let json = serde_json::to_string(&v).expect("serializable");
        let back: PagedView<u32> = serde_json::from_str(&json).expect("round trip");

        assert_eq!(back, v);
    }
}
