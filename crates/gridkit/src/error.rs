use thiserror::Error as ThisError;

///
/// SortError
///
/// Internal classification for why a sort request could not run.
/// Never escapes `sort_with_scope`; the orchestrator logs the error and
/// degrades to returning the caller's inputs unchanged.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortError {
    #[error("sort field name is empty")]
    EmptyField,

    #[error("dataset is empty")]
    EmptyRows,

    #[error("paged view has no rows")]
    EmptyView,

    #[error("field '{field}' not found")]
    UnknownField { field: String },
}
