use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The insertion predicate matched no node of a non-empty list.
    #[error("no node matched the insertion predicate")]
    NoMatch,
}
