use thiserror::Error;

/// Returned by operations that need at least one scored text to work with.
///
/// This is the only failure the classifier itself defines; it is surfaced
/// to the caller immediately and never recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected at least one scored text, got an empty sequence")]
pub struct EmptyInputError;
