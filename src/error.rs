use thiserror::Error;

/// Validation failures raised before classification runs.
///
/// The classification pass itself is total over normalized input; these are
/// the only errors the pipeline produces, and the service maps them to
/// HTTP 400 responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The keyword list was empty, or every entry was blank after trimming.
    #[error("no keywords provided")]
    NoKeywords,

    /// The batch exceeds the configured per-request keyword cap.
    #[error("too many keywords: {actual} exceeds the limit of {limit}")]
    TooManyKeywords { limit: usize, actual: usize },
}
