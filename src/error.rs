use thiserror::Error;

/// Reasons a single game record cannot be analyzed.
///
/// Every variant aborts analysis of that one game only; the rest of a slate is unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("malformed W-L record in {field}: {value:?}")]
    MalformedRecordString { field: &'static str, value: String },

    /// A field is present but has the wrong JSON type or an unrepresentable value.
    #[error("invalid game record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
