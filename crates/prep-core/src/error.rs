//! Unified error types for the preprocessing pipeline.
//!
//! The pipeline is designed to never fail on input: every error below is
//! recovered from internally and reflected in the per-call [`Diagnostics`]
//! instead of being surfaced to the caller.
//!
//! [`Diagnostics`]: crate::types::Diagnostics

/// Main error type for preprocessing operations.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// A token classified as a number could not be parsed.
    #[error("malformed number: {0}")]
    MalformedNumber(String),

    /// A size-unit suffix is not present in the unit table.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Substitutions were skipped because they touched an earlier rewrite.
    #[error("{count} substitutions dropped over earlier rewrites")]
    OverlapDropped { count: usize },

    /// A user-supplied dictionary entry was rejected at configure time.
    #[error("invalid dictionary entry {key:?}: {reason}")]
    DictionaryMerge { key: String, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with PrepError.
pub type PrepResult<T> = Result<T, PrepError>;

impl PrepError {
    /// Create a malformed-number error with message.
    pub fn malformed_number(msg: impl Into<String>) -> Self {
        Self::MalformedNumber(msg.into())
    }

    /// Create an unknown-unit error with message.
    pub fn unknown_unit(msg: impl Into<String>) -> Self {
        Self::UnknownUnit(msg.into())
    }

    /// Create an overlap-drop report for `count` skipped substitutions.
    pub fn overlap_dropped(count: usize) -> Self {
        Self::OverlapDropped { count }
    }

    /// Create a dictionary-merge rejection for the given key.
    pub fn dictionary_merge(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DictionaryMerge {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
