//! Engine errors.

/// Error returned when text is not a valid outcome value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid outcome: \"{found}\" (expected 1 or -1)")]
pub struct ParseOutcomeError {
    /// The rejected text, trimmed.
    pub found: String,
}
