//! Context Extraction Error Types

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractionError {
    #[error("Section strategy failed: {message}")]
    StrategyFailed { message: String },

    #[error("Section payload could not be represented: {message}")]
    InvalidPayload { message: String },
}

impl ExtractionError {
    /// Shorthand for strategy-side failures.
    pub fn strategy(message: impl Into<String>) -> Self {
        Self::StrategyFailed {
            message: message.into(),
        }
    }
}

/// Result type for section extraction
pub type ExtractionResult<T> = Result<T, ExtractionError>;
