//! Unified error hierarchy for runlog
//!
//! Every fallible operation in the engine returns [`RunLogError`].
//! Soft conditions (empty collection, selected run no longer present)
//! are not errors; they produce defined zero-valued snapshots instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error type for all runlog operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunLogError {
    /// Run creation with a distance that cannot yield a pace
    #[error("distance must be positive, got {value} km")]
    NonPositiveDistance { value: Decimal },

    /// Formatter input below zero
    #[error("duration must not be negative, got {value} min")]
    NegativeDuration { value: Decimal },
}

impl RunLogError {
    /// All current variants are caller errors surfaced synchronously;
    /// nothing in the engine is worth retrying.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RunLogError::NonPositiveDistance { .. } | RunLogError::NegativeDuration { .. }
        )
    }
}

/// Result type alias for runlog operations
pub type Result<T> = std::result::Result<T, RunLogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = RunLogError::NonPositiveDistance { value: dec!(0) };
        assert!(err.to_string().contains("must be positive"));

        let err = RunLogError::NegativeDuration { value: dec!(-1.5) };
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_invalid_argument_classification() {
        assert!(RunLogError::NonPositiveDistance { value: dec!(-2) }.is_invalid_argument());
        assert!(RunLogError::NegativeDuration { value: dec!(-0.01) }.is_invalid_argument());
    }
}
