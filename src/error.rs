//! Error taxonomy for scheduling runs.

use std::fmt;

use crate::validation::ValidationError;

/// Failure of a scheduling run.
///
/// All variants are detected synchronously; the computation is
/// deterministic, so retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Input rejected before any computation (every problem found is listed).
    InvalidInput(Vec<ValidationError>),
    /// Unrecognized algorithm selector.
    InvalidAlgorithm(String),
    /// An internal bound was exceeded. Never expected with valid input.
    InternalInvariantViolation(String),
}

impl ScheduleError {
    /// Wraps a single validation error.
    pub fn invalid_input(error: ValidationError) -> Self {
        ScheduleError::InvalidInput(vec![error])
    }

    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            ScheduleError::InvalidAlgorithm(name) => {
                write!(f, "unknown scheduling algorithm '{name}'")
            }
            ScheduleError::InternalInvariantViolation(msg) => {
                write!(f, "internal invariant violated: {msg}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_lists_all_problems() {
        let err = ScheduleError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "P1 burst 0"),
            ValidationError::new(ValidationErrorKind::NegativeArrival, "P2 arrival -1"),
        ]);
        assert_eq!(err.to_string(), "invalid input: P1 burst 0; P2 arrival -1");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_display_algorithm() {
        let err = ScheduleError::InvalidAlgorithm("LRU".into());
        assert_eq!(err.to_string(), "unknown scheduling algorithm 'LRU'");
        assert!(err.validation_errors().is_empty());
    }
}
