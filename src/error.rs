//! Error types for simulation runs.

use std::fmt;

use crate::validation::ValidationError;

/// Errors produced by the simulation core.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Input rejected before simulation started. Holds every problem found.
    InvalidInput(Vec<ValidationError>),
    /// Processes with no slice in the timeline.
    ///
    /// Indicates a defect in the engine, not a caller mistake.
    IncompleteTimeline {
        /// IDs of the processes that never ran to completion.
        missing: Vec<u32>,
    },
    /// The engine clock passed its termination bound.
    ///
    /// Indicates a defect in the engine, not a caller mistake.
    IterationLimitExceeded {
        /// Clock bound that was crossed.
        limit: i64,
        /// IDs of the processes still unfinished.
        unfinished: Vec<u32>,
    },
}

impl SimulationError {
    /// Whether the caller can fix the error by changing the input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, SimulationError::InvalidInput(_))
    }

    /// Validation errors, if the input was rejected.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid simulation input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            SimulationError::IncompleteTimeline { missing } => {
                write!(f, "timeline is missing processes {missing:?}")
            }
            SimulationError::IterationLimitExceeded { limit, unfinished } => write!(
                f,
                "simulation clock exceeded bound {limit} with processes {unfinished:?} unfinished"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, ProcessRecord};
    use crate::validation::validate_request;

    #[test]
    fn test_from_validation_errors() {
        let errors = validate_request(&[], Algorithm::Fcfs, None).unwrap_err();
        let err: SimulationError = errors.into();
        assert!(err.is_input_error());
        assert_eq!(err.validation_errors().len(), 1);
        assert!(err.to_string().starts_with("invalid simulation input"));
    }

    #[test]
    fn test_display_joins_messages() {
        let processes = vec![ProcessRecord::new(1, -1, 0)];
        let err = SimulationError::from(validate_request(&processes, Algorithm::Fcfs, None).unwrap_err());
        let text = err.to_string();
        assert!(text.contains("negative arrival"));
        assert!(text.contains("non-positive burst"));
        assert!(text.contains("; "));
    }

    #[test]
    fn test_defect_errors() {
        let incomplete = SimulationError::IncompleteTimeline { missing: vec![3] };
        assert!(!incomplete.is_input_error());
        assert!(incomplete.validation_errors().is_empty());
        assert!(incomplete.to_string().contains("[3]"));

        let limit = SimulationError::IterationLimitExceeded { limit: 20, unfinished: vec![1, 2] };
        assert!(limit.to_string().contains("20"));
    }
}
