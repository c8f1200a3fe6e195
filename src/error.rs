//! Engine error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::io::ParseError;
use crate::models::{Slot, Weekday};
use crate::validation::ValidationError;

/// Errors surfaced by the rostering engine and its I/O collaborators.
///
/// Only [`RosterError::Infeasible`] originates in the scheduling core.
/// Rejected search moves and an unfinished fairness repair are ordinary
/// control flow and never show up here.
#[derive(Debug, Error)]
pub enum RosterError {
    /// No legal guard exists for a required slot, even under fallback.
    #[error(
        "infeasible roster: no guard can take the {slot} slot on day {day} (weekday {weekday})"
    )]
    Infeasible {
        /// Day number (1-based).
        day: usize,
        /// Weekday of `day`.
        weekday: Weekday,
        /// Slot that could not be filled.
        slot: Slot,
    },

    /// Input failed pre-flight validation.
    #[error("invalid input: {}", format_validation(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Guard file could not be parsed.
    #[error("guard file error: {0}")]
    Parse(#[from] ParseError),

    /// Run configuration could not be loaded or is out of range.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading the guard file or writing the roster failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_infeasible_message() {
        let err = RosterError::Infeasible {
            day: 15,
            weekday: 1,
            slot: Slot::Night2,
        };
        assert_eq!(
            err.to_string(),
            "infeasible roster: no guard can take the night-2 slot on day 15 (weekday 1)"
        );
    }

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = RosterError::InvalidInput(vec![
            ValidationError {
                kind: ValidationErrorKind::EmptyGuardPool,
                message: "no guards".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::EmptyHorizon,
                message: "no days".into(),
            },
        ]);
        assert_eq!(err.to_string(), "invalid input: no guards; no days");
    }
}
