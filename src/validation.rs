//! Input and roster validation.
//!
//! Two layers:
//! - **Input checks** run once before scheduling and report every
//!   structural problem with the guard pool and horizon.
//! - **Roster checks** decide whether a schedule is legal: exactly `days`
//!   rows, every slot filled with a known guard, three distinct guards per
//!   day, and nobody working a forbidden weekday. Local search calls
//!   [`is_schedule_valid`] on every candidate, so it stops at the first
//!   violation and does not allocate.

use std::ops::ControlFlow;

use crate::models::{Guard, Schedule, Slot, Violation, ViolationType};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No guards were supplied.
    EmptyGuardPool,
    /// Guard ids are not `1..=V` in pool order.
    NonConsecutiveId,
    /// The horizon has no days.
    EmptyHorizon,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the guard pool and horizon before scheduling.
///
/// Checks:
/// 1. At least one guard
/// 2. Guard at pool index `i` has id `i + 1`
/// 3. `days > 0`
///
/// A guard that both prefers and forbids the same weekday is accepted;
/// the forbidden rule wins during scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(guards: &[Guard], days: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if guards.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGuardPool,
            "Guard pool is empty",
        ));
    }

    for (idx, guard) in guards.iter().enumerate() {
        if guard.id.get() != idx + 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonConsecutiveId,
                format!(
                    "Guard at position {} has id {} (expected {})",
                    idx + 1,
                    guard.id,
                    idx + 1
                ),
            ));
        }
    }

    if days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyHorizon,
            "Planning horizon has zero days",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `schedule` is a legal roster for `guards` over `days` days.
pub fn is_schedule_valid(schedule: &Schedule, guards: &[Guard], days: usize) -> bool {
    scan_schedule(schedule, guards, days, &mut |_| ControlFlow::Break(())).is_continue()
}

/// Every rule broken by `schedule`, in day/slot order.
pub fn schedule_violations(schedule: &Schedule, guards: &[Guard], days: usize) -> Vec<Violation> {
    let mut violations = Vec::new();
    let _ = scan_schedule(schedule, guards, days, &mut |v| {
        violations.push(v);
        ControlFlow::Continue(())
    });
    violations
}

fn scan_schedule(
    schedule: &Schedule,
    guards: &[Guard],
    days: usize,
    visit: &mut impl FnMut(Violation) -> ControlFlow<()>,
) -> ControlFlow<()> {
    if schedule.day_count() != days {
        visit(Violation::day_count_mismatch(schedule.day_count()))?;
    }

    for (day_idx, row) in schedule.days().iter().enumerate() {
        let weekday = schedule.weekday(day_idx);
        for slot in Slot::ALL {
            let Some(guard_id) = row[slot.index()] else {
                visit(Violation::unassigned(day_idx, slot))?;
                continue;
            };
            if !guard_id.in_range(guards.len()) {
                visit(Violation::at(ViolationType::UnknownGuard, day_idx, slot, guard_id))?;
                continue;
            }
            if row[..slot.index()].contains(&Some(guard_id)) {
                visit(Violation::at(ViolationType::DuplicateGuard, day_idx, slot, guard_id))?;
            }
            if guards[guard_id.index()].is_forbidden(weekday) {
                visit(Violation::at(ViolationType::ForbiddenWeekday, day_idx, slot, guard_id))?;
            }
        }
    }

    ControlFlow::Continue(())
}
