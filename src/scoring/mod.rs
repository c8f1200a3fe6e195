//! Roster validity and quality metrics.
//!
//! Computes the three objectives the optimizer trades off (preference,
//! coverage, fairness) and the per-guard coverage zones the coverage
//! objective is built on.
//!
//! # Reference
//! Burke et al. (2004), "The State of the Art of Nurse Rostering",
//! Journal of Scheduling 7(6)

mod coverage;
mod evaluator;
mod score;

pub use coverage::{CoverageZones, COVERAGE_CAP, ZONE_RADIUS};
pub use evaluator::Evaluator;
pub use score::{
    coverage_score, fairness_penalty, load_range, penalty_from_totals, preference_score,
    RosterScore,
};
