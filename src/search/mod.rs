//! Roster improvement.
//!
//! Two stages run after construction:
//!
//! 1. [`LocalSearch`]: a fixed budget of random same-slot swaps between two
//!    days, accepted under lexicographic comparison of
//!    (preference, coverage, −fairness penalty).
//! 2. [`repair_night_fairness`]: first-fit hand-over of night slots from
//!    guards above the night target to guards below it.
//!
//! # Acceptance
//!
//! | Candidate vs current | Decision |
//! |----------------------|----------|
//! | Invalid | reject |
//! | Better | accept |
//! | Tied on all objectives | accept with probability 0.5 |
//! | Worse | reject |
//!
//! # Reference
//! Hansen & Mladenović (2001), "Variable neighborhood search: Principles
//! and applications", EJOR 130(3)

mod acceptance;
mod local_search;
mod repair;

pub use acceptance::{accepts, compare_scores, Verdict, EPS, TIE_ACCEPT_PROBABILITY};
pub use local_search::{
    LocalSearch, SearchOutcome, SearchState, SearchStats, StepOutcome, SwapMove,
};
pub use repair::{night_target, repair_night_fairness, RepairMove, RepairOutcome};
