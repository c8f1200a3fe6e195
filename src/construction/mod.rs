//! Initial roster construction.
//!
//! Ranks days by how few guards may work them, then fills slots greedily
//! against fair-share quotas, falling back to relaxed selection when the
//! quotas leave a slot empty.
//!
//! # Algorithm
//!
//! `GreedyConstructor` runs three passes (day, night 1, night 2) over the
//! difficulty-ordered days. It is deterministic and not optimal; local
//! search improves on it.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models", EJOR 153(1)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod difficulty;
mod greedy;

pub use difficulty::{days_by_difficulty, free_guards_per_weekday};
pub use greedy::GreedyConstructor;
