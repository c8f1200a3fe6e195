//! Lexicographic acceptance rule.
//!
//! Candidates are compared objective by objective: preference first, then
//! coverage, then fairness penalty. The first objective that differs
//! decides. Float objectives differing by at most [`EPS`] count as equal.
//! A candidate tied on all three is accepted with probability
//! [`TIE_ACCEPT_PROBABILITY`], which lets the search drift across plateaus.

use rand::Rng;

use crate::scoring::RosterScore;

/// Tolerance under which two float objectives are considered equal.
pub const EPS: f64 = 1e-6;

/// Probability of accepting a candidate tied on every objective.
pub const TIE_ACCEPT_PROBABILITY: f64 = 0.5;

/// Outcome of comparing a candidate score against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Strictly better on the first differing objective.
    Better,
    /// Strictly worse on the first differing objective.
    Worse,
    /// Equal (within tolerance) on every objective.
    Tied,
}

/// Compares `candidate` against `current` lexicographically.
///
/// # Example
/// ```
/// use u_roster::scoring::RosterScore;
/// use u_roster::search::{compare_scores, Verdict};
///
/// let current = RosterScore { preference: 0.5, coverage: 0.9, fairness_penalty: 1 };
/// let candidate = RosterScore { preference: 0.5, coverage: 0.8, fairness_penalty: 0 };
/// assert_eq!(compare_scores(&candidate, &current), Verdict::Worse);
/// ```
pub fn compare_scores(candidate: &RosterScore, current: &RosterScore) -> Verdict {
    for delta in [
        candidate.preference - current.preference,
        candidate.coverage - current.coverage,
    ] {
        if delta > EPS {
            return Verdict::Better;
        }
        if delta < -EPS {
            return Verdict::Worse;
        }
    }

    match candidate.fairness_penalty.cmp(&current.fairness_penalty) {
        std::cmp::Ordering::Less => Verdict::Better,
        std::cmp::Ordering::Greater => Verdict::Worse,
        std::cmp::Ordering::Equal => Verdict::Tied,
    }
}

/// Resolves a verdict to accept/reject, drawing from `rng` only on ties.
pub fn accepts<R: Rng>(verdict: Verdict, rng: &mut R) -> bool {
    match verdict {
        Verdict::Better => true,
        Verdict::Worse => false,
        Verdict::Tied => rng.random_bool(TIE_ACCEPT_PROBABILITY),
    }
}
