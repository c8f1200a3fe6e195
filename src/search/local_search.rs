//! Randomized swap local search.
//!
//! # Algorithm
//!
//! For a fixed number of iterations:
//! 1. Pick two distinct days and one slot uniformly at random.
//! 2. Build a candidate with the holders of that slot exchanged between
//!    the two days. The current roster is never touched.
//! 3. Reject invalid candidates (duplicate guard in a day, forbidden
//!    weekday).
//! 4. Score the candidate and decide with the lexicographic rule.
//! 5. On acceptance the candidate and its score replace the current ones.
//!
//! There is no early exit; a fixed seed and iteration budget reproduce the
//! same run.
//!
//! # Reference
//! Hoos & Stützle (2004), "Stochastic Local Search: Foundations and
//! Applications", Ch. 2

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::acceptance::{accepts, compare_scores, Verdict};
use crate::models::{Schedule, Slot, SLOTS_PER_DAY};
use crate::scoring::{Evaluator, RosterScore};

/// A proposed exchange of one slot's holders between two days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapMove {
    /// First day row (0-based).
    pub d1: usize,
    /// Second day row (0-based), distinct from `d1`.
    pub d2: usize,
    /// Slot whose holders are exchanged.
    pub slot: Slot,
}

impl SwapMove {
    /// Draws a random move over `days` rows.
    ///
    /// `d2` is resampled until it differs from `d1`. Returns `None` when
    /// fewer than two days exist.
    pub fn random<R: Rng>(days: usize, rng: &mut R) -> Option<Self> {
        if days < 2 {
            return None;
        }
        let d1 = rng.random_range(0..days);
        let mut d2 = rng.random_range(0..days);
        while d2 == d1 {
            d2 = rng.random_range(0..days);
        }
        let slot = Slot::ALL[rng.random_range(0..SLOTS_PER_DAY)];
        Some(Self { d1, d2, slot })
    }
}

/// What happened to one proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Candidate was strictly better and replaced the current roster.
    Improved,
    /// Candidate tied and won the coin flip.
    AcceptedTie,
    /// Candidate broke a roster rule.
    RejectedInvalid,
    /// Candidate was strictly worse.
    RejectedWorse,
    /// Candidate tied and lost the coin flip.
    RejectedTie,
}

impl StepOutcome {
    /// Whether the candidate replaced the current roster.
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, StepOutcome::Improved | StepOutcome::AcceptedTie)
    }
}

/// Current roster and its cached score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Accepted roster.
    pub schedule: Schedule,
    /// Score of `schedule`.
    pub score: RosterScore,
}

impl SearchState {
    /// Scores `schedule` and wraps it as a search state.
    pub fn new(schedule: Schedule, evaluator: &Evaluator<'_>) -> Self {
        let score = evaluator.score(&schedule);
        Self { schedule, score }
    }

    /// Evaluates one move and applies it if accepted.
    ///
    /// A rejected move leaves both the roster and its score unchanged.
    pub fn apply_move<R: Rng>(
        &mut self,
        mv: SwapMove,
        evaluator: &Evaluator<'_>,
        rng: &mut R,
    ) -> StepOutcome {
        let candidate = self.schedule.swapped(mv.d1, mv.d2, mv.slot);
        if !evaluator.is_valid(&candidate) {
            return StepOutcome::RejectedInvalid;
        }

        let candidate_score = evaluator.score(&candidate);
        let verdict = compare_scores(&candidate_score, &self.score);
        if !accepts(verdict, rng) {
            return match verdict {
                Verdict::Tied => StepOutcome::RejectedTie,
                _ => StepOutcome::RejectedWorse,
            };
        }

        self.schedule = candidate;
        self.score = candidate_score;
        match verdict {
            Verdict::Tied => StepOutcome::AcceptedTie,
            _ => StepOutcome::Improved,
        }
    }
}

/// Counters collected over one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Proposals evaluated.
    pub iterations: usize,
    /// Strict improvements accepted.
    pub improved: usize,
    /// Ties accepted.
    pub accepted_ties: usize,
    /// Invalid candidates rejected.
    pub rejected_invalid: usize,
    /// Worse candidates rejected.
    pub rejected_worse: usize,
    /// Ties rejected.
    pub rejected_ties: usize,
}

impl SearchStats {
    fn record(&mut self, outcome: StepOutcome) {
        self.iterations += 1;
        match outcome {
            StepOutcome::Improved => self.improved += 1,
            StepOutcome::AcceptedTie => self.accepted_ties += 1,
            StepOutcome::RejectedInvalid => self.rejected_invalid += 1,
            StepOutcome::RejectedWorse => self.rejected_worse += 1,
            StepOutcome::RejectedTie => self.rejected_ties += 1,
        }
    }
}

/// Result of a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Final roster.
    pub schedule: Schedule,
    /// Score of `schedule`.
    pub score: RosterScore,
    /// Run counters.
    pub stats: SearchStats,
}

/// Fixed-budget swap local search.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_roster::construction::{days_by_difficulty, GreedyConstructor};
/// use u_roster::models::{Guard, Quotas};
/// use u_roster::scoring::Evaluator;
/// use u_roster::search::LocalSearch;
///
/// let guards: Vec<Guard> = (1..=6).map(|i| Guard::new(i).with_preferred((i % 7 + 1) as u8)).collect();
/// let quotas = Quotas::compute(guards.len(), 14).unwrap();
/// let initial = GreedyConstructor::new(&guards, quotas, days_by_difficulty(&guards, 14))
///     .construct()
///     .unwrap();
///
/// let evaluator = Evaluator::new(&guards, 14);
/// let mut rng = SmallRng::seed_from_u64(42);
/// let outcome = LocalSearch::new(500).run(initial, &evaluator, &mut rng);
/// assert!(evaluator.is_valid(&outcome.schedule));
/// assert_eq!(outcome.stats.iterations, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalSearch {
    max_iter: usize,
}

impl LocalSearch {
    /// Creates a search with an iteration budget.
    pub fn new(max_iter: usize) -> Self {
        Self { max_iter }
    }

    /// Runs the search from `initial`.
    ///
    /// Horizons shorter than two days admit no swap; the initial roster is
    /// returned as is.
    pub fn run<R: Rng>(
        &self,
        initial: Schedule,
        evaluator: &Evaluator<'_>,
        rng: &mut R,
    ) -> SearchOutcome {
        let mut state = SearchState::new(initial, evaluator);
        let mut stats = SearchStats::default();
        let days = state.schedule.day_count();

        info!(
            event = "search_start",
            max_iter = self.max_iter,
            days = days,
            score = %state.score,
        );

        if days < 2 {
            debug!(event = "search_skipped", days = days);
        } else {
            for iteration in 0..self.max_iter {
                let Some(mv) = SwapMove::random(days, rng) else {
                    break;
                };
                let outcome = state.apply_move(mv, evaluator, rng);
                stats.record(outcome);

                if outcome.is_accepted() {
                    trace!(
                        event = "step",
                        iteration = iteration,
                        d1 = mv.d1,
                        d2 = mv.d2,
                        slot = %mv.slot,
                        outcome = ?outcome,
                        score = %state.score,
                    );
                }
            }
        }

        info!(
            event = "search_end",
            iterations = stats.iterations,
            improved = stats.improved,
            accepted_ties = stats.accepted_ties,
            rejected_invalid = stats.rejected_invalid,
            rejected_worse = stats.rejected_worse,
            rejected_ties = stats.rejected_ties,
            score = %state.score,
        );

        SearchOutcome {
            schedule: state.schedule,
            score: state.score,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::{days_by_difficulty, GreedyConstructor};
    use crate::models::{Guard, GuardId, Quotas, Weekday};
    use crate::search::EPS;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn g(id: usize) -> GuardId {
        GuardId::new(id)
    }

    fn sample_guards(n: usize) -> Vec<Guard> {
        (1..=n)
            .map(|i| {
                Guard::new(i)
                    .with_preferred((i % 7 + 1) as Weekday)
                    .with_preferred(((i + 2) % 7 + 1) as Weekday)
                    .with_forbidden(((i + 4) % 7 + 1) as Weekday)
            })
            .collect()
    }

    fn initial(guards: &[Guard], days: usize) -> Schedule {
        let quotas = Quotas::compute(guards.len(), days).unwrap();
        GreedyConstructor::new(guards, quotas, days_by_difficulty(guards, days))
            .construct()
            .unwrap()
    }

    #[test]
    fn test_random_move_has_distinct_days() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let mv = SwapMove::random(2, &mut rng).unwrap();
            assert_ne!(mv.d1, mv.d2);
            assert!(mv.d1 < 2 && mv.d2 < 2);
        }
        assert!(SwapMove::random(1, &mut rng).is_none());
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let guards = sample_guards(9);
        let start = initial(&guards, 21);
        let eval = Evaluator::new(&guards, 21);
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = LocalSearch::new(0).run(start.clone(), &eval, &mut rng);
        assert_eq!(outcome.schedule, start);
        assert_eq!(outcome.score, eval.score(&start));
        assert_eq!(outcome.stats, SearchStats::default());
    }

    #[test]
    fn test_duplicate_swap_is_rejected() {
        let guards: Vec<Guard> = (1..=3).map(Guard::new).collect();
        let eval = Evaluator::new(&guards, 3);
        let schedule =
            Schedule::from_rows(vec![[g(1), g(2), g(3)], [g(2), g(3), g(1)], [g(3), g(1), g(2)]]);
        let mut state = SearchState::new(schedule, &eval);
        let before = state.clone();
        let mut rng = SmallRng::seed_from_u64(42);

        // Day 1 would become [2, 2, 3]
        let mv = SwapMove {
            d1: 0,
            d2: 1,
            slot: Slot::Day,
        };
        assert_eq!(
            state.apply_move(mv, &eval, &mut rng),
            StepOutcome::RejectedInvalid
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_forbidden_swap_is_rejected() {
        // Guard 4 cannot work weekday 1
        let guards = vec![
            Guard::new(1),
            Guard::new(2),
            Guard::new(3),
            Guard::new(4).with_forbidden(1),
        ];
        let eval = Evaluator::new(&guards, 2);
        let schedule = Schedule::from_rows(vec![[g(1), g(2), g(3)], [g(4), g(2), g(3)]]);
        let mut state = SearchState::new(schedule, &eval);
        let before = state.clone();
        let mut rng = SmallRng::seed_from_u64(42);

        let mv = SwapMove {
            d1: 0,
            d2: 1,
            slot: Slot::Day,
        };
        assert_eq!(
            state.apply_move(mv, &eval, &mut rng),
            StepOutcome::RejectedInvalid
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_preference_gain_is_accepted() {
        // Guard 4 prefers weekday 2 but sits on day 1; guard 1 prefers weekday 1
        let guards = vec![
            Guard::new(1).with_preferred(1),
            Guard::new(2),
            Guard::new(3),
            Guard::new(4).with_preferred(2),
        ];
        let eval = Evaluator::new(&guards, 2);
        let schedule = Schedule::from_rows(vec![[g(4), g(2), g(3)], [g(1), g(2), g(3)]]);
        let mut state = SearchState::new(schedule, &eval);
        assert_eq!(state.score.preference, 0.0);
        let mut rng = SmallRng::seed_from_u64(42);

        let mv = SwapMove {
            d1: 0,
            d2: 1,
            slot: Slot::Day,
        };
        assert_eq!(state.apply_move(mv, &eval, &mut rng), StepOutcome::Improved);
        assert_eq!(state.schedule.get(0, Slot::Day), Some(g(1)));
        assert!((state.score.preference - 2.0 / 6.0).abs() < 1e-10);
        assert_eq!(state.score, eval.score(&state.schedule));
    }

    #[test]
    fn test_worse_candidate_is_rejected() {
        let guards = vec![
            Guard::new(1).with_preferred(1),
            Guard::new(2),
            Guard::new(3),
            Guard::new(4).with_preferred(2),
        ];
        let eval = Evaluator::new(&guards, 2);
        let schedule = Schedule::from_rows(vec![[g(1), g(2), g(3)], [g(4), g(2), g(3)]]);
        let mut state = SearchState::new(schedule, &eval);
        let before = state.clone();
        let mut rng = SmallRng::seed_from_u64(42);

        let mv = SwapMove {
            d1: 1,
            d2: 0,
            slot: Slot::Day,
        };
        assert_eq!(
            state.apply_move(mv, &eval, &mut rng),
            StepOutcome::RejectedWorse
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_search_keeps_validity_and_never_regresses() {
        let guards = sample_guards(12);
        let days = 28;
        let start = initial(&guards, days);
        let eval = Evaluator::new(&guards, days);
        let start_score = eval.score(&start);
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = LocalSearch::new(2000).run(start, &eval, &mut rng);
        assert!(eval.is_valid(&outcome.schedule));
        assert_eq!(outcome.score, eval.score(&outcome.schedule));
        assert_eq!(outcome.stats.iterations, 2000);
        assert!(outcome.score.preference >= start_score.preference - EPS);
        assert!((0.0..=1.0).contains(&outcome.score.preference));
        assert!((0.0..=1.0).contains(&outcome.score.coverage));
    }

    #[test]
    fn test_search_accepted_sequence_is_monotone() {
        let guards = sample_guards(10);
        let days = 21;
        let eval = Evaluator::new(&guards, days);
        let mut state = SearchState::new(initial(&guards, days), &eval);
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..1000 {
            let prev = state.score;
            let mv = SwapMove::random(days, &mut rng).unwrap();
            match state.apply_move(mv, &eval, &mut rng) {
                StepOutcome::Improved => {
                    assert_eq!(compare_scores(&state.score, &prev), Verdict::Better)
                }
                StepOutcome::AcceptedTie => {
                    assert_eq!(compare_scores(&state.score, &prev), Verdict::Tied)
                }
                _ => assert_eq!(state.score, prev),
            }
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let guards = sample_guards(8);
        let eval = Evaluator::new(&guards, 14);
        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            LocalSearch::new(800).run(initial(&guards, 14), &eval, &mut rng)
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn test_single_day_horizon_is_left_alone() {
        let guards: Vec<Guard> = (1..=3).map(Guard::new).collect();
        let eval = Evaluator::new(&guards, 1);
        let start = initial(&guards, 1);
        let mut rng = SmallRng::seed_from_u64(42);
        let outcome = LocalSearch::new(100).run(start.clone(), &eval, &mut rng);
        assert_eq!(outcome.schedule, start);
        assert_eq!(outcome.stats.iterations, 0);
    }
}
