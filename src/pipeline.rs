//! End-to-end rostering run.
//!
//! Chains the engine stages for one guard pool and configuration:
//! input validation → quotas and day order → greedy construction →
//! local search → night-fairness repair. Each stage's roster and score
//! is kept so callers can report the improvement.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RosterConfig;
use crate::construction::{days_by_difficulty, GreedyConstructor};
use crate::error::RosterError;
use crate::models::{Guard, Quotas, Schedule};
use crate::scoring::{Evaluator, RosterScore};
use crate::search::{repair_night_fairness, LocalSearch, SearchStats};
use crate::validation::validate_input;

/// Rosters and scores produced by one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterOutcome {
    /// Quotas used by construction.
    pub quotas: Quotas,
    /// Greedy roster.
    pub initial: Schedule,
    /// Score of `initial`.
    pub initial_score: RosterScore,
    /// Roster after local search, before repair.
    pub optimized: Schedule,
    /// Score of `optimized`.
    pub optimized_score: RosterScore,
    /// Final roster after night-fairness repair.
    pub schedule: Schedule,
    /// Score of `schedule`.
    pub score: RosterScore,
    /// Local search counters.
    pub search_stats: SearchStats,
    /// Night slots moved by the repair.
    pub repair_moves: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// One configured rostering run over a guard pool.
///
/// # Example
/// ```
/// use u_roster::models::Guard;
/// use u_roster::{RosterConfig, RosterPipeline};
///
/// let guards: Vec<Guard> = (1..=8).map(|i| Guard::new(i).with_preferred((i % 7 + 1) as u8)).collect();
/// let config = RosterConfig::new().with_days(28).with_max_iter(1_000);
///
/// let outcome = RosterPipeline::new(&guards, config).run().unwrap();
/// assert_eq!(outcome.schedule.day_count(), 28);
/// assert!(outcome.score.fairness_penalty <= outcome.optimized_score.fairness_penalty);
/// ```
#[derive(Debug, Clone)]
pub struct RosterPipeline<'a> {
    guards: &'a [Guard],
    config: RosterConfig,
}

impl<'a> RosterPipeline<'a> {
    /// Creates a run over `guards` with `config`.
    pub fn new(guards: &'a [Guard], config: RosterConfig) -> Self {
        Self { guards, config }
    }

    /// Executes every stage.
    ///
    /// Runs with equal guards and configuration produce identical rosters.
    ///
    /// # Errors
    /// - [`RosterError::Config`] if the configuration is invalid
    /// - [`RosterError::InvalidInput`] if the guard pool or horizon is malformed
    /// - [`RosterError::Infeasible`] if some slot has no legal guard
    pub fn run(&self) -> Result<RosterOutcome, RosterError> {
        let started = Instant::now();
        let guards = self.guards;
        let days = self.config.days;

        self.config.validate()?;
        validate_input(guards, days).map_err(RosterError::InvalidInput)?;

        // Non-empty pool checked above.
        let Some(quotas) = Quotas::compute(guards.len(), days) else {
            return Err(RosterError::InvalidInput(Vec::new()));
        };
        let order = days_by_difficulty(guards, days);

        info!(
            event = "pipeline_start",
            guards = guards.len(),
            days = days,
            max_iter = self.config.max_iter,
            seed = self.config.seed,
        );

        let initial = GreedyConstructor::new(guards, quotas, order).construct()?;
        let evaluator = Evaluator::new(guards, days);
        let initial_score = evaluator.score(&initial);

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let search =
            LocalSearch::new(self.config.max_iter).run(initial.clone(), &evaluator, &mut rng);

        let repaired = repair_night_fairness(search.schedule.clone(), guards);
        let score = evaluator.score(&repaired.schedule);

        let elapsed = started.elapsed();
        info!(
            event = "pipeline_end",
            initial = %initial_score,
            optimized = %search.score,
            final_score = %score,
            repair_moves = repaired.moves.len(),
            elapsed_ms = elapsed.as_millis() as u64,
        );

        Ok(RosterOutcome {
            quotas,
            initial,
            initial_score,
            optimized: search.schedule,
            optimized_score: search.score,
            schedule: repaired.schedule,
            score,
            search_stats: search.stats,
            repair_moves: repaired.moves.len(),
            elapsed,
        })
    }
}
