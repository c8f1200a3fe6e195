//! Run summary.
//!
//! Compares the greedy roster against the final one.
//!
//! | Figure | Definition |
//! |--------|-----------|
//! | Preference change | (final − initial) / initial × 100 |
//! | Coverage change | (final − initial) / initial × 100 |
//! | Load range | smallest and largest total shifts per guard |
//! | Penalty delta | final penalty − initial penalty |
//!
//! Percent changes are undefined when the initial value is zero and are
//! then reported as `None`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Schedule;
use crate::pipeline::RosterOutcome;
use crate::scoring::{load_range, RosterScore};

/// Score and load extremes of one roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSummary {
    /// Objective values.
    pub score: RosterScore,
    /// Fewest total shifts of any guard.
    pub min_total: usize,
    /// Most total shifts of any guard.
    pub max_total: usize,
}

impl StageSummary {
    /// Summarizes `schedule` with its precomputed score.
    pub fn new(schedule: &Schedule, score: RosterScore, guard_count: usize) -> Self {
        let (min_total, max_total) = load_range(schedule, guard_count).unwrap_or((0, 0));
        Self {
            score,
            min_total,
            max_total,
        }
    }

    /// Raw gap between the busiest and idlest guard.
    pub fn load_gap(&self) -> usize {
        self.max_total - self.min_total
    }
}

/// Before/after comparison of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterReport {
    /// Greedy roster.
    pub initial: StageSummary,
    /// Final roster.
    pub final_stage: StageSummary,
    /// Preference change in percent.
    pub preference_change: Option<f64>,
    /// Coverage change in percent.
    pub coverage_change: Option<f64>,
    /// Final minus initial fairness penalty.
    pub penalty_delta: i64,
    /// Night slots moved by the repair.
    pub repair_moves: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl RosterReport {
    /// Builds the report for a finished run.
    pub fn from_outcome(outcome: &RosterOutcome, guard_count: usize) -> Self {
        let initial = StageSummary::new(&outcome.initial, outcome.initial_score, guard_count);
        let final_stage = StageSummary::new(&outcome.schedule, outcome.score, guard_count);

        Self {
            preference_change: percent_change(
                initial.score.preference,
                final_stage.score.preference,
            ),
            coverage_change: percent_change(initial.score.coverage, final_stage.score.coverage),
            penalty_delta: final_stage.score.fairness_penalty as i64
                - initial.score.fairness_penalty as i64,
            repair_moves: outcome.repair_moves,
            elapsed: outcome.elapsed,
            initial,
            final_stage,
        }
    }
}

/// Relative change from `before` to `after` in percent.
pub fn percent_change(before: f64, after: f64) -> Option<f64> {
    if before == 0.0 {
        None
    } else {
        Some((after - before) / before * 100.0)
    }
}

fn write_change(f: &mut fmt::Formatter<'_>, label: &str, change: Option<f64>) -> fmt::Result {
    match change {
        Some(pct) => writeln!(f, "{label} improved {pct:.3}%"),
        None => writeln!(f, "{label} improvement undefined (initial score is 0)"),
    }
}

impl fmt::Display for RosterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "initial: {}", self.initial.score)?;
        writeln!(f, "final:   {}", self.final_stage.score)?;
        writeln!(f)?;
        write_change(f, "Preference score", self.preference_change)?;
        write_change(f, "Coverage score", self.coverage_change)?;
        writeln!(f)?;
        writeln!(f, "Fairness (total shifts per guard):")?;
        for (label, stage) in [("initial", &self.initial), ("final", &self.final_stage)] {
            writeln!(
                f,
                "{label}: S_min = {}, S_max = {}, gap = {}, penalty = {}",
                stage.min_total,
                stage.max_total,
                stage.load_gap(),
                stage.score.fairness_penalty
            )?;
        }
        writeln!(f, "Δ penalty = {}", self.penalty_delta)?;
        writeln!(f, "Repair moves: {}", self.repair_moves)?;
        write!(f, "Time taken: {:.4} s", self.elapsed.as_secs_f64())
    }
}
