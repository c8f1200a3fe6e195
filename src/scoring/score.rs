//! Roster objectives.
//!
//! | Objective | Definition | Range |
//! |-----------|-----------|-------|
//! | Preference | Slots whose guard prefers that weekday / (days × 3) | 0.0..=1.0 |
//! | Coverage | Σ day zone-union size / (min(V, 66) × days) | 0.0..=1.0 |
//! | Fairness penalty | max(0, max total − min total − 1) | 0.. |
//!
//! Preference and coverage are maximized, the penalty is minimized. A
//! spread of one shift between the busiest and idlest guard is treated
//! as fair.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CoverageZones, COVERAGE_CAP};
use crate::models::{Guard, Schedule, SLOTS_PER_DAY};

/// The three objective values of a roster, always computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterScore {
    /// Preference satisfaction (0.0..=1.0, higher is better).
    pub preference: f64,
    /// Spatial coverage (0.0..=1.0, higher is better).
    pub coverage: f64,
    /// Workload imbalance (lower is better).
    pub fairness_penalty: usize,
}

impl RosterScore {
    /// Computes all three objectives.
    pub fn calculate(schedule: &Schedule, guards: &[Guard], zones: &CoverageZones) -> Self {
        Self {
            preference: preference_score(schedule, guards),
            coverage: coverage_score(schedule, zones),
            fairness_penalty: fairness_penalty(schedule, guards.len()),
        }
    }
}

impl fmt::Display for RosterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "preference={:.4} coverage={:.4} penalty={}",
            self.preference, self.coverage, self.fairness_penalty
        )
    }
}

/// Share of slots whose guard prefers that day's weekday.
///
/// Unassigned slots and unknown ids count as not preferred. Returns 0.0
/// for an empty schedule.
pub fn preference_score(schedule: &Schedule, guards: &[Guard]) -> f64 {
    let total = schedule.day_count() * SLOTS_PER_DAY;
    if total == 0 {
        return 0.0;
    }

    let preferred = schedule
        .days()
        .iter()
        .enumerate()
        .map(|(day_idx, row)| {
            let weekday = schedule.weekday(day_idx);
            row.iter()
                .flatten()
                .filter(|g| g.in_range(guards.len()) && guards[g.index()].prefers(weekday))
                .count()
        })
        .sum::<usize>();

    preferred as f64 / total as f64
}

/// Mean zone-union size per day, normalized by `min(V, 66)`.
///
/// Returns 0.0 for an empty schedule or pool.
pub fn coverage_score(schedule: &Schedule, zones: &CoverageZones) -> f64 {
    let cap = zones.guard_count().min(COVERAGE_CAP);
    if cap == 0 || schedule.is_empty() {
        return 0.0;
    }

    let covered: usize = schedule
        .days()
        .iter()
        .map(|row| zones.day_coverage(row))
        .sum();

    covered as f64 / (cap * schedule.day_count()) as f64
}

/// Gap between the most and least loaded guard, less the tolerated one.
pub fn fairness_penalty(schedule: &Schedule, guard_count: usize) -> usize {
    penalty_from_totals(&schedule.total_counts(guard_count))
}

/// Fairness penalty of per-guard total shift counts.
pub fn penalty_from_totals(totals: &[usize]) -> usize {
    match range_of(totals) {
        Some((min, max)) => (max - min).saturating_sub(1),
        None => 0,
    }
}

/// Smallest and largest total shift count over the pool.
///
/// Returns `None` for an empty pool.
pub fn load_range(schedule: &Schedule, guard_count: usize) -> Option<(usize, usize)> {
    range_of(&schedule.total_counts(guard_count))
}

fn range_of(totals: &[usize]) -> Option<(usize, usize)> {
    let min = totals.iter().copied().min()?;
    let max = totals.iter().copied().max()?;
    Some((min, max))
}
