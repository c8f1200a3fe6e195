//! Shared roster evaluator.
//!
//! Bundles the read-only inputs every stage needs to judge a roster (the
//! guard pool, the horizon, and the precomputed coverage zones). Zones are
//! built once per run and shared by every score call.

use super::{CoverageZones, RosterScore};
use crate::models::{Guard, Schedule};
use crate::validation::is_schedule_valid;

/// Validity check and scoring for one guard pool and horizon.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    guards: &'a [Guard],
    days: usize,
    zones: CoverageZones,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator, building the coverage zones for the pool.
    pub fn new(guards: &'a [Guard], days: usize) -> Self {
        Self {
            guards,
            days,
            zones: CoverageZones::build(guards.len()),
        }
    }

    /// Horizon length.
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Coverage zones of the pool.
    #[inline]
    pub fn zones(&self) -> &CoverageZones {
        &self.zones
    }

    /// Whether `schedule` is a legal roster.
    #[inline]
    pub fn is_valid(&self, schedule: &Schedule) -> bool {
        is_schedule_valid(schedule, self.guards, self.days)
    }

    /// Scores `schedule` on all three objectives.
    #[inline]
    pub fn score(&self, schedule: &Schedule) -> RosterScore {
        RosterScore::calculate(schedule, self.guards, &self.zones)
    }
}
