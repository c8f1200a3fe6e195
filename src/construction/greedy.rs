//! Quota-driven greedy roster construction.
//!
//! # Algorithm
//!
//! 1. Fill the day slot of every day, scarcest days first.
//! 2. Fill night slot 1 of every day in the same order.
//! 3. Fill night slot 2 of every day in the same order.
//!
//! For each slot, a guard qualifies if it is not forbidden on the weekday
//! and does not already hold another slot that day. Among qualifying
//! guards still within quota (below the fair share, or at it while the
//! remainder budget lasts), the pick is the first by:
//! preferred weekday → fewest shifts of this kind → lowest id.
//!
//! When nobody is within quota, the slot falls back to any qualifying
//! guard not yet used as a fallback for this shift kind. Night fallback
//! ranks fewest nights first, then preference, then fewest total shifts,
//! then id. If even fallback finds nobody, construction fails with
//! [`RosterError::Infeasible`].
//!
//! # Complexity
//! O(3 · days · V) guard evaluations.

use std::cmp::Reverse;

use tracing::{debug, info};

use crate::error::RosterError;
use crate::models::{DayAvailability, Guard, GuardId, Quotas, Schedule, ShiftKind, Slot, Weekday};

/// Greedy constructor for an initial roster.
///
/// # Example
///
/// ```
/// use u_roster::construction::{days_by_difficulty, GreedyConstructor};
/// use u_roster::models::{Guard, Quotas};
///
/// let guards: Vec<Guard> = (1..=3).map(Guard::new).collect();
/// let quotas = Quotas::compute(guards.len(), 3).unwrap();
/// let order = days_by_difficulty(&guards, 3);
///
/// let schedule = GreedyConstructor::new(&guards, quotas, order).construct().unwrap();
/// assert!(schedule.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyConstructor<'a> {
    guards: &'a [Guard],
    quotas: Quotas,
    order: Vec<DayAvailability>,
}

/// Mutable bookkeeping for one construction run.
struct BuildState {
    schedule: Schedule,
    day_count: Vec<usize>,
    night_count: Vec<usize>,
    extra_day_used: usize,
    extra_night_used: usize,
    day_fallback_used: Vec<bool>,
    night_fallback_used: Vec<bool>,
    fallbacks: usize,
}

impl BuildState {
    fn new(guard_count: usize, days: usize) -> Self {
        Self {
            schedule: Schedule::new(days),
            day_count: vec![0; guard_count],
            night_count: vec![0; guard_count],
            extra_day_used: 0,
            extra_night_used: 0,
            day_fallback_used: vec![false; guard_count],
            night_fallback_used: vec![false; guard_count],
            fallbacks: 0,
        }
    }

    fn counts(&self, kind: ShiftKind) -> &[usize] {
        match kind {
            ShiftKind::Day => &self.day_count,
            ShiftKind::Night => &self.night_count,
        }
    }

    fn extra_used(&self, kind: ShiftKind) -> usize {
        match kind {
            ShiftKind::Day => self.extra_day_used,
            ShiftKind::Night => self.extra_night_used,
        }
    }
}

impl<'a> GreedyConstructor<'a> {
    /// Creates a constructor.
    ///
    /// `order` must list every day of the horizon exactly once; its length
    /// is the horizon length.
    pub fn new(guards: &'a [Guard], quotas: Quotas, order: Vec<DayAvailability>) -> Self {
        Self {
            guards,
            quotas,
            order,
        }
    }

    /// Builds a complete roster.
    ///
    /// # Errors
    /// [`RosterError::Infeasible`] if some slot has no legal guard even
    /// under fallback.
    pub fn construct(&self) -> Result<Schedule, RosterError> {
        let mut state = BuildState::new(self.guards.len(), self.order.len());

        info!(
            event = "construction_start",
            guards = self.guards.len(),
            days = self.order.len(),
            day_share = self.quotas.day_share,
            night_share = self.quotas.night_share,
        );

        for slot in Slot::ALL {
            self.fill_slot(&mut state, slot)?;
        }

        info!(
            event = "construction_end",
            fallbacks = state.fallbacks,
            extra_day_used = state.extra_day_used,
            extra_night_used = state.extra_night_used,
        );

        Ok(state.schedule)
    }

    /// One full pass assigning `slot` on every day.
    fn fill_slot(&self, state: &mut BuildState, slot: Slot) -> Result<(), RosterError> {
        let kind = slot.kind();
        // The night remainder budget spans both night passes.
        if kind == ShiftKind::Day {
            state.extra_day_used = 0;
        }

        for avail in &self.order {
            let day_idx = avail.index();
            let weekday = avail.weekday;

            let idx = match self.pick_within_quota(state, day_idx, weekday, kind) {
                Some(idx) => {
                    if state.counts(kind)[idx] == self.quotas.share(kind) {
                        match kind {
                            ShiftKind::Day => state.extra_day_used += 1,
                            ShiftKind::Night => state.extra_night_used += 1,
                        }
                    }
                    idx
                }
                None => {
                    let idx = self
                        .pick_fallback(state, day_idx, weekday, kind)
                        .ok_or(RosterError::Infeasible {
                            day: avail.day,
                            weekday,
                            slot,
                        })?;
                    match kind {
                        ShiftKind::Day => state.day_fallback_used[idx] = true,
                        ShiftKind::Night => state.night_fallback_used[idx] = true,
                    }
                    state.fallbacks += 1;
                    debug!(
                        event = "fallback",
                        day = avail.day,
                        slot = %slot,
                        guard = idx + 1,
                    );
                    idx
                }
            };

            state.schedule.assign(day_idx, slot, GuardId::from_index(idx));
            match kind {
                ShiftKind::Day => state.day_count[idx] += 1,
                ShiftKind::Night => state.night_count[idx] += 1,
            }
        }

        Ok(())
    }

    /// Best qualifying guard still within quota for `kind`.
    fn pick_within_quota(
        &self,
        state: &BuildState,
        day_idx: usize,
        weekday: Weekday,
        kind: ShiftKind,
    ) -> Option<usize> {
        let share = self.quotas.share(kind);
        let extra_left = state.extra_used(kind) < self.quotas.remainder(kind);
        let counts = state.counts(kind);

        self.qualifying(state, day_idx, weekday)
            .filter(|&i| counts[i] < share || (counts[i] == share && extra_left))
            .min_by_key(|&i| (Reverse(self.guards[i].prefers(weekday)), counts[i], i))
    }

    /// Best qualifying guard not yet used as a fallback for `kind`.
    fn pick_fallback(
        &self,
        state: &BuildState,
        day_idx: usize,
        weekday: Weekday,
        kind: ShiftKind,
    ) -> Option<usize> {
        let candidates = self.qualifying(state, day_idx, weekday);
        match kind {
            ShiftKind::Day => candidates
                .filter(|&i| !state.day_fallback_used[i])
                .min_by_key(|&i| {
                    (
                        Reverse(self.guards[i].prefers(weekday)),
                        state.day_count[i],
                        i,
                    )
                }),
            ShiftKind::Night => candidates
                .filter(|&i| !state.night_fallback_used[i])
                .min_by_key(|&i| {
                    (
                        state.night_count[i],
                        Reverse(self.guards[i].prefers(weekday)),
                        state.day_count[i] + state.night_count[i],
                        i,
                    )
                }),
        }
    }

    /// Guards that may legally take a slot on `day_idx`, in id order.
    fn qualifying<'s>(
        &'s self,
        state: &'s BuildState,
        day_idx: usize,
        weekday: Weekday,
    ) -> impl Iterator<Item = usize> + 's {
        self.guards.iter().enumerate().filter_map(move |(i, guard)| {
            let free = !guard.is_forbidden(weekday)
                && !state.schedule.is_on_day(day_idx, GuardId::from_index(i));
            free.then_some(i)
        })
    }
}
