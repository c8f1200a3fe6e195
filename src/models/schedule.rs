//! Schedule (roster) model.
//!
//! A schedule holds, for every day of the horizon, the three duty slots
//! `[day, night 1, night 2]`. Slots may be unassigned while the roster is
//! under construction; a complete roster has every slot filled.
//!
//! Schedules are plain values. Search moves build a fresh candidate with
//! [`Schedule::swapped`] instead of mutating the accepted roster, so a
//! rejected move leaves it untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{weekday_of, GuardId, ShiftKind, Weekday};

/// Number of duty slots per day.
pub const SLOTS_PER_DAY: usize = 3;

/// One of the three daily duty slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Day shift.
    Day,
    /// First night shift.
    Night1,
    /// Second night shift.
    Night2,
}

impl Slot {
    /// All slots in row order.
    pub const ALL: [Slot; SLOTS_PER_DAY] = [Slot::Day, Slot::Night1, Slot::Night2];

    /// Night slots in row order.
    pub const NIGHTS: [Slot; 2] = [Slot::Night1, Slot::Night2];

    /// Position of the slot within a day row.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::Day => 0,
            Slot::Night1 => 1,
            Slot::Night2 => 2,
        }
    }

    /// Slot at a row position, if any.
    pub const fn from_index(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::Day),
            1 => Some(Slot::Night1),
            2 => Some(Slot::Night2),
            _ => None,
        }
    }

    /// Quota bucket this slot counts towards.
    #[inline]
    pub const fn kind(self) -> ShiftKind {
        match self {
            Slot::Day => ShiftKind::Day,
            Slot::Night1 | Slot::Night2 => ShiftKind::Night,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Day => "day",
            Slot::Night1 => "night-1",
            Slot::Night2 => "night-2",
        };
        f.write_str(name)
    }
}

/// The three slots of one day. `None` = unassigned.
pub type DayShifts = [Option<GuardId>; SLOTS_PER_DAY];

/// A roster over the planning horizon.
///
/// Day rows are addressed by 0-based index; day number `index + 1`
/// determines the weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<DayShifts>,
}

impl Schedule {
    /// Creates an empty (fully unassigned) schedule of `days` rows.
    pub fn new(days: usize) -> Self {
        Self {
            days: vec![[None; SLOTS_PER_DAY]; days],
        }
    }

    /// Creates a complete schedule from filled rows.
    pub fn from_rows(rows: Vec<[GuardId; SLOTS_PER_DAY]>) -> Self {
        Self {
            days: rows.into_iter().map(|row| row.map(Some)).collect(),
        }
    }

    /// Number of day rows.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Whether the schedule has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Weekday of the row at `day_idx`.
    #[inline]
    pub fn weekday(&self, day_idx: usize) -> Weekday {
        weekday_of(day_idx + 1)
    }

    /// The row at `day_idx`.
    #[inline]
    pub fn day(&self, day_idx: usize) -> &DayShifts {
        &self.days[day_idx]
    }

    /// All rows in day order.
    #[inline]
    pub fn days(&self) -> &[DayShifts] {
        &self.days
    }

    /// Guard in a slot.
    #[inline]
    pub fn get(&self, day_idx: usize, slot: Slot) -> Option<GuardId> {
        self.days[day_idx][slot.index()]
    }

    /// Puts a guard in a slot, returning the previous holder.
    pub fn assign(&mut self, day_idx: usize, slot: Slot, guard: GuardId) -> Option<GuardId> {
        self.days[day_idx][slot.index()].replace(guard)
    }

    /// Whether `guard` holds any slot on `day_idx`.
    #[inline]
    pub fn is_on_day(&self, day_idx: usize, guard: GuardId) -> bool {
        self.days[day_idx].contains(&Some(guard))
    }

    /// Whether every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.days.iter().flatten().all(Option::is_some)
    }

    /// Returns a copy with the holders of `slot` on `d1` and `d2` exchanged.
    ///
    /// `self` is not modified.
    pub fn swapped(&self, d1: usize, d2: usize, slot: Slot) -> Schedule {
        let mut candidate = self.clone();
        let i = slot.index();
        let held = candidate.days[d1][i];
        candidate.days[d1][i] = candidate.days[d2][i];
        candidate.days[d2][i] = held;
        candidate
    }

    /// Number of slots of `kind` held by each guard, indexed by pool index.
    ///
    /// Ids outside `1..=guard_count` are not counted.
    pub fn counts_of(&self, kind: ShiftKind, guard_count: usize) -> Vec<usize> {
        self.count_where(guard_count, |slot| slot.kind() == kind)
    }

    /// Total slots (day + night) held by each guard, indexed by pool index.
    pub fn total_counts(&self, guard_count: usize) -> Vec<usize> {
        self.count_where(guard_count, |_| true)
    }

    fn count_where(&self, guard_count: usize, include: impl Fn(Slot) -> bool) -> Vec<usize> {
        let mut counts = vec![0; guard_count];
        for row in &self.days {
            for slot in Slot::ALL {
                if !include(slot) {
                    continue;
                }
                if let Some(g) = row[slot.index()] {
                    if g.in_range(guard_count) {
                        counts[g.index()] += 1;
                    }
                }
            }
        }
        counts
    }

    /// Filled rows, or `None` if any slot is unassigned.
    pub fn rows(&self) -> Option<Vec<[GuardId; SLOTS_PER_DAY]>> {
        self.days
            .iter()
            .map(|row| Some([row[0]?, row[1]?, row[2]?]))
            .collect()
    }
}

/// A broken roster rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Affected day row (0-based). For a row-count mismatch, the actual count.
    pub day_idx: usize,
    /// Affected slot, where applicable.
    pub slot: Option<Slot>,
    /// Offending guard, where applicable.
    pub guard: Option<GuardId>,
}

/// Classification of roster violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// Schedule length differs from the horizon.
    DayCountMismatch,
    /// A slot has no guard.
    Unassigned,
    /// A slot references a guard outside the pool.
    UnknownGuard,
    /// The same guard holds two slots on one day.
    DuplicateGuard,
    /// A guard works on one of its forbidden weekdays.
    ForbiddenWeekday,
}

impl Violation {
    /// Creates a row-count mismatch violation.
    pub fn day_count_mismatch(actual: usize) -> Self {
        Self {
            violation_type: ViolationType::DayCountMismatch,
            day_idx: actual,
            slot: None,
            guard: None,
        }
    }

    /// Creates an unassigned-slot violation.
    pub fn unassigned(day_idx: usize, slot: Slot) -> Self {
        Self {
            violation_type: ViolationType::Unassigned,
            day_idx,
            slot: Some(slot),
            guard: None,
        }
    }

    /// Creates a violation for a slot-level rule.
    pub fn at(violation_type: ViolationType, day_idx: usize, slot: Slot, guard: GuardId) -> Self {
        Self {
            violation_type,
            day_idx,
            slot: Some(slot),
            guard: Some(guard),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.day_idx + 1;
        let slot = self.slot.map(|s| s.to_string()).unwrap_or_default();
        let guard = self.guard.map(|g| g.to_string()).unwrap_or_default();
        match self.violation_type {
            ViolationType::DayCountMismatch => {
                write!(f, "schedule has {} days", self.day_idx)
            }
            ViolationType::Unassigned => write!(f, "day {day} {slot} slot is unassigned"),
            ViolationType::UnknownGuard => {
                write!(f, "day {day} {slot} slot holds unknown guard {guard}")
            }
            ViolationType::DuplicateGuard => {
                write!(f, "guard {guard} holds more than one slot on day {day}")
            }
            ViolationType::ForbiddenWeekday => write!(
                f,
                "guard {guard} works day {day} ({slot}) on forbidden weekday {}",
                weekday_of(day)
            ),
        }
    }
}
