//! Weekday calendar model.
//!
//! The planning horizon is a run of consecutive days numbered `1..=days`.
//! Day 1 is always weekday 1; the week wraps every seven days.
//!
//! # Weekday encoding
//! Weekdays are the integers `1..=7`. Sets of weekdays (a guard's
//! preferences or forbidden days) are stored as a 7-bit mask so that
//! membership is O(1) and the set is `Copy`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A weekday in `1..=7`.
pub type Weekday = u8;

/// Number of weekdays in a week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Maps a 1-based day number to its weekday.
///
/// `weekday_of(d) = ((d - 1) mod 7) + 1`, so day 1 → 1, day 7 → 7, day 8 → 1.
///
/// # Example
/// ```
/// use u_roster::models::weekday_of;
///
/// assert_eq!(weekday_of(1), 1);
/// assert_eq!(weekday_of(7), 7);
/// assert_eq!(weekday_of(8), 1);
/// ```
#[inline]
pub fn weekday_of(day: usize) -> Weekday {
    debug_assert!(day >= 1, "days are 1-based");
    ((day.saturating_sub(1) % DAYS_PER_WEEK as usize) + 1) as Weekday
}

/// Whether `weekday` is a valid weekday number.
#[inline]
pub fn is_weekday(weekday: Weekday) -> bool {
    (1..=DAYS_PER_WEEK).contains(&weekday)
}

/// A set of weekdays, stored as a bitmask.
///
/// Serializes as a sorted list of weekday numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Weekday>", try_from = "Vec<Weekday>")]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Builds a set from weekday numbers.
    ///
    /// Returns `None` if any value is outside `1..=7`.
    pub fn from_weekdays(weekdays: &[Weekday]) -> Option<Self> {
        Self::checked(weekdays).ok()
    }

    fn checked(weekdays: &[Weekday]) -> Result<Self, InvalidWeekday> {
        let mut set = Self::new();
        for &wd in weekdays {
            if !is_weekday(wd) {
                return Err(InvalidWeekday(wd));
            }
            set.insert(wd);
        }
        Ok(set)
    }

    /// Adds a weekday. Returns `true` if it was newly inserted.
    ///
    /// Values outside `1..=7` are not inserted and return `false`.
    pub fn insert(&mut self, weekday: Weekday) -> bool {
        if !is_weekday(weekday) {
            return false;
        }
        let mask = 1 << (weekday - 1);
        let fresh = self.bits & mask == 0;
        self.bits |= mask;
        fresh
    }

    /// Whether the set contains `weekday`.
    #[inline]
    pub fn contains(&self, weekday: Weekday) -> bool {
        is_weekday(weekday) && self.bits & (1 << (weekday - 1)) != 0
    }

    /// Number of weekdays in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates weekdays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        (1..=DAYS_PER_WEEK).filter(move |&wd| self.contains(wd))
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

impl TryFrom<Vec<Weekday>> for WeekdaySet {
    type Error = InvalidWeekday;

    fn try_from(weekdays: Vec<Weekday>) -> Result<Self, Self::Error> {
        Self::checked(&weekdays)
    }
}

/// A weekday number outside `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("weekday {0} is outside 1..=7")]
pub struct InvalidWeekday(pub Weekday);

/// Availability of one day in the horizon.
///
/// Produced by the difficulty ranker; drives construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Day number (1-based).
    pub day: usize,
    /// Weekday of `day`.
    pub weekday: Weekday,
    /// Guards not forbidden on `weekday`.
    pub free_guards: usize,
}

impl DayAvailability {
    /// 0-based schedule index of this day.
    #[inline]
    pub fn index(&self) -> usize {
        self.day - 1
    }
}
