//! Guard model.
//!
//! Guards are the people being rostered. Each carries the weekdays it
//! would like to work and the weekdays it cannot work. Guards are loaded
//! once and never change during a run.
//!
//! # Identity
//! Guards are numbered `1..=V` in input order. A guard pool is stored as a
//! slice where the guard with id `i` lives at index `i - 1`, so every
//! per-guard counter in the engine is a plain `Vec` indexed by
//! [`GuardId::index`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Weekday, WeekdaySet};

/// 1-based guard identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardId(usize);

impl GuardId {
    /// Creates an id from its 1-based number.
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Creates an id from a 0-based pool index.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 1-based number.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The 0-based pool index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 - 1
    }

    /// Whether this id addresses a pool of `guard_count` guards.
    #[inline]
    pub fn in_range(self, guard_count: usize) -> bool {
        (1..=guard_count).contains(&self.0)
    }
}

impl fmt::Display for GuardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A schedulable guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guard {
    /// Guard identity.
    pub id: GuardId,
    /// Weekdays the guard would like to work.
    pub preferred: WeekdaySet,
    /// Weekdays the guard must not work.
    pub forbidden: WeekdaySet,
}

impl Guard {
    /// Creates a guard with no preferences or restrictions.
    pub fn new(id: usize) -> Self {
        Self {
            id: GuardId::new(id),
            preferred: WeekdaySet::new(),
            forbidden: WeekdaySet::new(),
        }
    }

    /// Adds a preferred weekday. Values outside `1..=7` are ignored.
    pub fn with_preferred(mut self, weekday: Weekday) -> Self {
        self.preferred.insert(weekday);
        self
    }

    /// Adds a forbidden weekday. Values outside `1..=7` are ignored.
    pub fn with_forbidden(mut self, weekday: Weekday) -> Self {
        self.forbidden.insert(weekday);
        self
    }

    /// Whether the guard prefers working on `weekday`.
    #[inline]
    pub fn prefers(&self, weekday: Weekday) -> bool {
        self.preferred.contains(weekday)
    }

    /// Whether the guard is forbidden from working on `weekday`.
    #[inline]
    pub fn is_forbidden(&self, weekday: Weekday) -> bool {
        self.forbidden.contains(weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_id_index_mapping() {
        let id = GuardId::new(4);
        assert_eq!(id.get(), 4);
        assert_eq!(id.index(), 3);
        assert_eq!(GuardId::from_index(3), id);
        assert!(id.in_range(4));
        assert!(!id.in_range(3));
        assert!(!GuardId::new(0).in_range(10));
    }

    #[test]
    fn test_guard_builder() {
        let g = Guard::new(2).with_preferred(1).with_preferred(5).with_forbidden(7);
        assert_eq!(g.id, GuardId::new(2));
        assert!(g.prefers(1));
        assert!(g.prefers(5));
        assert!(!g.prefers(7));
        assert!(g.is_forbidden(7));
        assert!(!g.is_forbidden(1));
    }

    #[test]
    fn test_guard_may_prefer_and_forbid_same_day() {
        let g = Guard::new(1).with_preferred(3).with_forbidden(3);
        assert!(g.prefers(3));
        assert!(g.is_forbidden(3));
    }

    #[test]
    fn test_guard_id_serializes_transparently() {
        let json = serde_json::to_string(&GuardId::new(12)).unwrap();
        assert_eq!(json, "12");
    }
}
