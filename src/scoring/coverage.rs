//! Coverage zones.
//!
//! Guards are posted in id order along a perimeter that folds back on
//! itself, so guard `i` covers the posts within `ZONE_RADIUS` of `i` and
//! the mirror image of that stretch under `mirror(x) = V - x + 1`.
//!
//! Zones depend only on the pool size and are built once per run. Each
//! zone is stored as a bitset over guard ids so that the union of a day's
//! three zones is a word-wise OR.

use crate::models::{DayShifts, GuardId};

/// Half-width of the id range a guard covers.
pub const ZONE_RADIUS: usize = 5;

/// Largest meaningful union size of three zones (`3 * 2 * (2 * 5 + 1)`).
pub const COVERAGE_CAP: usize = 66;

/// Precomputed coverage zone of every guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageZones {
    guard_count: usize,
    words: usize,
    bits: Vec<u64>,
}

impl CoverageZones {
    /// Builds the zones for a pool of `guard_count` guards.
    pub fn build(guard_count: usize) -> Self {
        let words = guard_count.div_ceil(64);
        let mut bits = vec![0u64; guard_count * words];

        for id in 1..=guard_count {
            let zone = &mut bits[(id - 1) * words..id * words];
            let lo = id.saturating_sub(ZONE_RADIUS).max(1);
            let hi = (id + ZONE_RADIUS).min(guard_count);
            for x in lo..=hi {
                let mirrored = guard_count - x + 1;
                for member in [x, mirrored] {
                    let bit = member - 1;
                    zone[bit / 64] |= 1 << (bit % 64);
                }
            }
        }

        Self {
            guard_count,
            words,
            bits,
        }
    }

    /// Pool size the zones were built for.
    #[inline]
    pub fn guard_count(&self) -> usize {
        self.guard_count
    }

    /// Ids covered by `guard`, ascending. Empty for ids outside the pool.
    pub fn zone(&self, guard: GuardId) -> Vec<GuardId> {
        if !guard.in_range(self.guard_count) {
            return Vec::new();
        }
        let zone = self.words_of(guard);
        (0..self.guard_count)
            .filter(|&bit| zone[bit / 64] & (1 << (bit % 64)) != 0)
            .map(GuardId::from_index)
            .collect()
    }

    /// Size of the union of the zones of a day's assigned guards.
    ///
    /// Unassigned slots and unknown ids contribute nothing.
    pub fn day_coverage(&self, row: &DayShifts) -> usize {
        let present: Vec<&[u64]> = row
            .iter()
            .flatten()
            .filter(|g| g.in_range(self.guard_count))
            .map(|&g| self.words_of(g))
            .collect();

        (0..self.words)
            .map(|w| {
                present
                    .iter()
                    .fold(0u64, |acc, zone| acc | zone[w])
                    .count_ones() as usize
            })
            .sum()
    }

    #[inline]
    fn words_of(&self, guard: GuardId) -> &[u64] {
        let start = guard.index() * self.words;
        &self.bits[start..start + self.words]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[usize]) -> Vec<GuardId> {
        v.iter().copied().map(GuardId::new).collect()
    }

    #[test]
    fn test_zone_near_start_includes_mirror() {
        let zones = CoverageZones::build(30);
        // 1..=6 and mirrors 25..=30
        let expected = ids(&[1, 2, 3, 4, 5, 6, 25, 26, 27, 28, 29, 30]);
        assert_eq!(zones.zone(GuardId::new(1)), expected);
    }

    #[test]
    fn test_zone_in_middle() {
        let zones = CoverageZones::build(40);
        // 15..=25 and mirrors 16..=26
        let zone = zones.zone(GuardId::new(20));
        assert_eq!(zone, ids(&(15..=26).collect::<Vec<_>>()));
    }

    #[test]
    fn test_small_pool_zone_is_whole_pool() {
        let zones = CoverageZones::build(4);
        for id in 1..=4 {
            assert_eq!(zones.zone(GuardId::new(id)), ids(&[1, 2, 3, 4]));
        }
    }

    #[test]
    fn test_zone_out_of_range() {
        let zones = CoverageZones::build(5);
        assert!(zones.zone(GuardId::new(6)).is_empty());
    }

    #[test]
    fn test_day_coverage_union() {
        let zones = CoverageZones::build(100);
        // Zone of 1: {1..6, 95..100}; zone of 50: {45..56}; zone of 3: {1..8, 93..100}
        let row = [
            Some(GuardId::new(1)),
            Some(GuardId::new(50)),
            Some(GuardId::new(3)),
        ];
        // {1..8, 93..100} ∪ {45..56} = 16 + 12
        assert_eq!(zones.day_coverage(&row), 28);
    }

    #[test]
    fn test_day_coverage_never_exceeds_cap() {
        let zones = CoverageZones::build(500);
        let row = [
            Some(GuardId::new(20)),
            Some(GuardId::new(100)),
            Some(GuardId::new(200)),
        ];
        let covered = zones.day_coverage(&row);
        assert_eq!(covered, COVERAGE_CAP);
    }

    #[test]
    fn test_day_coverage_skips_unassigned() {
        let zones = CoverageZones::build(30);
        let row = [Some(GuardId::new(1)), None, None];
        assert_eq!(zones.day_coverage(&row), 12);
        assert_eq!(zones.day_coverage(&[None, None, None]), 0);
    }

    #[test]
    fn test_multi_word_pool() {
        let zones = CoverageZones::build(130);
        let zone = zones.zone(GuardId::new(64));
        // 59..=69 and mirrors 62..=72
        assert_eq!(zone, ids(&(59..=72).collect::<Vec<_>>()));
    }
}
