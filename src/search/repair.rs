//! Night-shift fairness repair.
//!
//! Local search optimizes preference and coverage first, so it can leave
//! night load uneven. This pass moves night slots from guards above the
//! per-guard night target to guards below it.
//!
//! # Algorithm
//!
//! 1. `target = 2 · days / V`. Count nights per guard.
//! 2. Budget `min(#below target, #above target)` passes.
//! 3. Each pass scans guards below target in id order; for each, the days
//!    it is free to work (not already on duty, weekday not forbidden); for
//!    each such day, night slots 1 then 2. The first slot held by a guard
//!    above target is handed over, and the pass ends.
//! 4. Stop early when a pass finds no move.
//!
//! A hand-over that would raise the total-shift fairness penalty is
//! skipped, so the penalty never increases. The pass is first-fit and
//! best-effort: it does not promise a zero penalty.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Guard, GuardId, Schedule, ShiftKind, Slot};
use crate::scoring::penalty_from_totals;

/// Per-guard night target used by the repair pass.
///
/// Computed from pool size and horizon on its own rather than taken from
/// the construction quotas.
pub fn night_target(guard_count: usize, days: usize) -> usize {
    if guard_count == 0 {
        return 0;
    }
    (2 * days) / guard_count
}

/// One night slot handed from an overloaded guard to an underloaded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairMove {
    /// Day row (0-based).
    pub day_idx: usize,
    /// Night slot reassigned.
    pub slot: Slot,
    /// Previous holder (above target).
    pub from: GuardId,
    /// New holder (below target).
    pub to: GuardId,
}

/// Result of the repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Repaired roster.
    pub schedule: Schedule,
    /// Moves applied, in order.
    pub moves: Vec<RepairMove>,
}

/// Rebalances night shifts of `schedule`.
///
/// Each pass hands the first legal night slot held by a guard above the
/// night target to a guard below it. A hand-over that would raise the
/// total-shift fairness penalty is skipped and the scan moves on to the
/// next candidate slot, so the first legal slot is not always the one taken.
///
/// # Example
/// ```
/// use u_roster::models::{Guard, GuardId, Schedule};
/// use u_roster::search::repair_night_fairness;
///
/// let g = GuardId::new;
/// let guards: Vec<Guard> = (1..=4).map(Guard::new).collect();
/// let schedule = Schedule::from_rows(vec![
///     [g(4), g(1), g(2)],
///     [g(4), g(1), g(3)],
///     [g(2), g(1), g(3)],
///     [g(3), g(1), g(2)],
/// ]);
///
/// let outcome = repair_night_fairness(schedule, &guards);
/// assert_eq!(outcome.moves.len(), 1);
/// ```
pub fn repair_night_fairness(schedule: Schedule, guards: &[Guard]) -> RepairOutcome {
    let guard_count = guards.len();
    let days = schedule.day_count();
    let target = night_target(guard_count, days);

    let mut schedule = schedule;
    let mut nights = schedule.counts_of(ShiftKind::Night, guard_count);
    let mut totals = schedule.total_counts(guard_count);
    let mut moves = Vec::new();

    let deficit = nights.iter().filter(|&&n| n < target).count();
    let surplus = nights.iter().filter(|&&n| n > target).count();
    let budget = deficit.min(surplus);

    info!(
        event = "repair_start",
        target = target,
        deficit = deficit,
        surplus = surplus,
    );

    for pass in 0..budget {
        let low: Vec<usize> = (0..guard_count).filter(|&i| nights[i] < target).collect();
        let high: Vec<bool> = nights.iter().map(|&n| n > target).collect();
        if low.is_empty() || !high.contains(&true) {
            break;
        }

        let Some(mv) = find_handover(&schedule, guards, &low, &high, &totals) else {
            debug!(event = "repair_stalled", pass = pass);
            break;
        };

        schedule.assign(mv.day_idx, mv.slot, mv.to);
        nights[mv.from.index()] -= 1;
        nights[mv.to.index()] += 1;
        totals[mv.from.index()] -= 1;
        totals[mv.to.index()] += 1;

        debug!(
            event = "repair_move",
            pass = pass,
            day = mv.day_idx + 1,
            slot = %mv.slot,
            from = mv.from.get(),
            to = mv.to.get(),
        );
        moves.push(mv);
    }

    info!(event = "repair_end", moves = moves.len());

    RepairOutcome { schedule, moves }
}

/// First night slot a low guard can take from a high guard without
/// raising the fairness penalty.
fn find_handover(
    schedule: &Schedule,
    guards: &[Guard],
    low: &[usize],
    high: &[bool],
    totals: &[usize],
) -> Option<RepairMove> {
    let current_penalty = penalty_from_totals(totals);
    let mut trial = totals.to_vec();

    for &lo in low {
        let to = GuardId::from_index(lo);
        for day_idx in 0..schedule.day_count() {
            if schedule.is_on_day(day_idx, to) || guards[lo].is_forbidden(schedule.weekday(day_idx))
            {
                continue;
            }
            for slot in Slot::NIGHTS {
                let Some(from) = schedule.get(day_idx, slot) else {
                    continue;
                };
                if !from.in_range(high.len()) || !high[from.index()] {
                    continue;
                }

                trial[from.index()] -= 1;
                trial[lo] += 1;
                let keeps_fairness = penalty_from_totals(&trial) <= current_penalty;
                trial[from.index()] += 1;
                trial[lo] -= 1;

                if keeps_fairness {
                    return Some(RepairMove {
                        day_idx,
                        slot,
                        from,
                        to,
                    });
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quotas;
    use crate::scoring::fairness_penalty;
    use crate::validation::is_schedule_valid;

    fn g(id: usize) -> GuardId {
        GuardId::new(id)
    }

    fn pool(n: usize) -> Vec<Guard> {
        (1..=n).map(Guard::new).collect()
    }

    #[test]
    fn test_night_target() {
        assert_eq!(night_target(30, 112), 7);
        assert_eq!(night_target(4, 4), 2);
        assert_eq!(night_target(10, 3), 0);
        assert_eq!(night_target(0, 3), 0);
    }

    #[test]
    fn test_night_target_matches_construction_share() {
        // Computed independently; the two must agree in value.
        for guards in 1..=40 {
            for days in 1..=120 {
                let quotas = Quotas::compute(guards, days).unwrap();
                assert_eq!(night_target(guards, days), quotas.night_share);
            }
        }
    }

    #[test]
    fn test_moves_night_from_overloaded_guard() {
        let guards = pool(4);
        // Nights: g1=4, g2=2, g3=2, g4=0; target 2
        let schedule = Schedule::from_rows(vec![
            [g(4), g(1), g(2)],
            [g(4), g(1), g(3)],
            [g(2), g(1), g(3)],
            [g(3), g(1), g(2)],
        ]);
        assert_eq!(fairness_penalty(&schedule, 4), 1);

        let outcome = repair_night_fairness(schedule, &guards);
        assert_eq!(
            outcome.moves,
            vec![RepairMove {
                day_idx: 2,
                slot: Slot::Night1,
                from: g(1),
                to: g(4),
            }]
        );
        assert_eq!(outcome.schedule.day(2), &[Some(g(2)), Some(g(4)), Some(g(3))]);
        assert_eq!(
            outcome.schedule.counts_of(ShiftKind::Night, 4),
            vec![3, 2, 2, 1]
        );
        assert!(is_schedule_valid(&outcome.schedule, &guards, 4));
        assert_eq!(fairness_penalty(&outcome.schedule, 4), 0);
    }

    #[test]
    fn test_balanced_schedule_untouched() {
        let guards = pool(3);
        let schedule =
            Schedule::from_rows(vec![[g(1), g(2), g(3)], [g(2), g(3), g(1)], [g(3), g(1), g(2)]]);
        let outcome = repair_night_fairness(schedule.clone(), &guards);
        assert!(outcome.moves.is_empty());
        assert_eq!(outcome.schedule, schedule);
    }

    #[test]
    fn test_forbidden_day_is_not_used() {
        // Guard 4 is free only on day 3 (weekday 3), which it forbids
        let mut guards = pool(4);
        guards[3] = Guard::new(4).with_forbidden(3);
        let schedule = Schedule::from_rows(vec![
            [g(4), g(1), g(2)],
            [g(4), g(1), g(3)],
            [g(2), g(1), g(3)],
            [g(4), g(1), g(2)],
        ]);
        let outcome = repair_night_fairness(schedule.clone(), &guards);
        assert!(outcome.moves.is_empty());
        assert_eq!(outcome.schedule, schedule);
    }

    #[test]
    fn test_skips_handover_that_hurts_fairness() {
        // Guard 5 has no nights but four day shifts; giving it guard 2's
        // night on day 5 would widen the total-shift gap.
        let guards = pool(5);
        let schedule = Schedule::from_rows(vec![
            [g(5), g(1), g(2)],
            [g(5), g(1), g(3)],
            [g(5), g(1), g(4)],
            [g(5), g(2), g(3)],
            [g(1), g(4), g(2)],
        ]);
        let before = fairness_penalty(&schedule, 5);
        assert_eq!(before, 1);

        let outcome = repair_night_fairness(schedule.clone(), &guards);
        assert!(outcome.moves.is_empty());
        assert_eq!(outcome.schedule, schedule);
        assert_eq!(fairness_penalty(&outcome.schedule, 5), before);
    }

    #[test]
    fn test_budget_limits_passes() {
        // Nights: g1=6, g2=0, g3=0, g4..g6 = 2; target 2 → deficit 2, surplus 1
        let guards = pool(6);
        let schedule = Schedule::from_rows(vec![
            [g(2), g(1), g(4)],
            [g(3), g(1), g(4)],
            [g(2), g(1), g(5)],
            [g(3), g(1), g(5)],
            [g(2), g(1), g(6)],
            [g(3), g(1), g(6)],
        ]);
        let outcome = repair_night_fairness(schedule, &guards);
        assert_eq!(outcome.moves.len(), 1);
        assert_eq!(outcome.moves[0].to, g(2));
        assert!(is_schedule_valid(&outcome.schedule, &guards, 6));
    }
}
