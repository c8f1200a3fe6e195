//! Day difficulty ranking.
//!
//! A day is hard to staff when few guards may work its weekday. Filling
//! those days first, while most guards are still under quota, keeps the
//! constructor out of fallback.

use crate::models::{weekday_of, DayAvailability, Guard, DAYS_PER_WEEK};

/// Number of guards not forbidden on each weekday. Index 0 is weekday 1.
pub fn free_guards_per_weekday(guards: &[Guard]) -> [usize; DAYS_PER_WEEK as usize] {
    let mut free = [0; DAYS_PER_WEEK as usize];
    for (slot, weekday) in free.iter_mut().zip(1..=DAYS_PER_WEEK) {
        *slot = guards.iter().filter(|g| !g.is_forbidden(weekday)).count();
    }
    free
}

/// Days `1..=days` ordered from scarcest to most staffed weekday.
///
/// The sort is stable: days with equal availability keep ascending day
/// order.
///
/// # Example
/// ```
/// use u_roster::construction::days_by_difficulty;
/// use u_roster::models::Guard;
///
/// let guards = vec![Guard::new(1).with_forbidden(3), Guard::new(2), Guard::new(3)];
/// let order = days_by_difficulty(&guards, 7);
/// assert_eq!(order[0].day, 3);
/// assert_eq!(order[1].day, 1);
/// ```
pub fn days_by_difficulty(guards: &[Guard], days: usize) -> Vec<DayAvailability> {
    let free = free_guards_per_weekday(guards);
    let mut order: Vec<DayAvailability> = (1..=days)
        .map(|day| {
            let weekday = weekday_of(day);
            DayAvailability {
                day,
                weekday,
                free_guards: free[weekday as usize - 1],
            }
        })
        .collect();
    order.sort_by_key(|d| d.free_guards);
    order
}
