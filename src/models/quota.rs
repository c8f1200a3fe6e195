//! Fair-share quotas.
//!
//! With `V` guards and a horizon of `days`, every guard should hold about
//! `days / V` day shifts and `2 * days / V` night shifts (two night slots
//! per day). The remainders are "extra" allowances handed to the first
//! guards that reach the fair share during construction.

use serde::{Deserialize, Serialize};

/// Kind of shift a slot belongs to, for quota bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    /// Day shift (one slot per day).
    Day,
    /// Night shift (two slots per day).
    Night,
}

/// Per-guard target shift counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotas {
    /// Day-shift fair share `q_d = days / V`.
    pub day_share: usize,
    /// Day-shift remainder `r_d = days mod V`.
    pub day_remainder: usize,
    /// Night-shift fair share `q_n = 2 * days / V`.
    pub night_share: usize,
    /// Night-shift remainder `r_n = 2 * days mod V`.
    pub night_remainder: usize,
}

impl Quotas {
    /// Derives quotas from guard count and horizon length.
    ///
    /// Returns `None` if `guard_count` is zero.
    ///
    /// # Example
    /// ```
    /// use u_roster::models::Quotas;
    ///
    /// let q = Quotas::compute(30, 112).unwrap();
    /// assert_eq!((q.day_share, q.day_remainder), (3, 22));
    /// assert_eq!((q.night_share, q.night_remainder), (7, 14));
    /// ```
    pub fn compute(guard_count: usize, days: usize) -> Option<Self> {
        if guard_count == 0 {
            return None;
        }
        let nights = 2 * days;
        Some(Self {
            day_share: days / guard_count,
            day_remainder: days % guard_count,
            night_share: nights / guard_count,
            night_remainder: nights % guard_count,
        })
    }

    /// Fair share for a shift kind.
    #[inline]
    pub fn share(&self, kind: ShiftKind) -> usize {
        match kind {
            ShiftKind::Day => self.day_share,
            ShiftKind::Night => self.night_share,
        }
    }

    /// Remainder budget for a shift kind.
    #[inline]
    pub fn remainder(&self, kind: ShiftKind) -> usize {
        match kind {
            ShiftKind::Day => self.day_remainder,
            ShiftKind::Night => self.night_remainder,
        }
    }
}
