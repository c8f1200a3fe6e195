//! Rostering domain models.
//!
//! Provides the data types shared by every stage of the engine: guards,
//! the weekday calendar, fair-share quotas, and the roster itself.
//!
//! # Domain Mappings
//!
//! | u-roster | Security | Healthcare | Utilities |
//! |----------|----------|------------|-----------|
//! | Guard | Guard | Nurse | On-call engineer |
//! | Slot | Watch | Shift | Rotation |
//! | Schedule | Duty roster | Ward rota | On-call plan |

mod calendar;
mod guard;
mod quota;
mod schedule;

pub use calendar::{
    is_weekday, weekday_of, DayAvailability, InvalidWeekday, Weekday, WeekdaySet, DAYS_PER_WEEK,
};
pub use guard::{Guard, GuardId};
pub use quota::{Quotas, ShiftKind};
pub use schedule::{DayShifts, Schedule, Slot, Violation, ViolationType, SLOTS_PER_DAY};
