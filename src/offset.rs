use core::fmt::{self, Display};

use chrono::{Days, Months, NaiveDate};

use crate::error::ScheduleError;

/// A signed calendar displacement. Negative magnitudes point to earlier dates.
///
/// Month offsets keep the day of the month where possible and otherwise clamp to the last day of
/// the resulting month, so `2024-01-31` plus one month is `2024-02-29`. Week and day offsets
/// shift by an exact number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    /// Whole calendar months.
    Months(i32),
    /// Whole weeks, i.e. seven days each.
    Weeks(i32),
    /// Days.
    Days(i32),
}

impl Offset {
    /// The zero offset.
    pub const NONE: Self = Self::Days(0);

    /// Returns the date that lies this offset away from `base`.
    ///
    /// # Errors
    ///
    /// - If the result is not representable by [NaiveDate], returns
    ///   [ScheduleError::OffsetOutOfRange].
    pub fn apply(&self, base: NaiveDate) -> Result<NaiveDate, ScheduleError> {
        apply_offset(base, *self)
    }

    fn unit_name(&self, magnitude: i32) -> &'static str {
        let singular = magnitude.unsigned_abs() == 1;
        match (self, singular) {
            (Offset::Months(_), true) => "month",
            (Offset::Months(_), false) => "months",
            (Offset::Weeks(_), true) => "week",
            (Offset::Weeks(_), false) => "weeks",
            (Offset::Days(_), true) => "day",
            (Offset::Days(_), false) => "days",
        }
    }

    fn magnitude(&self) -> i32 {
        match *self {
            Offset::Months(n) | Offset::Weeks(n) | Offset::Days(n) => n,
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::NONE
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.magnitude();
        write!(f, "{magnitude:+} {}", self.unit_name(magnitude))
    }
}

/// Returns `base` shifted by `offset`. See [Offset] for the calendar rules applied.
///
/// # Errors
///
/// - If the result is not representable by [NaiveDate], returns
///   [ScheduleError::OffsetOutOfRange].
pub fn apply_offset(base: NaiveDate, offset: Offset) -> Result<NaiveDate, ScheduleError> {
    let shifted = match offset {
        Offset::Months(n) => shift_months(base, n),
        Offset::Weeks(n) => shift_days(base, i64::from(n) * 7),
        Offset::Days(n) => shift_days(base, i64::from(n)),
    };
    shifted.ok_or(ScheduleError::OffsetOutOfRange { date: base, offset })
}

fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    // chrono clamps to the end of the month in both directions
    let delta = Months::new(months.unsigned_abs());
    if months < 0 {
        date.checked_sub_months(delta)
    } else {
        date.checked_add_months(delta)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(delta)
    } else {
        date.checked_add_days(delta)
    }
}
