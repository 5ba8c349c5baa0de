use chrono::NaiveDate;

use crate::offset::Offset;

/// Errors that can occur while building a [Schedule](crate::Schedule).
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScheduleError {
    /// The annual meeting must be held no later than the last of April, so an anchor date in May
    /// or later is rejected unless the check is explicitly skipped.
    #[error("Anchor date `{date}` may not fall after the end of April")]
    AnchorAfterApril {
        /// The rejected anchor date.
        date: NaiveDate,
    },

    /// Applying an offset would leave the range of dates that can be represented.
    #[error("Offset of {offset} from `{date}` is outside the representable range of dates")]
    OffsetOutOfRange {
        /// The date the offset was applied to.
        date: NaiveDate,
        /// The offset that could not be applied.
        offset: Offset,
    },
}
