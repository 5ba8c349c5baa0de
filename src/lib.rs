//! # meeting-deadlines
//!
//! Computes the deadlines an association's bylaws set ahead of its annual meeting.
//!
//! Every deadline is a fixed calendar offset from the date of the meeting (the *anchor date*):
//! a number of months, weeks, or days before it. Given the anchor date, this library resolves
//! each deadline and renders them as a list sorted by date, with the bylaw clause each one comes
//! from.
//!
//! ## Examples
//!
//! ```
//! use meeting_deadlines::prelude::*;
//!
//! let anchor = "2024-04-27".parse().unwrap();
//! let schedule = Schedule::build(anchor, true).unwrap();
//! print!("{}", to_text(&schedule));
//! ```
//!
//! prints:
//!
//! ```text
//! 2024-02-27 3 kap. 4§ Sista dag för beviljat medlemskap.
//! 2024-02-27 4 kap. 2§ Valberedningen ska senast två månader före årsmötet ...
//! 2024-03-27 3 kap. 2§ Sista dag för medlemsavgift.
//! 2024-03-27 5 kap. 1§ Föreningens räkenskaper ...
//! 2024-03-30 3 kap. 1§ Kallelse till årsmötet och förslag till föredragningslista.
//! 2024-04-06 3 kap. 2§ Förslag från medlem (motion) ...
//! 2024-04-13 5 kap. 1§ Revisorerna ska granska ...
//! 2024-04-20 3 kap. 1§ Verksamhetsberättelse, ...
//! 2024-04-20 4 kap. 2§ Senast en vecka före årsmötet ...
//! 2024-04-27 Årsmöte
//! ```
//!
//! The meeting must be held by the end of April. Later anchor dates are rejected unless the
//! check is skipped:
//!
//! ```
//! use meeting_deadlines::prelude::*;
//!
//! let anchor = "2024-05-01".parse().unwrap();
//! assert!(matches!(
//!     Schedule::build(anchor, true),
//!     Err(ScheduleError::AnchorAfterApril { .. })
//! ));
//! assert!(Schedule::build(anchor, false).is_ok());
//! ```
//!
//! ## Offsets
//!
//! | Offset | Rule |
//! |---|---|
//! | [`Offset::Months`] | Same day of the month, clamped to the last day of a shorter month. `2024-01-31` + 1 month is `2024-02-29`. |
//! | [`Offset::Weeks`] | Exactly seven days per week. |
//! | [`Offset::Days`] | Exactly that many days. |
//!
//! ## Prelude
//!
//! A prelude module is provided for convenience:
//!
//! ```
//! use meeting_deadlines::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod offset;
mod rule;
mod schedule;

pub use crate::error::ScheduleError;
pub use crate::offset::{apply_offset, Offset};
pub use crate::rule::{Citation, Rule, MEETING, RULES};
pub use crate::schedule::{build, to_text, Event, Schedule};

/// A convenience module appropriate for glob imports (`use meeting_deadlines::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::apply_offset;
    #[doc(no_inline)]
    pub use crate::build;
    #[doc(no_inline)]
    pub use crate::to_text;
    #[doc(no_inline)]
    pub use crate::Citation;
    #[doc(no_inline)]
    pub use crate::Event;
    #[doc(no_inline)]
    pub use crate::Offset;
    #[doc(no_inline)]
    pub use crate::Rule;
    #[doc(no_inline)]
    pub use crate::Schedule;
    #[doc(no_inline)]
    pub use crate::ScheduleError;
    #[doc(no_inline)]
    pub use crate::MEETING;
    #[doc(no_inline)]
    pub use crate::RULES;
}
