use core::fmt::{self, Display};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::{
    error::ScheduleError,
    rule::{Citation, MEETING, RULES},
};

/// The last month in which the annual meeting may be held.
const LAST_MEETING_MONTH: u32 = 4;

/// A single dated obligation, such as the last day to send out the notice of the meeting.
///
/// Events are created with their dates fully resolved and never change afterwards.
///
/// An event displays as one line of a schedule, without the trailing newline:
///
/// ```
/// use meeting_deadlines::prelude::*;
///
/// let schedule = Schedule::new("2024-04-27".parse().unwrap()).unwrap();
/// let meeting = &schedule.events()[0];
/// assert_eq!("2024-04-27 Årsmöte", meeting.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub(crate) date: NaiveDate,
    pub(crate) description: &'static str,
    pub(crate) citation: Option<Citation>,
}

impl Event {
    pub(crate) fn new(
        date: NaiveDate,
        description: &'static str,
        citation: Option<Citation>,
    ) -> Self {
        Self {
            date,
            description,
            citation,
        }
    }

    /// The day of the deadline.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// What must be done by the deadline.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The bylaw clause behind the deadline, if any.
    pub fn citation(&self) -> Option<Citation> {
        self.citation
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.citation {
            Some(citation) => write!(f, "{} {} {}", self.date, citation, self.description),
            None => write!(f, "{} {}", self.date, self.description),
        }
    }
}

/// All deadlines derived from the date of one annual meeting.
///
/// A schedule always holds the meeting itself followed by one event per entry of
/// [RULES](crate::RULES). Displaying it (or calling [to_text]) lists the events in date order,
/// one per line.
///
/// # Examples
///
/// ```
/// use meeting_deadlines::prelude::*;
///
/// let anchor = "2024-04-27".parse().unwrap();
/// let schedule = Schedule::build(anchor, true).unwrap();
/// let text = schedule.to_string();
/// assert!(text.starts_with("2024-02-27 3 kap. 4§ Sista dag för beviljat medlemskap.\n"));
/// assert!(text.ends_with("2024-04-27 Årsmöte\n"));
///
/// let late = "2024-05-01".parse().unwrap();
/// assert!(Schedule::build(late, true).is_err());
/// assert!(Schedule::build(late, false).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    anchor_date: NaiveDate,
    events: Vec<Event>,
}

impl Schedule {
    /// Builds the schedule for a meeting held on `anchor_date`, rejecting dates after April.
    ///
    /// Shorthand for [Schedule::build] with `validate` set.
    ///
    /// # Errors
    ///
    /// See [Schedule::build].
    pub fn new(anchor_date: NaiveDate) -> Result<Self, ScheduleError> {
        Self::build(anchor_date, true)
    }

    /// Builds the schedule for a meeting held on `anchor_date`.
    ///
    /// When `validate` is true, the meeting must fall in January through April. Passing false
    /// skips that check entirely.
    ///
    /// # Errors
    ///
    /// - If `validate` is true and `anchor_date` is after the end of April, returns
    ///   [ScheduleError::AnchorAfterApril].
    /// - If a deadline is not a representable date, returns [ScheduleError::OffsetOutOfRange].
    pub fn build(anchor_date: NaiveDate, validate: bool) -> Result<Self, ScheduleError> {
        if validate && anchor_date.month() > LAST_MEETING_MONTH {
            return Err(ScheduleError::AnchorAfterApril { date: anchor_date });
        }

        let events = std::iter::once(&MEETING)
            .chain(RULES)
            .map(|rule| {
                let event = rule.resolve(anchor_date)?;
                trace!(offset = %rule.offset, date = %event.date, "resolved deadline");
                Ok(event)
            })
            .collect::<Result<Vec<_>, ScheduleError>>()?;

        debug!(
            anchor = %anchor_date,
            validated = validate,
            events = events.len(),
            "built schedule"
        );

        Ok(Self {
            anchor_date,
            events,
        })
    }

    /// The date of the meeting.
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    /// The events in the order they were added: the meeting first, then the rule catalog.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The events ordered by date. Events on the same day keep the order they were added in.
    pub fn sorted_events(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        // stable: ties stay in insertion order
        sorted.sort_by_key(|event| event.date);
        sorted
    }

    /// The number of events, including the meeting.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false: a schedule holds at least the meeting itself.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.sorted_events() {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

/// Builds a schedule. Same as [Schedule::build].
///
/// # Errors
///
/// See [Schedule::build].
pub fn build(anchor_date: NaiveDate, validate: bool) -> Result<Schedule, ScheduleError> {
    Schedule::build(anchor_date, validate)
}

/// Renders `schedule` as text: one newline-terminated line per event, in date order.
pub fn to_text(schedule: &Schedule) -> String {
    schedule.to_string()
}
