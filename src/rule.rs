use core::fmt::{self, Display};

use chrono::NaiveDate;

use crate::{error::ScheduleError, offset::Offset, schedule::Event};

/// A reference to a clause in the bylaws, rendered as `<chapter> kap. <paragraph>§`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Citation {
    /// The chapter (`kapitel`) number.
    pub chapter: u32,
    /// The paragraph (`paragraf`) number within the chapter.
    pub paragraph: u32,
}

impl Citation {
    /// Returns a citation of `paragraph` in `chapter`.
    pub const fn new(chapter: u32, paragraph: u32) -> Self {
        Self { chapter, paragraph }
    }
}

impl Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kap. {}§", self.chapter, self.paragraph)
    }
}

/// A deadline defined relative to the annual meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// How far the deadline lies from the meeting.
    pub offset: Offset,
    /// The bylaw clause the deadline comes from, if any.
    pub citation: Option<Citation>,
    /// What must be done by the deadline.
    pub description: &'static str,
}

impl Rule {
    /// Resolves this rule against the date of the meeting.
    ///
    /// # Errors
    ///
    /// - If the deadline is not a representable date, returns [ScheduleError::OffsetOutOfRange].
    pub fn resolve(&self, anchor_date: NaiveDate) -> Result<Event, ScheduleError> {
        let date = self.offset.apply(anchor_date)?;
        Ok(Event::new(date, self.description, self.citation))
    }
}

/// The annual meeting itself.
pub static MEETING: Rule = Rule {
    offset: Offset::NONE,
    citation: None,
    description: "Årsmöte",
};

/// Every deadline the bylaws set ahead of the annual meeting.
///
/// Order carries no meaning beyond breaking ties between deadlines that fall on the same day.
pub static RULES: &[Rule] = &[
    // 3 kap. 1§ stycke 2
    Rule {
        offset: Offset::Weeks(-4),
        citation: Some(Citation::new(3, 1)),
        description: "Kallelse till årsmötet och förslag till föredragningslista.",
    },
    // 3 kap. 1§ stycke 3
    Rule {
        offset: Offset::Weeks(-1),
        citation: Some(Citation::new(3, 1)),
        description: "Verksamhetsberättelse, årsredovisning/årsbokslut, revisorernas berättelser, \
            verksamhetsplan med budget samt styrelsens förslag och inkomna motioner med \
            styrelsens yttrande.",
    },
    // 3 kap. 2§ stycke 2
    Rule {
        offset: Offset::Weeks(-3),
        citation: Some(Citation::new(3, 2)),
        description: "Förslag från medlem (motion) ska vara styrelsen tillhanda senast tre \
            veckor före årsmötet.",
    },
    // 3 kap. 4§ stycke 2 punkt 3
    Rule {
        offset: Offset::Months(-2),
        citation: Some(Citation::new(3, 4)),
        description: "Sista dag för beviljat medlemskap.",
    },
    // 3 kap. 4§ stycke 2 punkt 3, printed as 3 kap. 2§
    Rule {
        offset: Offset::Months(-1),
        citation: Some(Citation::new(3, 2)),
        description: "Sista dag för medlemsavgift.",
    },
    // 4 kap. 2§ stycke 2
    Rule {
        offset: Offset::Months(-2),
        citation: Some(Citation::new(4, 2)),
        description: "Valberedningen ska senast två månader före årsmötet tillfråga dem vilkas \
            mandattid utgår vid mötets slut, om de vill kandidera för nästa mandattid. Därefter \
            ska valberedningen informera medlemmarna om eventuella avsägelser.",
    },
    // 4 kap. 2§ stycke 3
    Rule {
        offset: Offset::Weeks(-1),
        citation: Some(Citation::new(4, 2)),
        description: "Senast en vecka före årsmötet ska valberedningen meddela röstberättigade \
            medlemmar sitt förslag, samt meddela namnen på de personer som i övrigt har \
            föreslagits inför valberedningen.",
    },
    // 5 kap. 1§ stycke 3
    Rule {
        offset: Offset::Months(-1),
        citation: Some(Citation::new(5, 1)),
        description: "Föreningens räkenskaper för det senaste verksamhets- och räkenskapsåret \
            ska vara revisorerna tillhanda senast en månad före årsmötet.",
    },
    // 5 kap. 1§ stycke 4
    Rule {
        offset: Offset::Days(-14),
        citation: Some(Citation::new(5, 1)),
        description: "Revisorerna ska granska styrelsens förvaltning och räkenskaper för det \
            senaste verksamhets- och räkenskapsåret samt till styrelsen överlämna \
            revisionsberättelse senast 14 dagar före årsmötet.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[fixture]
    fn anchor() -> NaiveDate {
        ymd(2024, 4, 27)
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(9, RULES.len());
    }

    #[test]
    fn test_every_rule_is_cited_and_precedes_meeting() {
        let anchor = ymd(2024, 4, 27);
        for rule in RULES {
            assert!(rule.citation.is_some(), "{}", rule.description);
            let event = rule.resolve(anchor).unwrap();
            assert!(event.date < anchor, "{}", rule.description);
        }
    }

    #[rstest]
    #[case::notice(0, ymd(2024, 3, 30))]
    #[case::annual_report(1, ymd(2024, 4, 20))]
    #[case::member_motions(2, ymd(2024, 4, 6))]
    #[case::membership_cutoff(3, ymd(2024, 2, 27))]
    #[case::dues_cutoff(4, ymd(2024, 3, 27))]
    #[case::nominee_outreach(5, ymd(2024, 2, 27))]
    #[case::nomination_proposal(6, ymd(2024, 4, 20))]
    #[case::records_to_auditors(7, ymd(2024, 3, 27))]
    #[case::auditor_report(8, ymd(2024, 4, 13))]
    fn test_rule_dates(anchor: NaiveDate, #[case] index: usize, #[case] expected: NaiveDate) {
        let event = RULES[index].resolve(anchor).unwrap();
        assert_eq!(expected, event.date);
        assert_eq!(RULES[index].citation, event.citation);
    }

    #[rstest]
    fn test_meeting_resolves_to_anchor(anchor: NaiveDate) {
        let event = MEETING.resolve(anchor).unwrap();
        assert_eq!(anchor, event.date);
        assert_eq!(None, event.citation);
        assert_eq!("Årsmöte", event.description);
    }

    #[test]
    fn test_citation_display() {
        assert_eq!("3 kap. 1§", Citation::new(3, 1).to_string());
        assert_eq!("12 kap. 10§", Citation::new(12, 10).to_string());
    }
}
