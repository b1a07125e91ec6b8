//! Grammar for a single referral log line.
//!
//! Two shapes are recognised, with tokens separated by exactly one ASCII whitespace character:
//!
//! ```text
//! 2018-06-12 09:41 A recommends B
//! 2018-06-14 09:41 B accepts
//! ```
//!
//! Keywords match regardless of ASCII case; names are kept verbatim.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::domain::EventKind;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Raw fields captured from a line that matched the grammar.
///
/// `subject` is the inviter of a recommendation or the accepter of an acceptance; `object` is
/// only present for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCaptures<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub keyword: &'a str,
    pub subject: &'a str,
    pub object: Option<&'a str>,
}

impl LineCaptures<'_> {
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_keyword(self.keyword)
    }

    /// Combine the captured date and time, rejecting values that are not on the calendar.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date, DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

/// Match one line against the grammar. Anything short of a full match yields `None`.
pub fn match_line(line: &str) -> Option<LineCaptures<'_>> {
    let mut tokens = line.split(|c: char| c.is_ascii_whitespace());

    let date = tokens.next().filter(|token| is_date(token))?;
    let time = tokens.next().filter(|token| is_time(token))?;
    let subject = tokens.next().filter(|token| is_name(token))?;
    let keyword = tokens.next()?;

    let object = match EventKind::from_keyword(keyword)? {
        EventKind::Recommend => Some(tokens.next().filter(|token| is_name(token))?),
        EventKind::Accept => None,
    };

    if tokens.next().is_some() {
        return None;
    }

    Some(LineCaptures {
        date,
        time,
        keyword,
        subject,
        object,
    })
}

fn is_name(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_date(token: &str) -> bool {
    matches_digit_pattern(token, "dddd-dd-dd")
}

fn is_time(token: &str) -> bool {
    matches_digit_pattern(token, "dd:dd")
}

// `d` in the pattern stands for any ASCII digit; every other byte must match literally.
fn matches_digit_pattern(token: &str, pattern: &str) -> bool {
    token.len() == pattern.len()
        && token
            .bytes()
            .zip(pattern.bytes())
            .all(|(actual, expected)| match expected {
                b'd' => actual.is_ascii_digit(),
                literal => actual == literal,
            })
}
