use super::domain::{Event, EventAction, EventKind};
use super::grammar::{self, LineCaptures};

/// Result of parsing a raw referral log.
#[derive(Debug, Clone)]
pub struct ParsedLog<'a> {
    /// Trimmed, non-blank lines in input order.
    pub lines: Vec<&'a str>,
    /// Events in chronological order; ties keep input order.
    pub events: Vec<Event>,
}

/// Split a raw blob into trimmed, non-blank lines. Accepts `\n` and `\r\n` breaks; only ASCII
/// whitespace is trimmed.
pub fn clean_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(|line| line.trim_matches(|c: char| c.is_ascii_whitespace()))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse a raw blob into chronologically ordered events.
///
/// Lines that do not match the grammar, or whose timestamp is not a real date, are skipped.
pub fn parse_log(raw: &str) -> ParsedLog<'_> {
    let lines = clean_lines(raw);
    let mut events: Vec<Event> = lines.iter().filter_map(|line| parse_line(line)).collect();
    // `sort_by_key` is stable, so equal timestamps keep their textual order.
    events.sort_by_key(|event| event.timestamp);

    ParsedLog { lines, events }
}

pub fn parse_line(line: &str) -> Option<Event> {
    let captures = grammar::match_line(line)?;
    event_from_captures(&captures)
}

fn event_from_captures(captures: &LineCaptures<'_>) -> Option<Event> {
    let timestamp = captures.timestamp()?;
    let action = match captures.kind()? {
        EventKind::Recommend => EventAction::Recommend {
            inviter: captures.subject.to_string(),
            invitee: captures.object?.to_string(),
        },
        EventKind::Accept => EventAction::Accept {
            accepter: captures.subject.to_string(),
        },
    };

    Some(Event { timestamp, action })
}
