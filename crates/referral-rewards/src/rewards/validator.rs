use std::collections::BTreeMap;
use std::fmt;

use super::domain::EventKind;
use super::grammar::{self, LineCaptures};
use super::parser::clean_lines;

/// Name field a recommendation must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendField {
    Inviter,
    Invitee,
}

impl RecommendField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inviter => "inviter",
            Self::Invitee => "invitee",
        }
    }
}

impl fmt::Display for RecommendField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First problem found in a referral log. Line numbers count non-blank lines from 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Data can't be blank")]
    EmptyInput,
    #[error("Invalid invitation format in line {line}")]
    MalformedLine { line: usize },
    #[error("Invalid date format in line {line}")]
    InvalidDateTime { line: usize },
    #[error("Missing {field} in line {line}")]
    IncompleteRecommend { line: usize, field: RecommendField },
    #[error("Missing accepter in line {line}")]
    IncompleteAccept { line: usize },
    #[error("Unrecognized action in line {line}")]
    UnrecognizedAction { line: usize },
}

impl ValidationError {
    /// Field name reported to clients.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyInput => "data",
            Self::MalformedLine { .. } => "format",
            Self::InvalidDateTime { .. } => "date",
            Self::IncompleteRecommend { field, .. } => field.label(),
            Self::IncompleteAccept { .. } => "accepter",
            Self::UnrecognizedAction { .. } => "action",
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::MalformedLine { line }
            | Self::InvalidDateTime { line }
            | Self::IncompleteRecommend { line, .. }
            | Self::IncompleteAccept { line }
            | Self::UnrecognizedAction { line } => Some(*line),
        }
    }

    /// Field-to-message map carried in error responses.
    pub fn field_errors(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([(self.field(), self.to_string())])
    }
}

/// Check a raw referral log top to bottom, stopping at the first violation.
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    for (index, line) in clean_lines(raw).into_iter().enumerate() {
        validate_line(line, index + 1)?;
    }

    Ok(())
}

fn validate_line(raw_line: &str, line: usize) -> Result<(), ValidationError> {
    let captures =
        grammar::match_line(raw_line).ok_or(ValidationError::MalformedLine { line })?;

    if captures.timestamp().is_none() {
        return Err(ValidationError::InvalidDateTime { line });
    }

    validate_action(&captures, line)
}

pub(crate) fn validate_action(
    captures: &LineCaptures<'_>,
    line: usize,
) -> Result<(), ValidationError> {
    match captures.kind() {
        Some(EventKind::Recommend) => {
            if is_blank(Some(captures.subject)) {
                return Err(ValidationError::IncompleteRecommend {
                    line,
                    field: RecommendField::Inviter,
                });
            }
            if is_blank(captures.object) {
                return Err(ValidationError::IncompleteRecommend {
                    line,
                    field: RecommendField::Invitee,
                });
            }
            Ok(())
        }
        Some(EventKind::Accept) => {
            if is_blank(Some(captures.subject)) {
                return Err(ValidationError::IncompleteAccept { line });
            }
            Ok(())
        }
        None => Err(ValidationError::UnrecognizedAction { line }),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}
