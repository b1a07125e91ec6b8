use tracing::{debug, warn};

use super::domain::Scores;
use super::parser;
use super::tree::ReferralTree;
use super::validator::{self, ValidationError};

/// Validates a referral log and folds it into reward scores.
///
/// The service holds no state between runs; every call builds its own [`ReferralTree`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Score a raw referral log, or report the first validation failure.
    pub fn score(&self, raw: &str) -> Result<Scores, ValidationError> {
        if let Err(error) = validator::validate(raw) {
            warn!(field = error.field(), line = ?error.line(), %error, "rejected referral log");
            return Err(error);
        }

        let log = parser::parse_log(raw);
        let tree = ReferralTree::from_events(&log.events);
        let scores = tree.scores();

        debug!(
            lines = log.lines.len(),
            events = log.events.len(),
            participants = tree.len(),
            rewarded = scores.len(),
            "scored referral log"
        );

        Ok(scores)
    }
}
