//! Referral reward scoring.
//!
//! Raw logs flow through [`validator::validate`] first; only logs that pass are parsed into
//! ordered [`Event`]s and folded into a [`ReferralTree`] by the [`ScoringService`].

pub mod domain;
pub mod grammar;
pub mod parser;
pub mod router;
pub mod service;
pub mod tree;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{Event, EventAction, EventKind, Scores};
pub use parser::{parse_log, ParsedLog};
pub use router::rewards_router;
pub use service::ScoringService;
pub use tree::{Participant, ReferralTree, SCORE_FACTOR};
pub use validator::{validate, RecommendField, ValidationError};
