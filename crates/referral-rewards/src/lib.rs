//! Referral reward scoring for recommend/accept event logs.
//!
//! The [`rewards`] module owns the line grammar, validation, event ordering, and the referral
//! tree that turns accepted recommendations into decaying reward points. The remaining modules
//! carry the service plumbing shared by the HTTP and CLI front ends.

pub mod config;
pub mod error;
pub mod rewards;
pub mod telemetry;
