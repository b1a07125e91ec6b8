use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Final reward totals keyed by participant name.
pub type Scores = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Recommend,
    Accept,
}

impl EventKind {
    /// Resolve an action keyword, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case(Self::Recommend.keyword()) {
            Some(Self::Recommend)
        } else if keyword.eq_ignore_ascii_case(Self::Accept.keyword()) {
            Some(Self::Accept)
        } else {
            None
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Recommend => "recommends",
            Self::Accept => "accepts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    Recommend { inviter: String, invitee: String },
    Accept { accepter: String },
}

impl EventAction {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Recommend { .. } => EventKind::Recommend,
            Self::Accept { .. } => EventKind::Accept,
        }
    }
}

/// One timestamped entry of the referral log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp: NaiveDateTime,
    pub action: EventAction,
}

impl Event {
    pub fn recommend(
        timestamp: NaiveDateTime,
        inviter: impl Into<String>,
        invitee: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            action: EventAction::Recommend {
                inviter: inviter.into(),
                invitee: invitee.into(),
            },
        }
    }

    pub fn accept(timestamp: NaiveDateTime, accepter: impl Into<String>) -> Self {
        Self {
            timestamp,
            action: EventAction::Accept {
                accepter: accepter.into(),
            },
        }
    }

    pub fn kind(&self) -> EventKind {
        self.action.kind()
    }
}
