use std::collections::HashMap;

use super::domain::{Event, EventAction, Scores};

/// Reward multiplier applied per hop away from the accepting participant.
pub const SCORE_FACTOR: f64 = 0.5;

/// Non-owning handle to a participant stored in a [`ReferralTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ParticipantId(usize);

/// A named node of the referral hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    name: String,
    inviter: Option<ParticipantId>,
    accepted: bool,
    points: f64,
}

impl Participant {
    fn new(name: &str, inviter: Option<ParticipantId>) -> Self {
        Self {
            name: name.to_string(),
            inviter,
            accepted: false,
            points: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    // The inviter only counts once this participant has accepted its own invitation.
    fn effective_parent(&self) -> Option<ParticipantId> {
        if self.accepted {
            self.inviter
        } else {
            None
        }
    }
}

/// Registry of participants folded from chronologically ordered events.
///
/// Inviter links always point at a participant registered earlier, so the hierarchy is a
/// forest and every upward walk terminates.
#[derive(Debug, Default, Clone)]
pub struct ReferralTree {
    participants: Vec<Participant>,
    index: HashMap<String, ParticipantId>,
}

impl ReferralTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of events, in the order given, into a fresh tree.
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut tree = Self::new();
        for event in events {
            tree.apply(event);
        }
        tree
    }

    pub fn apply(&mut self, event: &Event) {
        match &event.action {
            EventAction::Recommend { inviter, invitee } => {
                self.recommend(inviter, invitee);
            }
            EventAction::Accept { accepter } => {
                self.accept(accepter);
            }
        }
    }

    /// Link `invitee` under `inviter`. Returns `false` when the invitee was already known, in
    /// which case the earlier recommendation stands and nothing changes.
    pub fn recommend(&mut self, inviter: &str, invitee: &str) -> bool {
        if self.index.contains_key(invitee) {
            return false;
        }

        let inviter_id = self.find_or_register(inviter);
        // A self-recommendation registers the participant but gives it no inviter.
        if inviter == invitee {
            return true;
        }

        self.register(invitee, Some(inviter_id));
        true
    }

    /// Mark `accepter` as accepted and reward its effective ancestors. Unknown names are
    /// ignored and return `false`.
    pub fn accept(&mut self, accepter: &str) -> bool {
        let Some(&id) = self.index.get(accepter) else {
            return false;
        };

        self.participants[id.0].accepted = true;
        self.propagate(id);
        true
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.index.get(name).map(|id| &self.participants[id.0])
    }

    /// Name of the participant that first recommended `name`, if any.
    pub fn inviter_of(&self, name: &str) -> Option<&str> {
        let participant = self.participant(name)?;
        participant
            .inviter
            .map(|id| self.participants[id.0].name.as_str())
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Points per participant, omitting anyone who has not earned a reward.
    pub fn scores(&self) -> Scores {
        self.participants
            .iter()
            .filter(|participant| participant.points > 0.0)
            .map(|participant| (participant.name.clone(), participant.points))
            .collect()
    }

    fn propagate(&mut self, from: ParticipantId) {
        let mut current = self.participants[from.0].effective_parent();
        let mut level: i32 = 0;

        while let Some(id) = current {
            let participant = &mut self.participants[id.0];
            participant.points += SCORE_FACTOR.powi(level);
            current = participant.effective_parent();
            level += 1;
        }
    }

    fn find_or_register(&mut self, name: &str) -> ParticipantId {
        match self.index.get(name) {
            Some(&id) => id,
            None => self.register(name, None),
        }
    }

    fn register(&mut self, name: &str, inviter: Option<ParticipantId>) -> ParticipantId {
        let id = ParticipantId(self.participants.len());
        self.participants.push(Participant::new(name, inviter));
        self.index.insert(name.to_string(), id);
        id
    }
}
