use crate::text::text_keys;
use crate::{AttackTarget, Card, TextLookup};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What the store reports back once an attack has been applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attack_card: Card,
    pub target: AttackTarget,
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetLabel {
    Health,
    Card(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub title_key: &'static str,
    pub attacker: String,
    pub target: TargetLabel,
    pub blocked_message_key: Option<&'static str>,
}

impl ResultSummary {
    pub fn from_outcome(outcome: &AttackOutcome) -> Self {
        let target = match &outcome.target {
            AttackTarget::Health => TargetLabel::Health,
            AttackTarget::Card { card } => TargetLabel::Card(card.label()),
        };
        let (title_key, blocked_message_key) = if outcome.blocked {
            (text_keys::BLOCKED, Some(text_keys::BLOCKED_MESSAGE))
        } else {
            (text_keys::SUCCESS, None)
        };
        Self {
            title_key,
            attacker: outcome.attack_card.label(),
            target,
            blocked_message_key,
        }
    }

    pub fn title(&self, text: &dyn TextLookup) -> String {
        text.text(self.title_key).into_owned()
    }

    /// `attacker ➜ target` line.
    pub fn matchup(&self, text: &dyn TextLookup) -> String {
        let target = match &self.target {
            TargetLabel::Health => format!("❤ {}", text.text(text_keys::HEALTH)),
            TargetLabel::Card(label) => label.clone(),
        };
        format!("{} ➜ {}", self.attacker, target)
    }

    pub fn blocked_message(&self, text: &dyn TextLookup) -> Option<String> {
        self.blocked_message_key.map(|key| text.text(key).into_owned())
    }
}

/// One-shot, timed display of an attack result.
#[derive(Debug)]
pub struct ResultPopup {
    summary: ResultSummary,
    deadline: Option<Instant>,
}

impl ResultPopup {
    pub fn open(outcome: &AttackOutcome, now: Instant, display_for: Duration) -> Self {
        Self {
            summary: ResultSummary::from_outcome(outcome),
            deadline: Some(now + display_for),
        }
    }

    pub fn summary(&self) -> &ResultSummary {
        &self.summary
    }

    pub fn is_visible(&self) -> bool {
        self.deadline.is_some()
    }

    /// Dismisses once the display time has run out. Returns `true` only on the
    /// call that dismissed it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => self.dismiss(),
            _ => false,
        }
    }

    pub fn dismiss(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}
