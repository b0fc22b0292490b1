use crate::{AttackMode, AttackTarget, Card};
use serde::{Deserialize, Serialize};

/// Payload of a confirmed attack. `target` and `card` are only set for unit
/// attacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttackIntent {
    pub mode: AttackMode,
    #[serde(default)]
    pub target: Option<AttackTarget>,
    #[serde(default)]
    pub card: Option<Card>,
}

/// Messages the core hands back to the game store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Intent {
    AttackResolved(AttackIntent),
    SacrificeModeRequested(bool),
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Intent>,
}

impl EventBus {
    pub fn push(&mut self, intent: Intent) {
        self.queue.push(intent);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Intent> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
