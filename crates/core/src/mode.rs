use crate::{Card, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttackMode {
    /// Strike an opposing card.
    Unit,
    /// Strike the opponent's health pool.
    Health,
}

impl AttackMode {
    pub fn needs_target(self) -> bool {
        matches!(self, AttackMode::Unit)
    }

    pub fn toggled(self) -> AttackMode {
        match self {
            AttackMode::Unit => AttackMode::Health,
            AttackMode::Health => AttackMode::Unit,
        }
    }
}

/// Jokers go for units, A through 7 go for health, everything else for units.
pub fn default_mode_for(rank: Rank) -> AttackMode {
    if rank == Rank::Joker {
        return AttackMode::Unit;
    }
    if rank.is_low_value() {
        return AttackMode::Health;
    }
    AttackMode::Unit
}

pub fn default_mode(card: Option<&Card>) -> AttackMode {
    card.map(|card| default_mode_for(card.rank))
        .unwrap_or(AttackMode::Unit)
}

pub fn default_mode_for_label(label: &str) -> AttackMode {
    Rank::from_label(label)
        .map(default_mode_for)
        .unwrap_or(AttackMode::Unit)
}
