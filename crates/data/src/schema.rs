use serde::{Deserialize, Serialize};

pub use skirmish_core::{Card, Phase, Rank, Suit, TimingConfig};

/// Card as written in board files. The rank stays a raw label until it is
/// resolved against the closed rank set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCard {
    pub rank: String,
    pub suit: Suit,
}

impl RawCard {
    pub fn resolve(&self) -> Option<Card> {
        Rank::from_label(&self.rank).map(|rank| Card::new(rank, self.suit))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFile {
    pub opponent_health: i64,
    #[serde(default)]
    pub turn_time_remaining: Option<u32>,
    #[serde(default = "default_phase")]
    pub phase: Phase,
    #[serde(default)]
    pub hand: Vec<RawCard>,
    #[serde(default)]
    pub opponent_cards: Vec<RawCard>,
}

fn default_phase() -> Phase {
    Phase::Play
}

/// Board with every card resolved.
#[derive(Debug, Clone)]
pub struct Board {
    pub opponent_health: i64,
    pub turn_time_remaining: Option<u32>,
    pub phase: Phase,
    pub hand: Vec<Card>,
    pub opponent_cards: Vec<Card>,
}

#[derive(Debug, Clone)]
pub struct BoardLoadReport {
    pub board: Board,
    pub warnings: Vec<String>,
}
