use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Setup,
    Draw,
    Play,
    Attack,
    End,
}

impl Phase {
    pub fn advance(self) -> Phase {
        match self {
            Phase::Setup => Phase::Draw,
            Phase::Draw => Phase::Play,
            Phase::Play => Phase::Attack,
            Phase::Attack => Phase::End,
            Phase::End => Phase::Draw,
        }
    }
}

/// Read-only view of the shared game store. The core never mutates it; it only
/// answers with intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub attack_card: Option<Card>,
    #[serde(default)]
    pub opponent_cards: Vec<Card>,
    pub opponent_health: i64,
    pub turn_time_remaining: u32,
    pub phase: Phase,
    #[serde(default)]
    pub selected_cards: Vec<Card>,
    #[serde(default)]
    pub has_played_action: bool,
}

impl GameSnapshot {
    pub fn new(turn_time_remaining: u32) -> Self {
        Self {
            attack_card: None,
            opponent_cards: Vec::new(),
            opponent_health: 0,
            turn_time_remaining,
            phase: Phase::Setup,
            selected_cards: Vec::new(),
            has_played_action: false,
        }
    }

    pub fn first_selected(&self) -> Option<&Card> {
        self.selected_cards.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cycle_back_to_draw() {
        let mut phase = Phase::Setup;
        let mut seen = Vec::new();
        for _ in 0..5 {
            phase = phase.advance();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![Phase::Draw, Phase::Play, Phase::Attack, Phase::End, Phase::Draw]
        );
    }

    #[test]
    fn snapshot_defaults_optional_fields() {
        let raw = r#"{"opponent_health":20,"turn_time_remaining":15,"phase":"PLAY"}"#;
        let snapshot: GameSnapshot = serde_json::from_str(raw).expect("parse snapshot");
        assert_eq!(snapshot.phase, Phase::Play);
        assert!(snapshot.attack_card.is_none());
        assert!(snapshot.opponent_cards.is_empty());
        assert!(!snapshot.has_played_action);
    }
}
