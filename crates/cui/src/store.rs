use skirmish_core::{
    damage_for, AttackMode, AttackOutcome, AttackTarget, Card, Deck, GameSnapshot, Intent, Phase,
    RngState,
};
use skirmish_data::Board;

const HAND_SIZE: usize = 5;
const STARTING_HEALTH: i64 = 30;

/// In-process stand-in for the shared game store. It owns the board, hands out
/// snapshots and applies the intents the core sends back.
#[derive(Debug, Clone)]
pub struct DemoStore {
    pub hand: Vec<Card>,
    pub opponent_cards: Vec<Card>,
    pub opponent_health: i64,
    pub turn_time_remaining: u32,
    pub phase: Phase,
    pub selected: Option<usize>,
    pub attack_card: Option<Card>,
    pub has_played_action: bool,
    pub sacrifice_mode: bool,
}

impl DemoStore {
    pub fn deal(seed: u64, turn_seconds: u32) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::shuffled(&mut rng);
        let hand = deck.draw_cards(HAND_SIZE);
        let board_size = rng.count_between(1, 4);
        let opponent_cards = deck.draw_cards(board_size);
        Self::with_cards(hand, opponent_cards, STARTING_HEALTH, turn_seconds, Phase::Play)
    }

    pub fn from_board(board: Board, default_turn_seconds: u32) -> Self {
        Self::with_cards(
            board.hand,
            board.opponent_cards,
            board.opponent_health,
            board.turn_time_remaining.unwrap_or(default_turn_seconds),
            board.phase,
        )
    }

    fn with_cards(
        hand: Vec<Card>,
        opponent_cards: Vec<Card>,
        opponent_health: i64,
        turn_time_remaining: u32,
        phase: Phase,
    ) -> Self {
        Self {
            hand,
            opponent_cards,
            opponent_health,
            turn_time_remaining,
            phase,
            selected: None,
            attack_card: None,
            has_played_action: false,
            sacrifice_mode: false,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            attack_card: self.attack_card,
            opponent_cards: self.opponent_cards.clone(),
            opponent_health: self.opponent_health,
            turn_time_remaining: self.turn_time_remaining,
            phase: self.phase,
            selected_cards: self
                .selected
                .and_then(|idx| self.hand.get(idx))
                .copied()
                .into_iter()
                .collect(),
            has_played_action: self.has_played_action,
        }
    }

    pub fn toggle_selected(&mut self, idx: usize) {
        if idx >= self.hand.len() {
            return;
        }
        self.selected = if self.selected == Some(idx) {
            None
        } else {
            Some(idx)
        };
    }

    pub fn advance_phase(&mut self) {
        self.phase = self.phase.advance();
        if self.phase == Phase::Draw {
            self.has_played_action = false;
            self.sacrifice_mode = false;
        }
    }

    pub fn adjust_time(&mut self, delta: i64) {
        let next = i64::from(self.turn_time_remaining) + delta;
        self.turn_time_remaining = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
    }

    /// Applies an intent. Attacks report what the result popup should show;
    /// a unit attack is blocked when the defender out-damages the attacker.
    pub fn apply(&mut self, intent: Intent) -> Option<AttackOutcome> {
        match intent {
            Intent::SacrificeModeRequested(enabled) => {
                self.sacrifice_mode = enabled;
                None
            }
            Intent::AttackResolved(attack) => {
                let attacker = attack.card.or(self.attack_card.take())?;
                self.attack_card = None;
                self.has_played_action = true;
                self.discard_from_hand(&attacker);
                let damage = i64::from(damage_for(attacker.rank));
                let (target, blocked) = match (attack.mode, attack.target) {
                    (AttackMode::Unit, Some(AttackTarget::Card { card })) => {
                        let blocked = damage_for(card.rank) > damage_for(attacker.rank);
                        if !blocked {
                            self.opponent_cards.retain(|candidate| *candidate != card);
                        }
                        (AttackTarget::Card { card }, blocked)
                    }
                    _ => {
                        self.opponent_health = (self.opponent_health - damage).max(0);
                        (AttackTarget::Health, false)
                    }
                };
                Some(AttackOutcome {
                    attack_card: attacker,
                    target,
                    blocked,
                })
            }
        }
    }

    fn discard_from_hand(&mut self, card: &Card) {
        if let Some(pos) = self.hand.iter().position(|candidate| candidate == card) {
            self.hand.remove(pos);
            self.selected = match self.selected {
                Some(idx) if idx == pos => None,
                Some(idx) if idx > pos => Some(idx - 1),
                other => other,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::{AttackIntent, Rank, Suit};

    fn store() -> DemoStore {
        DemoStore::with_cards(
            vec![
                Card::new(Rank::Five, Suit::Hearts),
                Card::new(Rank::King, Suit::Spades),
            ],
            vec![
                Card::new(Rank::Queen, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Hearts),
            ],
            30,
            20,
            Phase::Attack,
        )
    }

    #[test]
    fn health_attack_uses_store_attacker() {
        let mut store = store();
        store.attack_card = Some(store.hand[0]);
        let outcome = store
            .apply(Intent::AttackResolved(AttackIntent {
                mode: AttackMode::Health,
                target: None,
                card: None,
            }))
            .expect("outcome");
        assert_eq!(outcome.target, AttackTarget::Health);
        assert_eq!(store.opponent_health, 25);
        assert_eq!(store.hand.len(), 1);
        assert!(store.has_played_action);
    }

    #[test]
    fn weaker_attacker_is_blocked() {
        let mut store = store();
        let attacker = store.hand[0];
        let defender = store.opponent_cards[0];
        let outcome = store
            .apply(Intent::AttackResolved(AttackIntent {
                mode: AttackMode::Unit,
                target: Some(AttackTarget::Card { card: defender }),
                card: Some(attacker),
            }))
            .expect("outcome");
        assert!(outcome.blocked);
        assert_eq!(store.opponent_cards.len(), 2);
    }

    #[test]
    fn equal_damage_removes_defender() {
        let mut store = store();
        let attacker = store.hand[1];
        let defender = store.opponent_cards[1];
        let outcome = store
            .apply(Intent::AttackResolved(AttackIntent {
                mode: AttackMode::Unit,
                target: Some(AttackTarget::Card { card: defender }),
                card: Some(attacker),
            }))
            .expect("outcome");
        assert!(!outcome.blocked);
        assert_eq!(store.opponent_cards, vec![Card::new(Rank::Queen, Suit::Clubs)]);
    }

    #[test]
    fn snapshot_exposes_only_the_selected_card() {
        let mut store = store();
        assert!(store.snapshot().selected_cards.is_empty());
        store.toggle_selected(1);
        assert_eq!(store.snapshot().selected_cards, vec![store.hand[1]]);
        store.toggle_selected(1);
        assert!(store.snapshot().selected_cards.is_empty());
    }

    #[test]
    fn new_turn_clears_action_flag() {
        let mut store = store();
        store.has_played_action = true;
        store.phase = Phase::End;
        store.advance_phase();
        assert_eq!(store.phase, Phase::Draw);
        assert!(!store.has_played_action);
    }

    #[test]
    fn time_never_goes_negative() {
        let mut store = store();
        store.adjust_time(-50);
        assert_eq!(store.turn_time_remaining, 0);
        store.adjust_time(15);
        assert_eq!(store.turn_time_remaining, 15);
    }

    #[test]
    fn dealing_is_seeded() {
        let a = DemoStore::deal(11, 30);
        let b = DemoStore::deal(11, 30);
        assert_eq!(a.hand, b.hand);
        assert_eq!(a.opponent_cards, b.opponent_cards);
        assert_eq!(a.hand.len(), 5);
        assert!((1..=4).contains(&a.opponent_cards.len()));
    }
}
