use skirmish_core::{
    damage_points, AttackInteraction, AttackIntent, AttackMode, AttackTarget, Card, Closure,
    GameSnapshot, Intent, InteractionSound, Phase, Rank, SessionError, Suit, TimingConfig,
};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct CountingSound {
    plays: usize,
}

impl InteractionSound for CountingSound {
    fn play_interaction_sound(&mut self) {
        self.plays += 1;
    }
}

fn interaction() -> AttackInteraction<CountingSound> {
    AttackInteraction::new(CountingSound::default(), TimingConfig::default())
}

fn opponent_board() -> Vec<Card> {
    vec![
        Card::new(Rank::Six, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Spades),
    ]
}

fn snapshot(attacker: Card, board: Vec<Card>, remaining: u32) -> GameSnapshot {
    let mut snapshot = GameSnapshot::new(remaining);
    snapshot.phase = Phase::Attack;
    snapshot.attack_card = Some(attacker);
    snapshot.opponent_cards = board;
    snapshot.opponent_health = 30;
    snapshot
}

#[test]
fn low_card_defaults_to_health_and_confirms_bare_intent() {
    let attacker = Card::new(Rank::Five, Suit::Hearts);
    let mut popup = interaction();
    popup.open(&snapshot(attacker, opponent_board(), 20), Instant::now());

    let view = popup.view().expect("open");
    assert_eq!(view.mode, AttackMode::Health);
    assert_eq!(view.damage, 5);
    assert_eq!(damage_points(Some(&attacker)), 5);
    assert!(view.targets.is_empty());

    let intent = popup.confirm().expect("confirm");
    assert_eq!(
        intent,
        AttackIntent {
            mode: AttackMode::Health,
            target: None,
            card: None,
        }
    );
    assert!(!popup.is_open());
    assert_eq!(popup.sound().plays, 1);
    assert_eq!(popup.drain_intents(), vec![Intent::AttackResolved(intent)]);
}

#[test]
fn joker_defaults_to_unit_with_first_target_selected() {
    let joker = Card::new(Rank::Joker, Suit::Spades);
    let board = opponent_board();
    let mut popup = interaction();
    popup.open(&snapshot(joker, board.clone(), 20), Instant::now());

    let session = popup.session().expect("open");
    assert_eq!(session.mode(), AttackMode::Unit);
    assert_eq!(session.targets().len(), 3);
    assert_eq!(session.target(), Some(&session.targets()[0]));
    assert_eq!(popup.view().expect("view").damage, 0);

    let intent = popup.confirm().expect("confirm");
    assert_eq!(
        intent,
        AttackIntent {
            mode: AttackMode::Unit,
            target: Some(AttackTarget::Card { card: board[0] }),
            card: Some(joker),
        }
    );
}

#[test]
fn untouched_popup_times_out_without_intent() {
    let attacker = Card::new(Rank::King, Suit::Clubs);
    let start = Instant::now();
    let mut popup = interaction();
    popup.open(&snapshot(attacker, opponent_board(), 2), start);

    assert_eq!(popup.poll(start + Duration::from_millis(500)), None);
    assert_eq!(popup.poll(start + Duration::from_secs(1)), None);
    assert_eq!(popup.view().expect("still open").remaining, 1);
    assert_eq!(
        popup.poll(start + Duration::from_secs(2)),
        Some(Closure::TimedOut)
    );
    assert!(!popup.is_open());
    assert_eq!(popup.poll(start + Duration::from_secs(3)), None);
    assert_eq!(popup.sound().plays, 1);
    assert!(popup.drain_intents().is_empty());
}

#[test]
fn unit_confirm_without_target_emits_nothing() {
    let attacker = Card::new(Rank::Nine, Suit::Hearts);
    let mut popup = interaction();
    popup.open(&snapshot(attacker, Vec::new(), 20), Instant::now());

    let view = popup.view().expect("open");
    assert!(view.no_valid_targets());
    assert!(!view.confirm_enabled);
    assert_eq!(popup.confirm(), Err(SessionError::NoTargetSelected));
    assert!(popup.is_open());
    assert_eq!(popup.sound().plays, 0);
    assert!(popup.drain_intents().is_empty());
}

#[test]
fn switching_modes_resets_and_rederives_targets() {
    let attacker = Card::new(Rank::Ten, Suit::Hearts);
    let board = opponent_board();
    let mut popup = interaction();
    popup.open(&snapshot(attacker, board.clone(), 20), Instant::now());

    popup.select_target_index(2).expect("select");
    popup.set_mode(AttackMode::Health).expect("health");
    let session = popup.session().expect("open");
    assert!(session.targets().is_empty());
    assert_eq!(session.target(), None);

    popup.set_mode(AttackMode::Unit).expect("unit");
    let session = popup.session().expect("open");
    assert_eq!(session.targets().len(), board.len());
    assert_eq!(session.target(), Some(&AttackTarget::Card { card: board[0] }));
}

#[test]
fn shared_time_resync_extends_the_local_countdown() {
    let attacker = Card::new(Rank::Eight, Suit::Diamonds);
    let start = Instant::now();
    let mut popup = interaction();
    popup.open(&snapshot(attacker, opponent_board(), 2), start);

    assert_eq!(popup.poll(start + Duration::from_secs(1)), None);
    popup.time_synced(10).expect("resync");
    assert_eq!(popup.poll(start + Duration::from_secs(2)), None);
    assert_eq!(popup.view().expect("open").remaining, 9);
}

#[test]
fn first_close_wins() {
    let attacker = Card::new(Rank::Four, Suit::Spades);
    let start = Instant::now();
    let mut popup = interaction();
    popup.open(&snapshot(attacker, opponent_board(), 1), start);

    assert!(popup.close());
    assert!(!popup.close());
    assert_eq!(popup.poll(start + Duration::from_secs(5)), None);
    assert_eq!(popup.confirm(), Err(SessionError::NotOpen));
    assert_eq!(popup.sound().plays, 1);
    assert!(popup.drain_intents().is_empty());
}
