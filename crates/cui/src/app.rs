use crate::sound::TerminalBell;
use crate::store::DemoStore;
use skirmish_core::{
    offer_for, request_sacrifice, text_keys, AttackInteraction, AttackMode, Card, Closure,
    EventBus, ResultPopup, SacrificeOffer, SessionError, TextLookup, TimingConfig,
};
use skirmish_data::LocaleTable;
use std::collections::VecDeque;
use std::time::Instant;

pub const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;
const MAX_EVENT_LOG: usize = 200;

/// Store values the open popup was last told about.
#[derive(Debug, Clone, Default)]
struct SyncedStore {
    board: Vec<Card>,
    turn_time: u32,
}

pub struct App {
    pub locale: LocaleTable,
    pub timing: TimingConfig,
    pub seed: u64,
    pub store: DemoStore,
    pub attack: AttackInteraction<TerminalBell>,
    pub result: Option<ResultPopup>,
    pub hand_cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
    synced: SyncedStore,
}

impl App {
    pub fn new(
        locale: LocaleTable,
        timing: TimingConfig,
        store: DemoStore,
        seed: u64,
        muted: bool,
    ) -> Self {
        let attack = AttackInteraction::new(TerminalBell { muted }, timing.clone());
        Self {
            locale,
            timing,
            seed,
            store,
            attack,
            result: None,
            hand_cursor: 0,
            event_log: VecDeque::new(),
            status_line: "ready".to_string(),
            show_help: false,
            should_quit: false,
            synced: SyncedStore::default(),
        }
    }

    pub fn text(&self, key: &str) -> String {
        self.locale.text(key).into_owned()
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(closure) = self.attack.poll(now) {
            self.after_close(&closure, now);
        }
        if let Some(popup) = self.result.as_mut() {
            if popup.poll(now) {
                self.result = None;
            }
        }
    }

    pub fn result_visible(&self) -> bool {
        self.result.as_ref().is_some_and(ResultPopup::is_visible)
    }

    pub fn dismiss_result(&mut self) {
        if let Some(mut popup) = self.result.take() {
            popup.dismiss();
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.store.hand.get(self.hand_cursor)
    }

    pub fn move_hand_cursor(&mut self, forward: bool) {
        let len = self.store.hand.len();
        if len == 0 {
            self.hand_cursor = 0;
            return;
        }
        self.hand_cursor = if forward {
            (self.hand_cursor + 1) % len
        } else {
            (self.hand_cursor + len - 1) % len
        };
    }

    pub fn toggle_hand_selection(&mut self) {
        self.store.toggle_selected(self.hand_cursor);
    }

    pub fn open_attack(&mut self, now: Instant) {
        let Some(card) = self.current_card().copied() else {
            self.set_status("no card to attack with");
            return;
        };
        self.dismiss_result();
        self.store.attack_card = Some(card);
        let snapshot = self.store.snapshot();
        self.attack.open(&snapshot, now);
        self.synced = SyncedStore {
            board: snapshot.opponent_cards,
            turn_time: snapshot.turn_time_remaining,
        };
        self.push_event_line(format!("attack with {}", card.label()));
        let prompt = self.text(text_keys::CHOOSE_ATTACK);
        self.set_status(&prompt);
    }

    pub fn cancel_attack(&mut self) {
        if self.attack.close() {
            self.after_close(&Closure::Cancelled, Instant::now());
        }
    }

    pub fn confirm_attack(&mut self, now: Instant) {
        match self.attack.confirm() {
            Ok(intent) => self.after_close(&Closure::Confirmed(intent), now),
            Err(err) => self.note_refusal(err),
        }
    }

    pub fn set_mode(&mut self, mode: AttackMode) {
        if let Err(err) = self.attack.set_mode(mode) {
            self.note_refusal(err);
        }
    }

    pub fn toggle_mode(&mut self) {
        let Some(mode) = self.attack.session().map(|session| session.mode()) else {
            return;
        };
        self.set_mode(mode.toggled());
    }

    pub fn cycle_target(&mut self, forward: bool) {
        if let Err(err) = self.attack.cycle_target(forward) {
            self.note_refusal(err);
        }
    }

    pub fn sacrifice_offer(&self) -> SacrificeOffer {
        offer_for(&self.store.snapshot())
    }

    pub fn request_sacrifice(&mut self) {
        let mut events = EventBus::default();
        match request_sacrifice(&self.store.snapshot(), &mut events) {
            Ok(()) => {
                for intent in events.drain() {
                    self.store.apply(intent);
                }
                self.push_event_line("sacrifice mode on".to_string());
            }
            Err(err) => self.note_refusal(err),
        }
    }

    pub fn next_phase(&mut self) {
        self.store.advance_phase();
        self.push_event_line(format!("phase {:?}", self.store.phase));
    }

    pub fn adjust_turn_time(&mut self, delta: i64) {
        self.store.adjust_time(delta);
        self.sync_open_attack();
    }

    /// Forwards store changes to the open popup.
    fn sync_open_attack(&mut self) {
        if !self.attack.is_open() {
            return;
        }
        if self.store.opponent_cards != self.synced.board {
            self.synced.board = self.store.opponent_cards.clone();
            let _ = self.attack.board_changed(&self.synced.board);
        }
        if self.store.turn_time_remaining != self.synced.turn_time {
            self.synced.turn_time = self.store.turn_time_remaining;
            let _ = self.attack.time_synced(self.synced.turn_time);
        }
    }

    fn after_close(&mut self, closure: &Closure, now: Instant) {
        match closure {
            Closure::TimedOut => {
                self.store.attack_card = None;
                self.push_event_line("attack timed out".to_string());
                self.set_status("time is up");
            }
            Closure::Cancelled => {
                self.store.attack_card = None;
                self.push_event_line("attack cancelled".to_string());
            }
            Closure::Confirmed(_) => {
                for intent in self.attack.drain_intents() {
                    let Some(outcome) = self.store.apply(intent) else {
                        continue;
                    };
                    let popup = ResultPopup::open(&outcome, now, self.timing.result_display());
                    let line = format!(
                        "{}: {}",
                        popup.summary().title(&self.locale),
                        popup.summary().matchup(&self.locale)
                    );
                    self.push_event_line(line.clone());
                    self.set_status(&line);
                    self.result = Some(popup);
                }
                if self.hand_cursor >= self.store.hand.len() {
                    self.hand_cursor = self.store.hand.len().saturating_sub(1);
                }
            }
        }
    }

    fn note_refusal(&mut self, err: SessionError) {
        let status = match err {
            SessionError::NoTargetSelected => self.text(text_keys::NO_VALID_TARGETS),
            other => other.to_string(),
        };
        self.set_status(&status);
    }

    fn set_status(&mut self, status: &str) {
        self.status_line = status.to_string();
    }

    pub fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}
