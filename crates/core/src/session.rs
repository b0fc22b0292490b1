use crate::{
    damage_points, default_mode, AttackIntent, AttackMode, AttackTarget, Card, CountdownState,
    CountdownStep, EventBus, GameSnapshot, Intent, InteractionSound, SessionError, TargetRegistry,
    TimingConfig, TurnCountdown,
};
use std::time::{Duration, Instant};

/// Everything that can happen to an open attack popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SetMode(AttackMode),
    SelectTarget(AttackTarget),
    SelectTargetIndex(usize),
    CycleTarget { forward: bool },
    BoardChanged(Vec<Card>),
    TimeSynced(u32),
    Tick,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Closure {
    Confirmed(AttackIntent),
    Cancelled,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Close(Closure),
}

/// State of one open attack popup. Dropping it releases the tick source.
#[derive(Debug)]
pub struct AttackSession {
    attacker: Option<Card>,
    mode: AttackMode,
    board: Vec<Card>,
    registry: TargetRegistry,
    countdown: TurnCountdown,
}

impl AttackSession {
    pub fn open(snapshot: &GameSnapshot, tick_period: Duration, now: Instant) -> Self {
        let attacker = snapshot.attack_card;
        let mode = default_mode(attacker.as_ref());
        let board = snapshot.opponent_cards.clone();
        let registry = TargetRegistry::primed(mode, &board);
        let mut countdown = TurnCountdown::default();
        countdown.start(snapshot.turn_time_remaining, tick_period, now);
        Self {
            attacker,
            mode,
            board,
            registry,
            countdown,
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> Result<Transition, SessionError> {
        match event {
            SessionEvent::SetMode(mode) => {
                tracing::debug!(from = ?self.mode, to = ?mode, "attack mode switched");
                self.mode = mode;
                self.rebuild_targets();
            }
            SessionEvent::SelectTarget(target) => self.registry.select(&target)?,
            SessionEvent::SelectTargetIndex(idx) => self.registry.select_index(idx)?,
            SessionEvent::CycleTarget { forward } => self.registry.cycle(forward),
            SessionEvent::BoardChanged(board) => {
                self.board = board;
                self.rebuild_targets();
            }
            SessionEvent::TimeSynced(shared) => self.countdown.resync(shared),
            SessionEvent::Tick => {
                if let CountdownStep::Expired = self.countdown.tick() {
                    return Ok(Transition::Close(Closure::TimedOut));
                }
            }
            SessionEvent::Confirm => {
                let intent = self.resolved_intent()?;
                self.countdown.stop();
                return Ok(Transition::Close(Closure::Confirmed(intent)));
            }
            SessionEvent::Cancel => {
                self.countdown.stop();
                return Ok(Transition::Close(Closure::Cancelled));
            }
        }
        Ok(Transition::Stay)
    }

    /// Feeds wall-clock time into the countdown.
    pub fn poll(&mut self, now: Instant) -> Transition {
        match self.countdown.poll(now) {
            CountdownStep::Expired => Transition::Close(Closure::TimedOut),
            CountdownStep::Idle | CountdownStep::Running { .. } => Transition::Stay,
        }
    }

    fn rebuild_targets(&mut self) {
        let registry = std::mem::take(&mut self.registry);
        self.registry = registry.rebuilt(self.mode, &self.board);
        tracing::debug!(
            mode = ?self.mode,
            targets = self.registry.targets().len(),
            selected = ?self.registry.selected_index(),
            "targets rebuilt"
        );
    }

    fn resolved_intent(&self) -> Result<AttackIntent, SessionError> {
        match self.mode {
            AttackMode::Health => Ok(AttackIntent {
                mode: AttackMode::Health,
                target: None,
                card: None,
            }),
            AttackMode::Unit => {
                let target = self
                    .registry
                    .selected_target()
                    .copied()
                    .ok_or(SessionError::NoTargetSelected)?;
                Ok(AttackIntent {
                    mode: AttackMode::Unit,
                    target: Some(target),
                    card: self.attacker,
                })
            }
        }
    }

    pub fn attacker(&self) -> Option<&Card> {
        self.attacker.as_ref()
    }

    pub fn mode(&self) -> AttackMode {
        self.mode
    }

    pub fn target(&self) -> Option<&AttackTarget> {
        self.registry.selected_target()
    }

    pub fn targets(&self) -> &[AttackTarget] {
        self.registry.targets()
    }

    pub fn can_confirm(&self) -> bool {
        self.registry.can_confirm(self.mode)
    }

    pub fn countdown(&self) -> CountdownState {
        self.countdown.state()
    }

    pub fn view(&self) -> AttackView {
        let selected = self.registry.selected_index();
        AttackView {
            attacker: self.attacker,
            mode: self.mode,
            damage: damage_points(self.attacker.as_ref()),
            remaining: self.countdown.remaining(),
            targets: self
                .registry
                .targets()
                .iter()
                .enumerate()
                .map(|(idx, target)| TargetRow {
                    label: target
                        .card()
                        .map(Card::label)
                        .unwrap_or_default(),
                    selected: selected == Some(idx),
                })
                .collect(),
            confirm_enabled: self.can_confirm(),
        }
    }
}

impl Drop for AttackSession {
    fn drop(&mut self) {
        self.countdown.stop();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRow {
    pub label: String,
    pub selected: bool,
}

/// Display-ready state of the attack popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackView {
    pub attacker: Option<Card>,
    pub mode: AttackMode,
    pub damage: u8,
    pub remaining: u32,
    pub targets: Vec<TargetRow>,
    pub confirm_enabled: bool,
}

impl AttackView {
    pub fn no_valid_targets(&self) -> bool {
        self.mode == AttackMode::Unit && self.targets.is_empty()
    }
}

/// Owns the popup lifecycle: at most one open session, the sound cue and the
/// outgoing intents.
#[derive(Debug)]
pub struct AttackInteraction<S: InteractionSound> {
    session: Option<AttackSession>,
    sound: S,
    timing: TimingConfig,
    events: EventBus,
}

impl<S: InteractionSound> AttackInteraction<S> {
    pub fn new(sound: S, timing: TimingConfig) -> Self {
        Self {
            session: None,
            sound,
            timing,
            events: EventBus::default(),
        }
    }

    /// Starts a fresh session. An already open one is torn down silently.
    pub fn open(&mut self, snapshot: &GameSnapshot, now: Instant) {
        if self.session.take().is_some() {
            tracing::debug!("replacing open attack session");
        }
        let session = AttackSession::open(snapshot, self.timing.tick_period(), now);
        tracing::info!(
            attacker = ?session.attacker(),
            mode = ?session.mode(),
            targets = session.targets().len(),
            remaining = snapshot.turn_time_remaining,
            "attack popup opened"
        );
        self.session = Some(session);
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&AttackSession> {
        self.session.as_ref()
    }

    pub fn view(&self) -> Option<AttackView> {
        self.session.as_ref().map(AttackSession::view)
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Player declined. Returns `false` when nothing was open.
    pub fn close(&mut self) -> bool {
        matches!(self.handle(SessionEvent::Cancel), Ok(Some(Closure::Cancelled)))
    }

    pub fn set_mode(&mut self, mode: AttackMode) -> Result<(), SessionError> {
        self.handle(SessionEvent::SetMode(mode)).map(|_| ())
    }

    pub fn select_target(&mut self, target: AttackTarget) -> Result<(), SessionError> {
        self.handle(SessionEvent::SelectTarget(target)).map(|_| ())
    }

    pub fn select_target_index(&mut self, idx: usize) -> Result<(), SessionError> {
        self.handle(SessionEvent::SelectTargetIndex(idx)).map(|_| ())
    }

    pub fn cycle_target(&mut self, forward: bool) -> Result<(), SessionError> {
        self.handle(SessionEvent::CycleTarget { forward }).map(|_| ())
    }

    pub fn board_changed(&mut self, board: &[Card]) -> Result<(), SessionError> {
        self.handle(SessionEvent::BoardChanged(board.to_vec()))
            .map(|_| ())
    }

    pub fn time_synced(&mut self, shared: u32) -> Result<(), SessionError> {
        self.handle(SessionEvent::TimeSynced(shared)).map(|_| ())
    }

    pub fn confirm(&mut self) -> Result<AttackIntent, SessionError> {
        match self.handle(SessionEvent::Confirm)? {
            Some(Closure::Confirmed(intent)) => Ok(intent),
            _ => Err(SessionError::NotOpen),
        }
    }

    /// Manual tick, independent of wall-clock time.
    pub fn tick(&mut self) -> Option<Closure> {
        self.handle(SessionEvent::Tick).ok().flatten()
    }

    pub fn poll(&mut self, now: Instant) -> Option<Closure> {
        let transition = self.session.as_mut()?.poll(now);
        self.settle(transition)
    }

    pub fn drain_intents(&mut self) -> Vec<Intent> {
        self.events.drain().collect()
    }

    fn handle(&mut self, event: SessionEvent) -> Result<Option<Closure>, SessionError> {
        let Some(session) = self.session.as_mut() else {
            return Err(SessionError::NotOpen);
        };
        let transition = session.apply(event).map_err(|err| {
            tracing::warn!(%err, "attack popup refused input");
            err
        })?;
        Ok(self.settle(transition))
    }

    fn settle(&mut self, transition: Transition) -> Option<Closure> {
        let Transition::Close(closure) = transition else {
            return None;
        };
        self.session = None;
        self.sound.play_interaction_sound();
        match &closure {
            Closure::Confirmed(intent) => {
                tracing::info!(mode = ?intent.mode, target = ?intent.target, "attack confirmed");
                self.events.push(Intent::AttackResolved(intent.clone()));
            }
            Closure::Cancelled => tracing::info!("attack popup cancelled"),
            Closure::TimedOut => tracing::info!("attack popup timed out"),
        }
        Some(closure)
    }
}
