use crate::{AttackMode, Card, SessionError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttackTarget {
    Card { card: Card },
    Health,
}

impl AttackTarget {
    pub fn card(&self) -> Option<&Card> {
        match self {
            AttackTarget::Card { card } => Some(card),
            AttackTarget::Health => None,
        }
    }

    /// Whether this target shape is legal under `mode`.
    pub fn fits(&self, mode: AttackMode) -> bool {
        matches!(
            (self, mode),
            (AttackTarget::Card { .. }, AttackMode::Unit)
                | (AttackTarget::Health, AttackMode::Health)
        )
    }
}

/// One card target per opposing card, in board order.
pub fn build_targets(mode: AttackMode, board: &[Card]) -> Vec<AttackTarget> {
    match mode {
        AttackMode::Unit => board
            .iter()
            .map(|card| AttackTarget::Card { card: *card })
            .collect(),
        AttackMode::Health => Vec::new(),
    }
}

/// Legal targets for the current mode plus the active pick.
///
/// Rebuilding keeps a previous pick only if it survives into the new set, and
/// picks the first target when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegistry {
    targets: Vec<AttackTarget>,
    selected: Option<usize>,
}

impl TargetRegistry {
    pub fn primed(mode: AttackMode, board: &[Card]) -> Self {
        Self::default().rebuilt(mode, board)
    }

    pub fn rebuilt(self, mode: AttackMode, board: &[Card]) -> Self {
        let targets = build_targets(mode, board);
        let previous = self.selected_target().copied();
        let mut selected = previous.and_then(|prev| targets.iter().position(|t| *t == prev));
        if previous.is_some() && selected.is_none() {
            tracing::debug!(?previous, "selected target left the target set");
        }
        if selected.is_none() && !targets.is_empty() {
            selected = Some(0);
        }
        Self { targets, selected }
    }

    pub fn targets(&self) -> &[AttackTarget] {
        &self.targets
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_target(&self) -> Option<&AttackTarget> {
        self.selected.and_then(|idx| self.targets.get(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn select(&mut self, target: &AttackTarget) -> Result<(), SessionError> {
        let idx = self
            .targets
            .iter()
            .position(|candidate| candidate == target)
            .ok_or(SessionError::TargetUnavailable)?;
        self.selected = Some(idx);
        Ok(())
    }

    pub fn select_index(&mut self, idx: usize) -> Result<(), SessionError> {
        if idx >= self.targets.len() {
            return Err(SessionError::TargetUnavailable);
        }
        self.selected = Some(idx);
        Ok(())
    }

    /// Moves the pick one slot, wrapping around the set.
    pub fn cycle(&mut self, forward: bool) {
        let len = self.targets.len();
        if len == 0 {
            return;
        }
        let next = match (self.selected, forward) {
            (None, _) => 0,
            (Some(idx), true) => (idx + 1) % len,
            (Some(idx), false) => (idx + len - 1) % len,
        };
        self.selected = Some(next);
    }

    pub fn can_confirm(&self, mode: AttackMode) -> bool {
        match mode {
            AttackMode::Health => true,
            AttackMode::Unit => self.selected_target().is_some(),
        }
    }
}
