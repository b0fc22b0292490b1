use crate::{Card, EventBus, GameSnapshot, Intent, Phase, SessionError};

/// How the sacrifice button should be offered for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SacrificeOffer {
    /// Selected card is not a face card; nothing is shown.
    Hidden,
    Disabled,
    Enabled,
}

pub fn can_sacrifice(selected: Option<&Card>, phase: Phase, has_acted_this_turn: bool) -> bool {
    phase == Phase::Play
        && !has_acted_this_turn
        && selected.is_some_and(|card| card.rank.is_face())
}

pub fn sacrifice_offer(
    selected: Option<&Card>,
    phase: Phase,
    has_acted_this_turn: bool,
) -> SacrificeOffer {
    if !selected.is_some_and(|card| card.rank.is_face()) {
        return SacrificeOffer::Hidden;
    }
    if can_sacrifice(selected, phase, has_acted_this_turn) {
        SacrificeOffer::Enabled
    } else {
        SacrificeOffer::Disabled
    }
}

/// Offer derived from the first selected card in the store.
pub fn offer_for(snapshot: &GameSnapshot) -> SacrificeOffer {
    sacrifice_offer(
        snapshot.first_selected(),
        snapshot.phase,
        snapshot.has_played_action,
    )
}

pub fn request_sacrifice(
    snapshot: &GameSnapshot,
    events: &mut EventBus,
) -> Result<(), SessionError> {
    if offer_for(snapshot) != SacrificeOffer::Enabled {
        tracing::warn!(phase = ?snapshot.phase, "sacrifice refused");
        return Err(SessionError::SacrificeUnavailable);
    }
    tracing::info!("sacrifice mode requested");
    events.push(Intent::SacrificeModeRequested(true));
    Ok(())
}
