/// Cosmetic cue played when the attack popup closes or confirms. Playback
/// failures are swallowed by the implementation.
pub trait InteractionSound {
    fn play_interaction_sound(&mut self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl InteractionSound for Silent {
    fn play_interaction_sound(&mut self) {}
}
