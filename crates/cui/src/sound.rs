use skirmish_core::InteractionSound;
use std::io::{self, Write};

/// Rings the terminal bell. Write failures are ignored.
#[derive(Debug, Clone, Copy)]
pub struct TerminalBell {
    pub muted: bool,
}

impl InteractionSound for TerminalBell {
    fn play_interaction_sound(&mut self) {
        if self.muted {
            return;
        }
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            tracing::debug!(%err, "bell failed");
        }
    }
}
