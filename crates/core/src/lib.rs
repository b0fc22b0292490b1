//! Attack resolution and turn-timer coordination. Keep this crate free of IO
//! and platform concerns.

pub mod cards;
pub mod config;
pub mod countdown;
pub mod damage;
pub mod deck;
pub mod error;
pub mod events;
pub mod mode;
pub mod result;
pub mod rng;
pub mod sacrifice;
pub mod session;
pub mod sound;
pub mod state;
pub mod targets;
pub mod text;

pub use cards::*;
pub use config::*;
pub use countdown::*;
pub use damage::*;
pub use deck::*;
pub use error::*;
pub use events::*;
pub use mode::*;
pub use result::*;
pub use rng::*;
pub use sacrifice::*;
pub use session::*;
pub use sound::*;
pub use state::*;
pub use targets::*;
pub use text::*;
