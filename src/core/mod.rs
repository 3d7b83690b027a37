//! Core engine types: players, direction, RNG, configuration, errors.
//!
//! These are the building blocks shared by the card, zone and game modules.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Direction, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::{DrawPolicy, ReverseRule, UnoConfig};
pub use error::UnoError;
