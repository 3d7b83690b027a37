//! Card containers: hands and piles.
//!
//! ## Key Types
//!
//! - `Hand`: ordered cards owned by one player, with first-match removal
//! - `DrawPile`: LIFO stack of undealt cards
//! - `DiscardPile`: append-only stack of played cards

pub mod hand;
pub mod pile;

pub use hand::Hand;
pub use pile::{DiscardPile, DrawPile};
