//! Game configuration.
//!
//! `UnoConfig` bundles everything a table can vary:
//! - the shuffle seed
//! - starting hand size
//! - what happens to a card drawn when nothing was playable (`DrawPolicy`)
//! - whether Reverse skips at a two-player table (`ReverseRule`)
//!
//! Defaults reproduce the classic table: seed 1234, seven cards, draw-and-retry,
//! Reverse only flips direction.

use serde::{Deserialize, Serialize};

/// What happens to the card drawn when no card in hand was playable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Append the drawn card to the hand, then run the full selection
    /// once more against the enlarged hand.
    #[default]
    Retry,
    /// Play the drawn card straight from the pile if it matches the top
    /// card by color or label; otherwise append it to the hand.
    ImmediateCheck,
}

/// How Reverse resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReverseRule {
    /// Reverse flips direction and play continues one seat in the new direction.
    #[default]
    Flip,
    /// As `Flip`, but with exactly two players Reverse also skips the
    /// opponent, so the same player moves again.
    SkipWithTwoPlayers,
}

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnoConfig {
    /// Seed for the deck shuffle.
    pub seed: u64,

    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Resolution of the draw when nothing was playable.
    pub draw_policy: DrawPolicy,

    /// Resolution of Reverse.
    pub reverse_rule: ReverseRule,
}

impl UnoConfig {
    /// Seed used when none is given.
    pub const DEFAULT_SEED: u64 = 1234;

    /// Cards dealt per player when none is given.
    pub const DEFAULT_HAND_SIZE: usize = 7;

    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the draw policy.
    #[must_use]
    pub fn with_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }

    /// Set the Reverse rule.
    #[must_use]
    pub fn with_reverse_rule(mut self, rule: ReverseRule) -> Self {
        self.reverse_rule = rule;
        self
    }
}

impl Default for UnoConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            hand_size: Self::DEFAULT_HAND_SIZE,
            draw_policy: DrawPolicy::default(),
            reverse_rule: ReverseRule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UnoConfig::default();
        assert_eq!(config.seed, 1234);
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.draw_policy, DrawPolicy::Retry);
        assert_eq!(config.reverse_rule, ReverseRule::Flip);
    }

    #[test]
    fn test_builder_methods() {
        let config = UnoConfig::new()
            .with_seed(9)
            .with_hand_size(5)
            .with_draw_policy(DrawPolicy::ImmediateCheck)
            .with_reverse_rule(ReverseRule::SkipWithTwoPlayers);

        assert_eq!(config.seed, 9);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.draw_policy, DrawPolicy::ImmediateCheck);
        assert_eq!(config.reverse_rule, ReverseRule::SkipWithTwoPlayers);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: UnoConfig =
            serde_json::from_str(r#"{"seed": 77, "draw_policy": "ImmediateCheck"}"#).unwrap();

        assert_eq!(config.seed, 77);
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.draw_policy, DrawPolicy::ImmediateCheck);
        assert_eq!(config.reverse_rule, ReverseRule::Flip);
    }
}
