//! Engine errors.

use super::player::MAX_PLAYERS;

/// Errors reported when building a game.
///
/// Turn resolution itself never fails: an empty draw pile is a normal
/// branch and a finished game ignores further turns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnoError {
    #[error("player count must be between 1 and {max}, got {count}", max = MAX_PLAYERS)]
    InvalidPlayerCount { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = UnoError::InvalidPlayerCount { count: 0 };
        assert_eq!(err.to_string(), "player count must be between 1 and 255, got 0");
    }
}
