//! The turn engine.
//!
//! `UnoGame` owns the draw and discard piles, every hand, and the turn state.
//! A caller constructs it, calls `initialize()` once, then `play_turn()` until
//! `is_game_over()`:
//!
//! ```
//! use uno_engine::UnoGame;
//!
//! let mut game = UnoGame::new(3).unwrap();
//! game.initialize();
//!
//! while !game.is_game_over() && !game.is_stalled() {
//!     game.play_turn();
//! }
//! ```
//!
//! Every turn runs to completion inside `play_turn()`; the engine has no
//! background activity and takes `&mut self` for every mutation.

use im::Vector;
use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use super::state::{Phase, TurnRecord, TurnState};
use crate::cards::{count_cards, Card, Deck, STANDARD_DECK_SIZE};
use crate::core::{Direction, DrawPolicy, PlayerId, PlayerMap, ReverseRule, UnoConfig, UnoError, MAX_PLAYERS};
use crate::rules::{is_playable, select_play, Effect, GameResult, Resolution};
use crate::zones::{DiscardPile, DrawPile, Hand};

/// Explicit table layout for `UnoGame::from_layout`.
///
/// The player count is `hands.len()`. Piles list their cards bottom first,
/// so the last element is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    pub hands: Vec<Vec<Card>>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub current_player: PlayerId,
    pub direction: Direction,
}

/// A single UNO-style game.
#[derive(Clone, Debug)]
pub struct UnoGame {
    config: UnoConfig,
    player_count: usize,
    phase: Phase,
    turn: TurnState,
    hands: PlayerMap<Hand>,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    /// Resolved turns, oldest first.
    history: Vector<TurnRecord>,
    /// Consecutive turns with no play and no draw.
    idle_turns: usize,
}

fn check_player_count(count: usize) -> Result<(), UnoError> {
    if (1..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(UnoError::InvalidPlayerCount { count })
    }
}

impl UnoGame {
    /// Create an undealt game with the default configuration.
    pub fn new(player_count: usize) -> Result<Self, UnoError> {
        Self::with_config(player_count, UnoConfig::default())
    }

    /// Create an undealt game.
    pub fn with_config(player_count: usize, config: UnoConfig) -> Result<Self, UnoError> {
        check_player_count(player_count)?;

        Ok(Self {
            config,
            player_count,
            phase: Phase::Created,
            turn: TurnState::new(),
            hands: PlayerMap::with_default(player_count),
            draw_pile: DrawPile::new(),
            discard_pile: DiscardPile::new(),
            history: Vector::new(),
            idle_turns: 0,
        })
    }

    /// Create a game already waiting for its first turn, from explicit piles.
    ///
    /// Used to replay a known position. The cards need not form a standard deck.
    pub fn from_layout(config: UnoConfig, layout: Layout) -> Result<Self, UnoError> {
        let player_count = layout.hands.len();
        check_player_count(player_count)?;

        let current_player = PlayerId::new((layout.current_player.index() % player_count) as u8);

        Ok(Self {
            config,
            player_count,
            phase: Phase::AwaitingTurn,
            turn: TurnState::starting_at(current_player, layout.direction),
            hands: layout.hands.into_iter().map(Hand::from_iter).collect(),
            draw_pile: DrawPile::from_cards(layout.draw_pile),
            discard_pile: DiscardPile::from_cards(layout.discard_pile),
            history: Vector::new(),
            idle_turns: 0,
        })
    }

    /// Shuffle a fresh deck, deal, and turn up the first discard.
    ///
    /// Cards are dealt one at a time round-robin from player 0. If the deck
    /// runs out mid-deal the remaining hands stay short and no discard is
    /// turned up. Calling this again restarts the game with the same seed.
    pub fn initialize(&mut self) {
        self.phase = Phase::Dealing;

        let mut draw_pile = Deck::standard().shuffle(self.config.seed).into_draw_pile();
        let mut hands: PlayerMap<Hand> = PlayerMap::with_default(self.player_count);

        'deal: for _ in 0..self.config.hand_size {
            for (_, hand) in hands.iter_mut() {
                match draw_pile.draw() {
                    Some(card) => hand.push(card),
                    None => {
                        debug!("deck exhausted while dealing");
                        break 'deal;
                    }
                }
            }
        }

        let mut discard_pile = DiscardPile::new();
        if let Some(card) = draw_pile.draw() {
            discard_pile.push(card);
        }

        self.hands = hands;
        self.draw_pile = draw_pile;
        self.discard_pile = discard_pile;
        self.turn = TurnState::new();
        self.history = Vector::new();
        self.idle_turns = 0;
        self.phase = Phase::AwaitingTurn;

        info!(
            "dealt {} players with seed {}, top card {}",
            self.player_count,
            self.config.seed,
            self.discard_pile.top().map_or_else(|| "none".to_string(), Card::to_string),
        );
    }

    /// Resolve the current player's turn.
    ///
    /// Returns `None` without touching any state before `initialize()` or
    /// once the game is finished.
    pub fn play_turn(&mut self) -> Option<TurnRecord> {
        if self.phase != Phase::AwaitingTurn {
            return None;
        }

        let player = self.turn.current_player;
        let top = self.discard_pile.top().copied();
        let hand = &mut self.hands[player];

        let mut played = select_play(hand, top.as_ref());
        let mut drawn = None;

        if played.is_none() {
            if let Some(card) = self.draw_pile.draw() {
                trace!("{} draws {}", player, card);
                drawn = Some(card);
                played = match self.config.draw_policy {
                    DrawPolicy::Retry => {
                        hand.push(card);
                        select_play(hand, top.as_ref())
                    }
                    DrawPolicy::ImmediateCheck => {
                        if is_playable(&card, top.as_ref()) {
                            Some(card)
                        } else {
                            hand.push(card);
                            None
                        }
                    }
                };
            }
        }

        let effect = played.as_ref().map_or(Effect::None, Effect::of);
        let resolution = match played {
            Some(card) => {
                self.discard_pile.push(card);
                effect.resolve(self.config.reverse_rule, self.player_count)
            }
            None => Resolution::pass(),
        };

        // Draw Two hits the next seat in the direction the card was played.
        let penalty_cards = if resolution.next_player_draws > 0 {
            let victim = self.turn.peek(1, self.player_count);
            let penalty = self.draw_pile.draw_up_to(resolution.next_player_draws);
            let count = penalty.len();
            self.hands[victim].extend(penalty);
            debug!("{} draws {} from Draw Two", victim, count);
            count
        } else {
            0
        };

        let record = TurnRecord {
            turn: self.history.len() as u32 + 1,
            player,
            played,
            drawn,
            effect,
            penalty_cards,
        };
        self.history.push_back(record);
        self.idle_turns = if record.is_idle() { self.idle_turns + 1 } else { 0 };

        match played {
            Some(card) => debug!("turn {}: {} plays {}", record.turn, player, card),
            None => debug!("turn {}: {} passes", record.turn, player),
        }

        if self.hands[player].is_empty() {
            self.turn.set_winner(player);
            self.phase = Phase::Finished;
            info!("{} wins after {} turns", player, record.turn);
            return Some(record);
        }

        if resolution.flip_direction {
            self.turn.flip_direction();
        }
        self.turn.advance(resolution.steps, self.player_count);

        Some(record)
    }

    /// Play until a winner, a stall, or `max_turns` turns.
    pub fn run(&mut self, max_turns: usize) -> GameResult {
        for _ in 0..max_turns {
            if let Some(result) = self.result() {
                return result;
            }
            self.play_turn();
        }
        self.result().unwrap_or(GameResult::TurnLimit)
    }

    /// Turns within which any initialized game ends in a winner or a stall.
    ///
    /// Every non-idle turn grows the discard pile or shrinks the draw pile,
    /// and fewer than `player_count` idle turns can separate them.
    #[must_use]
    pub fn turn_bound(&self) -> usize {
        (2 * STANDARD_DECK_SIZE + 1) * self.player_count
    }

    /// How the game has ended so far, if it has.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if let Some(winner) = self.turn.winner {
            Some(GameResult::Winner(winner))
        } else if self.is_stalled() {
            Some(GameResult::Stalled)
        } else {
            None
        }
    }

    // === Queries ===

    /// Has a player emptied their hand?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn.winner.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.turn.winner
    }

    /// True once every player in a row has neither played nor drawn.
    ///
    /// The top card and every hand are then fixed for good, so no further
    /// turn can change anything but the current seat.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.idle_turns >= self.player_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.turn.direction
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn config(&self) -> &UnoConfig {
        &self.config
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Hand sizes in seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.values().map(Hand::len).collect()
    }

    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.top()
    }

    /// Turns resolved so far.
    #[must_use]
    pub fn turn_number(&self) -> usize {
        self.history.len()
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Cards across both piles and all hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.hands.values().map(Hand::len).sum::<usize>()
    }

    /// Multiset of every card in play. Equals `Deck::standard().counts()`
    /// for a dealt game.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<Card, usize> {
        count_cards(
            self.draw_pile
                .iter()
                .chain(self.discard_pile.iter())
                .chain(self.hands.values().flat_map(Hand::iter)),
        )
    }
}

/// Builder for a dealt game.
///
/// ```
/// use uno_engine::{DrawPolicy, UnoGameBuilder};
///
/// let game = UnoGameBuilder::new()
///     .player_count(4)
///     .seed(7)
///     .draw_policy(DrawPolicy::ImmediateCheck)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.hand_sizes(), vec![7, 7, 7, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct UnoGameBuilder {
    player_count: usize,
    config: UnoConfig,
}

impl Default for UnoGameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            config: UnoConfig::default(),
        }
    }
}

impl UnoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.config.draw_policy = policy;
        self
    }

    pub fn reverse_rule(mut self, rule: ReverseRule) -> Self {
        self.config.reverse_rule = rule;
        self
    }

    pub fn config(mut self, config: UnoConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate, construct and deal.
    pub fn build(self) -> Result<UnoGame, UnoError> {
        let mut game = UnoGame::with_config(self.player_count, self.config)?;
        game.initialize();
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Label};

    fn red(n: u8) -> Card {
        Card::number(Color::Red, n)
    }

    fn blue(n: u8) -> Card {
        Card::number(Color::Blue, n)
    }

    #[test]
    fn test_rejects_zero_players() {
        assert_eq!(UnoGame::new(0).unwrap_err(), UnoError::InvalidPlayerCount { count: 0 });
        assert!(UnoGame::new(256).is_err());
        assert!(UnoGameBuilder::new().player_count(0).build().is_err());
    }

    #[test]
    fn test_created_game_ignores_turns() {
        let mut game = UnoGame::new(2).unwrap();

        assert_eq!(game.phase(), Phase::Created);
        assert_eq!(game.play_turn(), None);
        assert_eq!(game.total_cards(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_initialize_deals() {
        let mut game = UnoGame::new(4).unwrap();
        game.initialize();

        assert_eq!(game.phase(), Phase::AwaitingTurn);
        assert_eq!(game.hand_sizes(), vec![7, 7, 7, 7]);
        assert_eq!(game.discard_pile().len(), 1);
        assert_eq!(game.draw_pile().len(), 100 - 28 - 1);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.direction(), Direction::Clockwise);
        assert_eq!(game.card_counts(), Deck::standard().counts());
    }

    #[test]
    fn test_deal_is_round_robin_from_top() {
        let mut game = UnoGame::new(2).unwrap();
        game.initialize();

        // The shuffled deck is drawn from its end: player 0 gets the last
        // card, player 1 the one before, and so on.
        let deck = Deck::standard().shuffle(UnoConfig::DEFAULT_SEED);
        let cards = deck.cards();
        let n = cards.len();

        assert_eq!(game.hand(PlayerId::new(0)).cards()[0], cards[n - 1]);
        assert_eq!(game.hand(PlayerId::new(1)).cards()[0], cards[n - 2]);
        assert_eq!(game.hand(PlayerId::new(0)).cards()[1], cards[n - 3]);
        assert_eq!(game.top_card(), Some(&cards[n - 15]));
    }

    #[test]
    fn test_initialize_is_reproducible() {
        let mut a = UnoGame::new(3).unwrap();
        let mut b = UnoGame::new(3).unwrap();
        a.initialize();
        b.initialize();

        for p in PlayerId::all(3) {
            assert_eq!(a.hand(p), b.hand(p));
        }
        assert_eq!(a.draw_pile(), b.draw_pile());
    }

    #[test]
    fn test_reinitialize_resets() {
        let mut game = UnoGame::new(3).unwrap();
        game.initialize();
        let first = game.clone();

        for _ in 0..10 {
            game.play_turn();
        }
        game.initialize();

        assert_eq!(game.hand_sizes(), first.hand_sizes());
        assert_eq!(game.top_card(), first.top_card());
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.turn_number(), 0);
    }

    #[test]
    fn test_number_card_advances_one() {
        let layout = Layout {
            hands: vec![vec![red(1), blue(2)], vec![blue(3)], vec![blue(4)]],
            draw_pile: vec![],
            discard_pile: vec![red(5)],
            ..Layout::default()
        };
        let mut game = UnoGame::from_layout(UnoConfig::default(), layout).unwrap();

        let record = game.play_turn().unwrap();

        assert_eq!(record.played, Some(red(1)));
        assert_eq!(record.effect, Effect::None);
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.top_card(), Some(&red(1)));
    }

    #[test]
    fn test_history_records_turns() {
        let mut game = UnoGameBuilder::new().player_count(3).build().unwrap();

        game.play_turn();
        game.play_turn();

        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.history()[0].turn, 1);
        assert_eq!(game.history()[0].player, PlayerId::new(0));
        assert_eq!(game.history()[1].turn, 2);
    }

    #[test]
    fn test_immediate_check_plays_drawn_card_from_pile() {
        let layout = Layout {
            hands: vec![vec![blue(1), blue(2)], vec![blue(3)]],
            draw_pile: vec![red(3)],
            discard_pile: vec![red(5)],
            ..Layout::default()
        };
        let config = UnoConfig::default().with_draw_policy(DrawPolicy::ImmediateCheck);
        let mut game = UnoGame::from_layout(config, layout).unwrap();

        let record = game.play_turn().unwrap();

        assert_eq!(record.drawn, Some(red(3)));
        assert_eq!(record.played, Some(red(3)));
        assert_eq!(game.hand(PlayerId::new(0)).cards(), &[blue(1), blue(2)]);
        assert_eq!(game.top_card(), Some(&red(3)));
    }

    #[test]
    fn test_immediate_check_keeps_unplayable_draw() {
        let layout = Layout {
            hands: vec![vec![blue(1)], vec![blue(3)]],
            draw_pile: vec![Card::new(Color::Green, Label::Skip)],
            discard_pile: vec![red(5)],
            ..Layout::default()
        };
        let config = UnoConfig::default().with_draw_policy(DrawPolicy::ImmediateCheck);
        let mut game = UnoGame::from_layout(config, layout).unwrap();

        let record = game.play_turn().unwrap();

        assert_eq!(record.played, None);
        assert_eq!(game.hand(PlayerId::new(0)).len(), 2);
        assert_eq!(game.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_empty_draw_pile_passes() {
        let layout = Layout {
            hands: vec![vec![blue(1)], vec![blue(3)]],
            discard_pile: vec![red(5)],
            ..Layout::default()
        };
        let mut game = UnoGame::from_layout(UnoConfig::default(), layout).unwrap();

        let record = game.play_turn().unwrap();

        assert!(record.is_idle());
        assert_eq!(game.total_cards(), 3);
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert!(!game.is_stalled());

        game.play_turn();
        assert!(game.is_stalled());
        assert_eq!(game.run(10), GameResult::Stalled);
    }

    #[test]
    fn test_last_card_wins_without_advancing() {
        let layout = Layout {
            hands: vec![vec![Card::new(Color::Red, Label::Skip)], vec![blue(3)], vec![blue(4)]],
            draw_pile: vec![blue(9)],
            discard_pile: vec![red(5)],
            ..Layout::default()
        };
        let mut game = UnoGame::from_layout(UnoConfig::default(), layout).unwrap();

        game.play_turn();

        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(PlayerId::new(0)));
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.play_turn(), None);
        assert_eq!(game.run(5), GameResult::Winner(PlayerId::new(0)));
    }

    #[test]
    fn test_no_top_card_plays_first_in_hand() {
        let layout = Layout {
            hands: vec![vec![blue(2), red(7)], vec![blue(3)]],
            ..Layout::default()
        };
        let mut game = UnoGame::from_layout(UnoConfig::default(), layout).unwrap();

        let record = game.play_turn().unwrap();
        assert_eq!(record.played, Some(blue(2)));
    }

    #[test]
    fn test_single_player_draw_two_hits_self() {
        let layout = Layout {
            hands: vec![vec![Card::new(Color::Red, Label::DrawTwo)]],
            draw_pile: vec![blue(1), blue(2)],
            discard_pile: vec![red(5)],
            ..Layout::default()
        };
        let mut game = UnoGame::from_layout(UnoConfig::default(), layout).unwrap();

        let record = game.play_turn().unwrap();

        assert_eq!(record.penalty_cards, 2);
        assert!(!game.is_game_over());
        assert_eq!(game.hand(PlayerId::new(0)).len(), 2);
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_layout_rejects_no_hands() {
        assert!(UnoGame::from_layout(UnoConfig::default(), Layout::default()).is_err());
    }
}
