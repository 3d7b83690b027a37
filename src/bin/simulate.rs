//! Play one game to completion and print the table after every turn.
//!
//! ```text
//! simulate --players 4 --seed 1234 --draw-policy immediate-check
//! RUST_LOG=debug simulate --players 3
//! ```

use clap::{Parser, ValueEnum};
use uno_engine::{DrawPolicy, GameResult, ReverseRule, UnoConfig, UnoGame};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DrawArg {
    Retry,
    ImmediateCheck,
}

#[derive(Parser, Debug)]
#[command(about = "Simulate a game of UNO-style turns")]
struct Args {
    /// Number of players
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Deck shuffle seed
    #[arg(short, long, default_value_t = UnoConfig::DEFAULT_SEED)]
    seed: u64,

    /// Cards dealt to each player
    #[arg(long, default_value_t = UnoConfig::DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// What to do with a card drawn when nothing was playable
    #[arg(long, value_enum, default_value_t = DrawArg::Retry)]
    draw_policy: DrawArg,

    /// Treat Reverse as Skip when exactly two players sit at the table
    #[arg(long)]
    two_player_reverse_skips: bool,

    /// Only print the final state
    #[arg(short, long)]
    quiet: bool,
}

impl From<DrawArg> for DrawPolicy {
    fn from(arg: DrawArg) -> Self {
        match arg {
            DrawArg::Retry => DrawPolicy::Retry,
            DrawArg::ImmediateCheck => DrawPolicy::ImmediateCheck,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = UnoConfig::new()
        .with_seed(args.seed)
        .with_hand_size(args.hand_size)
        .with_draw_policy(args.draw_policy.into())
        .with_reverse_rule(if args.two_player_reverse_skips {
            ReverseRule::SkipWithTwoPlayers
        } else {
            ReverseRule::Flip
        });

    let mut game = match UnoGame::with_config(args.players, config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    };
    game.initialize();

    if !args.quiet {
        println!("{}", game.describe());
    }

    let bound = game.turn_bound();
    while !game.is_game_over() && !game.is_stalled() && game.turn_number() < bound {
        if let Some(record) = game.play_turn() {
            if !args.quiet {
                match record.played {
                    Some(card) => println!("{}: {} plays {}", record.turn, record.player, card),
                    None => println!("{}: {} passes", record.turn, record.player),
                }
                println!("{}", game.describe());
            }
        }
    }

    println!("{}", game.describe());
    match game.result().unwrap_or(GameResult::TurnLimit) {
        GameResult::Winner(player) => println!("{} wins after {} turns", player, game.turn_number()),
        GameResult::Stalled => println!("no legal play left after {} turns", game.turn_number()),
        GameResult::TurnLimit => println!("stopped after {} turns", game.turn_number()),
    }
}
