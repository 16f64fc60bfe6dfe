//! `flipline`: play four-direction Othello from the command line.
//!
//! - `flipline play` plays one game between two strategies and prints the transcript
//! - `flipline match --games 10` plays a series and prints the tally
//! - `flipline human` plays against a strategy on stdin
//! - `flipline perft --depth 6` counts the successor tree from the start
//!
//! Strategy flags take `random`, `random:SEED`, `greedy` or `minimax:DEPTH`.
//! Flags override values from `--config`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use flipline_othello::test_utils::{read_move, run_perft};
use flipline_othello::{CaptureRule, GameState, Player};
use flipline_player::arena::{play_game, run_match};
use flipline_player::{MatchConfig, Strategy, StrategyConfig};
use log::info;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

/// Othello with orthogonal captures, and the strategies that play it
#[derive(Parser)]
#[command(name = "flipline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with match settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game and print every turn
    Play(GameArgs),
    /// Play a series of games and report the tally
    Match {
        #[command(flatten)]
        game: GameArgs,
        /// Number of games to play
        #[arg(long)]
        games: Option<u32>,
        /// Keep each strategy on its first-game color for the whole match
        #[arg(long)]
        fixed_seats: bool,
    },
    /// Play against a strategy, entering moves like "D3"
    Human {
        /// Your color
        #[arg(long, default_value = "black")]
        color: Player,
        /// Opponent strategy (defaults to the configured one for the other color)
        #[arg(long)]
        opponent: Option<StrategyConfig>,
        #[arg(long)]
        rule: Option<CaptureRule>,
    },
    /// Count leaf states of the successor tree from the starting position
    Perft {
        #[arg(long, default_value_t = 6)]
        depth: u32,
        #[arg(long, default_value = "orthogonal")]
        rule: CaptureRule,
    },
}

#[derive(Args)]
struct GameArgs {
    /// Strategy playing Black (in the first game of a match)
    #[arg(long)]
    black: Option<StrategyConfig>,
    /// Strategy playing White (in the first game of a match)
    #[arg(long)]
    white: Option<StrategyConfig>,
    /// Capture directions: orthogonal or standard
    #[arg(long)]
    rule: Option<CaptureRule>,
    /// Side that moves first
    #[arg(long)]
    first: Option<Player>,
}

impl GameArgs {
    fn apply_to(&self, config: &mut MatchConfig) {
        if let Some(black) = self.black {
            config.black = black;
        }
        if let Some(white) = self.white {
            config.white = white;
        }
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(first) = self.first {
            config.first_mover = first;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MatchConfig::default(),
    };

    match cli.command {
        Commands::Play(args) => {
            args.apply_to(&mut config);
            config.validate()?;
            play_one(&config)
        }
        Commands::Match {
            game,
            games,
            fixed_seats,
        } => {
            game.apply_to(&mut config);
            if let Some(games) = games {
                config.games = games;
            }
            if fixed_seats {
                config.alternate_seats = false;
            }
            let summary = run_match(&config)?;
            println!("{}", summary);
            Ok(())
        }
        Commands::Human {
            color,
            opponent,
            rule,
        } => {
            if let Some(rule) = rule {
                config.rule = rule;
            }
            let seat = match color {
                Player::Black => &mut config.white,
                Player::White => &mut config.black,
            };
            if let Some(opponent) = opponent {
                *seat = opponent;
            }
            let opponent = *seat;
            config.validate()?;
            play_human(&config, color, opponent)
        }
        Commands::Perft { depth, rule } => {
            let started = Instant::now();
            let leaves = run_perft(rule, depth);
            println!(
                "perft({}) {} = {} in {:.3}s",
                depth,
                rule,
                leaves,
                started.elapsed().as_secs_f64()
            );
            Ok(())
        }
    }
}

fn play_one(config: &MatchConfig) -> Result<()> {
    let mut black = Strategy::from_config(&config.black, Player::Black);
    let mut white = Strategy::from_config(&config.white, Player::White);
    info!("{} (Black) vs {} (White), {} rule", black, white, config.rule);

    let start = GameState::with_rule(config.first_mover, config.rule);
    let record = play_game(start, &mut black, &mut white)?;
    println!("{}", record);
    Ok(())
}

fn play_human(config: &MatchConfig, color: Player, opponent: StrategyConfig) -> Result<()> {
    let mut strategy = Strategy::from_config(&opponent, !color);
    let mut state = GameState::with_rule(config.first_mover, config.rule);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    println!("You play {} against {}.", color, strategy);
    while !state.is_terminal() {
        println!("\n{}", state);
        if state.legal_moves().is_empty() {
            println!("{} has no move and passes.", state.active_player());
            state = state.pass();
            continue;
        }

        state = if state.active_player() == color {
            read_move(&mut input, &mut output, &state).context("reading your move")?
        } else {
            let (mv, next) = strategy.choose(&state)?;
            println!("{} plays {}.", strategy, mv);
            next
        };
    }

    println!("\n{}\n{}", state, state.winner());
    Ok(())
}
