//! Plays strategies against each other.

use crate::config::{ConfigError, MatchConfig, StrategyConfig};
use crate::strategy::{NoLegalMoveError, Strategy};
use derive_more::{Display, Error, From};
use flipline_othello::{GameState, Location, Outcome, Player};
use itertools::Itertools;
use log::{debug, info};
use std::fmt;

#[derive(Debug, Display, Error, From)]
pub enum ArenaError {
    #[display(fmt = "invalid match configuration: {}", source)]
    Config { source: ConfigError },

    #[display(fmt = "strategy failed to move: {}", source)]
    NoMove { source: NoLegalMoveError },
}

/// What a player did on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Place(Location),
    Pass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub action: Action,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Place(loc) => write!(f, "{} {}", self.player, loc),
            Action::Pass => write!(f, "{} passes", self.player),
        }
    }
}

/// A finished game: where it started, every turn in order, and where it ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub start: GameState,
    pub turns: Vec<Turn>,
    pub end: GameState,
}

impl GameRecord {
    pub fn outcome(&self) -> Outcome {
        self.end.winner()
    }

    /// The disks placed, in order, skipping passes.
    pub fn moves(&self) -> impl Iterator<Item = Location> + '_ {
        self.turns.iter().filter_map(|turn| match turn.action {
            Action::Place(loc) => Some(loc),
            Action::Pass => None,
        })
    }

    pub fn passes(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.action == Action::Pass)
            .count()
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transcript = self
            .turns
            .iter()
            .enumerate()
            .map(|(i, turn)| format!("{:>3}. {}", i + 1, turn))
            .join("\n");
        if !transcript.is_empty() {
            writeln!(f, "{}", transcript)?;
        }
        writeln!(f, "{}", self.end.board())?;
        write!(
            f,
            "Black {} - White {}: {}",
            self.end.disk_count(Player::Black),
            self.end.disk_count(Player::White),
            self.outcome()
        )
    }
}

/// Play `start` out to the end, asking `black` and `white` for moves in turn.
///
/// A side to move with no legal move passes, and the pass is recorded as its turn,
/// so the turns alternate between the players.
pub fn play_game(
    start: GameState,
    black: &mut Strategy,
    white: &mut Strategy,
) -> Result<GameRecord, NoLegalMoveError> {
    let mut state = start;
    let mut turns = Vec::new();

    while !state.is_terminal() {
        let mover = state.active_player();
        if state.legal_moves().is_empty() {
            debug!("{} has no legal move and passes", mover);
            turns.push(Turn {
                player: mover,
                action: Action::Pass,
            });
            state = state.pass();
            continue;
        }

        let strategy = match mover {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };
        let (mv, next) = strategy.choose(&state)?;
        turns.push(Turn {
            player: mover,
            action: Action::Place(mv),
        });
        state = next;
    }

    Ok(GameRecord {
        start,
        turns,
        end: state,
    })
}

/// Results of a match, counted per configured strategy rather than per color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    /// The strategy configured for Black in the first game.
    pub first: StrategyConfig,
    /// The strategy configured for White in the first game.
    pub second: StrategyConfig,
    pub first_wins: u32,
    pub second_wins: u32,
    pub ties: u32,
    /// Sum over all games of the first strategy's final disk difference.
    pub first_margin: i32,
}

impl MatchSummary {
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.ties
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} ({} ties, {} games, margin {:+})",
            self.first,
            self.first_wins,
            self.second_wins,
            self.second,
            self.ties,
            self.games(),
            self.first_margin
        )
    }
}

/// Play `config.games` games between the two configured strategies.
///
/// Strategies are built once and reused, so a seeded random player continues its
/// sequence from game to game. With `alternate_seats`, odd-numbered games swap colors.
pub fn run_match(config: &MatchConfig) -> Result<MatchSummary, ArenaError> {
    config.validate()?;

    let mut first = Strategy::from_config(&config.black, Player::Black);
    let mut second = Strategy::from_config(&config.white, Player::White);
    let mut summary = MatchSummary {
        first: config.black,
        second: config.white,
        first_wins: 0,
        second_wins: 0,
        ties: 0,
        first_margin: 0,
    };

    for game in 0..config.games {
        let first_color = if config.alternate_seats && game % 2 == 1 {
            Player::White
        } else {
            Player::Black
        };
        first.take_seat(first_color);
        second.take_seat(!first_color);

        let start = GameState::with_rule(config.first_mover, config.rule);
        let record = match first_color {
            Player::Black => play_game(start, &mut first, &mut second)?,
            Player::White => play_game(start, &mut second, &mut first)?,
        };

        match record.outcome() {
            Outcome::Win(winner) if winner == first_color => summary.first_wins += 1,
            Outcome::Win(_) => summary.second_wins += 1,
            _ => summary.ties += 1,
        }
        summary.first_margin += i32::from(record.end.score(first_color));
        info!(
            "game {}/{}: {} as {} vs {}: {} ({} turns)",
            game + 1,
            config.games,
            first,
            first_color,
            second,
            record.outcome(),
            record.turns.len()
        );
    }

    info!("match finished: {}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::Minimax;
    use flipline_othello::{Board, CaptureRule};

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    fn minimax(depth: u32, color: Player) -> Strategy {
        Strategy::Minimax(Minimax::new(depth, color))
    }

    #[test]
    fn greedy_self_play() {
        let record = play_game(
            GameState::default(),
            &mut Strategy::GreedyCapture,
            &mut Strategy::GreedyCapture,
        )
        .unwrap();

        assert_eq!(record.turns.len(), 44);
        assert_eq!(record.passes(), 2);
        assert_eq!(
            record.moves().take(5).collect::<Vec<_>>(),
            ["D3", "E3", "F3", "E2", "F4"].map(loc)
        );
        assert_eq!(record.end.disk_count(Player::Black), 11);
        assert_eq!(record.end.disk_count(Player::White), 35);
        assert_eq!(record.outcome(), Outcome::Win(Player::White));
    }

    #[test]
    fn turns_alternate_once_passes_are_recorded() {
        let record = play_game(
            GameState::default(),
            &mut minimax(2, Player::Black),
            &mut Strategy::GreedyCapture,
        )
        .unwrap();

        // Black wipes White out.
        assert_eq!(record.turns.len(), 21);
        assert_eq!(record.passes(), 3);
        assert_eq!(record.end.disk_count(Player::Black), 22);
        assert_eq!(record.end.disk_count(Player::White), 0);
        for (prev, next) in record.turns.iter().tuple_windows() {
            assert_ne!(prev.player, next.player);
        }
        assert_eq!(record.moves().count() + 4, usize::from(record.end.count_occupied()));
    }

    #[test]
    fn white_first_greedy_game_is_tied() {
        let record = play_game(
            GameState::new(Player::White),
            &mut Strategy::GreedyCapture,
            &mut Strategy::GreedyCapture,
        )
        .unwrap();
        assert_eq!(
            record.turns[0],
            Turn {
                player: Player::White,
                action: Action::Place(loc("E3"))
            }
        );
        assert_eq!(record.turns.len(), 58);
        assert_eq!(record.outcome(), Outcome::Tie);
    }

    #[test]
    fn stuck_start_is_passed() {
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            .......O"
            .parse()
            .unwrap();
        let start = GameState::from_board(board, Player::White, CaptureRule::Orthogonal);
        let record = play_game(start, &mut Strategy::GreedyCapture, &mut Strategy::GreedyCapture)
            .unwrap();
        assert_eq!(
            record.turns,
            vec![
                Turn {
                    player: Player::White,
                    action: Action::Pass
                },
                Turn {
                    player: Player::Black,
                    action: Action::Place(loc("C1"))
                },
            ]
        );
        assert_eq!(record.outcome(), Outcome::Win(Player::Black));
    }

    #[test]
    fn finished_start_plays_nothing() {
        let board: Board = "X".repeat(64).parse().unwrap();
        let start = GameState::from_board(board, Player::Black, CaptureRule::Orthogonal);
        let record = play_game(start, &mut Strategy::GreedyCapture, &mut Strategy::GreedyCapture)
            .unwrap();
        assert!(record.turns.is_empty());
        assert_eq!(record.end, start);
        assert!(record.to_string().ends_with("Black 64 - White 0: Black wins"));
    }

    #[test]
    fn transcript_lists_turns() {
        let record = play_game(
            GameState::default(),
            &mut Strategy::GreedyCapture,
            &mut Strategy::GreedyCapture,
        )
        .unwrap();
        let text = record.to_string();
        assert!(text.starts_with("  1. Black D3\n  2. White E3\n"));
        assert!(text.contains(" passes\n"));
    }

    #[test]
    fn match_alternates_seats() {
        let config = MatchConfig {
            games: 2,
            black: StrategyConfig::Minimax { depth: 2 },
            white: StrategyConfig::Greedy,
            ..MatchConfig::default()
        };
        let summary = run_match(&config).unwrap();
        // Minimax wins 22-0 as Black, then greedy wins 43-17 as Black.
        assert_eq!(
            summary,
            MatchSummary {
                first: config.black,
                second: config.white,
                first_wins: 1,
                second_wins: 1,
                ties: 0,
                first_margin: 22 - 26,
            }
        );
    }

    #[test]
    fn match_with_fixed_seats() {
        let config = MatchConfig {
            games: 2,
            black: StrategyConfig::Minimax { depth: 2 },
            white: StrategyConfig::Greedy,
            alternate_seats: false,
            ..MatchConfig::default()
        };
        let summary = run_match(&config).unwrap();
        assert_eq!((summary.first_wins, summary.second_wins), (2, 0));
        assert_eq!(summary.first_margin, 44);
    }

    #[test]
    fn match_rejects_invalid_config() {
        let config = MatchConfig {
            games: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(
            run_match(&config),
            Err(ArenaError::Config { .. })
        ));
    }
}
