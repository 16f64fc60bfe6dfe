//! Strategy and match configuration, from command-line strings or a TOML file.

use derive_more::{Display, Error};
use flipline_othello::{CaptureRule, Player};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::path::{Path, PathBuf};

/// Deepest minimax search a configuration may ask for. Without pruning the tree grows
/// by roughly the branching factor per ply, so this keeps a move to a few seconds.
pub const MAX_MINIMAX_DEPTH: u32 = 8;

/// Which strategy fills a seat, written `random`, `random:SEED`, `greedy` or
/// `minimax:DEPTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyConfig {
    Random { seed: Option<u64> },
    Greedy,
    Minimax { depth: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(
    fmt = "unknown strategy {:?} (expected random, random:SEED, greedy or minimax:DEPTH)",
    input
)]
pub struct ParseStrategyError {
    pub input: String,
}

impl std::str::FromStr for StrategyConfig {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseStrategyError {
            input: s.to_string(),
        };
        let lowered = s.trim().to_ascii_lowercase();
        let (name, arg) = match lowered.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (lowered.as_str(), None),
        };

        match (name, arg) {
            ("random", None) => Ok(StrategyConfig::Random { seed: None }),
            ("random", Some(seed)) => Ok(StrategyConfig::Random {
                seed: Some(seed.parse().map_err(|_| err())?),
            }),
            ("greedy", None) => Ok(StrategyConfig::Greedy),
            ("minimax", Some(depth)) => Ok(StrategyConfig::Minimax {
                depth: depth.parse().map_err(|_| err())?,
            }),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for StrategyConfig {
    type Error = ParseStrategyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StrategyConfig> for String {
    fn from(config: StrategyConfig) -> Self {
        config.to_string()
    }
}

impl fmt::Display for StrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyConfig::Random { seed: None } => f.write_str("random"),
            StrategyConfig::Random { seed: Some(seed) } => write!(f, "random:{}", seed),
            StrategyConfig::Greedy => f.write_str("greedy"),
            StrategyConfig::Minimax { depth } => write!(f, "minimax:{}", depth),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {}: {}", "path.display()", source)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display(fmt = "failed to parse TOML: {}", source)]
    TomlParse { source: toml::de::Error },

    #[display(fmt = "config validation error: {}", reason)]
    Validation { reason: String },
}

/// A series of games between two configured strategies.
///
/// `black` and `white` name the seats for the first game. With `alternate_seats`
/// the two strategies swap colors every other game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub games: u32,
    pub black: StrategyConfig,
    pub white: StrategyConfig,
    pub rule: CaptureRule,
    pub first_mover: Player,
    pub alternate_seats: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            games: 1,
            black: StrategyConfig::Minimax { depth: 3 },
            white: StrategyConfig::Greedy,
            rule: CaptureRule::Orthogonal,
            first_mover: Player::Black,
            alternate_seats: true,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig =
            toml::from_str(content).map_err(|source| ConfigError::TomlParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation {
                reason: "games must be > 0".into(),
            });
        }
        for (seat, strategy) in [("black", self.black), ("white", self.white)] {
            if let StrategyConfig::Minimax { depth } = strategy {
                if depth == 0 || depth > MAX_MINIMAX_DEPTH {
                    return Err(ConfigError::Validation {
                        reason: format!(
                            "{} minimax depth must be in 1..={}, got {}",
                            seat, MAX_MINIMAX_DEPTH, depth
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
