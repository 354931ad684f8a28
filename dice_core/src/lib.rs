//! dice_core - Weighted dice games and Monte Carlo roll analysis
//!
//! This library provides:
//! - Die: Weighted sampler over a fixed set of unique faces
//! - Game: Rolls several dice together and keeps the latest roll history
//! - Analyzer: Jackpots, face counts and combination/permutation tables
//! - GameConfig: TOML description of a game

pub mod analyzer;
pub mod config;
pub mod die;
pub mod error;
pub mod game;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use analyzer::{Analyzer, CountEntry, CountTable, FaceCountTable, FaceTotal, Report};
pub use config::{load_config, parse_config, ConfigError, GameConfig};
pub use die::{Die, DieState};
pub use error::{DiceError, ErrorKind};
pub use game::{Game, NarrowRow, NarrowTable, ResultView, RollHistory, ShowForm, WideTable};
pub use types::{Face, FaceKind, IntoWeight};
