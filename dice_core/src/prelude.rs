//! Prelude module for convenient imports
//!
//! ```rust
//! use dice_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Face, IntoWeight};
pub use crate::die::Die;
pub use crate::game::{Game, ResultView, RollHistory, ShowForm, WideTable};

// Analysis
pub use crate::analyzer::{Analyzer, CountTable, Report};

// Errors and config
pub use crate::config::{ConfigError, GameConfig};
pub use crate::error::{DiceError, ErrorKind};
