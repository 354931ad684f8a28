//! dice_tui - Terminal front ends for dice_core
//!
//! The `dice_tui` binary is an interactive explorer; `dice_sim` runs a
//! single seeded simulation and prints a report.

pub mod simulation;

pub use simulation::{render_results, SimulationError, SimulationOutput, SimulationRun};
