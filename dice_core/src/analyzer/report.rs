//! Report - serializable summary of an analysis

use super::CountTable;
use crate::types::Face;
use serde::Serialize;
use std::fmt;

/// Overall count of one face across every die and roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceTotal {
    pub face: Face,
    pub count: u64,
}

/// All analyzer statistics for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub num_rolls: usize,
    pub num_dice: usize,
    pub jackpots: u64,
    pub face_totals: Vec<FaceTotal>,
    pub combinations: CountTable,
    pub permutations: CountTable,
}

impl Report {
    /// Share of rolls that were jackpots
    pub fn jackpot_rate(&self) -> f64 {
        if self.num_rolls > 0 {
            self.jackpots as f64 / self.num_rolls as f64
        } else {
            0.0
        }
    }

    /// Plain-text summary limited to the `top` most common tuples
    pub fn summary(&self, top: usize) -> Summary<'_> {
        Summary { report: self, top }
    }
}

/// Display adapter returned by [`Report::summary`]
pub struct Summary<'a> {
    report: &'a Report,
    top: usize,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "Rolls: {}  Dice: {}", report.num_rolls, report.num_dice)?;
        writeln!(
            f,
            "Jackpots: {} ({:.2}%)",
            report.jackpots,
            report.jackpot_rate() * 100.0
        )?;

        writeln!(f, "\nFace totals:")?;
        for total in &report.face_totals {
            writeln!(f, "  {:>8}  {}", total.face, total.count)?;
        }

        for (title, table) in [
            ("Combinations", &report.combinations),
            ("Permutations", &report.permutations),
        ] {
            writeln!(f, "\n{} ({} distinct):", title, table.len())?;
            for entry in table.top(self.top) {
                writeln!(f, "  {:<24}  {}", format_key(&entry.key), entry.count)?;
            }
        }
        Ok(())
    }
}

/// Render an outcome tuple as `(a, b, c)`
pub fn format_key(key: &[Face]) -> String {
    let parts: Vec<String> = key.iter().map(Face::to_string).collect();
    format!("({})", parts.join(", "))
}
