//! Analyzer - statistics over a frozen roll history

mod counts;
mod report;

pub use counts::{CountEntry, CountTable, FaceCountTable};
pub use report::{format_key, FaceTotal, Report, Summary};

use crate::error::DiceError;
use crate::game::{RollHistory, WideTable};
use crate::types::Face;
use std::collections::{BTreeMap, HashSet};

/// Read-only statistics over one game's results
///
/// The analyzer copies the wide result table when it is built. Replaying the
/// game or re-weighting its dice afterwards has no effect on it.
///
/// Only roll histories can be analyzed:
///
/// ```compile_fail
/// use dice_core::Analyzer;
///
/// let analyzer = Analyzer::new(&42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyzer {
    game_results: WideTable,
}

impl Analyzer {
    /// Snapshot the results of a played game
    ///
    /// Fails with an invalid-argument error if the game has not been played.
    pub fn new<H>(history: &H) -> Result<Self, DiceError>
    where
        H: RollHistory + ?Sized,
    {
        let game_results = history.wide_results()?;
        tracing::debug!(
            num_rolls = game_results.num_rolls(),
            num_dice = game_results.num_dice(),
            "captured results for analysis"
        );
        Ok(Analyzer { game_results })
    }

    /// The captured wide table
    pub fn results(&self) -> &WideTable {
        &self.game_results
    }

    pub fn num_rolls(&self) -> usize {
        self.game_results.num_rolls()
    }

    pub fn num_dice(&self) -> usize {
        self.game_results.num_dice()
    }

    /// Number of rolls where every die shows the same face
    pub fn jackpot(&self) -> u64 {
        self.game_results
            .rows()
            .iter()
            .filter(|row| row.iter().collect::<HashSet<_>>().len() == 1)
            .count() as u64
    }

    /// How many times each face appears in each roll
    pub fn roll_face_counts(&self) -> FaceCountTable {
        FaceCountTable::from_rows(self.game_results.rows())
    }

    /// Frequency of each order-independent outcome
    pub fn combo_count(&self) -> CountTable {
        CountTable::tally(self.game_results.rows().iter().map(|row| {
            let mut key = row.clone();
            key.sort();
            key
        }))
    }

    /// Frequency of each outcome in die order
    pub fn permutation_count(&self) -> CountTable {
        CountTable::tally(self.game_results.rows().iter().cloned())
    }

    /// How many times each face was rolled across all dice and rolls
    pub fn face_totals(&self) -> Vec<FaceTotal> {
        let mut totals: BTreeMap<&Face, u64> = BTreeMap::new();
        for face in self.game_results.rows().iter().flatten() {
            *totals.entry(face).or_insert(0) += 1;
        }
        totals
            .into_iter()
            .map(|(face, count)| FaceTotal {
                face: face.clone(),
                count,
            })
            .collect()
    }

    /// Every statistic bundled for output
    pub fn report(&self) -> Report {
        Report {
            num_rolls: self.num_rolls(),
            num_dice: self.num_dice(),
            jackpots: self.jackpot(),
            face_totals: self.face_totals(),
            combinations: self.combo_count(),
            permutations: self.permutation_count(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rows_strategy() -> impl Strategy<Value = Vec<Vec<Face>>> {
        (1usize..5).prop_flat_map(|num_dice| {
            prop::collection::vec(
                prop::collection::vec((1i64..=6).prop_map(Face::Int), num_dice),
                1..100,
            )
        })
    }

    proptest! {
        #[test]
        fn count_tables_cover_every_roll(rows in rows_strategy()) {
            let num_rolls = rows.len() as u64;
            let analyzer = Analyzer::new(&WideTable::from_rows(rows).unwrap()).unwrap();

            prop_assert_eq!(analyzer.combo_count().total(), num_rolls);
            prop_assert_eq!(analyzer.permutation_count().total(), num_rolls);
            prop_assert!(analyzer.combo_count().len() <= analyzer.permutation_count().len());
            prop_assert!(analyzer.jackpot() <= num_rolls);
        }

        #[test]
        fn jackpot_is_rows_with_one_distinct_face(rows in rows_strategy()) {
            let expected = rows
                .iter()
                .filter(|row| row.iter().all(|f| *f == row[0]))
                .count() as u64;
            let analyzer = Analyzer::new(&WideTable::from_rows(rows).unwrap()).unwrap();
            prop_assert_eq!(analyzer.jackpot(), expected);
        }
    }
}
