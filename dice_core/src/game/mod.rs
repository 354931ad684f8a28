//! Game - rolls a set of dice together and keeps the latest roll history

mod table;

pub use table::{NarrowRow, NarrowTable, ResultView, ShowForm, WideTable};

use crate::die::Die;
use crate::error::DiceError;
use rand::Rng;

/// Anything that can hand out a wide roll-history table
///
/// [`Analyzer`](crate::Analyzer) accepts any implementor, so a played
/// [`Game`] or a bare [`WideTable`] can both be analyzed.
pub trait RollHistory {
    fn wide_results(&self) -> Result<WideTable, DiceError>;
}

/// A set of dice rolled together
///
/// All dice share the same faces but may carry different weights. Results
/// from the most recent [`play`](Game::play) are kept until the next one.
#[derive(Debug, Clone)]
pub struct Game {
    dice: Vec<Die>,
    results: Option<WideTable>,
}

impl Game {
    /// Create a game from one or more dice with identical face sets
    pub fn new(dice: Vec<Die>) -> Result<Self, DiceError> {
        let Some(first) = dice.first() else {
            return Err(DiceError::InvalidArgument(
                "a game needs at least one die".to_string(),
            ));
        };

        let mut reference = first.faces().to_vec();
        reference.sort();
        for (index, die) in dice.iter().enumerate().skip(1) {
            let mut faces = die.faces().to_vec();
            faces.sort();
            if faces != reference {
                return Err(DiceError::InvalidArgument(format!(
                    "die {} has a different face set from die 0",
                    index
                )));
            }
        }

        Ok(Game {
            dice,
            results: None,
        })
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    /// Mutable access to one die, e.g. to re-weight it between plays
    pub fn die_mut(&mut self, index: usize) -> Result<&mut Die, DiceError> {
        let len = self.dice.len();
        self.dice
            .get_mut(index)
            .ok_or(DiceError::DieIndexOutOfRange { index, len })
    }

    pub fn is_played(&self) -> bool {
        self.results.is_some()
    }

    /// Number of rolls in the most recent play
    pub fn num_rolls(&self) -> Option<usize> {
        self.results.as_ref().map(WideTable::num_rolls)
    }

    /// Roll every die `num_rolls` times using the thread-local RNG
    pub fn play(&mut self, num_rolls: usize) -> Result<(), DiceError> {
        let mut rng = rand::thread_rng();
        self.play_with_rng(num_rolls, &mut rng)
    }

    /// Roll every die `num_rolls` times with a provided RNG
    ///
    /// Each die draws its own sequence; die `i`'s draws fill column `i`.
    /// Previous results are replaced only if every die rolls successfully.
    pub fn play_with_rng(
        &mut self,
        num_rolls: usize,
        rng: &mut impl Rng,
    ) -> Result<(), DiceError> {
        let columns = self
            .dice
            .iter()
            .map(|die| die.roll_with_rng(num_rolls, rng))
            .collect::<Result<Vec<_>, _>>()?;
        let table = WideTable::from_columns(columns)?;

        tracing::debug!(num_rolls, num_dice = self.dice.len(), "played game");
        self.results = Some(table);
        Ok(())
    }

    /// Results of the most recent play in the named form
    ///
    /// `form` is matched case-insensitively against "wide" and "narrow".
    pub fn show(&self, form: &str) -> Result<ResultView, DiceError> {
        self.show_as(form.parse()?)
    }

    pub fn show_as(&self, form: ShowForm) -> Result<ResultView, DiceError> {
        match form {
            ShowForm::Wide => self.wide().map(ResultView::Wide),
            ShowForm::Narrow => self.narrow().map(ResultView::Narrow),
        }
    }

    /// Copy of the roll × die table
    pub fn wide(&self) -> Result<WideTable, DiceError> {
        self.results.clone().ok_or_else(DiceError::not_played)
    }

    /// One row per (roll, die) pair
    pub fn narrow(&self) -> Result<NarrowTable, DiceError> {
        self.results
            .as_ref()
            .map(WideTable::to_narrow)
            .ok_or_else(DiceError::not_played)
    }
}

impl RollHistory for Game {
    fn wide_results(&self) -> Result<WideTable, DiceError> {
        self.wide()
    }
}

impl RollHistory for WideTable {
    fn wide_results(&self) -> Result<WideTable, DiceError> {
        Ok(self.clone())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn play_produces_rolls_by_dice_table(
            num_dice in 1usize..5,
            num_rolls in 1usize..200,
            sides in 1i64..10,
            seed in any::<u64>(),
        ) {
            let dice = (0..num_dice)
                .map(|_| Die::new(1..=sides).unwrap())
                .collect();
            let mut game = Game::new(dice).unwrap();
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            game.play_with_rng(num_rolls, &mut rng).unwrap();

            let wide = game.wide().unwrap();
            prop_assert_eq!(wide.shape(), (num_rolls, num_dice));
            prop_assert_eq!(game.narrow().unwrap().shape(), (num_rolls * num_dice, 3));
            for row in wide.rows() {
                for face in row {
                    prop_assert!(game.dice()[0].faces().contains(face));
                }
            }
        }
    }
}
