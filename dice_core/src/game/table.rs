//! Wide and narrow views of a game's roll history

use crate::error::DiceError;
use crate::types::Face;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Roll-indexed × die-indexed outcome table
///
/// Row `r`, column `i` holds the face die `i` showed on roll `r`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WideTable {
    num_dice: usize,
    rows: Vec<Vec<Face>>,
}

impl WideTable {
    /// Build from rows of equal, non-zero width
    pub fn from_rows(rows: Vec<Vec<Face>>) -> Result<Self, DiceError> {
        let Some(first) = rows.first() else {
            return Err(DiceError::InvalidArgument(
                "a result table needs at least one roll".to_string(),
            ));
        };
        let num_dice = first.len();
        if num_dice == 0 {
            return Err(DiceError::InvalidArgument(
                "a result table needs at least one die".to_string(),
            ));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != num_dice) {
            return Err(DiceError::InvalidArgument(format!(
                "roll {} has {} outcomes, expected {}",
                bad,
                rows[bad].len(),
                num_dice
            )));
        }
        Ok(WideTable { num_dice, rows })
    }

    /// Build from one column of draws per die
    pub fn from_columns(columns: Vec<Vec<Face>>) -> Result<Self, DiceError> {
        let num_rolls = columns.first().map(Vec::len).unwrap_or(0);
        if columns.iter().any(|c| c.len() != num_rolls) {
            return Err(DiceError::InvalidArgument(
                "every die must have the same number of draws".to_string(),
            ));
        }

        let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
        let rows = (0..num_rolls)
            .map(|_| columns.iter_mut().filter_map(Iterator::next).collect())
            .collect();
        Self::from_rows(rows)
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rolls(), self.num_dice)
    }

    pub fn rows(&self) -> &[Vec<Face>] {
        &self.rows
    }

    pub fn row(&self, roll: usize) -> Option<&[Face]> {
        self.rows.get(roll).map(Vec::as_slice)
    }

    pub fn get(&self, roll: usize, die: usize) -> Option<&Face> {
        self.rows.get(roll).and_then(|row| row.get(die))
    }

    /// Every outcome of one die, in roll order
    pub fn column(&self, die: usize) -> impl Iterator<Item = &Face> + '_ {
        self.rows.iter().filter_map(move |row| row.get(die))
    }

    /// Flatten row-major into one record per (roll, die) pair
    pub fn to_narrow(&self) -> NarrowTable {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(roll, row)| {
                row.iter().enumerate().map(move |(die, outcome)| NarrowRow {
                    roll,
                    die,
                    outcome: outcome.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

/// One (roll, die, outcome) record of the narrow view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrowRow {
    pub roll: usize,
    pub die: usize,
    pub outcome: Face,
}

/// Long-format outcome table with one row per (roll, die) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrowTable {
    rows: Vec<NarrowRow>,
}

impl NarrowTable {
    pub const COLUMNS: [&'static str; 3] = ["roll", "die", "outcome"];

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), Self::COLUMNS.len())
    }

    pub fn rows(&self) -> &[NarrowRow] {
        &self.rows
    }
}

/// Shape requested from [`Game::show`](crate::Game::show)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowForm {
    #[default]
    Wide,
    Narrow,
}

impl ShowForm {
    pub fn name(&self) -> &'static str {
        match self {
            ShowForm::Wide => "wide",
            ShowForm::Narrow => "narrow",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ShowForm::Wide => ShowForm::Narrow,
            ShowForm::Narrow => ShowForm::Wide,
        }
    }
}

impl FromStr for ShowForm {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wide" => Ok(ShowForm::Wide),
            "narrow" => Ok(ShowForm::Narrow),
            _ => Err(DiceError::InvalidArgument(format!(
                "invalid form {:?}, must be \"wide\" or \"narrow\"",
                s
            ))),
        }
    }
}

/// Result table in whichever shape was requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultView {
    Wide(WideTable),
    Narrow(NarrowTable),
}

impl ResultView {
    pub fn shape(&self) -> (usize, usize) {
        match self {
            ResultView::Wide(table) => table.shape(),
            ResultView::Narrow(table) => table.shape(),
        }
    }

    pub fn as_wide(&self) -> Option<&WideTable> {
        match self {
            ResultView::Wide(table) => Some(table),
            ResultView::Narrow(_) => None,
        }
    }

    pub fn as_narrow(&self) -> Option<&NarrowTable> {
        match self {
            ResultView::Narrow(table) => Some(table),
            ResultView::Wide(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(values: &[i64]) -> Vec<Face> {
        values.iter().copied().map(Face::Int).collect()
    }

    #[test]
    fn test_from_columns_transposes() {
        let table = WideTable::from_columns(vec![faces(&[1, 2, 3]), faces(&[4, 5, 6])]).unwrap();
        assert_eq!(table.shape(), (3, 2));
        assert_eq!(table.row(0).unwrap(), faces(&[1, 4]).as_slice());
        assert_eq!(table.get(2, 1), Some(&Face::Int(6)));
        assert_eq!(table.column(0).cloned().collect::<Vec<_>>(), faces(&[1, 2, 3]));
    }

    #[test]
    fn test_ragged_input_rejected() {
        assert!(WideTable::from_rows(vec![faces(&[1, 2]), faces(&[3])]).is_err());
        assert!(WideTable::from_columns(vec![faces(&[1, 2]), faces(&[3])]).is_err());
        assert!(WideTable::from_rows(vec![]).is_err());
        assert!(WideTable::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_narrow_is_row_major() {
        let table = WideTable::from_rows(vec![faces(&[1, 2]), faces(&[3, 4])]).unwrap();
        let narrow = table.to_narrow();
        assert_eq!(narrow.shape(), (4, 3));

        let keys: Vec<(usize, usize)> = narrow.rows().iter().map(|r| (r.roll, r.die)).collect();
        assert_eq!(keys, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(narrow.rows()[2].outcome, Face::Int(3));
    }

    #[test]
    fn test_show_form_parse() {
        assert_eq!("wide".parse::<ShowForm>().unwrap(), ShowForm::Wide);
        assert_eq!("NARROW".parse::<ShowForm>().unwrap(), ShowForm::Narrow);
        assert_eq!("Wide".parse::<ShowForm>().unwrap(), ShowForm::Wide);
        assert!("xyz".parse::<ShowForm>().is_err());
        assert_eq!(ShowForm::Wide.toggle(), ShowForm::Narrow);
    }

    #[test]
    fn test_narrow_json_shape() {
        let table = WideTable::from_rows(vec![vec![Face::from("h")]]).unwrap();
        let json = serde_json::to_string(&table.to_narrow()).unwrap();
        assert_eq!(json, r#"{"rows":[{"roll":0,"die":0,"outcome":"h"}]}"#);
    }
}
