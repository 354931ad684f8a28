//! Count tables produced by the analyzer

use crate::types::Face;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-roll face counts
///
/// One row per roll, one column per face seen anywhere in the history
/// (sorted ascending). Faces absent from a roll count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceCountTable {
    faces: Vec<Face>,
    counts: Vec<Vec<u64>>,
}

impl FaceCountTable {
    pub(crate) fn from_rows(rows: &[Vec<Face>]) -> Self {
        let mut columns: BTreeMap<&Face, usize> = rows.iter().flatten().map(|f| (f, 0)).collect();
        for (idx, slot) in columns.values_mut().enumerate() {
            *slot = idx;
        }

        let counts = rows
            .iter()
            .map(|row| {
                let mut counts = vec![0; columns.len()];
                for face in row {
                    counts[columns[face]] += 1;
                }
                counts
            })
            .collect();

        FaceCountTable {
            faces: columns.into_keys().cloned().collect(),
            counts,
        }
    }

    /// Column labels
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_rolls(&self) -> usize {
        self.counts.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.counts.len(), self.faces.len())
    }

    /// Counts for one roll, aligned with [`faces`](Self::faces)
    pub fn row(&self, roll: usize) -> Option<&[u64]> {
        self.counts.get(roll).map(Vec::as_slice)
    }

    pub fn count(&self, roll: usize, face: &Face) -> Option<u64> {
        let column = self.faces.binary_search(face).ok()?;
        self.counts.get(roll).map(|row| row[column])
    }
}

/// One distinct outcome tuple and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub key: Vec<Face>,
    pub count: u64,
}

/// Frequency table keyed by outcome tuples
///
/// Entries are ordered by descending count, ties by ascending key. Only
/// observed tuples appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountTable {
    entries: Vec<CountEntry>,
}

impl CountTable {
    pub(crate) fn tally<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Vec<Face>>,
    {
        let mut tally: BTreeMap<Vec<Face>, u64> = BTreeMap::new();
        for key in keys {
            *tally.entry(key).or_insert(0) += 1;
        }

        let mut entries: Vec<CountEntry> = tally
            .into_iter()
            .map(|(key, count)| CountEntry { key, count })
            .collect();
        // Stable sort keeps the BTreeMap key order within equal counts
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        CountTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountEntry> {
        self.entries.iter()
    }

    /// Count for an exact key, if it was observed
    pub fn get(&self, key: &[Face]) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.count)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The `n` most frequent entries
    pub fn top(&self, n: usize) -> &[CountEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
}
