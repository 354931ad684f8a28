//! Die - weighted sampler over a fixed set of faces

use crate::error::DiceError;
use crate::types::{Face, IntoWeight};
use rand::distributions::WeightedIndex;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// A die with unique faces and a mutable weight per face
///
/// Faces are fixed at construction and kept in the order they were given.
/// Every face starts with weight 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    faces: Vec<Face>,
    /// Parallel to `faces`
    weights: Vec<f64>,
}

impl Die {
    /// Create a die from a collection of unique faces
    ///
    /// Fails with [`DiceError::InvalidConstruction`] when the collection is
    /// empty, mixes integer and text faces, or contains duplicates.
    pub fn new<F, I>(faces: I) -> Result<Self, DiceError>
    where
        F: Into<Face>,
        I: IntoIterator<Item = F>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();

        let Some(first) = faces.first() else {
            return Err(DiceError::InvalidConstruction(
                "a die needs at least one face".to_string(),
            ));
        };
        let kind = first.kind();
        if faces.iter().any(|f| f.kind() != kind) {
            return Err(DiceError::InvalidConstruction(
                "faces must be all integers or all text".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(faces.len());
        for face in &faces {
            if !seen.insert(face) {
                return Err(DiceError::InvalidConstruction(format!(
                    "duplicate face {}",
                    face
                )));
            }
        }

        tracing::debug!(faces = faces.len(), "created die");
        let weights = vec![1.0; faces.len()];
        Ok(Die { faces, weights })
    }

    /// Faces in construction order
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Current weight of a face, if the face is on this die
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.position(face).map(|idx| self.weights[idx])
    }

    /// Overwrite the weight of one face
    ///
    /// The face must be on the die ([`DiceError::FaceNotFound`]) and the
    /// weight must read as a number ([`DiceError::WeightConversion`]).
    /// Negative and non-finite weights are rejected as invalid arguments.
    pub fn set_weight(
        &mut self,
        face: impl Into<Face>,
        new_weight: impl IntoWeight,
    ) -> Result<(), DiceError> {
        let face = face.into();
        let idx = self
            .position(&face)
            .ok_or_else(|| DiceError::FaceNotFound(face.clone()))?;
        let weight = new_weight.into_weight()?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(DiceError::InvalidArgument(format!(
                "weight for face {} must be a finite non-negative number, got {}",
                face, weight
            )));
        }

        tracing::debug!(%face, weight, "set face weight");
        self.weights[idx] = weight;
        Ok(())
    }

    /// Restore every face to weight 1.0
    pub fn reset_weights(&mut self) {
        self.weights.iter_mut().for_each(|w| *w = 1.0);
    }

    /// Sum of all face weights
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Roll the die `num_rolls` times using the thread-local RNG
    pub fn roll(&self, num_rolls: usize) -> Result<Vec<Face>, DiceError> {
        let mut rng = rand::thread_rng();
        self.roll_with_rng(num_rolls, &mut rng)
    }

    /// Roll the die with a provided RNG (for deterministic testing)
    ///
    /// Each draw is independent and uses the weights as they are at the time
    /// of the call. Draws are returned in order.
    pub fn roll_with_rng(
        &self,
        num_rolls: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Face>, DiceError> {
        if num_rolls == 0 {
            return Err(DiceError::InvalidArgument(
                "number of rolls must be at least 1".to_string(),
            ));
        }
        let total = self.total_weight();
        if !total.is_finite() {
            return Err(DiceError::InvalidArgument(format!(
                "die weights sum to {}, which cannot be sampled",
                total
            )));
        }
        let dist = WeightedIndex::new(&self.weights).map_err(|e| {
            DiceError::InvalidArgument(format!("cannot sample from die weights: {}", e))
        })?;

        Ok((0..num_rolls)
            .map(|_| self.faces[rng.sample(&dist)].clone())
            .collect())
    }

    /// Snapshot of every face and its weight
    pub fn current_state(&self) -> DieState {
        DieState {
            entries: self
                .faces
                .iter()
                .cloned()
                .zip(self.weights.iter().copied())
                .collect(),
        }
    }

    fn position(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
}

/// Owned copy of a die's face → weight mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DieState {
    entries: Vec<(Face, f64)>,
}

impl DieState {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.entries
            .iter()
            .find(|(f, _)| f == face)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Face, f64)> {
        self.entries.iter().map(|(f, w)| (f, *w))
    }

    /// Probability of rolling `face` under these weights
    pub fn probability(&self, face: &Face) -> Option<f64> {
        let total: f64 = self.entries.iter().map(|(_, w)| w).sum();
        let weight = self.weight(face)?;
        if total > 0.0 {
            Some(weight / total)
        } else {
            Some(0.0)
        }
    }
}
