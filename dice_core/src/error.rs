//! Error types for dice, games and analysis

use crate::types::Face;
use thiserror::Error;

/// Errors raised by dice, games and analyzers
///
/// Every error is returned at the point of the invalid call. A failed
/// operation leaves the receiver exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiceError {
    #[error("Invalid die faces: {0}")]
    InvalidConstruction(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Face {0} is not on this die")]
    FaceNotFound(Face),
    #[error("Die index {index} out of range for a game with {len} dice")]
    DieIndexOutOfRange { index: usize, len: usize },
    #[error("Weight {0:?} is not a numeric value")]
    WeightConversion(String),
}

/// Broad category of a [`DiceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConstruction,
    InvalidArgument,
    OutOfRange,
    TypeConversion,
}

impl DiceError {
    /// Category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiceError::InvalidConstruction(_) => ErrorKind::InvalidConstruction,
            DiceError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            DiceError::FaceNotFound(_) | DiceError::DieIndexOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            DiceError::WeightConversion(_) => ErrorKind::TypeConversion,
        }
    }

    pub(crate) fn not_played() -> Self {
        DiceError::InvalidArgument("game has not been played yet".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            DiceError::InvalidConstruction("dup".into()).kind(),
            ErrorKind::InvalidConstruction
        );
        assert_eq!(DiceError::not_played().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            DiceError::FaceNotFound(Face::Int(7)).kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            DiceError::DieIndexOutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            DiceError::WeightConversion("abc".into()).kind(),
            ErrorKind::TypeConversion
        );
    }

    #[test]
    fn test_error_messages() {
        let err = DiceError::FaceNotFound(Face::Text("joker".into()));
        assert_eq!(err.to_string(), "Face joker is not on this die");

        let err = DiceError::WeightConversion("abc".into());
        assert_eq!(err.to_string(), "Weight \"abc\" is not a numeric value");
    }
}
