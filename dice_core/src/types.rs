//! Core value types shared by dice, games and analyzers

use crate::error::DiceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled side of a die
///
/// Faces on one die are either all integers or all text. The derived
/// ordering sorts integers numerically and text lexicographically, which is
/// the order used for combination keys and face-count columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Face {
    Int(i64),
    Text(String),
}

/// Which kind of label a face carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceKind {
    Int,
    Text,
}

impl Face {
    pub fn kind(&self) -> FaceKind {
        match self {
            Face::Int(_) => FaceKind::Int,
            Face::Text(_) => FaceKind::Text,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Int(value) => fmt::Display::fmt(value, f),
            Face::Text(label) => f.pad(label),
        }
    }
}

impl From<i64> for Face {
    fn from(value: i64) -> Self {
        Face::Int(value)
    }
}

impl From<i32> for Face {
    fn from(value: i32) -> Self {
        Face::Int(value as i64)
    }
}

impl From<&str> for Face {
    fn from(label: &str) -> Self {
        Face::Text(label.to_string())
    }
}

impl From<String> for Face {
    fn from(label: String) -> Self {
        Face::Text(label)
    }
}

impl From<&Face> for Face {
    fn from(face: &Face) -> Self {
        face.clone()
    }
}

/// Anything that can be interpreted as a face weight
///
/// Numbers convert directly; strings are parsed as floats. A value that
/// cannot be read as a number yields [`DiceError::WeightConversion`].
pub trait IntoWeight {
    fn into_weight(self) -> Result<f64, DiceError>;
}

macro_rules! numeric_weight {
    ($($t:ty),*) => {
        $(
            impl IntoWeight for $t {
                fn into_weight(self) -> Result<f64, DiceError> {
                    Ok(self as f64)
                }
            }
        )*
    };
}

numeric_weight!(f64, f32, i32, i64, u32, u64, usize);

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64, DiceError> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| DiceError::WeightConversion(self.to_string()))
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64, DiceError> {
        self.as_str().into_weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_ordering() {
        let mut faces = vec![Face::Int(3), Face::Int(1), Face::Int(2)];
        faces.sort();
        assert_eq!(faces, vec![Face::Int(1), Face::Int(2), Face::Int(3)]);

        let mut labels = vec![Face::from("tails"), Face::from("heads")];
        labels.sort();
        assert_eq!(labels[0], Face::Text("heads".to_string()));
    }

    #[test]
    fn test_face_display() {
        assert_eq!(Face::Int(6).to_string(), "6");
        assert_eq!(Face::from("ace").to_string(), "ace");
        assert_eq!(format!("{:>4}", Face::Int(6)), "   6");
    }

    #[test]
    fn test_face_serde_untagged() {
        let json = serde_json::to_string(&vec![Face::Int(1), Face::from("x")]).unwrap();
        assert_eq!(json, r#"[1,"x"]"#);

        let faces: Vec<Face> = serde_json::from_str("[4, 5]").unwrap();
        assert_eq!(faces, vec![Face::Int(4), Face::Int(5)]);
    }

    #[test]
    fn test_numeric_weights() {
        assert!((2.5f64.into_weight().unwrap() - 2.5).abs() < f64::EPSILON);
        assert!((3i32.into_weight().unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((" 0.75 ".into_weight().unwrap() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_weight() {
        let err = "abc".into_weight().unwrap_err();
        assert_eq!(err, DiceError::WeightConversion("abc".to_string()));
    }
}
