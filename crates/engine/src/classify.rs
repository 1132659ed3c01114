//! Score → class-label mapping.

use crate::model::Class;

/// Score cut points for the three classes. Both bounds are inclusive on
/// the lower side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub mid: f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mid: 46.0,
            high: 80.0,
        }
    }
}

/// Assign a class label to a score.
pub fn label(score: f64, thresholds: &Thresholds) -> Class {
    if score >= thresholds.high {
        Class::Cp
    } else if score >= thresholds.mid {
        Class::Pc
    } else {
        Class::Apc
    }
}
