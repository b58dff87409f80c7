//! Confidence and significance scores.
//!
//! Both are heuristics built from fixed increments over the pattern
//! analysis. Confidence is not a probability and carries no statistical
//! meaning; it only ranks how many corroborating patterns a reading has.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::analysis::PatternAnalysis;

pub const CONFIDENCE_BASE: f64 = 0.5;
pub const CONFIDENCE_MASTER_NUMBERS: f64 = 0.2;
pub const CONFIDENCE_BIRTH_SYNCHRONICITY: f64 = 0.15;
pub const CONFIDENCE_SINGLE_ELEMENT: f64 = 0.1;
pub const CONFIDENCE_SEQUENCE: f64 = 0.1;
pub const CONFIDENCE_DATE_SYNCHRONICITY: f64 = 0.05;

pub const SIGNIFICANCE_MIN: u8 = 1;
pub const SIGNIFICANCE_MAX: u8 = 5;

/// Heuristic confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Clamps into [0, 1]; NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn from_analysis(analysis: &PatternAnalysis) -> Self {
        let mut score = CONFIDENCE_BASE;
        if analysis.numeric.has_master_numbers() {
            score += CONFIDENCE_MASTER_NUMBERS;
        }
        if !analysis.synchronicities.birth_date.is_empty() {
            score += CONFIDENCE_BIRTH_SYNCHRONICITY;
        }
        if analysis.elemental.has_single_dominant() {
            score += CONFIDENCE_SINGLE_ELEMENT;
        }
        if analysis.numeric.has_sequences() {
            score += CONFIDENCE_SEQUENCE;
        }
        if !analysis.synchronicities.current_date.is_empty() {
            score += CONFIDENCE_DATE_SYNCHRONICITY;
        }
        Self::new(score)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Significance rating, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Significance(u8);

impl Significance {
    pub fn new(value: u32) -> Self {
        let clamped = value.clamp(u32::from(SIGNIFICANCE_MIN), u32::from(SIGNIFICANCE_MAX));
        Self(clamped as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn from_analysis(analysis: &PatternAnalysis) -> Self {
        let mut score: u32 = 1;
        if analysis.numeric.has_master_numbers() {
            score += 2;
        }
        if analysis.synchronicities.birth_date.len() > 1 {
            score += 2;
        }
        if !analysis.synchronicities.name_numbers.is_empty() {
            score += 1;
        }
        if analysis.elemental.harmonies.len() > 2 {
            score += 1;
        }
        if !analysis.astrology.aspects.is_empty() {
            score += 1;
        }
        Self::new(score)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
