//! Numerology number value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::reduction::{is_reduced, reduce, MasterNumberPolicy, REDUCTION_SENTINEL};
use crate::domain::foundation::ValidationError;

/// A reduced numerology value: 1..=9 or a master number (11, 22, 33, 44).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NumerologyNumber(u32);

impl NumerologyNumber {
    /// Validates an already-reduced value.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if is_reduced(value, MasterNumberPolicy::Extended) {
            Ok(Self(value))
        } else {
            Err(ValidationError::invalid_format(
                "numerology_number",
                format!("{} is neither 1-9 nor a master number", value),
            ))
        }
    }

    /// Wraps the output of the reduction kernel, rejecting the sentinel.
    pub fn from_reduced(field: &str, value: u32) -> Result<Self, ValidationError> {
        if value == REDUCTION_SENTINEL {
            return Err(ValidationError::invalid_format(
                field,
                "value could not be reduced to a numerology number",
            ));
        }
        Self::new(value).map_err(|_| {
            ValidationError::invalid_format(field, format!("{} is not a reduced value", value))
        })
    }

    /// Reduces a positive sum with the standard policy.
    ///
    /// Only used where the sum is known to be positive.
    pub(crate) fn reduce_positive(sum: u64) -> Self {
        let reduced = reduce(i64::try_from(sum).unwrap_or(i64::MAX));
        debug_assert!(reduced != REDUCTION_SENTINEL, "positive sums never hit the sentinel");
        Self(reduced.max(1))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true for 11, 22, 33 and 44.
    pub fn is_master(&self) -> bool {
        self.0 > 9
    }
}

impl TryFrom<u32> for NumerologyNumber {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NumerologyNumber> for u32 {
    fn from(n: NumerologyNumber) -> Self {
        n.0
    }
}

impl fmt::Display for NumerologyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A challenge number: 0..=9 or a master number.
///
/// Zero is a legitimate challenge value here (equal reduced components), not
/// the reduction failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeNumber(u32);

impl ChallengeNumber {
    /// Reduces an absolute difference into a challenge number.
    pub(crate) fn from_difference(a: u32, b: u32) -> Self {
        Self(reduce(i64::from(a.abs_diff(b))))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChallengeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
