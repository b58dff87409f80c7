//! Numeric patterns across the card ends.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::numerology::{reduce_with, MasterNumberPolicy};

/// Shortest run of consecutive values reported as a sequence.
pub const MIN_SEQUENCE_LENGTH: usize = 3;

/// A value that appears more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRepeat {
    pub value: u32,
    pub count: usize,
}

/// Numeric analysis of every card end in a spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericPatterns {
    /// Both ends of each card, in draw order.
    pub values: Vec<u32>,
    /// Maximal runs of consecutive integers, ascending.
    pub sequences: Vec<Vec<u32>>,
    pub repeats: Vec<NumberRepeat>,
    /// Distinct values in {11, 22, 33, 44}, ascending.
    pub master_numbers: Vec<u32>,
    /// `values` reduced with the extended master policy.
    pub reduced: Vec<u32>,
    pub sum: u64,
    pub mean: f64,
}

impl NumericPatterns {
    pub fn from_values(values: Vec<u32>) -> Self {
        let policy = MasterNumberPolicy::Extended;
        let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
        let mean = if values.is_empty() {
            0.0
        } else {
            sum as f64 / values.len() as f64
        };

        let mut master_numbers: Vec<u32> = values
            .iter()
            .copied()
            .filter(|&v| policy.is_master(u64::from(v)))
            .collect();
        master_numbers.sort_unstable();
        master_numbers.dedup();

        Self {
            sequences: find_sequences(&values),
            repeats: find_repeats(&values),
            reduced: values
                .iter()
                .map(|&v| reduce_with(i64::from(v), policy))
                .collect(),
            master_numbers,
            sum,
            mean,
            values,
        }
    }

    pub fn has_master_numbers(&self) -> bool {
        !self.master_numbers.is_empty()
    }

    pub fn has_sequences(&self) -> bool {
        !self.sequences.is_empty()
    }
}

/// Maximal runs (length >= 3) of consecutive integers among the distinct
/// values, each run ascending, runs ordered by their first value.
pub fn find_sequences(values: &[u32]) -> Vec<Vec<u32>> {
    let mut distinct = values.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let mut sequences = Vec::new();
    let mut run: Vec<u32> = Vec::new();
    for value in distinct {
        match run.last() {
            Some(&last) if last + 1 == value => run.push(value),
            _ => {
                if run.len() >= MIN_SEQUENCE_LENGTH {
                    sequences.push(std::mem::take(&mut run));
                }
                run.clear();
                run.push(value);
            }
        }
    }
    if run.len() >= MIN_SEQUENCE_LENGTH {
        sequences.push(run);
    }
    sequences
}

/// Values occurring at least twice, ascending by value.
pub fn find_repeats(values: &[u32]) -> Vec<NumberRepeat> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count >= 2)
        .map(|(value, count)| NumberRepeat { value, count })
        .collect()
}
