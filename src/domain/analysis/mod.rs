//! Pattern Analyzer - pure analysis of a drawn set against a querent.
//!
//! # Components
//!
//! - `numeric` - Sequences, repeats, master numbers, reductions, sum and mean
//! - `elemental` - Aggregate balance, dominant/missing elements, pair rules
//! - `suits` - Suit distribution and progression
//! - `geometric` - Sacred-geometry tags and their interpretations
//! - `astrological` - Planet/sign tallies, elemental signs, aspects
//! - `synchronicity` - Matches against the querent's numbers and today
//! - `analyzer` - `PatternAnalyzer`, which assembles all of the above
//!
//! Everything here is a stateless function of its inputs. Interpretive text
//! comes from the injected [`Lexicon`](crate::domain::lexicon::Lexicon).

mod analyzer;
mod astrological;
mod elemental;
mod geometric;
mod numeric;
mod suits;
mod synchronicity;

pub use analyzer::{CardPatterns, PatternAnalysis, PatternAnalyzer};
pub(crate) use analyzer::join_numbers;
pub use astrological::{AstrologicalPatterns, SignCount, TagCount, PLANETARY_ASPECTS};
pub use elemental::{
    pair_tag, ElementRelation, ElementalPatterns, DOMINANCE_RATIO, ELEMENT_PAIR_RULES,
};
pub use geometric::{GeometricPatterns, GeometryInsight};
pub use numeric::{find_repeats, find_sequences, NumberRepeat, NumericPatterns, MIN_SEQUENCE_LENGTH};
pub use suits::SuitPatterns;
pub use synchronicity::{Synchronicities, Synchronicity, SynchronicityKind};
