//! Reading Synthesizer and the Reading aggregate.
//!
//! # Components
//!
//! - `interpretation` - The eight interpretation sections
//! - `scoring` - Heuristic confidence and significance
//! - `synthesizer` - Template-driven text generation
//! - `reading` - The immutable `Reading` produced per request

mod interpretation;
#[allow(clippy::module_inception)]
mod reading;
mod scoring;
mod synthesizer;

pub use interpretation::{CardInsight, Interpretation};
pub use reading::{Reading, ReadingMetadata};
pub use scoring::{
    Confidence, Significance, CONFIDENCE_BASE, CONFIDENCE_BIRTH_SYNCHRONICITY,
    CONFIDENCE_DATE_SYNCHRONICITY, CONFIDENCE_MASTER_NUMBERS, CONFIDENCE_SEQUENCE,
    CONFIDENCE_SINGLE_ELEMENT, SIGNIFICANCE_MAX, SIGNIFICANCE_MIN,
};
pub use synthesizer::{ReadingSynthesizer, Synthesis};
