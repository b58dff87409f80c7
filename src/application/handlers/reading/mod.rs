//! Reading handlers.
//!
//! - `GenerateReadingHandler` - Full reading session (validate, select, analyze, synthesize)
//! - `ComputeProfileHandler` - Numerology profile only
//! - `AnalyzeCombinationHandler` - Card-only patterns for chosen cards
//! - `GetReadingHandler` - Cached reading lookup

mod analyze_combination;
mod compute_profile;
mod generate_reading;
mod get_reading;

pub use analyze_combination::{
    AnalyzeCombinationCommand, AnalyzeCombinationHandler, CombinationAnalysis,
};
pub use compute_profile::{ComputeProfileCommand, ComputeProfileHandler, ProfileResult};
pub use generate_reading::{
    CardSelection, GenerateReadingCommand, GenerateReadingHandler, QuerentInfo, ReadingOptions,
    ReadingOutcome, ReadingPolicy,
};
pub use get_reading::{GetReadingHandler, GetReadingQuery};
