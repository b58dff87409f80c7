//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod reading;

pub use reading::{
    AnalyzeCombinationCommand, AnalyzeCombinationHandler, CardSelection, CombinationAnalysis,
    ComputeProfileCommand, ComputeProfileHandler, GenerateReadingCommand, GenerateReadingHandler,
    GetReadingHandler, GetReadingQuery, ProfileResult, QuerentInfo, ReadingOptions,
    ReadingOutcome, ReadingPolicy,
};
