//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (generate a reading) are kept apart from queries (fetch a
//! cached reading).

pub mod handlers;

pub use handlers::{
    AnalyzeCombinationCommand, AnalyzeCombinationHandler, ComputeProfileCommand,
    ComputeProfileHandler, GenerateReadingCommand, GenerateReadingHandler, GetReadingHandler,
    GetReadingQuery, ReadingOutcome, ReadingPolicy,
};
