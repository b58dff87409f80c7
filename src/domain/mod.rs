//! Domain layer containing the engine's business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamp, errors)
//! - `numerology` - Digit-reduction kernel and the querent profile calculator
//! - `celestial` - Elements and zodiac signs
//! - `cards` - Card records and drawn sets
//! - `selection` - Random, guided and specific card selection
//! - `lexicon` - Interpretation lookup tables and template rendering
//! - `analysis` - Pattern analyzer over a drawn set and querent
//! - `reading` - Reading synthesizer, scoring and the Reading aggregate

pub mod analysis;
pub mod cards;
pub mod celestial;
pub mod foundation;
pub mod lexicon;
pub mod numerology;
pub mod reading;
pub mod selection;
