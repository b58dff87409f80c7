//! Arcana - Numerological Pattern Synthesis Engine
//!
//! Computes a querent's numerology profile, draws cards, detects numeric,
//! elemental, geometric, astrological and synchronicity patterns across the
//! draw, and synthesizes a templated reading. Exposed as an axum JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
