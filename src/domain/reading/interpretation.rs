//! Interpretation sections of a reading.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CardId;

/// What one card says in its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInsight {
    pub position: usize,
    pub position_label: String,
    pub card_id: CardId,
    pub card_name: String,
    pub reversed: bool,
    pub text: String,
}

/// The eight interpretation sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub summary: String,
    pub numerology: String,
    pub astrology: String,
    pub spread: Vec<CardInsight>,
    pub elemental_guidance: String,
    pub recommendations: Vec<String>,
    pub timing: String,
    pub follow_up_questions: Vec<String>,
}
