//! HTTP DTOs for reading endpoints.
//!
//! Request types keep enum-like fields as strings and default missing
//! fields, so that bad input surfaces as a 422 with a field name rather
//! than a JSON rejection.

use serde::{Deserialize, Serialize};

use crate::application::handlers::reading::{
    AnalyzeCombinationCommand, CardSelection, ComputeProfileCommand, GenerateReadingCommand,
    ProfileResult, QuerentInfo, ReadingOptions,
};
use crate::domain::cards::{Card, Suit};
use crate::domain::celestial::{Element, ZodiacSign};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::numerology::QuerentProfile;
use crate::domain::selection::SelectionMethod;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to compute a numerology profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeProfileRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub birth_date: String,
}

impl From<ComputeProfileRequest> for ComputeProfileCommand {
    fn from(req: ComputeProfileRequest) -> Self {
        Self {
            full_name: req.full_name,
            birth_date: req.birth_date,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuerentInfoDto {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardSelectionDto {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub number_of_cards: Option<usize>,
    #[serde(default)]
    pub card_ids: Vec<String>,
    #[serde(default)]
    pub focus_element: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingOptionsDto {
    #[serde(default)]
    pub include_reversals: Option<bool>,
}

/// Request to generate a reading.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateReadingRequest {
    #[serde(default)]
    pub querent_info: QuerentInfoDto,
    #[serde(default)]
    pub card_selection: Option<CardSelectionDto>,
    #[serde(default)]
    pub reading_options: Option<ReadingOptionsDto>,
}

impl GenerateReadingRequest {
    /// Parses the string fields into a command.
    pub fn into_command(self) -> Result<GenerateReadingCommand, ValidationError> {
        let selection = self
            .card_selection
            .map(|s| -> Result<CardSelection, ValidationError> {
                Ok(CardSelection {
                    method: s
                        .method
                        .as_deref()
                        .map(str::parse::<SelectionMethod>)
                        .transpose()?
                        .unwrap_or_default(),
                    number_of_cards: s.number_of_cards,
                    card_ids: s.card_ids,
                    focus_element: s
                        .focus_element
                        .as_deref()
                        .map(str::parse::<Element>)
                        .transpose()?,
                    seed: s.seed,
                })
            })
            .transpose()?;

        Ok(GenerateReadingCommand {
            querent: QuerentInfo {
                full_name: self.querent_info.full_name,
                birth_date: self.querent_info.birth_date,
                question: self.querent_info.question,
            },
            selection,
            options: self.reading_options.map(|o| ReadingOptions {
                include_reversals: o.include_reversals,
            }),
        })
    }
}

/// Request to analyze a card combination.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeCardsRequest {
    #[serde(default)]
    pub card_ids: Vec<String>,
}

impl From<AnalyzeCardsRequest> for AnalyzeCombinationCommand {
    fn from(req: AnalyzeCardsRequest) -> Self {
        Self {
            card_ids: req.card_ids,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Profile with the personal year for the current date.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: QuerentProfile,
    pub personal_year: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<ProfileResult> for ProfileResponse {
    fn from(result: ProfileResult) -> Self {
        Self {
            profile: result.profile,
            personal_year: result.personal_year.value(),
            warnings: result.warnings,
        }
    }
}

/// Catalog listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub suit: Suit,
    pub element: Element,
    pub first_end: u32,
    pub second_end: u32,
    pub astrological_sign: ZodiacSign,
}

impl From<&Card> for CardSummary {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.clone(),
            suit: card.suit,
            element: card.element,
            first_end: card.first_end,
            second_end: card.second_end,
            astrological_sign: card.astrological_sign,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardListResponse {
    pub total: usize,
    pub cards: Vec<CardSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub cards: usize,
}

/// Error body for every non-reading endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details: if error.details.is_empty() {
                None
            } else {
                serde_json::to_value(&error.details).ok()
            },
        }
    }
}
