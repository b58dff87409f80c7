//! GenerateReading - the session orchestrator.
//!
//! Validates the querent and selection, draws cards through the entropy
//! port, then runs the pattern analyzer and the reading synthesizer in
//! sequence. Every failure is folded into a `ReadingOutcome` with
//! `success: false`; nothing escapes this boundary as an error.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::analysis::PatternAnalyzer;
use crate::domain::cards::{Card, DrawnSet};
use crate::domain::celestial::Element;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::lexicon::Lexicon;
use crate::domain::numerology::QuerentProfile;
use crate::domain::reading::{Reading, ReadingSynthesizer};
use crate::domain::selection::{
    draw_guided, draw_random, orient, pick_specific, GuidedCriteria, SelectionMethod,
};
use crate::ports::{CardCatalog, Clock, EntropySource, ReadingStore};

use super::analyze_combination::resolve_card_ids;
use super::compute_profile::validate_querent;

/// Who the reading is for.
#[derive(Debug, Clone)]
pub struct QuerentInfo {
    pub full_name: String,
    pub birth_date: String,
    pub question: Option<String>,
}

/// How to choose the cards.
#[derive(Debug, Clone, Default)]
pub struct CardSelection {
    pub method: SelectionMethod,
    pub number_of_cards: Option<usize>,
    /// Required for `specific`, ignored otherwise.
    pub card_ids: Vec<String>,
    /// Element a guided draw leans toward.
    pub focus_element: Option<Element>,
    /// Makes the draw reproducible.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct ReadingOptions {
    /// `None` follows the service setting.
    pub include_reversals: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GenerateReadingCommand {
    pub querent: QuerentInfo,
    pub selection: Option<CardSelection>,
    pub options: Option<ReadingOptions>,
}

/// Service-level settings for reading generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingPolicy {
    pub default_card_count: usize,
    pub reversals_enabled: bool,
    pub reversal_probability: f64,
    /// Querents younger than this get an entertainment-only warning.
    pub adult_age: i32,
    /// Oldest accepted age.
    pub max_age: i32,
    pub cache_readings: bool,
}

impl Default for ReadingPolicy {
    fn default() -> Self {
        Self {
            default_card_count: 3,
            reversals_enabled: true,
            reversal_probability: 0.3,
            adult_age: 18,
            max_age: 150,
            cache_readings: true,
        }
    }
}

/// Result of a reading request.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DomainError>,
    pub warnings: Vec<String>,
}

impl ReadingOutcome {
    pub fn success(reading: Reading, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            reading: Some(reading),
            error: None,
            warnings,
        }
    }

    pub fn failure(error: DomainError, warnings: Vec<String>) -> Self {
        Self {
            success: false,
            reading: None,
            error: Some(error),
            warnings,
        }
    }
}

/// Handler for generating readings.
pub struct GenerateReadingHandler {
    catalog: Arc<dyn CardCatalog>,
    entropy: Arc<dyn EntropySource>,
    clock: Arc<dyn Clock>,
    store: Arc<dyn ReadingStore>,
    analyzer: PatternAnalyzer,
    synthesizer: ReadingSynthesizer,
    policy: ReadingPolicy,
}

impl GenerateReadingHandler {
    pub fn new(
        catalog: Arc<dyn CardCatalog>,
        lexicon: Arc<Lexicon>,
        entropy: Arc<dyn EntropySource>,
        clock: Arc<dyn Clock>,
        store: Arc<dyn ReadingStore>,
        policy: ReadingPolicy,
    ) -> Self {
        Self {
            catalog,
            entropy,
            clock,
            store,
            analyzer: PatternAnalyzer::new(Arc::clone(&lexicon)),
            synthesizer: ReadingSynthesizer::new(lexicon),
            policy,
        }
    }

    pub async fn handle(&self, cmd: GenerateReadingCommand) -> ReadingOutcome {
        let mut warnings = Vec::new();
        match self.generate(cmd, &mut warnings).await {
            Ok(reading) => ReadingOutcome::success(reading, warnings),
            Err(error) => {
                warn!(code = %error.code, message = %error.message, "Reading request rejected");
                ReadingOutcome::failure(error, warnings)
            }
        }
    }

    async fn generate(
        &self,
        cmd: GenerateReadingCommand,
        warnings: &mut Vec<String>,
    ) -> Result<Reading, DomainError> {
        // 1. Querent
        let querent = validate_querent(
            &cmd.querent.full_name,
            &cmd.querent.birth_date,
            self.clock.today(),
            &self.policy,
            warnings,
        )?;

        // 2. Cards
        let selection = cmd.selection.unwrap_or_default();
        let options = cmd.options.unwrap_or_default();
        let mut rng = self.entropy.rng(selection.seed);
        let cards = self.select_cards(&selection, &querent, rng.as_mut(), warnings)?;

        let reversals = options
            .include_reversals
            .unwrap_or(self.policy.reversals_enabled)
            && self.policy.reversals_enabled;
        let probability = reversals.then_some(self.policy.reversal_probability);
        let drawn = DrawnSet::new(orient(cards, probability, rng.as_mut()))?;
        debug!(
            method = %selection.method,
            card_count = drawn.len(),
            reversals,
            "Cards selected"
        );

        // 3. Analysis and synthesis
        let now = self.clock.now();
        let analysis = self.analyzer.analyze(&drawn, &querent, now.date());
        let synthesis = self.synthesizer.synthesize(&analysis, &querent, &drawn);
        let reading = Reading::assemble(
            querent,
            cmd.querent.question,
            drawn,
            analysis,
            synthesis,
            selection.method,
            now,
        );

        // 4. Cache
        if self.policy.cache_readings {
            if let Err(e) = self.store.save(&reading).await {
                warn!(reading_id = %reading.id(), error = %e, "Failed to cache reading");
            }
        }

        info!(
            reading_id = %reading.id(),
            method = %selection.method,
            card_count = reading.drawn.len(),
            confidence = %reading.metadata.confidence,
            significance = %reading.metadata.significance,
            "Reading generated"
        );
        Ok(reading)
    }

    fn select_cards(
        &self,
        selection: &CardSelection,
        querent: &QuerentProfile,
        rng: &mut dyn rand::RngCore,
        warnings: &mut Vec<String>,
    ) -> Result<Vec<Card>, DomainError> {
        if let Some(n) = selection.number_of_cards {
            DrawnSet::check_count(n).map_err(invalid_selection)?;
        }
        let count = selection
            .number_of_cards
            .unwrap_or(self.policy.default_card_count);
        let catalog = self.catalog.all();

        let cards = match selection.method {
            SelectionMethod::Random => draw_random(catalog, count, rng)?,
            SelectionMethod::Guided => {
                let criteria = GuidedCriteria::for_querent(querent, selection.focus_element);
                draw_guided(catalog, count, &criteria, rng)?
            }
            SelectionMethod::Specific => {
                let ids = resolve_card_ids(self.catalog.as_ref(), &selection.card_ids)?;
                if let Some(n) = selection.number_of_cards {
                    if n != ids.len() {
                        warnings.push(format!(
                            "number_of_cards ({}) ignored; {} specific cards were requested",
                            n,
                            ids.len()
                        ));
                    }
                }
                let (cards, duplicates) = pick_specific(catalog, &ids)?;
                warnings.extend(duplicates);
                cards
            }
        };
        Ok(cards)
    }
}

fn invalid_selection(err: ValidationError) -> DomainError {
    DomainError::new(ErrorCode::InvalidSelection, err.to_string()).with_detail("field", err.field())
}
