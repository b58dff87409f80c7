//! AnalyzeCombination - card-only pattern overview for a set of card ids.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::analysis::{CardPatterns, PatternAnalyzer};
use crate::domain::cards::{Card, DrawnSet};
use crate::domain::foundation::{CardId, DomainError, ErrorCode, ValidationError};
use crate::domain::lexicon::Lexicon;
use crate::domain::reading::ReadingSynthesizer;
use crate::ports::CardCatalog;

#[derive(Debug, Clone)]
pub struct AnalyzeCombinationCommand {
    pub card_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinationAnalysis {
    pub cards: Vec<Card>,
    pub quick_analysis: String,
    pub patterns: CardPatterns,
}

/// Handler for analyzing an arbitrary card combination.
pub struct AnalyzeCombinationHandler {
    catalog: Arc<dyn CardCatalog>,
    analyzer: PatternAnalyzer,
    synthesizer: ReadingSynthesizer,
}

impl AnalyzeCombinationHandler {
    pub fn new(catalog: Arc<dyn CardCatalog>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            catalog,
            analyzer: PatternAnalyzer::new(Arc::clone(&lexicon)),
            synthesizer: ReadingSynthesizer::new(lexicon),
        }
    }

    pub fn handle(&self, cmd: AnalyzeCombinationCommand) -> Result<CombinationAnalysis, DomainError> {
        let ids = resolve_card_ids(self.catalog.as_ref(), &cmd.card_ids)?;
        let cards: Vec<Card> = ids
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect();

        let drawn = DrawnSet::upright(cards.clone())?;
        let patterns = self.analyzer.analyze_cards(&drawn);
        let quick_analysis = self.synthesizer.quick_analysis(&patterns);
        debug!(card_count = cards.len(), "Combination analyzed");

        Ok(CombinationAnalysis {
            cards,
            quick_analysis,
            patterns,
        })
    }
}

/// Parses raw ids and checks each one against the catalog.
pub(crate) fn resolve_card_ids(
    catalog: &dyn CardCatalog,
    raw: &[String],
) -> Result<Vec<CardId>, DomainError> {
    if raw.is_empty() {
        return Err(ValidationError::empty_field("card_ids").into());
    }
    raw.iter()
        .map(|s| {
            let id = CardId::new(s.as_str())?;
            if catalog.get(&id).is_none() {
                return Err(DomainError::new(
                    ErrorCode::CardNotFound,
                    format!("Unknown card id '{}'", id),
                )
                .with_detail("card_id", id.as_str()));
            }
            Ok(id)
        })
        .collect()
}
