//! Pattern Analyzer - assembles every pattern family for a drawn set.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::astrological::AstrologicalPatterns;
use super::elemental::ElementalPatterns;
use super::geometric::GeometricPatterns;
use super::numeric::NumericPatterns;
use super::suits::SuitPatterns;
use super::synchronicity::Synchronicities;
use crate::domain::cards::DrawnSet;
use crate::domain::lexicon::{render, Lexicon};
use crate::domain::numerology::QuerentProfile;

/// Patterns that depend only on the cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPatterns {
    pub numeric: NumericPatterns,
    pub elemental: ElementalPatterns,
    pub suits: SuitPatterns,
    pub geometry: GeometricPatterns,
    pub astrology: AstrologicalPatterns,
}

/// Full analysis of a drawn set against a querent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Date the current-date synchronicities and personal year refer to.
    pub analyzed_on: NaiveDate,
    pub numeric: NumericPatterns,
    pub elemental: ElementalPatterns,
    pub suits: SuitPatterns,
    pub geometry: GeometricPatterns,
    pub astrology: AstrologicalPatterns,
    pub synchronicities: Synchronicities,
    pub significance_summary: String,
}

/// Stateless analyzer over an injected lexicon.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl PatternAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Card-only patterns, for inspecting a combination without a querent.
    pub fn analyze_cards(&self, cards: &DrawnSet) -> CardPatterns {
        let values = cards.cards().flat_map(|c| c.ends()).collect();
        CardPatterns {
            numeric: NumericPatterns::from_values(values),
            elemental: ElementalPatterns::from_cards(cards),
            suits: SuitPatterns::from_cards(cards),
            geometry: GeometricPatterns::from_cards(cards, &self.lexicon),
            astrology: AstrologicalPatterns::from_cards(cards),
        }
    }

    /// Analyzes `cards` for `querent` as of `today`.
    pub fn analyze(
        &self,
        cards: &DrawnSet,
        querent: &QuerentProfile,
        today: NaiveDate,
    ) -> PatternAnalysis {
        let CardPatterns {
            numeric,
            elemental,
            suits,
            geometry,
            astrology,
        } = self.analyze_cards(cards);

        let synchronicities =
            Synchronicities::detect(&numeric.values, querent, today, &self.lexicon.templates);
        let significance_summary = self.significance_summary(&numeric, &elemental, &synchronicities);

        PatternAnalysis {
            analyzed_on: today,
            numeric,
            elemental,
            suits,
            geometry,
            astrology,
            synchronicities,
            significance_summary,
        }
    }

    /// Checks master numbers, single-element dominance and birth-date
    /// synchronicity in that order; each present pattern adds a sentence.
    fn significance_summary(
        &self,
        numeric: &NumericPatterns,
        elemental: &ElementalPatterns,
        synchronicities: &Synchronicities,
    ) -> String {
        let templates = &self.lexicon.templates;
        let mut sentences = Vec::new();

        if numeric.has_master_numbers() {
            sentences.push(render(
                &templates.significance_master,
                &[("numbers", &join_numbers(&numeric.master_numbers))],
            ));
        }
        if let (true, Some(element)) = (elemental.has_single_dominant(), elemental.primary()) {
            sentences.push(render(
                &templates.significance_element,
                &[("element", element.label())],
            ));
        }
        if !synchronicities.birth_date.is_empty() {
            sentences.push(templates.significance_birth.clone());
        }

        if sentences.is_empty() {
            templates.significance_balanced.clone()
        } else {
            sentences.join(" ")
        }
    }
}

impl PatternAnalysis {
    /// The card-only part of the analysis.
    pub fn card_patterns(&self) -> CardPatterns {
        CardPatterns {
            numeric: self.numeric.clone(),
            elemental: self.elemental.clone(),
            suits: self.suits.clone(),
            geometry: self.geometry.clone(),
            astrology: self.astrology.clone(),
        }
    }
}

/// `11, 22` style list.
pub(crate) fn join_numbers(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::{Card, CardBuilder};
    use crate::domain::celestial::Element;
    use crate::domain::numerology::compute_profile;

    fn analyzer() -> PatternAnalyzer {
        PatternAnalyzer::new(Lexicon::builtin())
    }

    fn card(id: &str, first: u32, second: u32, element: Element, strength: u8) -> Card {
        CardBuilder::new(id, id)
            .unwrap()
            .ends(first, second)
            .element(element)
            .strength(element, strength)
            .build()
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    #[test]
    fn ends_three_four_five_nine_form_one_sequence() {
        let set = DrawnSet::upright(vec![
            card("a", 3, 4, Element::Water, 2),
            card("b", 5, 9, Element::Earth, 2),
        ])
        .unwrap();
        let patterns = analyzer().analyze_cards(&set);
        assert_eq!(patterns.numeric.values, vec![3, 4, 5, 9]);
        assert_eq!(patterns.numeric.sequences, vec![vec![3, 4, 5]]);
    }

    #[test]
    fn spirit_absent_is_missing() {
        let set = DrawnSet::upright(vec![
            card("a", 3, 4, Element::Water, 2),
            card("b", 5, 9, Element::Fire, 3),
        ])
        .unwrap();
        let patterns = analyzer().analyze_cards(&set);
        assert!(patterns.elemental.missing.contains(&Element::Spirit));
        assert!(!patterns.elemental.dominant.is_empty());
    }

    #[test]
    fn summary_lists_master_numbers_then_element() {
        let querent = compute_profile("John Smith", "1990-01-15").unwrap();
        let set = DrawnSet::upright(vec![card("a", 22, 40, Element::Fire, 4)]).unwrap();
        let analysis = analyzer().analyze(&set, &querent, today());

        assert!(analysis.significance_summary.starts_with("Master numbers 22"));
        assert!(analysis.significance_summary.contains("Fire element dominates"));
    }

    #[test]
    fn summary_falls_back_to_balanced() {
        let querent = compute_profile("John Smith", "1990-01-15").unwrap();
        let set = DrawnSet::upright(vec![
            card("a", 30, 40, Element::Fire, 3),
            card("b", 31, 42, Element::Water, 3),
        ])
        .unwrap();
        let analysis = analyzer().analyze(&set, &querent, today());
        assert_eq!(
            analysis.significance_summary,
            Lexicon::builtin().templates.significance_balanced
        );
        assert!(analysis.synchronicities.is_empty());
    }

    #[test]
    fn analysis_is_deterministic() {
        let querent = compute_profile("John Smith", "1990-01-15").unwrap();
        let set = DrawnSet::upright(vec![
            card("a", 8, 11, Element::Air, 2),
            card("b", 5, 6, Element::Earth, 5),
        ])
        .unwrap();
        let first = analyzer().analyze(&set, &querent, today());
        let second = analyzer().analyze(&set, &querent, today());
        assert_eq!(first, second);
        assert_eq!(first.card_patterns(), analyzer().analyze_cards(&set));
    }
}
