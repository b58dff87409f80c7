//! Reading Synthesizer - turns a pattern analysis into interpretive text.
//!
//! Each section selects values out of the analysis by fixed priority rules
//! and fills lexicon templates with them. Nothing here is random: the same
//! analysis, querent and cards always produce the same text and scores.

use std::sync::Arc;

use chrono::Datelike;

use super::interpretation::{CardInsight, Interpretation};
use super::scoring::{Confidence, Significance};
use crate::domain::analysis::{join_numbers, CardPatterns, PatternAnalysis};
use crate::domain::cards::DrawnSet;
use crate::domain::celestial::Element;
use crate::domain::lexicon::{render, Lexicon};
use crate::domain::numerology::{personal_year, NumerologyNumber, QuerentProfile};

/// Number of planetary influences described in the astrology section.
const PLANETS_DESCRIBED: usize = 2;

/// Output of [`ReadingSynthesizer::synthesize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub interpretation: Interpretation,
    pub confidence: Confidence,
    pub significance: Significance,
}

#[derive(Debug, Clone)]
pub struct ReadingSynthesizer {
    lexicon: Arc<Lexicon>,
}

impl ReadingSynthesizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn synthesize(
        &self,
        analysis: &PatternAnalysis,
        querent: &QuerentProfile,
        cards: &DrawnSet,
    ) -> Synthesis {
        let interpretation = Interpretation {
            summary: self.summary(analysis, querent, cards),
            numerology: self.numerology(analysis, querent),
            astrology: self.astrology(analysis, querent),
            spread: self.spread(cards),
            elemental_guidance: self.elemental_guidance(analysis),
            recommendations: self.recommendations(analysis),
            timing: self.timing(analysis, querent),
            follow_up_questions: self.follow_up_questions(analysis),
        };
        Synthesis {
            interpretation,
            confidence: Confidence::from_analysis(analysis),
            significance: Significance::from_analysis(analysis),
        }
    }

    /// One-paragraph overview of card-only patterns.
    pub fn quick_analysis(&self, patterns: &CardPatterns) -> String {
        let t = &self.lexicon.templates;
        let mut parts = vec![render(
            &t.quick_opening,
            &[
                ("count", &patterns.suits.progression.len().to_string()),
                ("sum", &patterns.numeric.sum.to_string()),
            ],
        )];
        if !patterns.elemental.dominant.is_empty() {
            parts.push(render(
                &t.quick_element,
                &[("elements", &element_labels(&patterns.elemental.dominant, " / "))],
            ));
        }
        if patterns.numeric.has_master_numbers() {
            parts.push(render(
                &t.quick_masters,
                &[("numbers", &join_numbers(&patterns.numeric.master_numbers))],
            ));
        }
        if patterns.numeric.has_sequences() {
            let sequences = patterns
                .numeric
                .sequences
                .iter()
                .map(|s| format_sequence(s))
                .collect::<Vec<_>>()
                .join("; ");
            parts.push(render(&t.quick_sequences, &[("sequences", &sequences)]));
        }
        if !patterns.astrology.aspects.is_empty() {
            parts.push(render(
                &t.quick_aspects,
                &[("aspects", &patterns.astrology.aspects.join(", "))],
            ));
        }
        parts.join(" ")
    }

    fn summary(&self, analysis: &PatternAnalysis, querent: &QuerentProfile, cards: &DrawnSet) -> String {
        let opening = render(
            &self.lexicon.templates.summary_opening,
            &[
                ("name", querent.full_name.first_name()),
                ("count", &cards.len().to_string()),
                ("life_path", &querent.life_path.to_string()),
                ("life_path_title", self.title(querent.life_path)),
            ],
        );
        format!("{} {}", opening, analysis.significance_summary)
    }

    fn numerology(&self, analysis: &PatternAnalysis, querent: &QuerentProfile) -> String {
        let t = &self.lexicon.templates;
        let mut sentences = vec![render(
            &t.numerology_core,
            &[
                ("life_path", &querent.life_path.to_string()),
                ("life_path_essence", self.essence(querent.life_path)),
                ("expression", &querent.expression.to_string()),
                ("expression_essence", self.essence(querent.expression)),
                ("soul_urge", &querent.soul_urge.to_string()),
                ("soul_urge_essence", self.essence(querent.soul_urge)),
            ],
        )];

        let numeric = &analysis.numeric;
        if numeric.has_master_numbers() {
            sentences.push(render(
                &t.numerology_masters,
                &[("numbers", &join_numbers(&numeric.master_numbers))],
            ));
        }
        if !numeric.repeats.is_empty() {
            let values: Vec<u32> = numeric.repeats.iter().map(|r| r.value).collect();
            sentences.push(render(
                &t.numerology_repeats,
                &[("numbers", &join_numbers(&values))],
            ));
        }
        if let Some(sequence) = numeric.sequences.first() {
            sentences.push(render(
                &t.numerology_sequences,
                &[("sequence", &format_sequence(sequence))],
            ));
        }
        sentences.join(" ")
    }

    fn astrology(&self, analysis: &PatternAnalysis, querent: &QuerentProfile) -> String {
        let t = &self.lexicon.templates;
        let mut sentences = vec![render(
            &t.astrology_sun,
            &[
                ("sign", querent.sun_sign.label()),
                ("sign_description", self.lexicon.sign(querent.sun_sign).unwrap_or_default()),
            ],
        )];

        let described = analysis
            .astrology
            .top_planets(PLANETS_DESCRIBED)
            .filter_map(|p| self.lexicon.planet(&p.tag).map(|entry| (p, entry)));
        for (rank, (planet, entry)) in described.enumerate() {
            let template = if rank == 0 {
                &t.astrology_planets
            } else {
                &t.astrology_second_planet
            };
            sentences.push(render(
                template,
                &[
                    ("planet", &capitalize(&planet.tag)),
                    ("planet_meaning", &entry.meaning),
                ],
            ));
        }

        if let Some(element) = analysis.astrology.leading_sign_element() {
            sentences.push(render(&t.astrology_signs, &[("element", element.label())]));
        }
        for aspect in &analysis.astrology.aspects {
            if let Some(text) = self.lexicon.aspect(aspect) {
                sentences.push(text.to_string());
            }
        }
        sentences.join(" ")
    }

    fn spread(&self, cards: &DrawnSet) -> Vec<CardInsight> {
        let count = cards.len();
        cards
            .iter()
            .map(|drawn| {
                let label = self.lexicon.position_label(count, drawn.position);
                let keywords = if drawn.card.keywords.is_empty() {
                    self.lexicon
                        .suits
                        .get(&drawn.card.suit)
                        .cloned()
                        .unwrap_or_default()
                } else {
                    drawn.card.keywords.join(", ")
                };
                let text = render(
                    &self.lexicon.templates.spread_line,
                    &[
                        ("position", &label),
                        ("card", &drawn.card.name),
                        ("orientation", if drawn.reversed { "reversed" } else { "upright" }),
                        ("keywords", &keywords),
                        ("meaning", drawn.oriented_meaning()),
                    ],
                );
                CardInsight {
                    position: drawn.position,
                    position_label: label,
                    card_id: drawn.card.id.clone(),
                    card_name: drawn.card.name.clone(),
                    reversed: drawn.reversed,
                    text: text.trim_end().to_string(),
                }
            })
            .collect()
    }

    fn elemental_guidance(&self, analysis: &PatternAnalysis) -> String {
        let elemental = &analysis.elemental;
        let mut sentences = Vec::new();
        if let Some(entry) = elemental.primary().and_then(|e| self.lexicon.element(e)) {
            sentences.push(entry.guidance.clone());
        }
        for tag in elemental.conflicts.iter().chain(&elemental.harmonies) {
            if let Some(text) = self.lexicon.relation(tag) {
                sentences.push(text.to_string());
            }
        }
        if !elemental.missing.is_empty() {
            sentences.push(render(
                &self.lexicon.templates.elemental_missing,
                &[("elements", &element_labels(&elemental.missing, ", "))],
            ));
        }
        sentences.join(" ")
    }

    /// Element first, then numerology, astrology, synchronicity, geometry.
    fn recommendations(&self, analysis: &PatternAnalysis) -> Vec<String> {
        let t = &self.lexicon.templates;
        let mut out = Vec::new();

        let primary = analysis.elemental.primary().unwrap_or(Element::Spirit);
        if let Some(entry) = self.lexicon.element(primary) {
            out.push(entry.recommendation.clone());
        }
        if analysis.numeric.has_master_numbers() {
            out.push(render(
                &t.recommendation_master,
                &[("numbers", &join_numbers(&analysis.numeric.master_numbers))],
            ));
        }
        if let Some(advice) = analysis
            .astrology
            .planets
            .first()
            .and_then(|p| self.lexicon.planet(&p.tag))
            .and_then(|entry| entry.recommendation.clone())
        {
            out.push(advice);
        }
        if !analysis.synchronicities.birth_date.is_empty() {
            out.push(t.recommendation_birth.clone());
        }
        for tag in &analysis.geometry.tags {
            if let Some(practice) = self.lexicon.geometry(tag).and_then(|g| g.practice.clone()) {
                out.push(practice);
            }
        }
        out
    }

    fn timing(&self, analysis: &PatternAnalysis, querent: &QuerentProfile) -> String {
        let mut sentences = Vec::new();
        if let Some(entry) = analysis.elemental.primary().and_then(|e| self.lexicon.element(e)) {
            sentences.push(entry.timing.clone());
        }
        let year = personal_year(&querent.birth_date, analysis.analyzed_on.year());
        sentences.push(render(
            &self.lexicon.templates.personal_year,
            &[
                ("personal_year", &year.to_string()),
                ("personal_year_essence", self.essence(year)),
            ],
        ));
        sentences.join(" ")
    }

    fn follow_up_questions(&self, analysis: &PatternAnalysis) -> Vec<String> {
        let t = &self.lexicon.templates;
        let mut out = Vec::new();
        if let Some(entry) = analysis.elemental.primary().and_then(|e| self.lexicon.element(e)) {
            out.push(entry.question.clone());
        }
        if analysis.numeric.has_master_numbers() {
            out.push(t.follow_up_master.clone());
        }
        if !analysis.synchronicities.is_empty() {
            out.push(t.follow_up_synchronicity.clone());
        }
        out.extend(t.follow_up_general.iter().cloned());
        out
    }

    fn title(&self, n: NumerologyNumber) -> &str {
        self.lexicon.number(n).map(|e| e.title.as_str()).unwrap_or_default()
    }

    fn essence(&self, n: NumerologyNumber) -> &str {
        self.lexicon.number(n).map(|e| e.essence.as_str()).unwrap_or_default()
    }
}

fn element_labels(elements: &[Element], separator: &str) -> String {
    elements
        .iter()
        .map(|e| e.label())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `3-4-5` style rendering of a run.
fn format_sequence(sequence: &[u32]) -> String {
    sequence
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
