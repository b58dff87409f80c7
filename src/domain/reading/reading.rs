//! The Reading aggregate.

use serde::{Deserialize, Serialize};

use super::interpretation::Interpretation;
use super::scoring::{Confidence, Significance};
use super::synthesizer::Synthesis;
use crate::domain::analysis::PatternAnalysis;
use crate::domain::cards::DrawnSet;
use crate::domain::foundation::{ReadingId, Timestamp};
use crate::domain::numerology::QuerentProfile;
use crate::domain::selection::SelectionMethod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingMetadata {
    pub id: ReadingId,
    pub created_at: Timestamp,
    pub method: SelectionMethod,
    pub confidence: Confidence,
    pub significance: Significance,
}

/// A complete reading. Created once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub querent: QuerentProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub drawn: DrawnSet,
    pub analysis: PatternAnalysis,
    pub interpretation: Interpretation,
    pub metadata: ReadingMetadata,
}

impl Reading {
    /// Assembles a reading from its computed parts under a fresh id.
    pub fn assemble(
        querent: QuerentProfile,
        question: Option<String>,
        drawn: DrawnSet,
        analysis: PatternAnalysis,
        synthesis: Synthesis,
        method: SelectionMethod,
        created_at: Timestamp,
    ) -> Self {
        let Synthesis {
            interpretation,
            confidence,
            significance,
        } = synthesis;
        Self {
            querent,
            question: question
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            drawn,
            analysis,
            interpretation,
            metadata: ReadingMetadata {
                id: ReadingId::new(),
                created_at,
                method,
                confidence,
                significance,
            },
        }
    }

    pub fn id(&self) -> ReadingId {
        self.metadata.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::PatternAnalyzer;
    use crate::domain::cards::CardBuilder;
    use crate::domain::lexicon::Lexicon;
    use crate::domain::numerology::compute_profile;
    use crate::domain::reading::ReadingSynthesizer;
    use chrono::NaiveDate;

    fn reading(question: Option<&str>) -> Reading {
        let lexicon = Lexicon::builtin();
        let querent = compute_profile("Ada Byron", "1915-12-10").unwrap();
        let drawn = DrawnSet::upright(vec![CardBuilder::new("a", "A")
            .unwrap()
            .ends(7, 16)
            .meanings("Up.", "Down.")
            .build()
            .unwrap()])
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let analysis = PatternAnalyzer::new(lexicon.clone()).analyze(&drawn, &querent, today);
        let synthesis = ReadingSynthesizer::new(lexicon).synthesize(&analysis, &querent, &drawn);
        Reading::assemble(
            querent,
            question.map(str::to_string),
            drawn,
            analysis,
            synthesis,
            SelectionMethod::Specific,
            Timestamp::start_of(today),
        )
    }

    #[test]
    fn blank_question_is_dropped() {
        assert_eq!(reading(Some("   ")).question, None);
        assert_eq!(reading(Some(" Will it work? ")).question.as_deref(), Some("Will it work?"));
    }

    #[test]
    fn each_reading_gets_its_own_id() {
        assert_ne!(reading(None).id(), reading(None).id());
    }

    #[test]
    fn serializes_and_round_trips() {
        let original = reading(Some("Career?"));
        let json = serde_json::to_string(&original).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), original.id());
        assert_eq!(back.interpretation, original.interpretation);
        assert_eq!(back.drawn, original.drawn);

        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(value["metadata"]["method"], "specific");
        assert!(value["metadata"]["confidence"].is_number());
        assert!(value["analysis"]["synchronicities"]["current_date"].is_array());
    }
}
