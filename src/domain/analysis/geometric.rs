//! Sacred-geometry motifs.

use serde::{Deserialize, Serialize};

use crate::domain::cards::DrawnSet;
use crate::domain::lexicon::Lexicon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryInsight {
    pub tag: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometricPatterns {
    /// Distinct lowercase tags, by first appearance.
    pub tags: Vec<String>,
    /// Interpretations for the tags the lexicon knows, same order.
    pub interpretations: Vec<GeometryInsight>,
}

impl GeometricPatterns {
    pub fn from_cards(cards: &DrawnSet, lexicon: &Lexicon) -> Self {
        let tags = distinct_tags(cards.cards().map(|c| c.sacred_geometry.as_str()));
        let interpretations = tags
            .iter()
            .filter_map(|tag| {
                lexicon.geometry(tag).map(|entry| GeometryInsight {
                    tag: tag.clone(),
                    interpretation: entry.interpretation.clone(),
                })
            })
            .collect();
        Self {
            tags,
            interpretations,
        }
    }
}

/// Normalized (trimmed, lowercase) distinct tags in first-appearance order.
/// Blank tags are skipped.
pub(crate) fn distinct_tags<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_ascii_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
