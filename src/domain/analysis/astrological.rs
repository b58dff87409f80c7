//! Planetary and zodiacal distribution across a spread.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::geometric::distinct_tags;
use crate::domain::cards::DrawnSet;
use crate::domain::celestial::{Element, ZodiacSign};

/// Named planetary pairs detected when both planets appear in a draw.
pub const PLANETARY_ASPECTS: [(&str, &str); 6] = [
    ("sun", "moon"),
    ("venus", "mars"),
    ("jupiter", "saturn"),
    ("mercury", "jupiter"),
    ("moon", "venus"),
    ("mars", "saturn"),
];

/// A tag and how many cards carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignCount {
    pub sign: ZodiacSign,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrologicalPatterns {
    /// Planet tallies, most frequent first; ties keep first appearance.
    pub planets: Vec<TagCount>,
    /// Sign tallies, most frequent first; ties keep first appearance.
    pub signs: Vec<SignCount>,
    /// Sign count per classical element; all four are present.
    pub elemental_signs: BTreeMap<Element, usize>,
    /// Detected aspect tags such as `sun-moon`.
    pub aspects: Vec<String>,
}

impl AstrologicalPatterns {
    pub fn from_cards(cards: &DrawnSet) -> Self {
        let mut planets: Vec<TagCount> = Vec::new();
        for card in cards.cards() {
            let tag = card.planetary_influence.trim().to_ascii_lowercase();
            if tag.is_empty() {
                continue;
            }
            match planets.iter_mut().find(|p| p.tag == tag) {
                Some(existing) => existing.count += 1,
                None => planets.push(TagCount { tag, count: 1 }),
            }
        }
        planets.sort_by(|a, b| b.count.cmp(&a.count));

        let mut signs: Vec<SignCount> = Vec::new();
        let mut elemental_signs: BTreeMap<Element, usize> =
            Element::CLASSICAL.iter().map(|&e| (e, 0)).collect();
        for card in cards.cards() {
            let sign = card.astrological_sign;
            match signs.iter_mut().find(|s| s.sign == sign) {
                Some(existing) => existing.count += 1,
                None => signs.push(SignCount { sign, count: 1 }),
            }
            *elemental_signs.entry(sign.element()).or_insert(0) += 1;
        }
        signs.sort_by(|a, b| b.count.cmp(&a.count));

        let present = distinct_tags(cards.cards().map(|c| c.planetary_influence.as_str()));
        let aspects = PLANETARY_ASPECTS
            .iter()
            .filter(|(a, b)| present.iter().any(|p| p == a) && present.iter().any(|p| p == b))
            .map(|(a, b)| format!("{}-{}", a, b))
            .collect();

        Self {
            planets,
            signs,
            elemental_signs,
            aspects,
        }
    }

    /// The `n` most frequent planet tags.
    pub fn top_planets(&self, n: usize) -> impl Iterator<Item = &TagCount> {
        self.planets.iter().take(n)
    }

    /// Classical element with the most signs; ties go to the earlier element
    /// in fire, earth, air, water order.
    pub fn leading_sign_element(&self) -> Option<Element> {
        let mut best: Option<(Element, usize)> = None;
        for element in Element::CLASSICAL {
            let count = self.elemental_signs.get(&element).copied().unwrap_or(0);
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((element, count));
            }
        }
        best.map(|(e, _)| e)
    }
}
