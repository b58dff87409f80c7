//! Elemental balance - aggregate strengths, dominance, gaps and pair rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards::DrawnSet;
use crate::domain::celestial::Element;

/// Share of the maximum aggregate an element needs to count as dominant,
/// as a ratio (numerator, denominator).
pub const DOMINANCE_RATIO: (u32, u32) = (4, 5);

/// How a pair of co-present elements relates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Conflict,
    Harmony,
}

/// Fixed pairwise rule table. Only pairs whose elements both have non-zero
/// aggregate strength are evaluated.
pub const ELEMENT_PAIR_RULES: [(Element, Element, ElementRelation); 8] = [
    (Element::Fire, Element::Water, ElementRelation::Conflict),
    (Element::Air, Element::Earth, ElementRelation::Conflict),
    (Element::Fire, Element::Air, ElementRelation::Harmony),
    (Element::Water, Element::Earth, ElementRelation::Harmony),
    (Element::Fire, Element::Spirit, ElementRelation::Harmony),
    (Element::Water, Element::Spirit, ElementRelation::Harmony),
    (Element::Air, Element::Spirit, ElementRelation::Harmony),
    (Element::Earth, Element::Spirit, ElementRelation::Harmony),
];

/// Tag naming an element pair, e.g. `fire-water`.
pub fn pair_tag(first: Element, second: Element) -> String {
    format!("{}-{}", first.key(), second.key())
}

/// Elemental analysis of a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalPatterns {
    /// Aggregate strength per element; every element has an entry.
    pub balance: BTreeMap<Element, u32>,
    /// Elements at or near the maximum, strongest first.
    pub dominant: Vec<Element>,
    /// Elements with aggregate strength exactly 0.
    pub missing: Vec<Element>,
    pub conflicts: Vec<String>,
    pub harmonies: Vec<String>,
}

impl ElementalPatterns {
    pub fn from_cards(cards: &DrawnSet) -> Self {
        let mut balance: BTreeMap<Element, u32> =
            Element::ALL.iter().map(|&e| (e, 0)).collect();
        for card in cards.cards() {
            for element in Element::ALL {
                *balance.entry(element).or_insert(0) +=
                    u32::from(card.elemental_associations.get(element));
            }
        }

        let missing = Element::ALL
            .iter()
            .copied()
            .filter(|e| balance[e] == 0)
            .collect();

        let dominant = if balance.values().all(|&v| v == 0) {
            // No strengths at all: fall back to the cards' primary elements.
            let mut primary: BTreeMap<Element, u32> = BTreeMap::new();
            for card in cards.cards() {
                *primary.entry(card.element).or_insert(0) += 1;
            }
            dominant_of(&primary)
        } else {
            dominant_of(&balance)
        };

        let mut conflicts = Vec::new();
        let mut harmonies = Vec::new();
        for (first, second, relation) in ELEMENT_PAIR_RULES {
            if balance[&first] == 0 || balance[&second] == 0 {
                continue;
            }
            let tag = pair_tag(first, second);
            match relation {
                ElementRelation::Conflict => conflicts.push(tag),
                ElementRelation::Harmony => harmonies.push(tag),
            }
        }

        Self {
            balance,
            dominant,
            missing,
            conflicts,
            harmonies,
        }
    }

    /// Strongest element, if any card was analyzed.
    pub fn primary(&self) -> Option<Element> {
        self.dominant.first().copied()
    }

    pub fn has_single_dominant(&self) -> bool {
        self.dominant.len() == 1
    }

    pub fn strength(&self, element: Element) -> u32 {
        self.balance.get(&element).copied().unwrap_or(0)
    }
}

/// Elements whose count is within the dominance ratio of the maximum,
/// ordered by count descending then canonical element order.
fn dominant_of(counts: &BTreeMap<Element, u32>) -> Vec<Element> {
    let max = counts.values().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    let (num, den) = DOMINANCE_RATIO;
    let mut dominant: Vec<(Element, u32)> = counts
        .iter()
        .filter(|&(_, &v)| v * den >= max * num)
        .map(|(&e, &v)| (e, v))
        .collect();
    dominant.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    dominant.into_iter().map(|(e, _)| e).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::{Card, CardBuilder};

    fn card(id: &str, element: Element, strengths: &[(Element, u8)]) -> Card {
        strengths
            .iter()
            .fold(
                CardBuilder::new(id, id).unwrap().element(element),
                |b, &(e, s)| b.strength(e, s),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn balance_sums_strengths_and_lists_all_elements() {
        let set = DrawnSet::upright(vec![
            card("a", Element::Fire, &[(Element::Fire, 4), (Element::Air, 1)]),
            card("b", Element::Fire, &[(Element::Fire, 3)]),
        ])
        .unwrap();
        let patterns = ElementalPatterns::from_cards(&set);
        assert_eq!(patterns.balance.len(), 5);
        assert_eq!(patterns.strength(Element::Fire), 7);
        assert_eq!(patterns.strength(Element::Air), 1);
    }

    #[test]
    fn zero_spirit_everywhere_is_missing() {
        let set = DrawnSet::upright(vec![
            card("a", Element::Water, &[(Element::Water, 3)]),
            card("b", Element::Earth, &[(Element::Earth, 2)]),
        ])
        .unwrap();
        let patterns = ElementalPatterns::from_cards(&set);
        assert!(patterns.missing.contains(&Element::Spirit));
        assert!(!patterns.missing.contains(&Element::Water));
    }

    #[test]
    fn dominance_threshold_is_eighty_percent() {
        // max 10; 8 qualifies, 7 does not
        let set = DrawnSet::upright(vec![
            card("a", Element::Fire, &[(Element::Fire, 5), (Element::Water, 4), (Element::Air, 3)]),
            card("b", Element::Fire, &[(Element::Fire, 5), (Element::Water, 4), (Element::Air, 4)]),
        ])
        .unwrap();
        let patterns = ElementalPatterns::from_cards(&set);
        assert_eq!(patterns.dominant, vec![Element::Fire, Element::Water]);
        assert!(!patterns.has_single_dominant());
    }

    #[test]
    fn dominant_falls_back_to_primary_elements() {
        let set = DrawnSet::upright(vec![
            card("a", Element::Earth, &[]),
            card("b", Element::Earth, &[]),
            card("c", Element::Air, &[]),
        ])
        .unwrap();
        let patterns = ElementalPatterns::from_cards(&set);
        assert_eq!(patterns.dominant, vec![Element::Earth]);
        assert_eq!(patterns.missing.len(), 5);
    }

    #[test]
    fn pair_rules_only_fire_for_present_elements() {
        let set = DrawnSet::upright(vec![card(
            "a",
            Element::Fire,
            &[(Element::Fire, 3), (Element::Water, 2), (Element::Spirit, 1)],
        )])
        .unwrap();
        let patterns = ElementalPatterns::from_cards(&set);
        assert_eq!(patterns.conflicts, vec!["fire-water"]);
        assert_eq!(patterns.harmonies, vec!["fire-spirit", "water-spirit"]);
    }
}
