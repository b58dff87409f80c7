//! Suit distribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards::{DrawnSet, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitPatterns {
    /// Card count per suit present in the spread.
    pub distribution: BTreeMap<Suit, usize>,
    /// Suits appearing at least twice, most frequent first.
    pub dominant: Vec<Suit>,
    /// Suits in draw order.
    pub progression: Vec<Suit>,
}

impl SuitPatterns {
    pub fn from_cards(cards: &DrawnSet) -> Self {
        let progression: Vec<Suit> = cards.cards().map(|c| c.suit).collect();

        let mut distribution: BTreeMap<Suit, usize> = BTreeMap::new();
        for &suit in &progression {
            *distribution.entry(suit).or_insert(0) += 1;
        }

        let mut dominant: Vec<(Suit, usize)> = distribution
            .iter()
            .filter(|&(_, &n)| n >= 2)
            .map(|(&s, &n)| (s, n))
            .collect();
        dominant.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Self {
            distribution,
            dominant: dominant.into_iter().map(|(s, _)| s).collect(),
            progression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::CardBuilder;

    #[test]
    fn counts_suits_and_keeps_draw_order() {
        let cards = [Suit::Cups, Suit::Major, Suit::Cups, Suit::Wands, Suit::Major, Suit::Cups]
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                CardBuilder::new(&format!("c{}", i), "Card")
                    .unwrap()
                    .suit(s)
                    .build()
                    .unwrap()
            })
            .collect();
        let set = DrawnSet::upright(cards).unwrap();
        let patterns = SuitPatterns::from_cards(&set);

        assert_eq!(patterns.distribution[&Suit::Cups], 3);
        assert_eq!(patterns.distribution.get(&Suit::Swords), None);
        assert_eq!(patterns.dominant, vec![Suit::Cups, Suit::Major]);
        assert_eq!(patterns.progression[1], Suit::Major);
        assert_eq!(patterns.progression.len(), 6);
    }
}
