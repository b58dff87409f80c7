//! Drawn sets of cards for one reading.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::domain::foundation::ValidationError;

/// Fewest cards a reading may use.
pub const MIN_DRAWN_CARDS: usize = 1;

/// Most cards a reading may use.
pub const MAX_DRAWN_CARDS: usize = 10;

/// A card as it landed in a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// 1-based position in draw order.
    pub position: usize,
    pub reversed: bool,
    pub card: Card,
}

impl DrawnCard {
    /// Meaning text for the card's orientation.
    pub fn oriented_meaning(&self) -> &str {
        if self.reversed {
            &self.card.reversed_meaning
        } else {
            &self.card.meaning
        }
    }
}

/// Ordered sequence of 1-10 cards selected for one reading.
///
/// Duplicate cards are structurally allowed; random and guided draws never
/// produce them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DrawnCard>", into = "Vec<DrawnCard>")]
pub struct DrawnSet(Vec<DrawnCard>);

impl DrawnSet {
    /// Builds a set from cards and their orientations, numbering positions
    /// in the given order.
    pub fn new(cards: Vec<(Card, bool)>) -> Result<Self, ValidationError> {
        Self::check_count(cards.len())?;
        Ok(Self(
            cards
                .into_iter()
                .enumerate()
                .map(|(i, (card, reversed))| DrawnCard {
                    position: i + 1,
                    reversed,
                    card,
                })
                .collect(),
        ))
    }

    /// Builds a set of upright cards.
    pub fn upright(cards: Vec<Card>) -> Result<Self, ValidationError> {
        Self::new(cards.into_iter().map(|c| (c, false)).collect())
    }

    /// Validates a requested card count.
    pub fn check_count(count: usize) -> Result<(), ValidationError> {
        if !(MIN_DRAWN_CARDS..=MAX_DRAWN_CARDS).contains(&count) {
            return Err(ValidationError::out_of_range(
                "number_of_cards",
                MIN_DRAWN_CARDS as i64,
                MAX_DRAWN_CARDS as i64,
                count as i64,
            ));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a drawn set holds at least one card.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawnCard> {
        self.0.iter()
    }

    /// The card records in draw order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.0.iter().map(|d| &d.card)
    }

    pub fn as_slice(&self) -> &[DrawnCard] {
        &self.0
    }
}

impl TryFrom<Vec<DrawnCard>> for DrawnSet {
    type Error = ValidationError;

    fn try_from(cards: Vec<DrawnCard>) -> Result<Self, Self::Error> {
        Self::check_count(cards.len())?;
        Ok(Self(cards))
    }
}

impl From<DrawnSet> for Vec<DrawnCard> {
    fn from(set: DrawnSet) -> Self {
        set.0
    }
}
