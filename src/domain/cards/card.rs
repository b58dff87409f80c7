//! Card catalog records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::celestial::{Element, ZodiacSign};
use crate::domain::foundation::{CardId, ValidationError};

/// Highest elemental strength a card may carry.
pub const MAX_ELEMENT_STRENGTH: u8 = 5;

/// Suit category of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
    Major,
}

impl Suit {
    pub const ALL: [Suit; 5] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles, Suit::Major];

    /// Lowercase key used in lexicon lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Suit::Wands => "wands",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Pentacles => "pentacles",
            Suit::Major => "major",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
            Suit::Major => "Major Arcana",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Strength (0-5) of each element within a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementalStrengths {
    #[serde(default)]
    pub fire: u8,
    #[serde(default)]
    pub water: u8,
    #[serde(default)]
    pub air: u8,
    #[serde(default)]
    pub earth: u8,
    #[serde(default)]
    pub spirit: u8,
}

impl ElementalStrengths {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Fire => self.fire,
            Element::Water => self.water,
            Element::Air => self.air,
            Element::Earth => self.earth,
            Element::Spirit => self.spirit,
        }
    }

    /// Returns a copy with one element set.
    pub fn with(mut self, element: Element, strength: u8) -> Self {
        match element {
            Element::Fire => self.fire = strength,
            Element::Water => self.water = strength,
            Element::Air => self.air = strength,
            Element::Earth => self.earth = strength,
            Element::Spirit => self.spirit = strength,
        }
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for element in Element::ALL {
            let strength = self.get(element);
            if strength > MAX_ELEMENT_STRENGTH {
                return Err(ValidationError::out_of_range(
                    format!("elemental_associations.{}", element.key()),
                    0,
                    i64::from(MAX_ELEMENT_STRENGTH),
                    i64::from(strength),
                ));
            }
        }
        Ok(())
    }
}

/// An immutable card record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub suit: Suit,
    pub element: Element,
    pub first_end: u32,
    pub second_end: u32,
    pub elemental_associations: ElementalStrengths,
    pub sacred_geometry: String,
    pub planetary_influence: String,
    pub astrological_sign: ZodiacSign,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub meaning: String,
    pub reversed_meaning: String,
}

impl Card {
    /// Both numeric ends, first then second.
    pub fn ends(&self) -> [u32; 2] {
        [self.first_end, self.second_end]
    }

    /// Checks the record invariants: non-blank name, positive ends and
    /// elemental strengths within 0-5.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.first_end == 0 {
            return Err(ValidationError::out_of_range("first_end", 1, i64::from(u32::MAX), 0));
        }
        if self.second_end == 0 {
            return Err(ValidationError::out_of_range("second_end", 1, i64::from(u32::MAX), 0));
        }
        self.elemental_associations.validate()
    }
}

/// Builder for card records, mostly for fixtures and catalog tooling.
#[derive(Debug, Clone)]
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    /// Starts a card with neutral defaults: wands suit, fire element, ends 1/1,
    /// no elemental strengths.
    pub fn new(id: &str, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            card: Card {
                id: CardId::new(id)?,
                name: name.to_string(),
                suit: Suit::Wands,
                element: Element::Fire,
                first_end: 1,
                second_end: 1,
                elemental_associations: ElementalStrengths::default(),
                sacred_geometry: "circle".to_string(),
                planetary_influence: "sun".to_string(),
                astrological_sign: ZodiacSign::Aries,
                keywords: Vec::new(),
                meaning: String::new(),
                reversed_meaning: String::new(),
            },
        })
    }

    pub fn suit(mut self, suit: Suit) -> Self {
        self.card.suit = suit;
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.card.element = element;
        self
    }

    pub fn ends(mut self, first: u32, second: u32) -> Self {
        self.card.first_end = first;
        self.card.second_end = second;
        self
    }

    pub fn strength(mut self, element: Element, strength: u8) -> Self {
        self.card.elemental_associations = self.card.elemental_associations.with(element, strength);
        self
    }

    pub fn geometry(mut self, tag: &str) -> Self {
        self.card.sacred_geometry = tag.to_string();
        self
    }

    pub fn planet(mut self, tag: &str) -> Self {
        self.card.planetary_influence = tag.to_string();
        self
    }

    pub fn sign(mut self, sign: ZodiacSign) -> Self {
        self.card.astrological_sign = sign;
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.card.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn meanings(mut self, upright: &str, reversed: &str) -> Self {
        self.card.meaning = upright.to_string();
        self.card.reversed_meaning = reversed.to_string();
        self
    }

    /// Validates and returns the card.
    pub fn build(self) -> Result<Card, ValidationError> {
        self.card.validate()?;
        Ok(self.card)
    }
}
