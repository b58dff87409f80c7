//! The five elements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Elemental category of a card or an elemental strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
    Spirit,
}

impl Element {
    /// All elements in canonical order.
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Air,
        Element::Earth,
        Element::Spirit,
    ];

    /// The four classical elements zodiac signs belong to.
    pub const CLASSICAL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    /// Lowercase key used in tags and lexicon lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Air => "air",
            Element::Earth => "earth",
            Element::Spirit => "spirit",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
            Element::Spirit => "Spirit",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Element {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.key() == key)
            .ok_or_else(|| {
                ValidationError::invalid_format("element", format!("unknown element '{}'", s.trim()))
            })
    }
}
