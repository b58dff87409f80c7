//! JSON Card Catalog - CardCatalog backed by a JSON array of card records.
//!
//! The built-in table is embedded in the binary via `include_str!`; an
//! alternate file can be loaded at start up. Every record is validated on
//! load, so the rest of the engine can trust card invariants.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::domain::cards::Card;
use crate::domain::foundation::ValidationError;
use crate::ports::CardCatalog;

const BUILTIN_JSON: &str = include_str!("../../../resources/cards.json");

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Card '{id}' is invalid: {source}")]
    InvalidCard {
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Card id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("Catalog contains no cards")]
    Empty,
}

/// Immutable in-memory card table.
#[derive(Debug, Clone)]
pub struct JsonCardCatalog {
    cards: Vec<Card>,
}

impl JsonCardCatalog {
    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validates every card and rejects duplicate ids.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for card in &cards {
            card.validate().map_err(|source| CatalogError::InvalidCard {
                id: card.id.to_string(),
                source,
            })?;
            if !seen.insert(card.id.clone()) {
                return Err(CatalogError::DuplicateId(card.id.to_string()));
            }
        }
        Ok(Self { cards })
    }
}

impl CardCatalog for JsonCardCatalog {
    fn all(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::Suit;
    use crate::domain::foundation::CardId;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = JsonCardCatalog::builtin().unwrap();
        assert!(catalog.len() >= 20);
        for suit in Suit::ALL {
            assert!(
                catalog.all().iter().any(|c| c.suit == suit),
                "no card for {:?}",
                suit
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = JsonCardCatalog::builtin().unwrap();
        let id = CardId::new("wands-1").unwrap();
        assert_eq!(catalog.get(&id).unwrap().name, "Ace of Wands");
        assert!(catalog.get(&CardId::new("nope").unwrap()).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            JsonCardCatalog::from_json_str("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = JsonCardCatalog::builtin().unwrap();
        let mut cards = catalog.all().to_vec();
        cards.push(cards[0].clone());
        assert!(matches!(
            JsonCardCatalog::from_cards(cards),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn zero_end_is_rejected_on_load() {
        let json = r#"[{
            "id": "bad",
            "name": "Bad",
            "suit": "cups",
            "element": "water",
            "first_end": 0,
            "second_end": 3,
            "elemental_associations": {},
            "sacred_geometry": "circle",
            "planetary_influence": "moon",
            "astrological_sign": "cancer",
            "meaning": "",
            "reversed_meaning": ""
        }]"#;
        assert!(matches!(
            JsonCardCatalog::from_json_str(json),
            Err(CatalogError::InvalidCard { .. })
        ));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        std::fs::write(&path, BUILTIN_JSON).unwrap();
        let catalog = JsonCardCatalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), JsonCardCatalog::builtin().unwrap().len());

        assert!(matches!(
            JsonCardCatalog::from_path(dir.path().join("missing.json")),
            Err(CatalogError::Io { .. })
        ));
    }
}
