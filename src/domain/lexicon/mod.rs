//! Lexicon - the lookup tables behind every interpretive sentence.
//!
//! Number meanings, element guidance, planet and sign descriptions, geometry
//! interpretations and sentence templates live in a YAML resource rather than
//! in code. The built-in table is embedded in the binary; an alternate file can
//! be loaded at start up. The analyzer and synthesizer receive the lexicon by
//! injection and never branch on literal text.

mod template;

pub use template::render;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::cards::Suit;
use crate::domain::celestial::{Element, ZodiacSign};
use crate::domain::numerology::{EXTENDED_MASTER_NUMBERS, NumerologyNumber};

const BUILTIN_YAML: &str = include_str!("../../../resources/lexicon.yaml");

static BUILTIN: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    Arc::new(
        Lexicon::from_yaml_str(BUILTIN_YAML)
            .unwrap_or_else(|e| panic!("Built-in lexicon is invalid: {}", e)),
    )
});

/// Errors raised while loading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Lexicon section '{section}' is missing entry '{key}'")]
    Missing { section: &'static str, key: String },
}

/// Meaning of a numerology number.
#[derive(Debug, Clone, Deserialize)]
pub struct NumberEntry {
    pub title: String,
    pub essence: String,
}

/// Guidance attached to an element.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementEntry {
    pub guidance: String,
    pub recommendation: String,
    pub timing: String,
    pub question: String,
}

/// Meaning of a planetary influence tag.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetEntry {
    pub meaning: String,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Interpretation of a sacred-geometry tag.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryEntry {
    pub interpretation: String,
    /// Recommendation unlocked when the geometry appears in a spread.
    #[serde(default)]
    pub practice: Option<String>,
}

/// Sentence templates, filled with [`render`].
#[derive(Debug, Clone, Deserialize)]
pub struct Templates {
    pub position: String,
    pub summary_opening: String,
    pub significance_master: String,
    pub significance_element: String,
    pub significance_birth: String,
    pub significance_balanced: String,
    pub numerology_core: String,
    pub numerology_masters: String,
    pub numerology_repeats: String,
    pub numerology_sequences: String,
    pub astrology_sun: String,
    pub astrology_planets: String,
    pub astrology_second_planet: String,
    pub astrology_signs: String,
    pub spread_line: String,
    pub elemental_missing: String,
    pub personal_year: String,
    pub recommendation_master: String,
    pub recommendation_birth: String,
    pub follow_up_general: Vec<String>,
    pub follow_up_master: String,
    pub follow_up_synchronicity: String,
    pub sync_life: String,
    pub sync_birth: String,
    pub sync_name: String,
    pub sync_date: String,
    pub quick_opening: String,
    pub quick_element: String,
    pub quick_masters: String,
    pub quick_sequences: String,
    pub quick_aspects: String,
}

/// The full set of interpretation tables.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    pub numbers: BTreeMap<u32, NumberEntry>,
    pub elements: BTreeMap<Element, ElementEntry>,
    pub planets: BTreeMap<String, PlanetEntry>,
    pub signs: BTreeMap<ZodiacSign, String>,
    pub suits: BTreeMap<Suit, String>,
    pub geometry: BTreeMap<String, GeometryEntry>,
    pub relations: BTreeMap<String, String>,
    pub aspects: BTreeMap<String, String>,
    #[serde(default)]
    pub positions: BTreeMap<usize, Vec<String>>,
    pub templates: Templates,
}

impl Lexicon {
    /// The lexicon embedded in the binary.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Parses and validates a YAML lexicon.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_yaml::from_str(yaml)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Reads, parses and validates a YAML lexicon file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Checks that every number, element, sign and suit has an entry.
    ///
    /// Planet, geometry, relation and aspect tables are open-ended; unknown
    /// tags are skipped at interpretation time.
    pub fn validate(&self) -> Result<(), LexiconError> {
        for n in (1..=9).chain(EXTENDED_MASTER_NUMBERS) {
            if !self.numbers.contains_key(&n) {
                return Err(missing("numbers", n));
            }
        }
        for element in Element::ALL {
            if !self.elements.contains_key(&element) {
                return Err(missing("elements", element.key()));
            }
        }
        for sign in ZodiacSign::ALL {
            if !self.signs.contains_key(&sign) {
                return Err(missing("signs", sign.key()));
            }
        }
        for suit in Suit::ALL {
            if !self.suits.contains_key(&suit) {
                return Err(missing("suits", suit.key()));
            }
        }
        Ok(())
    }

    pub fn number(&self, n: NumerologyNumber) -> Option<&NumberEntry> {
        self.numbers.get(&n.value())
    }

    pub fn element(&self, element: Element) -> Option<&ElementEntry> {
        self.elements.get(&element)
    }

    /// Planet entry by tag, case-insensitive.
    pub fn planet(&self, tag: &str) -> Option<&PlanetEntry> {
        self.planets.get(&tag.trim().to_ascii_lowercase())
    }

    pub fn sign(&self, sign: ZodiacSign) -> Option<&str> {
        self.signs.get(&sign).map(String::as_str)
    }

    /// Geometry entry by tag, case-insensitive.
    pub fn geometry(&self, tag: &str) -> Option<&GeometryEntry> {
        self.geometry.get(&tag.trim().to_ascii_lowercase())
    }

    pub fn relation(&self, tag: &str) -> Option<&str> {
        self.relations.get(tag).map(String::as_str)
    }

    pub fn aspect(&self, tag: &str) -> Option<&str> {
        self.aspects.get(tag).map(String::as_str)
    }

    /// Label of a 1-based position in a spread of `count` cards.
    pub fn position_label(&self, count: usize, position: usize) -> String {
        self.positions
            .get(&count)
            .and_then(|labels| labels.get(position.wrapping_sub(1)))
            .cloned()
            .unwrap_or_else(|| {
                render(
                    &self.templates.position,
                    &[("position", &position.to_string())],
                )
            })
    }
}

fn missing(section: &'static str, key: impl ToString) -> LexiconError {
    LexiconError::Missing {
        section,
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lexicon_parses_and_validates() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.validate().is_ok());
        assert_eq!(lexicon.numbers.len(), 13);
    }

    #[test]
    fn builtin_covers_every_element_pair_rule() {
        let lexicon = Lexicon::builtin();
        for tag in [
            "fire-water",
            "air-earth",
            "fire-air",
            "water-earth",
            "fire-spirit",
            "water-spirit",
            "air-spirit",
            "earth-spirit",
        ] {
            assert!(lexicon.relation(tag).is_some(), "missing relation {}", tag);
        }
    }

    #[test]
    fn lookups_are_case_insensitive_for_tags() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.planet("Venus").is_some());
        assert!(lexicon.geometry(" Flower-of-Life ").is_some());
        assert!(lexicon.geometry("dodecahedron").is_none());
    }

    #[test]
    fn flower_of_life_unlocks_a_practice() {
        let lexicon = Lexicon::builtin();
        let entry = lexicon.geometry("flower-of-life").unwrap();
        assert!(entry.practice.as_deref().unwrap().contains("meditation"));
    }

    #[test]
    fn position_labels_fall_back_to_numbering() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.position_label(3, 1), "Past");
        assert_eq!(lexicon.position_label(3, 3), "Future");
        assert_eq!(lexicon.position_label(7, 6), "Position 6");
        assert_eq!(lexicon.position_label(3, 0), "Position 0");
    }

    #[test]
    fn missing_element_is_reported() {
        let trimmed = BUILTIN_YAML.replace(
            "  spirit:\n    guidance:",
            "  aether:\n    guidance:",
        );
        let err = Lexicon::from_yaml_str(&trimmed).unwrap_err();
        // "aether" is not an Element, so parsing fails before validation
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn missing_sign_fails_validation() {
        let trimmed = BUILTIN_YAML.replace(
            "  pisces: Pisces brings empathy, imagination and spiritual sensitivity.\n",
            "",
        );
        let err = Lexicon::from_yaml_str(&trimmed).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Missing { section: "signs", .. }
        ));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.yaml");
        std::fs::write(&path, BUILTIN_YAML).unwrap();
        assert!(Lexicon::from_path(&path).is_ok());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = Lexicon::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
