//! Card selection - random, guided and specific draws.
//!
//! Randomness is always supplied by the caller as a `RngCore`, so draws are
//! reproducible under a seeded generator and analysis never touches an RNG.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::cards::{Card, DrawnSet};
use crate::domain::celestial::{Element, ZodiacSign};
use crate::domain::foundation::{CardId, ValidationError};
use crate::domain::numerology::{reduce, QuerentProfile};

/// Weight every card starts with in a guided draw.
pub const GUIDED_BASE_WEIGHT: u32 = 1;
/// Bonus when an end reduces to the querent's life path or expression.
pub const GUIDED_NUMBER_BONUS: u32 = 3;
/// Bonus when the card's sign is the querent's sun sign.
pub const GUIDED_SIGN_BONUS: u32 = 2;
/// Bonus when the card's element is the requested focus element.
pub const GUIDED_ELEMENT_BONUS: u32 = 2;

/// How cards are chosen for a reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMethod {
    #[default]
    Random,
    Guided,
    Specific,
}

impl SelectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMethod::Random => "random",
            SelectionMethod::Guided => "guided",
            SelectionMethod::Specific => "specific",
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SelectionMethod::Random),
            "guided" => Ok(SelectionMethod::Guided),
            "specific" => Ok(SelectionMethod::Specific),
            other => Err(ValidationError::invalid_format(
                "method",
                format!("unknown selection method '{}'", other),
            )),
        }
    }
}

/// What a guided draw leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidedCriteria {
    pub life_path: u32,
    pub expression: u32,
    pub sun_sign: ZodiacSign,
    pub focus_element: Option<Element>,
}

impl GuidedCriteria {
    pub fn for_querent(querent: &QuerentProfile, focus_element: Option<Element>) -> Self {
        Self {
            life_path: querent.life_path.value(),
            expression: querent.expression.value(),
            sun_sign: querent.sun_sign,
            focus_element,
        }
    }

    /// Draw weight of `card`.
    pub fn weight(&self, card: &Card) -> u32 {
        let mut weight = GUIDED_BASE_WEIGHT;
        let resonates = card.ends().iter().any(|&end| {
            let reduced = reduce(i64::from(end));
            reduced == self.life_path || reduced == self.expression
        });
        if resonates {
            weight += GUIDED_NUMBER_BONUS;
        }
        if card.astrological_sign == self.sun_sign {
            weight += GUIDED_SIGN_BONUS;
        }
        if self.focus_element == Some(card.element) {
            weight += GUIDED_ELEMENT_BONUS;
        }
        weight
    }
}

fn check_available(count: usize, available: usize) -> Result<(), ValidationError> {
    DrawnSet::check_count(count)?;
    if count > available {
        return Err(ValidationError::out_of_range(
            "number_of_cards",
            1,
            available as i64,
            count as i64,
        ));
    }
    Ok(())
}

/// Uniform draw of `count` distinct cards.
pub fn draw_random(
    catalog: &[Card],
    count: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<Card>, ValidationError> {
    check_available(count, catalog.len())?;
    let mut indices: Vec<usize> = (0..catalog.len()).collect();
    indices.shuffle(rng);
    Ok(indices
        .into_iter()
        .take(count)
        .map(|i| catalog[i].clone())
        .collect())
}

/// Weighted draw of `count` distinct cards; each pick is proportional to
/// [`GuidedCriteria::weight`] among the cards not yet drawn.
pub fn draw_guided(
    catalog: &[Card],
    count: usize,
    criteria: &GuidedCriteria,
    rng: &mut dyn RngCore,
) -> Result<Vec<Card>, ValidationError> {
    check_available(count, catalog.len())?;
    let mut pool: Vec<(&Card, u32)> = catalog.iter().map(|c| (c, criteria.weight(c))).collect();
    let mut drawn = Vec::with_capacity(count);

    while drawn.len() < count {
        let total: u32 = pool.iter().map(|(_, w)| w).sum();
        let mut ticket = rng.gen_range(0..total);
        let index = pool
            .iter()
            .position(|&(_, w)| {
                if ticket < w {
                    true
                } else {
                    ticket -= w;
                    false
                }
            })
            .unwrap_or(pool.len() - 1);
        let (card, _) = pool.swap_remove(index);
        drawn.push(card.clone());
    }
    Ok(drawn)
}

/// Cards named by id, in request order. Unknown ids fail; duplicates are
/// kept and reported as warnings.
pub fn pick_specific(
    catalog: &[Card],
    ids: &[CardId],
) -> Result<(Vec<Card>, Vec<String>), ValidationError> {
    DrawnSet::check_count(ids.len())?;
    let mut cards = Vec::with_capacity(ids.len());
    let mut warnings = Vec::new();
    for (i, id) in ids.iter().enumerate() {
        let card = catalog.iter().find(|c| &c.id == id).ok_or_else(|| {
            ValidationError::invalid_format("card_ids", format!("unknown card id '{}'", id))
        })?;
        if ids[..i].contains(id) {
            warnings.push(format!("Card '{}' was requested more than once", id));
        }
        cards.push(card.clone());
    }
    Ok((cards, warnings))
}

/// Pairs each card with an orientation. With `reversal_probability` of
/// `None` every card is upright and the generator is not consulted.
pub fn orient(
    cards: Vec<Card>,
    reversal_probability: Option<f64>,
    rng: &mut dyn RngCore,
) -> Vec<(Card, bool)> {
    match reversal_probability {
        Some(p) => {
            let p = p.clamp(0.0, 1.0);
            cards.into_iter().map(|c| (c, rng.gen_bool(p))).collect()
        }
        None => cards.into_iter().map(|c| (c, false)).collect(),
    }
}
