//! Cards - catalog records and drawn sets.

mod card;
mod drawn;

pub use card::{Card, CardBuilder, ElementalStrengths, Suit, MAX_ELEMENT_STRENGTH};
pub use drawn::{DrawnCard, DrawnSet, MAX_DRAWN_CARDS, MIN_DRAWN_CARDS};
