//! Zodiac signs and their classical elements.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Element;

/// One of the twelve tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// First day (month, day) of each sign, in calendar order starting with
/// Capricorn's second half.
const SIGN_STARTS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 21, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sun sign for a birthday. Month and day are assumed valid.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        SIGN_STARTS
            .iter()
            .rev()
            .find(|(m, d, _)| (month, day) >= (*m, *d))
            .map(|(_, _, sign)| *sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }

    /// Classical element of the sign.
    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    /// Traditional ruling planet, lowercase.
    pub fn ruler(&self) -> &'static str {
        match self {
            ZodiacSign::Aries | ZodiacSign::Scorpio => "mars",
            ZodiacSign::Taurus | ZodiacSign::Libra => "venus",
            ZodiacSign::Gemini | ZodiacSign::Virgo => "mercury",
            ZodiacSign::Cancer => "moon",
            ZodiacSign::Leo => "sun",
            ZodiacSign::Sagittarius | ZodiacSign::Pisces => "jupiter",
            ZodiacSign::Capricorn | ZodiacSign::Aquarius => "saturn",
        }
    }

    /// Lowercase key used in lexicon lookups.
    pub fn key(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
