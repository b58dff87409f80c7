//! Numerology profile calculator.
//!
//! Derives the querent's core numbers from a validated name and birth date.
//! Every function here is pure; invalid input is rejected when the
//! [`PersonName`] and [`BirthDate`] value objects are built, plus the two
//! name cases (no vowel, no consonant) that only the vowel split can detect.

use serde::{Deserialize, Serialize};

use super::birth_date::BirthDate;
use super::letters::PersonName;
use super::number::{ChallengeNumber, NumerologyNumber};
use super::reduction::reduce;
use crate::domain::celestial::ZodiacSign;
use crate::domain::foundation::ValidationError;

/// Reduced (day, month, year) components of a birth date.
fn reduced_components(date: &BirthDate) -> (u32, u32, u32) {
    (
        reduce(i64::from(date.day())),
        reduce(i64::from(date.month())),
        reduce(i64::from(date.year())),
    )
}

/// Life path: reduce(reduce(day) + reduce(month) + reduce(year)).
pub fn life_path(date: &BirthDate) -> NumerologyNumber {
    let (d, m, y) = reduced_components(date);
    NumerologyNumber::reduce_positive(u64::from(d + m + y))
}

/// Expression (destiny) number: reduced sum of every letter in the name.
pub fn expression(name: &PersonName) -> NumerologyNumber {
    NumerologyNumber::reduce_positive(name.letter_sum())
}

/// Soul urge number: reduced sum of the vowels.
///
/// Uses a, e, i, o, u; a name with none of those counts `y` instead.
pub fn soul_urge(name: &PersonName) -> Result<NumerologyNumber, ValidationError> {
    NumerologyNumber::from_reduced("soul_urge", reduce_sum(name.vowel_sum()))
        .map_err(|_| ValidationError::invalid_format("full_name", "name contains no vowels"))
}

/// Personality number: reduced sum of the consonants.
pub fn personality(name: &PersonName) -> Result<NumerologyNumber, ValidationError> {
    NumerologyNumber::from_reduced("personality", reduce_sum(name.consonant_sum()))
        .map_err(|_| ValidationError::invalid_format("full_name", "name contains no consonants"))
}

/// Birthday number: reduce(day of month).
pub fn birthday(date: &BirthDate) -> NumerologyNumber {
    NumerologyNumber::reduce_positive(u64::from(date.day()))
}

/// Maturity number: reduce(life path + expression).
pub fn maturity(life_path: NumerologyNumber, expression: NumerologyNumber) -> NumerologyNumber {
    NumerologyNumber::reduce_positive(u64::from(life_path.value() + expression.value()))
}

/// Personal year number for `year`: reduce(reduce(day) + reduce(month) + reduce(year)).
pub fn personal_year(date: &BirthDate, year: i32) -> NumerologyNumber {
    let (d, m, _) = reduced_components(date);
    let y = reduce(i64::from(year));
    NumerologyNumber::reduce_positive(u64::from(d + m + y))
}

fn reduce_sum(sum: u64) -> u32 {
    reduce(i64::try_from(sum).unwrap_or(i64::MAX))
}

/// The four challenge numbers of a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeNumbers {
    pub first: ChallengeNumber,
    pub second: ChallengeNumber,
    pub third: ChallengeNumber,
    pub fourth: ChallengeNumber,
}

impl ChallengeNumbers {
    pub fn as_array(&self) -> [ChallengeNumber; 4] {
        [self.first, self.second, self.third, self.fourth]
    }
}

/// Challenge numbers:
/// c1 = |m - d|, c2 = |d - y|, c3 = |c1 - c2|, c4 = |m - y|, each reduced.
pub fn challenge_numbers(date: &BirthDate) -> ChallengeNumbers {
    let (d, m, y) = reduced_components(date);
    let first = ChallengeNumber::from_difference(m, d);
    let second = ChallengeNumber::from_difference(d, y);
    let third = ChallengeNumber::from_difference(first.value(), second.value());
    let fourth = ChallengeNumber::from_difference(m, y);
    ChallengeNumbers {
        first,
        second,
        third,
        fourth,
    }
}

/// The four pinnacle numbers of a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnacleNumbers {
    pub first: NumerologyNumber,
    pub second: NumerologyNumber,
    pub third: NumerologyNumber,
    pub fourth: NumerologyNumber,
}

impl PinnacleNumbers {
    pub fn as_array(&self) -> [NumerologyNumber; 4] {
        [self.first, self.second, self.third, self.fourth]
    }
}

/// Pinnacle numbers:
/// p1 = m + d, p2 = d + y, p3 = p1 + p2, p4 = m + y, each reduced.
pub fn pinnacle_numbers(date: &BirthDate) -> PinnacleNumbers {
    let (d, m, y) = reduced_components(date);
    let first = NumerologyNumber::reduce_positive(u64::from(m + d));
    let second = NumerologyNumber::reduce_positive(u64::from(d + y));
    let third = NumerologyNumber::reduce_positive(u64::from(first.value() + second.value()));
    let fourth = NumerologyNumber::reduce_positive(u64::from(m + y));
    PinnacleNumbers {
        first,
        second,
        third,
        fourth,
    }
}

/// A querent's numerology profile. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerentProfile {
    pub full_name: PersonName,
    pub birth_date: BirthDate,
    pub life_path: NumerologyNumber,
    pub expression: NumerologyNumber,
    pub soul_urge: NumerologyNumber,
    pub personality: NumerologyNumber,
    pub birthday: NumerologyNumber,
    pub maturity: NumerologyNumber,
    pub challenges: ChallengeNumbers,
    pub pinnacles: PinnacleNumbers,
    pub sun_sign: ZodiacSign,
}

impl QuerentProfile {
    /// Computes the full profile from validated inputs.
    pub fn compute(full_name: PersonName, birth_date: BirthDate) -> Result<Self, ValidationError> {
        let life_path = life_path(&birth_date);
        let expression = expression(&full_name);
        let soul_urge = soul_urge(&full_name)?;
        let personality = personality(&full_name)?;

        Ok(Self {
            life_path,
            expression,
            soul_urge,
            personality,
            birthday: birthday(&birth_date),
            maturity: maturity(life_path, expression),
            challenges: challenge_numbers(&birth_date),
            pinnacles: pinnacle_numbers(&birth_date),
            sun_sign: ZodiacSign::from_month_day(birth_date.month(), birth_date.day()),
            full_name,
            birth_date,
        })
    }

    /// The four core numbers with their display labels.
    pub fn core_numbers(&self) -> [(&'static str, NumerologyNumber); 4] {
        [
            ("Life Path", self.life_path),
            ("Expression", self.expression),
            ("Soul Urge", self.soul_urge),
            ("Personality", self.personality),
        ]
    }
}

/// Computes a profile from raw strings; the birth date must be `YYYY-MM-DD`.
pub fn compute_profile(full_name: &str, birth_date: &str) -> Result<QuerentProfile, ValidationError> {
    let name = PersonName::new(full_name)?;
    let date = BirthDate::parse(birth_date)?;
    QuerentProfile::compute(name, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> BirthDate {
        BirthDate::parse(s).unwrap()
    }

    fn name(s: &str) -> PersonName {
        PersonName::new(s).unwrap()
    }

    #[test]
    fn life_path_golden_value() {
        // 15 -> 6, 1 -> 1, 1990 -> 19 -> 10 -> 1; 6 + 1 + 1 = 8
        assert_eq!(life_path(&date("1990-01-15")).value(), 8);
    }

    #[test]
    fn life_path_keeps_master_numbers() {
        // 29 -> 11, 11 -> 11, 1975 -> 22; 11 + 11 + 22 = 44 -> 8
        assert_eq!(life_path(&date("1975-11-29")).value(), 8);
        // 2 + 9 + 9 (2007) = 20 -> 2
        assert_eq!(life_path(&date("2007-09-02")).value(), 2);
        // 4 + 7 + 2 (1991 -> 20 -> 2) = 13 -> 4
        assert_eq!(life_path(&date("1991-07-04")).value(), 4);
    }

    #[test]
    fn life_path_intermediate_master() {
        // 1 + 1 + 9 (1998 -> 27 -> 9) = 11
        assert_eq!(life_path(&date("1998-01-01")).value(), 11);
    }

    #[test]
    fn john_smith_numbers() {
        let n = name("John Smith");
        // letters sum to 44 -> 8 under the standard policy
        assert_eq!(expression(&n).value(), 8);
        // vowels 15 -> 6, consonants 29 -> 11
        assert_eq!(soul_urge(&n).unwrap().value(), 6);
        assert_eq!(personality(&n).unwrap().value(), 11);
    }

    #[test]
    fn soul_urge_rejects_names_without_vowels() {
        let err = soul_urge(&name("Brr Tsk")).unwrap_err();
        assert_eq!(err.field(), "full_name");
    }

    #[test]
    fn personality_rejects_names_without_consonants() {
        assert!(personality(&name("Aia Eo")).is_err());
    }

    #[test]
    fn birthday_and_maturity() {
        let d = date("1990-01-29");
        assert_eq!(birthday(&d).value(), 11);
        let lp = NumerologyNumber::new(8).unwrap();
        let ex = NumerologyNumber::new(3).unwrap();
        assert_eq!(maturity(lp, ex).value(), 11);
        let ex = NumerologyNumber::new(33).unwrap();
        // 8 + 33 = 41 -> 5
        assert_eq!(maturity(lp, ex).value(), 5);
    }

    #[test]
    fn challenges_for_known_date() {
        // d = 6 (15), m = 1, y = 1 (1990)
        let c = challenge_numbers(&date("1990-01-15"));
        assert_eq!(c.first.value(), 5); // |1 - 6|
        assert_eq!(c.second.value(), 5); // |6 - 1|
        assert_eq!(c.third.value(), 0); // |5 - 5|
        assert_eq!(c.fourth.value(), 0); // |1 - 1|
    }

    #[test]
    fn pinnacles_for_known_date() {
        // d = 6, m = 1, y = 1
        let p = pinnacle_numbers(&date("1990-01-15"));
        assert_eq!(p.first.value(), 7);
        assert_eq!(p.second.value(), 7);
        assert_eq!(p.third.value(), 5); // 14 -> 5
        assert_eq!(p.fourth.value(), 2);
    }

    #[test]
    fn personal_year_uses_given_year() {
        // d = 6, m = 1, 2026 -> 10 -> 1; 8
        assert_eq!(personal_year(&date("1990-01-15"), 2026).value(), 8);
    }

    #[test]
    fn compute_profile_assembles_everything() {
        let profile = compute_profile("John Smith", "1990-01-15").unwrap();
        assert_eq!(profile.life_path.value(), 8);
        assert_eq!(profile.expression.value(), 8);
        assert_eq!(profile.soul_urge.value(), 6);
        assert_eq!(profile.personality.value(), 11);
        assert_eq!(profile.birthday.value(), 6);
        assert_eq!(profile.maturity.value(), 7); // 16 -> 7
        assert_eq!(profile.sun_sign, ZodiacSign::Capricorn);
        assert_eq!(profile.full_name.as_str(), "John Smith");
    }

    #[test]
    fn compute_profile_rejects_bad_input() {
        assert!(matches!(
            compute_profile("", "1990-01-15"),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(compute_profile("John Smith", "1990-13-15").is_err());
        assert!(compute_profile("John Smith", "1850-01-15").is_err());
        assert!(compute_profile("John Smith", "January 15").is_err());
    }

    #[test]
    fn profile_serializes_numbers_as_integers() {
        let profile = compute_profile("John Smith", "1990-01-15").unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["life_path"], 8);
        assert_eq!(json["birth_date"], "1990-01-15");
        assert_eq!(json["sun_sign"], "capricorn");
        assert_eq!(json["challenges"]["third"], 0);
    }
}
