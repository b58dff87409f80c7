//! Synchronicities - card numbers that echo the querent's own numbers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::lexicon::{render, Templates};
use crate::domain::numerology::{digits, QuerentProfile};

/// Which of the querent's numbers a card matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynchronicityKind {
    LifeNumber,
    BirthDate,
    NameNumber,
    CurrentDate,
}

/// One exact match between a card value and a personal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synchronicity {
    pub kind: SynchronicityKind,
    pub value: u32,
    /// What the value was matched against, e.g. "Life Path" or "day".
    pub label: String,
    pub description: String,
}

/// The four synchronicity categories. Each list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synchronicities {
    pub life_numbers: Vec<Synchronicity>,
    pub birth_date: Vec<Synchronicity>,
    pub name_numbers: Vec<Synchronicity>,
    pub current_date: Vec<Synchronicity>,
}

impl Synchronicities {
    /// Compares the raw card values against the querent's numbers and today.
    pub fn detect(
        values: &[u32],
        querent: &QuerentProfile,
        today: NaiveDate,
        templates: &Templates,
    ) -> Self {
        let hit = |n: u32| values.contains(&n);

        let life_numbers = [
            ("Life Path", querent.life_path.value()),
            ("Birthday", querent.birthday.value()),
            ("Maturity", querent.maturity.value()),
        ]
        .into_iter()
        .filter(|&(_, n)| hit(n))
        .map(|(label, n)| {
            entry(
                SynchronicityKind::LifeNumber,
                n,
                label,
                render(
                    &templates.sync_life,
                    &[("value", &n.to_string()), ("label", label)],
                ),
            )
        })
        .collect();

        let birth = &querent.birth_date;
        let mut birth_date = Vec::new();
        for (label, component) in [
            ("day", birth.day()),
            ("month", birth.month()),
            ("year", birth.year()),
        ] {
            let mut seen: Vec<u8> = Vec::new();
            for digit in digits(u64::from(component)) {
                if digit == 0 || seen.contains(&digit) {
                    continue;
                }
                seen.push(digit);
                let n = u32::from(digit);
                if hit(n) {
                    birth_date.push(entry(
                        SynchronicityKind::BirthDate,
                        n,
                        label,
                        render(
                            &templates.sync_birth,
                            &[
                                ("value", &n.to_string()),
                                ("label", label),
                                ("source", &component.to_string()),
                            ],
                        ),
                    ));
                }
            }
        }

        let name_numbers = [
            ("Expression", querent.expression.value()),
            ("Soul Urge", querent.soul_urge.value()),
            ("Personality", querent.personality.value()),
        ]
        .into_iter()
        .filter(|&(_, n)| hit(n))
        .map(|(label, n)| {
            entry(
                SynchronicityKind::NameNumber,
                n,
                label,
                render(
                    &templates.sync_name,
                    &[("value", &n.to_string()), ("label", label)],
                ),
            )
        })
        .collect();

        let current_date = [("day", today.day()), ("month", today.month())]
            .into_iter()
            .filter(|&(_, n)| hit(n))
            .map(|(label, n)| {
                entry(
                    SynchronicityKind::CurrentDate,
                    n,
                    label,
                    render(
                        &templates.sync_date,
                        &[("value", &n.to_string()), ("label", label)],
                    ),
                )
            })
            .collect();

        Self {
            life_numbers,
            birth_date,
            name_numbers,
            current_date,
        }
    }

    pub fn total(&self) -> usize {
        self.life_numbers.len()
            + self.birth_date.len()
            + self.name_numbers.len()
            + self.current_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every entry, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Synchronicity> {
        self.life_numbers
            .iter()
            .chain(&self.birth_date)
            .chain(&self.name_numbers)
            .chain(&self.current_date)
    }
}

fn entry(kind: SynchronicityKind, value: u32, label: &str, description: String) -> Synchronicity {
    Synchronicity {
        kind,
        value,
        label: label.to_string(),
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lexicon::Lexicon;
    use crate::domain::numerology::compute_profile;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_matches_gives_empty_lists() {
        // John Smith, 1990-01-15: life path 8, birthday 6, maturity 7,
        // expression 8, soul urge 6, personality 11
        let querent = compute_profile("John Smith", "1990-01-15").unwrap();
        let lexicon = Lexicon::builtin();
        let found = Synchronicities::detect(&[40, 41], &querent, day(2026, 3, 2), &lexicon.templates);
        assert!(found.is_empty());
        assert!(found.life_numbers.is_empty());
        assert!(found.current_date.is_empty());
    }

    #[test]
    fn matches_each_category() {
        let querent = compute_profile("John Smith", "1990-01-15").unwrap();
        let lexicon = Lexicon::builtin();
        let found = Synchronicities::detect(
            &[8, 11, 5, 12],
            &querent,
            day(2026, 12, 3),
            &lexicon.templates,
        );

        // 8 is the life path
        assert_eq!(found.life_numbers.len(), 1);
        assert_eq!(found.life_numbers[0].label, "Life Path");
        // digits: day 15 -> 1, 5; month 1 -> 1; year 1990 -> 1, 9
        let birth: Vec<_> = found.birth_date.iter().map(|s| (s.label.as_str(), s.value)).collect();
        assert_eq!(birth, vec![("day", 5)]);
        // 8 expression, 11 personality
        assert_eq!(found.name_numbers.len(), 2);
        // today is the 3rd of December
        assert_eq!(found.current_date.len(), 1);
        assert_eq!(found.current_date[0].label, "month");
        assert_eq!(found.total(), 5);
    }

    #[test]
    fn birth_digits_are_distinct_per_component() {
        let querent = compute_profile("Ann Lee", "1911-11-11").unwrap();
        let lexicon = Lexicon::builtin();
        let found = Synchronicities::detect(&[1], &querent, day(2026, 2, 2), &lexicon.templates);
        // 1 appears once for each of day, month and year
        assert_eq!(found.birth_date.len(), 3);
        assert!(found.birth_date[2].description.contains("1911"));
    }
}
