//! Property tests for the digit-reduction kernel, the profile calculator
//! and the reading scores.

use chrono::NaiveDate;
use proptest::prelude::*;

use arcana::adapters::JsonCardCatalog;
use arcana::domain::analysis::PatternAnalyzer;
use arcana::domain::cards::DrawnSet;
use arcana::domain::celestial::ZodiacSign;
use arcana::domain::lexicon::Lexicon;
use arcana::domain::numerology::{
    compute_profile, digit_sum, is_reduced, reduce, reduce_with, MasterNumberPolicy, PersonName,
    MASTER_NUMBERS, REDUCTION_SENTINEL,
};
use arcana::domain::reading::{Confidence, ReadingSynthesizer, Significance};
use arcana::ports::CardCatalog;

fn name_part() -> impl Strategy<Value = String> {
    "[bcdfghjklmnpqrstvwxz]{1,4}[aeiou]{1,2}[bcdfghjklmnpqrstvwxz]{0,3}"
}

proptest! {
    #[test]
    fn reduction_lands_on_single_digit_or_master(n in 1i64..=i64::MAX) {
        let r = reduce(n);
        prop_assert!((1..=9).contains(&r) || MASTER_NUMBERS.contains(&r), "reduce({}) = {}", n, r);
        prop_assert!(is_reduced(r, MasterNumberPolicy::Standard));
    }

    #[test]
    fn reduction_is_idempotent(n in 0i64..10_000_000) {
        let r = reduce(n);
        prop_assert_eq!(reduce(i64::from(r)), r);
    }

    #[test]
    fn reduction_preserves_residue_mod_nine(n in 0i64..10_000_000) {
        prop_assert_eq!(u64::from(reduce(n)) % 9, (n as u64) % 9);
    }

    #[test]
    fn digit_sum_preserves_residue_mod_nine(n in any::<u64>()) {
        prop_assert_eq!(digit_sum(n) % 9, n % 9);
    }

    #[test]
    fn negative_input_is_sentinel(n in i64::MIN..0) {
        prop_assert_eq!(reduce(n), REDUCTION_SENTINEL);
        prop_assert_eq!(reduce_with(n, MasterNumberPolicy::Extended), REDUCTION_SENTINEL);
    }

    #[test]
    fn extended_policy_only_adds_forty_four(n in 0i64..1_000_000) {
        let standard = reduce_with(n, MasterNumberPolicy::Standard);
        let extended = reduce_with(n, MasterNumberPolicy::Extended);
        if extended != 44 {
            prop_assert_eq!(standard, extended);
        } else {
            prop_assert_eq!(standard, 8);
        }
    }

    #[test]
    fn profile_numbers_are_reduced(
        first in name_part(),
        last in name_part(),
        year in 1900i32..=2025,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = format!("{:04}-{:02}-{:02}", year, month, day);
        let profile = compute_profile(&format!("{} {}", first, last), &date).unwrap();

        for (_, number) in profile.core_numbers() {
            prop_assert!(is_reduced(number.value(), MasterNumberPolicy::Standard));
        }
        prop_assert!(is_reduced(profile.maturity.value(), MasterNumberPolicy::Standard));
        prop_assert_eq!(profile.birthday.value(), reduce(i64::from(day)));
        prop_assert_eq!(profile.sun_sign, ZodiacSign::from_month_day(month, day));

        let expected_life_path = reduce(i64::from(
            reduce(i64::from(day)) + reduce(i64::from(month)) + reduce(i64::from(year)),
        ));
        prop_assert_eq!(profile.life_path.value(), expected_life_path);
    }

    #[test]
    fn profile_is_deterministic(first in name_part(), year in 1900i32..=2025) {
        let date = format!("{:04}-06-15", year);
        prop_assert_eq!(compute_profile(&first, &date).unwrap(), compute_profile(&first, &date).unwrap());
    }

    #[test]
    fn vowel_and_consonant_sums_partition_the_name(
        name in "[A-Za-z .'-]{1,24}|[Yy .'-]{1,10}",
    ) {
        prop_assume!(name.chars().any(|c| c.is_ascii_alphabetic()));
        let name = PersonName::new(name).unwrap();
        prop_assert_eq!(name.vowel_sum() + name.consonant_sum(), name.letter_sum());
    }

    #[test]
    fn drawn_sets_score_within_bounds_and_synthesize_deterministically(
        picks in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 1..=10),
        first in name_part(),
        last in name_part(),
        year in 1900i32..=2025,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let catalog = JsonCardCatalog::builtin().unwrap();
        let all = catalog.all();
        let cards = picks
            .iter()
            .map(|(index, reversed)| (index.get(all).clone(), *reversed))
            .collect();
        let drawn = DrawnSet::new(cards).unwrap();
        let date = format!("{:04}-{:02}-{:02}", year, month, day);
        let profile = compute_profile(&format!("{} {}", first, last), &date).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();

        let analysis = PatternAnalyzer::new(Lexicon::builtin()).analyze(&drawn, &profile, today);
        let confidence = Confidence::from_analysis(&analysis).value();
        let significance = Significance::from_analysis(&analysis).value();
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert!((1..=5).contains(&significance));

        let synthesizer = ReadingSynthesizer::new(Lexicon::builtin());
        let once = synthesizer.synthesize(&analysis, &profile, &drawn);
        let twice = synthesizer.synthesize(&analysis, &profile, &drawn);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn confidence_is_clamped(x in any::<f64>()) {
        let c = Confidence::new(x).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn significance_is_clamped(x in any::<u32>()) {
        prop_assert!((1..=5).contains(&Significance::new(x).value()));
    }
}
