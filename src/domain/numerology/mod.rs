//! Numerology - digit reduction and the querent profile calculator.
//!
//! # Components
//!
//! - `reduction` - The digit-reduction kernel with master-number handling
//! - `letters` - Pythagorean letter table and the validated `PersonName`
//! - `birth_date` - Validated `BirthDate`
//! - `profile` - Life path, expression, soul urge, personality, birthday,
//!   maturity, challenge, pinnacle and personal year numbers

mod birth_date;
mod letters;
mod number;
mod profile;
mod reduction;

pub use birth_date::{BirthDate, MIN_BIRTH_YEAR};
pub use letters::{is_strict_vowel, letter_value, PersonName, VowelSet};
pub use number::{ChallengeNumber, NumerologyNumber};
pub use profile::{
    birthday, challenge_numbers, compute_profile, expression, life_path, maturity,
    personal_year, personality, pinnacle_numbers, soul_urge, ChallengeNumbers, PinnacleNumbers,
    QuerentProfile,
};
pub use reduction::{
    digit_sum, digits, is_reduced, reduce, reduce_with, MasterNumberPolicy,
    EXTENDED_MASTER_NUMBERS, MASTER_NUMBERS, REDUCTION_SENTINEL,
};
