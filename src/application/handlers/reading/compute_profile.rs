//! ComputeProfile - numerology profile for a name and birth date.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::numerology::{
    personal_year, BirthDate, NumerologyNumber, PersonName, QuerentProfile,
};
use crate::ports::Clock;

use super::generate_reading::ReadingPolicy;

/// Command to compute a querent profile.
#[derive(Debug, Clone)]
pub struct ComputeProfileCommand {
    pub full_name: String,
    pub birth_date: String,
}

/// Computed profile plus the personal year for today.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResult {
    pub profile: QuerentProfile,
    pub personal_year: NumerologyNumber,
    pub warnings: Vec<String>,
}

/// Handler for profile computation.
pub struct ComputeProfileHandler {
    clock: Arc<dyn Clock>,
    policy: ReadingPolicy,
}

impl ComputeProfileHandler {
    pub fn new(clock: Arc<dyn Clock>, policy: ReadingPolicy) -> Self {
        Self { clock, policy }
    }

    pub fn handle(&self, cmd: ComputeProfileCommand) -> Result<ProfileResult, DomainError> {
        let today = self.clock.today();
        let mut warnings = Vec::new();
        let profile = validate_querent(
            &cmd.full_name,
            &cmd.birth_date,
            today,
            &self.policy,
            &mut warnings,
        )?;
        let personal_year = personal_year(&profile.birth_date, today.year());

        Ok(ProfileResult {
            profile,
            personal_year,
            warnings,
        })
    }
}

/// Validates raw querent input against `today` and computes the profile.
///
/// A future birth date or an age above `max_age` is rejected; an age below
/// `adult_age` only adds a warning.
pub(crate) fn validate_querent(
    full_name: &str,
    birth_date: &str,
    today: NaiveDate,
    policy: &ReadingPolicy,
    warnings: &mut Vec<String>,
) -> Result<QuerentProfile, DomainError> {
    let name = PersonName::new(full_name)?;
    let birth_date = BirthDate::parse(birth_date)?;

    if birth_date.as_naive() > today {
        return Err(
            ValidationError::invalid_format("birth_date", "birth date is in the future").into(),
        );
    }
    let age = birth_date.age_on(today);
    if age > policy.max_age {
        return Err(ValidationError::out_of_range(
            "birth_date",
            0,
            i64::from(policy.max_age),
            i64::from(age),
        )
        .into());
    }
    if age < policy.adult_age {
        warnings.push(format!(
            "Querent is under {}; this reading is for entertainment purposes only",
            policy.adult_age
        ));
    }

    Ok(QuerentProfile::compute(name, birth_date)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::domain::celestial::ZodiacSign;
    use crate::domain::foundation::{ErrorCode, Timestamp};

    fn handler() -> ComputeProfileHandler {
        let today = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        ComputeProfileHandler::new(
            Arc::new(FixedClock::new(Timestamp::start_of(today))),
            ReadingPolicy::default(),
        )
    }

    fn cmd(name: &str, date: &str) -> ComputeProfileCommand {
        ComputeProfileCommand {
            full_name: name.to_string(),
            birth_date: date.to_string(),
        }
    }

    #[test]
    fn computes_profile_and_personal_year() {
        let result = handler().handle(cmd("John Smith", "1990-01-15")).unwrap();
        assert_eq!(result.profile.life_path.value(), 8);
        assert_eq!(result.profile.sun_sign, ZodiacSign::Capricorn);
        // reduce(15) + reduce(1) + reduce(2026) = 6 + 1 + 1
        assert_eq!(result.personal_year.value(), 8);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn rejects_future_birth_date() {
        let err = handler().handle(cmd("John Smith", "2026-10-21")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.get("field").map(String::as_str), Some("birth_date"));
    }

    #[test]
    fn birthday_today_is_accepted() {
        let result = handler().handle(cmd("John Smith", "2026-10-20")).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn rejects_malformed_date() {
        let err = handler().handle(cmd("John Smith", "15/01/1990")).unwrap_err();
        assert!(err.code.is_validation());
    }

    #[test]
    fn rejects_name_without_letters() {
        let err = handler().handle(cmd("1234", "1990-01-15")).unwrap_err();
        assert!(err.code.is_validation());
    }
}
