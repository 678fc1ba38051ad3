//! Identity form validation.
//!
//! A [`ProfileDraft`] holds the form exactly as typed. [`ProfileDraft::validate`]
//! checks every field, collects all failures, and only then produces a trimmed
//! [`UserProfile`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::UserProfile;
use crate::enums::Gender;

/// Study programs offered by the identity form.
pub const PROGRAM_OPTIONS: [&str; 14] = [
    "Teknik Informatika",
    "Sistem Informasi",
    "Ilmu Komputer",
    "Teknik Elektro",
    "Teknik Mesin",
    "Manajemen",
    "Akuntansi",
    "Psikologi",
    "Kedokteran",
    "Farmasi",
    "Hukum",
    "Ilmu Komunikasi",
    "Sastra",
    PROGRAM_OTHER,
];

/// Program option that requires a free-text program name.
pub const PROGRAM_OTHER: &str = "Lainnya";

/// Number of cohort years offered, counting back from the current year.
pub const COHORT_WINDOW: i32 = 10;

pub const MIN_AGE: u32 = 15;
pub const MAX_AGE: u32 = 50;

const MIN_TEXT_LEN: usize = 3;
const MAX_TEXT_LEN: usize = 100;

/// Cohort years selectable in `current_year`, newest first.
#[must_use]
pub fn cohort_options(current_year: i32) -> Vec<i32> {
    (0..COHORT_WINDOW).map(|offset| current_year - offset).collect()
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Identity form fields, named as the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FullName,
    Age,
    CohortYear,
    Program,
    Residence,
    Gender,
}

impl ProfileField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Age => "age",
            Self::CohortYear => "cohort_year",
            Self::Program => "program",
            Self::Residence => "residence",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: ProfileField,
    pub message: String,
}

/// Every field error found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Error)]
#[error("{}", join_field_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: ProfileField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn push(&mut self, field: ProfileField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Raw identity form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub full_name: String,
    pub age: String,
    pub cohort_year: String,
    pub program: String,
    /// Free-text program, used when `program` is [`PROGRAM_OTHER`].
    pub custom_program: String,
    pub residence: String,
    pub gender: String,
}

impl ProfileDraft {
    /// Pre-fill a draft from a saved profile so the form can be edited.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        let listed = PROGRAM_OPTIONS
            .iter()
            .any(|option| *option == profile.program && *option != PROGRAM_OTHER);
        let (program, custom_program) = if listed {
            (profile.program.clone(), String::new())
        } else {
            (PROGRAM_OTHER.to_string(), profile.program.clone())
        };
        Self {
            full_name: profile.full_name.clone(),
            age: profile.age.to_string(),
            cohort_year: profile.cohort_year.to_string(),
            program,
            custom_program,
            residence: profile.residence.clone(),
            gender: profile.gender.wire_value().to_string(),
        }
    }

    /// Validate the draft; `current_year` anchors the cohort window.
    ///
    /// # Errors
    ///
    /// Returns every failing field in [`ValidationErrors`].
    pub fn validate(&self, current_year: i32) -> Result<UserProfile, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let full_name = self.full_name.trim();
        if let Err(message) = check_full_name(full_name) {
            errors.push(ProfileField::FullName, message);
        }

        let age = match check_age(self.age.trim()) {
            Ok(age) => Some(age),
            Err(message) => {
                errors.push(ProfileField::Age, message);
                None
            }
        };

        let cohort_year = match check_cohort(self.cohort_year.trim(), current_year) {
            Ok(year) => Some(year),
            Err(message) => {
                errors.push(ProfileField::CohortYear, message);
                None
            }
        };

        let program = match self.resolved_program() {
            Ok(program) => Some(program),
            Err(message) => {
                errors.push(ProfileField::Program, message);
                None
            }
        };

        let residence = self.residence.trim();
        if let Err(message) = check_length(residence, "Residence") {
            errors.push(ProfileField::Residence, message);
        }

        let gender = if self.gender.trim().is_empty() {
            errors.push(ProfileField::Gender, "Gender is required");
            None
        } else {
            match self.gender.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(message) => {
                    errors.push(ProfileField::Gender, message);
                    None
                }
            }
        };

        match (age, cohort_year, program, gender) {
            (Some(age), Some(cohort_year), Some(program), Some(gender)) if errors.is_empty() => {
                Ok(UserProfile {
                    full_name: full_name.to_string(),
                    age,
                    cohort_year,
                    program,
                    residence: residence.to_string(),
                    gender,
                })
            }
            _ => Err(errors),
        }
    }

    fn resolved_program(&self) -> Result<String, String> {
        let program = self.program.trim();
        if program.is_empty() {
            return Err("Study program is required".into());
        }
        if program == PROGRAM_OTHER {
            let custom = self.custom_program.trim();
            if custom.is_empty() {
                return Err("Please enter your study program".into());
            }
            return Ok(custom.to_string());
        }
        Ok(program.to_string())
    }
}

fn check_length(value: &str, label: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len == 0 {
        Err(format!("{label} is required"))
    } else if len < MIN_TEXT_LEN {
        Err(format!("{label} must be at least {MIN_TEXT_LEN} characters"))
    } else if len > MAX_TEXT_LEN {
        Err(format!("{label} must be at most {MAX_TEXT_LEN} characters"))
    } else {
        Ok(())
    }
}

fn check_full_name(value: &str) -> Result<(), String> {
    check_length(value, "Full name")?;
    let allowed = |ch: char| ch.is_ascii_alphabetic() || ch.is_whitespace() || ch == '\'' || ch == '.';
    if value.chars().all(allowed) {
        Ok(())
    } else {
        Err("Full name may only contain letters, spaces, apostrophes, and periods".into())
    }
}

fn check_age(value: &str) -> Result<u32, String> {
    if value.is_empty() {
        return Err("Age is required".into());
    }
    let out_of_range = || format!("Age must be a number between {MIN_AGE} and {MAX_AGE}");
    if !value.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(out_of_range());
    }
    match value.parse::<u32>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(age),
        _ => Err(out_of_range()),
    }
}

fn check_cohort(value: &str, current_year: i32) -> Result<i32, String> {
    if value.is_empty() {
        return Err("Cohort year is required".into());
    }
    let oldest = current_year - COHORT_WINDOW + 1;
    match value.parse::<i32>() {
        Ok(year) if (oldest..=current_year).contains(&year) => Ok(year),
        _ => Err(format!("Cohort year must be between {oldest} and {current_year}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const YEAR: i32 = 2025;

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            full_name: "  Budi O'Neil Jr.  ".into(),
            age: "21".into(),
            cohort_year: "2022".into(),
            program: "Teknik Informatika".into(),
            custom_program: String::new(),
            residence: " Bandung ".into(),
            gender: "Laki-laki".into(),
        }
    }

    #[test]
    fn valid_draft_produces_trimmed_profile() {
        let profile = valid_draft().validate(YEAR).expect("draft should validate");
        assert_eq!(profile.full_name, "Budi O'Neil Jr.");
        assert_eq!(profile.age, 21);
        assert_eq!(profile.cohort_year, 2022);
        assert_eq!(profile.residence, "Bandung");
        assert_eq!(profile.gender, Gender::Male);
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = ProfileDraft::default().validate(YEAR).unwrap_err();
        let fields: Vec<ProfileField> = errors.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                ProfileField::FullName,
                ProfileField::Age,
                ProfileField::CohortYear,
                ProfileField::Program,
                ProfileField::Residence,
                ProfileField::Gender,
            ]
        );
        assert_eq!(errors.message_for(ProfileField::Age), Some("Age is required"));
    }

    #[test]
    fn errors_display_joins_every_field() {
        let draft = ProfileDraft {
            age: String::new(),
            residence: String::new(),
            ..valid_draft()
        };
        let errors = draft.validate(YEAR).unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.starts_with("age: Age is required; residence: "), "{rendered}");
        let as_error: &dyn std::error::Error = &errors;
        assert!(as_error.source().is_none());
    }

    #[rstest]
    #[case("Al", "at least 3")]
    #[case("Budi123", "only contain letters")]
    #[case("Budi_Santoso", "only contain letters")]
    fn rejects_bad_names(#[case] name: &str, #[case] expected: &str) {
        let draft = ProfileDraft {
            full_name: name.into(),
            ..valid_draft()
        };
        let errors = draft.validate(YEAR).unwrap_err();
        let message = errors.message_for(ProfileField::FullName).unwrap();
        assert!(message.contains(expected), "{message}");
    }

    #[test]
    fn rejects_overlong_name() {
        let draft = ProfileDraft {
            full_name: "a".repeat(101),
            ..valid_draft()
        };
        assert!(draft.validate(YEAR).is_err());
    }

    #[rstest]
    #[case("14", false)]
    #[case("15", true)]
    #[case("50", true)]
    #[case("51", false)]
    #[case("2a", false)]
    #[case("-20", false)]
    fn age_bounds(#[case] age: &str, #[case] ok: bool) {
        let draft = ProfileDraft {
            age: age.into(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(YEAR).is_ok(), ok);
    }

    #[rstest]
    #[case("2025", true)]
    #[case("2016", true)]
    #[case("2015", false)]
    #[case("2026", false)]
    fn cohort_window(#[case] year: &str, #[case] ok: bool) {
        let draft = ProfileDraft {
            cohort_year: year.into(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(YEAR).is_ok(), ok);
    }

    #[test]
    fn other_program_requires_custom_value() {
        let missing = ProfileDraft {
            program: PROGRAM_OTHER.into(),
            ..valid_draft()
        };
        let errors = missing.validate(YEAR).unwrap_err();
        assert_eq!(
            errors.message_for(ProfileField::Program),
            Some("Please enter your study program")
        );

        let filled = ProfileDraft {
            program: PROGRAM_OTHER.into(),
            custom_program: "  Arsitektur ".into(),
            ..valid_draft()
        };
        assert_eq!(filled.validate(YEAR).unwrap().program, "Arsitektur");
    }

    #[test]
    fn draft_roundtrips_through_profile() {
        let profile = ProfileDraft {
            program: PROGRAM_OTHER.into(),
            custom_program: "Arsitektur".into(),
            ..valid_draft()
        }
        .validate(YEAR)
        .unwrap();
        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.program, PROGRAM_OTHER);
        assert_eq!(draft.custom_program, "Arsitektur");
        assert_eq!(draft.validate(YEAR).unwrap(), profile);
    }

    #[test]
    fn cohort_options_cover_ten_years() {
        let years = cohort_options(YEAR);
        assert_eq!(years.len(), 10);
        assert_eq!(years.first(), Some(&2025));
        assert_eq!(years.last(), Some(&2016));
    }
}
