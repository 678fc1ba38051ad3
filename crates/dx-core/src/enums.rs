//! Certainty levels, gender, wizard steps, and export formats.
//!
//! Enums that travel over the wire keep the backend's exact values
//! (`"Laki-laki"`, `0.8`); everything else uses `snake_case` serialization.
//! `WizardStep` is ordered so guards can compare steps directly.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CertaintyLevel
// ---------------------------------------------------------------------------

/// How sure the user is that a symptom statement applies to them.
///
/// Serialized as the bare certainty factor (`1.0`, `0.8`, ... `0.0`). Only the
/// six levels offered by the questionnaire are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CertaintyLevel {
    #[default]
    NotAtAll,
    Unlikely,
    Somewhat,
    Likely,
    VeryLikely,
    Certain,
}

impl CertaintyLevel {
    /// All levels in the order the questionnaire presents them (most certain first).
    pub const ALL: [Self; 6] = [
        Self::Certain,
        Self::VeryLikely,
        Self::Likely,
        Self::Somewhat,
        Self::Unlikely,
        Self::NotAtAll,
    ];

    /// The certainty factor sent to the backend.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Certain => 1.0,
            Self::VeryLikely => 0.8,
            Self::Likely => 0.6,
            Self::Somewhat => 0.4,
            Self::Unlikely => 0.2,
            Self::NotAtAll => 0.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Certain => "Very sure",
            Self::VeryLikely => "Sure",
            Self::Likely => "Fairly sure",
            Self::Somewhat => "Almost sure",
            Self::Unlikely => "Not very sure",
            Self::NotAtAll => "Not sure",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Certain => "certain",
            Self::VeryLikely => "very_likely",
            Self::Likely => "likely",
            Self::Somewhat => "somewhat",
            Self::Unlikely => "unlikely",
            Self::NotAtAll => "not_at_all",
        }
    }

    /// Map a certainty factor back to its level.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.value() - value).abs() < 1e-9)
    }
}

impl fmt::Display for CertaintyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

impl FromStr for CertaintyLevel {
    type Err = CoreError;

    /// Accepts a factor (`"0.8"`) or a level name (`"very_likely"`, `"very-likely"`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::from_value(value).ok_or_else(|| {
                CoreError::InvalidCertainty(format!(
                    "{trimmed} is not one of 0, 0.2, 0.4, 0.6, 0.8, 1.0"
                ))
            });
        }
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidCertainty(format!("unknown level '{trimmed}'")))
    }
}

impl Serialize for CertaintyLevel {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for CertaintyLevel {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(d)?;
        Self::from_value(value).ok_or_else(|| {
            de::Error::custom(format!("certainty {value} is not a questionnaire level"))
        })
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Gender as captured by the identity form. Wire values are the backend's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Gender {
    #[serde(rename = "Laki-laki")]
    Male,
    #[serde(rename = "Perempuan")]
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// The value stored by the backend.
    #[must_use]
    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::Male => "Laki-laki",
            Self::Female => "Perempuan",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "laki-laki" | "male" | "m" => Ok(Self::Male),
            "perempuan" | "female" | "f" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

/// Pages of the screening wizard, in the order a user walks them.
///
/// ```text
/// home → identity → hypothesis → questionnaire → dashboard
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Home,
    Identity,
    Hypothesis,
    Questionnaire,
    Dashboard,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Identity,
        Self::Hypothesis,
        Self::Questionnaire,
        Self::Dashboard,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Identity => "identity",
            Self::Hypothesis => "hypothesis",
            Self::Questionnaire => "questionnaire",
            Self::Dashboard => "dashboard",
        }
    }

    /// Route path of the step, as shown in navigation.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Identity => "/identity",
            Self::Hypothesis => "/hypothesis",
            Self::Questionnaire => "/questionnaire",
            Self::Dashboard => "/dashboard",
        }
    }

    /// The `dxw` subcommand that runs this step.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Home => "dxw start",
            Self::Identity => "dxw identity",
            Self::Hypothesis => "dxw hypothesis select <id>",
            Self::Questionnaire => "dxw questionnaire",
            Self::Dashboard => "dxw dashboard",
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Home => Some(Self::Identity),
            Self::Identity => Some(Self::Hypothesis),
            Self::Hypothesis => Some(Self::Questionnaire),
            Self::Questionnaire => Some(Self::Dashboard),
            Self::Dashboard => None,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Home => None,
            Self::Identity => Some(Self::Home),
            Self::Hypothesis => Some(Self::Identity),
            Self::Questionnaire => Some(Self::Hypothesis),
            Self::Dashboard => Some(Self::Questionnaire),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// Report formats offered by the backend's export endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excel => "excel",
            Self::Pdf => "pdf",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Excel => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    /// File name used when the caller does not choose one.
    #[must_use]
    pub fn default_file_name(self) -> String {
        format!("diagnosis-results.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
