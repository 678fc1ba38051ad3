use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::Hypothesis;

/// Outcome of `POST /diagnosis/diagnose`. Computed entirely by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiagnosisResult {
    pub hypothesis: Hypothesis,
    /// Confidence in the hypothesis, 0–100.
    pub percentage: f64,
}

impl DiagnosisResult {
    /// Percentage clamped to 0–100.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    /// Complement of the confidence, as shown next to it on the dashboard.
    #[must_use]
    pub fn uncertainty(&self) -> f64 {
        100.0 - self.confidence()
    }
}

/// One row of the backend's diagnosis history (`GET /diagnosis/results`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StoredResult {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub hypothesis_id: Option<i64>,
    /// Hypothesis name; the backend sends either the name or the full record.
    #[serde(
        default,
        alias = "hypothesis_name",
        alias = "nama_hipotesis",
        deserialize_with = "hypothesis_label"
    )]
    pub hypothesis: Option<String>,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn hypothesis_label<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Name(String),
        Record {
            #[serde(rename = "nama")]
            name: String,
        },
    }

    Ok(Option::<Label>::deserialize(d)?.map(|label| match label {
        Label::Name(name) | Label::Record { name } => name,
    }))
}
