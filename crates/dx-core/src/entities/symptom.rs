use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A symptom statement the user rates with a certainty level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Symptom {
    pub id: i64,
    #[serde(rename = "kode", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "gejala")]
    pub statement: String,
}
