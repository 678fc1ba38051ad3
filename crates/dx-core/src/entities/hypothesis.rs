use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A candidate diagnostic category (addiction severity tier) offered for screening.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Hypothesis {
    pub id: i64,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "deskripsi", default)]
    pub description: String,
    #[serde(rename = "solusi", default)]
    pub recommendation: String,
}
