use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Gender;
use crate::wire_serde;

/// Identity captured in the first wizard step.
///
/// Only constructed through [`crate::validation::ProfileDraft::validate`] or
/// deserialized from the backend, so every field is already trimmed and in range.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(rename = "nama_lengkap")]
    pub full_name: String,
    #[serde(rename = "usia", with = "wire_serde::number_as_string")]
    #[schemars(with = "String")]
    pub age: u32,
    #[serde(rename = "angkatan", with = "wire_serde::number_as_string")]
    #[schemars(with = "String")]
    pub cohort_year: i32,
    #[serde(rename = "program_studi")]
    pub program: String,
    #[serde(rename = "domisili")]
    pub residence: String,
    #[serde(rename = "jenis_kelamin")]
    pub gender: Gender,
}

/// A user record as stored by the backend after registration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: i64,
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
