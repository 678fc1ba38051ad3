use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CertaintyLevel;

/// The user's certainty for one symptom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub symptom_id: i64,
    #[serde(rename = "nilai_keyakinan")]
    #[schemars(with = "f64")]
    pub certainty: CertaintyLevel,
}

impl Answer {
    #[must_use]
    pub const fn new(symptom_id: i64, certainty: CertaintyLevel) -> Self {
        Self {
            symptom_id,
            certainty,
        }
    }
}
