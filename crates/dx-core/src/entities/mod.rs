//! Entity structs for the diagnosis domain.
//!
//! Field names are English; `#[serde(rename)]` maps them onto the backend's
//! Indonesian JSON keys. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod answer;
mod hypothesis;
mod profile;
mod result;
mod symptom;

pub use answer::Answer;
pub use hypothesis::Hypothesis;
pub use profile::{RegisteredUser, UserProfile};
pub use result::{DiagnosisResult, StoredResult};
pub use symptom::Symptom;
