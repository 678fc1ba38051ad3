//! Serde roundtrip and JsonSchema validation tests for wire entities.

use dx_core::entities::*;
use dx_core::enums::*;
use dx_core::responses::*;
use dx_core::session::DiagnosisSession;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn profile() -> UserProfile {
    UserProfile {
        full_name: "Rina Wulandari".into(),
        age: 19,
        cohort_year: 2024,
        program: "Sistem Informasi".into(),
        residence: "Yogyakarta".into(),
        gender: Gender::Female,
    }
}

fn hypothesis() -> Hypothesis {
    Hypothesis {
        id: 2,
        name: "Kecanduan Sedang".into(),
        description: "Moderate online game addiction.".into(),
        recommendation: "Limit play sessions to two hours a day.".into(),
    }
}

roundtrip_and_validate!(profile_roundtrip, UserProfile, profile());

roundtrip_and_validate!(
    registered_user_roundtrip,
    RegisteredUser,
    RegisteredUser {
        id: 41,
        profile: profile(),
        created_at: Some("2025-03-01T08:00:00".into()),
    }
);

roundtrip_and_validate!(hypothesis_roundtrip, Hypothesis, hypothesis());

roundtrip_and_validate!(
    symptom_roundtrip,
    Symptom,
    Symptom {
        id: 5,
        code: Some("G05".into()),
        statement: "I lose track of time while playing.".into(),
    }
);

roundtrip_and_validate!(
    answer_roundtrip,
    Answer,
    Answer::new(5, CertaintyLevel::VeryLikely)
);

roundtrip_and_validate!(
    diagnosis_result_roundtrip,
    DiagnosisResult,
    DiagnosisResult {
        hypothesis: hypothesis(),
        percentage: 62.5,
    }
);

roundtrip_and_validate!(
    export_response_roundtrip,
    ExportResponse,
    ExportResponse {
        format: ExportFormat::Pdf,
        url: "http://localhost:5000/api/export/pdf".into(),
        path: Some("diagnosis-results.pdf".into()),
        bytes: Some(2048),
    }
);

roundtrip_and_validate!(
    session_view_roundtrip,
    SessionView,
    DiagnosisSession::new().view()
);

#[test]
fn profile_uses_backend_keys() {
    let json = serde_json::to_value(profile()).unwrap();
    assert_eq!(json["nama_lengkap"], "Rina Wulandari");
    assert_eq!(json["usia"], "19");
    assert_eq!(json["angkatan"], "2024");
    assert_eq!(json["program_studi"], "Sistem Informasi");
    assert_eq!(json["domisili"], "Yogyakarta");
    assert_eq!(json["jenis_kelamin"], "Perempuan");
}

#[test]
fn registered_user_reads_numeric_fields() {
    let user: RegisteredUser = serde_json::from_str(
        r#"{
            "id": 12,
            "nama_lengkap": "Andi",
            "usia": 22,
            "angkatan": 2021,
            "program_studi": "Hukum",
            "domisili": "Medan",
            "jenis_kelamin": "Laki-laki",
            "created_at": "2025-01-02 10:00:00"
        }"#,
    )
    .unwrap();
    assert_eq!(user.id, 12);
    assert_eq!(user.profile.age, 22);
    assert_eq!(user.profile.cohort_year, 2021);
    assert_eq!(user.profile.gender, Gender::Male);
}

#[test]
fn answer_uses_certainty_key() {
    let json = serde_json::to_value(Answer::new(3, CertaintyLevel::Somewhat)).unwrap();
    assert_eq!(json, serde_json::json!({ "symptom_id": 3, "nilai_keyakinan": 0.4 }));
}
