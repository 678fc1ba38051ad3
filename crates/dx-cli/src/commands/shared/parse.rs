use dx_core::entities::Answer;
use dx_core::enums::CertaintyLevel;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse `--answer SYMPTOM_ID=VALUE`, where VALUE is a certainty factor
/// (`0.8`) or level name (`very-likely`).
pub fn parse_answer(raw: &str) -> anyhow::Result<Answer> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid answer '{raw}': expected SYMPTOM_ID=VALUE"))?;
    let symptom_id = id
        .trim()
        .parse::<i64>()
        .map_err(|error| anyhow::anyhow!("invalid symptom id in '{raw}': {error}"))?;
    let certainty = value
        .parse::<CertaintyLevel>()
        .map_err(|error| anyhow::anyhow!("invalid answer '{raw}': {error}"))?;
    Ok(Answer::new(symptom_id, certainty))
}

#[cfg(test)]
mod tests {
    use dx_core::enums::{CertaintyLevel, ExportFormat, WizardStep};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{parse_answer, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let format: ExportFormat = parse_enum("pdf", "format").expect("format should parse");
        assert_eq!(format, ExportFormat::Pdf);
        let step: WizardStep = parse_enum("Questionnaire", "step").expect("step should parse");
        assert_eq!(step, WizardStep::Questionnaire);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<ExportFormat>("docx", "export format").expect_err("should fail");
        assert!(err.to_string().contains("invalid export format 'docx'"));
    }

    #[rstest]
    #[case("4=0.8", 4, CertaintyLevel::VeryLikely)]
    #[case(" 12 = 1", 12, CertaintyLevel::Certain)]
    #[case("3=0", 3, CertaintyLevel::NotAtAll)]
    #[case("7=very-likely", 7, CertaintyLevel::VeryLikely)]
    fn parses_answers(#[case] raw: &str, #[case] id: i64, #[case] certainty: CertaintyLevel) {
        let answer = parse_answer(raw).expect("answer should parse");
        assert_eq!(answer.symptom_id, id);
        assert_eq!(answer.certainty, certainty);
    }

    #[rstest]
    #[case("4")]
    #[case("x=0.8")]
    #[case("4=0.5")]
    #[case("4=maybe")]
    fn rejects_bad_answers(#[case] raw: &str) {
        assert!(parse_answer(raw).is_err());
    }
}
