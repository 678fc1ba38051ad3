//! Questionnaire answer bookkeeping.

use std::collections::HashSet;

use crate::entities::{Answer, Symptom};
use crate::enums::CertaintyLevel;
use crate::errors::CoreError;

/// Initial answers for a questionnaire: one per symptom, in symptom order.
///
/// A previous answer for the same symptom is carried over; everything else
/// starts at [`CertaintyLevel::NotAtAll`]. Previous answers for symptoms that
/// are no longer listed are dropped.
#[must_use]
pub fn seed_answers(symptoms: &[Symptom], previous: &[Answer]) -> Vec<Answer> {
    symptoms
        .iter()
        .map(|symptom| {
            let certainty = previous
                .iter()
                .find(|answer| answer.symptom_id == symptom.id)
                .map_or(CertaintyLevel::NotAtAll, |answer| answer.certainty);
            Answer::new(symptom.id, certainty)
        })
        .collect()
}

/// Reject answer sets that contain the same symptom twice.
///
/// # Errors
///
/// Returns [`CoreError::DuplicateAnswer`] naming the first repeated symptom.
pub fn check_unique(answers: &[Answer]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(answers.len());
    for answer in answers {
        if !seen.insert(answer.symptom_id) {
            return Err(CoreError::DuplicateAnswer {
                symptom_id: answer.symptom_id,
            });
        }
    }
    Ok(())
}

/// Check that `answers` covers every symptom exactly once and nothing else.
///
/// # Errors
///
/// Returns [`CoreError::DuplicateAnswer`], [`CoreError::UnknownSymptom`], or
/// [`CoreError::MissingAnswer`].
pub fn check_complete(symptoms: &[Symptom], answers: &[Answer]) -> Result<(), CoreError> {
    check_unique(answers)?;

    let known: HashSet<i64> = symptoms.iter().map(|s| s.id).collect();
    if let Some(stray) = answers.iter().find(|a| !known.contains(&a.symptom_id)) {
        return Err(CoreError::UnknownSymptom {
            symptom_id: stray.symptom_id,
        });
    }

    let answered: HashSet<i64> = answers.iter().map(|a| a.symptom_id).collect();
    if let Some(missing) = symptoms.iter().find(|s| !answered.contains(&s.id)) {
        return Err(CoreError::MissingAnswer {
            symptom_id: missing.id,
        });
    }

    Ok(())
}

/// Replace the certainty of one symptom's answer.
///
/// # Errors
///
/// Returns [`CoreError::UnknownSymptom`] when no answer exists for `symptom_id`.
pub fn set_certainty(
    answers: &mut [Answer],
    symptom_id: i64,
    certainty: CertaintyLevel,
) -> Result<(), CoreError> {
    let answer = answers
        .iter_mut()
        .find(|answer| answer.symptom_id == symptom_id)
        .ok_or(CoreError::UnknownSymptom { symptom_id })?;
    answer.certainty = certainty;
    Ok(())
}
