//! Hypotheses, symptoms, answers, diagnosis, and result history.

use dx_core::entities::{Answer, DiagnosisResult, Hypothesis, StoredResult, Symptom};
use serde::Serialize;

use crate::{
    ApiClient,
    error::ApiError,
    http::{check_response, read_json},
};

#[derive(Serialize)]
struct AnswersRequest<'a> {
    user_id: i64,
    answers: &'a [Answer],
}

#[derive(Serialize)]
struct DiagnoseRequest<'a> {
    user_id: i64,
    hypothesis_id: i64,
    answers: &'a [Answer],
}

impl ApiClient {
    /// List every hypothesis the backend can test for.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_hypotheses(&self) -> Result<Vec<Hypothesis>, ApiError> {
        self.get_json("/diagnosis/hypotheses").await
    }

    /// Fetch one hypothesis.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 for an unknown id.
    pub async fn get_hypothesis(&self, id: i64) -> Result<Hypothesis, ApiError> {
        self.get_json(&format!("/diagnosis/hypotheses/{id}")).await
    }

    /// Symptoms linked to a hypothesis, in questionnaire order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn symptoms_for(&self, hypothesis_id: i64) -> Result<Vec<Symptom>, ApiError> {
        self.get_json(&format!("/diagnosis/hypotheses/{hypothesis_id}/symptoms"))
            .await
    }

    /// Every symptom known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_symptoms(&self) -> Result<Vec<Symptom>, ApiError> {
        self.get_json("/diagnosis/symptoms").await
    }

    /// Persist a user's answers. The acknowledgement body is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn save_answers(
        &self,
        user_id: i64,
        answers: &[Answer],
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint("/diagnosis/answers");
        tracing::debug!(%url, user_id, count = answers.len(), "saving answers");
        let body = AnswersRequest { user_id, answers };
        let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;
        read_json(resp).await
    }

    /// Ask the backend to compute the certainty factor for one hypothesis.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn diagnose(
        &self,
        user_id: i64,
        hypothesis_id: i64,
        answers: &[Answer],
    ) -> Result<DiagnosisResult, ApiError> {
        let url = self.endpoint("/diagnosis/diagnose");
        tracing::debug!(%url, user_id, hypothesis_id, "requesting diagnosis");
        let body = DiagnoseRequest {
            user_id,
            hypothesis_id,
            answers,
        };
        let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;
        let result: DiagnosisResult = read_json(resp).await?;
        tracing::debug!(percentage = result.percentage, "diagnosis received");
        Ok(result)
    }

    /// Stored diagnosis history, optionally filtered to one user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_results(&self, user_id: Option<i64>) -> Result<Vec<StoredResult>, ApiError> {
        self.get_json(&results_path(user_id)).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }
}

fn results_path(user_id: Option<i64>) -> String {
    match user_id {
        Some(id) => format!(
            "/diagnosis/results?user_id={}",
            urlencoding::encode(&id.to_string())
        ),
        None => "/diagnosis/results".to_string(),
    }
}
