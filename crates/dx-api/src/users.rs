//! User registration and lookup.

use dx_core::entities::{RegisteredUser, UserProfile};
use serde::Deserialize;

use crate::{
    ApiClient,
    error::ApiError,
    http::{check_response, read_json},
};

/// `POST /users/` answers `{"user": {...}}`; `GET /users/{id}` may answer
/// either that envelope or the bare record.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserPayload {
    Wrapped { user: RegisteredUser },
    Bare(RegisteredUser),
}

impl From<UserPayload> for RegisteredUser {
    fn from(payload: UserPayload) -> Self {
        match payload {
            UserPayload::Wrapped { user } | UserPayload::Bare(user) => user,
        }
    }
}

impl ApiClient {
    /// Register a new respondent and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend rejects the
    /// profile, or the response cannot be parsed.
    pub async fn create_user(&self, profile: &UserProfile) -> Result<RegisteredUser, ApiError> {
        let url = self.endpoint("/users/");
        tracing::debug!(%url, "creating user");
        let resp = check_response(self.http.post(&url).json(profile).send().await?).await?;
        let payload: UserPayload = read_json(resp).await?;
        let user = RegisteredUser::from(payload);
        tracing::debug!(user_id = user.id, "user created");
        Ok(user)
    }

    /// List every registered user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_users(&self) -> Result<Vec<RegisteredUser>, ApiError> {
        let url = self.endpoint("/users/");
        tracing::debug!(%url, "listing users");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }

    /// Fetch one user by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 when the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<RegisteredUser, ApiError> {
        let url = self.endpoint(&format!("/users/{id}"));
        tracing::debug!(%url, "fetching user");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let payload: UserPayload = read_json(resp).await?;
        Ok(payload.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::decode;
    use dx_core::enums::Gender;
    use pretty_assertions::assert_eq;

    const CREATED: &str = r#"{
        "message": "User berhasil dibuat",
        "user": {
            "id": 7,
            "nama_lengkap": "Siti Aminah",
            "usia": "20",
            "angkatan": "2023",
            "program_studi": "Psikologi",
            "domisili": "Surabaya",
            "jenis_kelamin": "Perempuan",
            "created_at": "2025-02-10 09:30:00"
        }
    }"#;

    const LISTED: &str = r#"[
        {"id": 1, "nama_lengkap": "Andi", "usia": 22, "angkatan": 2021,
         "program_studi": "Hukum", "domisili": "Medan", "jenis_kelamin": "Laki-laki"},
        {"id": 2, "nama_lengkap": "Rina", "usia": "19", "angkatan": "2024",
         "program_studi": "Sastra", "domisili": "Bogor", "jenis_kelamin": "Perempuan"}
    ]"#;

    #[test]
    fn parse_created_user_envelope() {
        let user: RegisteredUser = decode::<UserPayload>(CREATED).unwrap().into();
        assert_eq!(user.id, 7);
        assert_eq!(user.profile.full_name, "Siti Aminah");
        assert_eq!(user.profile.age, 20);
        assert_eq!(user.profile.gender, Gender::Female);
        assert_eq!(user.created_at.as_deref(), Some("2025-02-10 09:30:00"));
    }

    #[test]
    fn parse_bare_user_record() {
        let bare = r#"{"id": 3, "nama_lengkap": "Budi", "usia": 21, "angkatan": 2022,
            "program_studi": "Manajemen", "domisili": "Bandung", "jenis_kelamin": "Laki-laki"}"#;
        let user: RegisteredUser = decode::<UserPayload>(bare).unwrap().into();
        assert_eq!(user.id, 3);
        assert_eq!(user.profile.cohort_year, 2022);
    }

    #[test]
    fn parse_user_list_with_mixed_number_encodings() {
        let users: Vec<RegisteredUser> = decode(LISTED).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].profile.age, 22);
        assert_eq!(users[1].profile.cohort_year, 2024);
    }

    #[test]
    fn envelope_without_user_is_a_parse_error() {
        let err = decode::<UserPayload>(r#"{"message": "ok"}"#).err().unwrap();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
