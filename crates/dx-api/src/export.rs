//! Report exports rendered by the backend.

use dx_core::enums::ExportFormat;

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// Direct download URL for a report, suitable for a browser.
    #[must_use]
    pub fn export_url(&self, format: ExportFormat) -> String {
        self.endpoint(&export_path(format))
    }

    /// Download a report and return its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure, or
    /// [`ApiError::Parse`] when the backend answers with an empty body.
    pub async fn download_export(&self, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        let url = self.export_url(format);
        tracing::debug!(%url, %format, "downloading export");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::Parse(format!("{format} export is empty")));
        }
        tracing::debug!(size = bytes.len(), "export downloaded");
        Ok(bytes.to_vec())
    }
}

fn export_path(format: ExportFormat) -> String {
    format!("/export/{}", format.as_str())
}
