use atl_core::{CoreError, ExportModel};
use serde_json::Value;

use super::Submission;
use crate::{ApiClient, ApiError};

/// Bulk export and import of whole models.
pub struct AdminView<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminView<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /export/{model}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or returns a non-success status.
    pub async fn export(&self, model: ExportModel) -> Result<Value, ApiError> {
        self.client.get_json(&format!("export/{model}")).await
    }

    /// `POST /import/{model}` with `body` sent verbatim as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Core`] for an empty body (nothing is sent) and
    /// [`ApiError::Http`] on transport failure.
    pub async fn import(&self, model: ExportModel, body: String) -> Result<Submission, ApiError> {
        if body.trim().is_empty() {
            return Err(CoreError::Validation(format!("import file for {model} is empty")).into());
        }
        let resp = self.client.post_raw(&format!("import/{model}"), body).await?;
        if resp.status().is_success() {
            Ok(Submission {
                ok: true,
                id: None,
                message: String::from("Imported"),
            })
        } else {
            tracing::warn!(%model, status = resp.status().as_u16(), "import rejected");
            Ok(Submission {
                ok: false,
                id: None,
                message: format!("Error importing {model}"),
            })
        }
    }
}
