use crate::config::Config;
use crate::errors::AppError;
use crate::models::ContactPayload;
use reqwest;
use tracing;

/// API version header value pinned by the GHL contacts endpoint.
const GHL_API_VERSION: &str = "2021-07-28";

/// Client for the GoHighLevel (LeadConnector) contacts API.
#[derive(Clone)]
pub struct GhlClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GhlClient {
    /// Creates a new `GhlClient` from the application configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.ghl_base_url.clone(),
            token: config.ghl_api_token.clone(),
        }
    }

    /// Creates a contact in GHL and returns the contact id it reports, if
    /// any.
    ///
    /// One shot, no retry. A non-success status carries the GHL body back
    /// for the server-side log; transport and parse failures surface as
    /// internal errors.
    pub async fn create_contact(
        &self,
        payload: &ContactPayload,
    ) -> Result<Option<String>, AppError> {
        let url = format!("{}/contacts/", self.base_url);
        tracing::info!(
            "Submitting contact to GHL: {} {}",
            payload.first_name,
            payload.last_name
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("Version", GHL_API_VERSION)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("GHL request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::CrmRejected { status, body });
        }

        let data: serde_json::Value = response.json().await.map_err(|e| {
            AppError::InternalError(format!("Failed to parse GHL response: {}", e))
        })?;

        // GHL may omit the contact wrapper; a missing id is not an error.
        let contact_id = data
            .pointer("/contact/id")
            .and_then(|id| id.as_str())
            .map(|id| id.to_string());

        Ok(contact_id)
    }
}
