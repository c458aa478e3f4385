use serde::Deserialize;

/// The one origin allowed to call the lead endpoint from a browser.
pub const ALLOWED_ORIGIN: &str = "https://annuityhelp.net";

/// Source label stamped on every contact sent to GHL.
pub const LEAD_SOURCE: &str = "annuityhelp.net";

/// Tags applied to every contact sent to GHL.
pub const LEAD_TAGS: [&str; 2] = ["annuityhelp-lead", "website"];

const DEFAULT_GHL_BASE_URL: &str = "https://services.leadconnectorhq.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub ghl_api_token: String,
    pub ghl_location_id: String,
    pub ghl_base_url: String,
    pub ghl_field_zip_code: Option<String>,
    pub ghl_field_birth_year: Option<String>,
    pub ghl_field_retirement_assets: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            ghl_api_token: std::env::var("GHL_API_TOKEN")
                .map_err(|_| anyhow::anyhow!("GHL_API_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("GHL_API_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
            ghl_location_id: std::env::var("GHL_LOCATION_ID")
                .map_err(|_| anyhow::anyhow!("GHL_LOCATION_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("GHL_LOCATION_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            ghl_base_url: std::env::var("GHL_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("GHL_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })
                .transpose()?
                .unwrap_or_else(|| DEFAULT_GHL_BASE_URL.to_string()),
            // Each custom-field mapping independently gates whether that
            // field is ever sent; unset or empty means the field is skipped.
            ghl_field_zip_code: std::env::var("GHL_FIELD_ZIP_CODE")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            ghl_field_birth_year: std::env::var("GHL_FIELD_BIRTH_YEAR")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            ghl_field_retirement_assets: std::env::var("GHL_FIELD_RETIREMENT_ASSETS")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        };

        // Log successful configuration load (without sensitive values)
        tracing::debug!("GHL base URL: {}", config.ghl_base_url);
        tracing::debug!("Server port: {}", config.port);
        tracing::info!(
            "Custom field mappings: zip={}, birth_year={}, retirement_assets={}",
            config.ghl_field_zip_code.is_some(),
            config.ghl_field_birth_year.is_some(),
            config.ghl_field_retirement_assets.is_some()
        );

        Ok(config)
    }
}
