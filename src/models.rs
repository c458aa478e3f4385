use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form submission from the annuityhelp.net wizard.
///
/// Every field is optional at the serde layer; the handler enforces the
/// required trio so the caller gets the documented 400 body instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    /// The wizard sends this as either a number or a string.
    #[serde(default)]
    pub birth_year: Option<Value>,
    #[serde(default)]
    pub retirement_assets: Option<String>,
}

/// Contact representation accepted by the GHL contacts endpoint.
///
/// Derived per request, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location_id: String,
    pub source: String,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
}

/// A GHL custom field value, keyed by the opaque field id configured for the
/// location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub value: String,
}

/// Body returned to the wizard on success.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub success: bool,
    /// Contact id reported by GHL; omitted entirely when GHL does not
    /// return one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}
