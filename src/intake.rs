use serde_json::Value;

use crate::config::{Config, LEAD_SOURCE, LEAD_TAGS};
use crate::models::{ContactPayload, CustomField, LeadRequest};

/// Splits a raw name into (first, last).
///
/// The first whitespace token becomes the first name; the remaining tokens
/// are rejoined with single spaces. A single-token name yields an empty last
/// name, not a missing one.
pub fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.trim().split_whitespace();
    let first = tokens.next().unwrap_or("").to_string();
    let rest: Vec<&str> = tokens.collect();
    (first, rest.join(" "))
}

/// Presence test matching the wizard's loose submission semantics: JSON
/// null, the empty string, `0`, and `false` all count as absent.
pub fn scalar_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Bool(b) => *b,
        _ => true,
    }
}

/// Renders a scalar the way the wizard field is stored in GHL: strings pass
/// through unquoted, numbers and booleans via their display form.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the GHL contact payload from a submission.
///
/// `name`, `email` and `phone` have already passed the required-field check.
/// Email is lower-cased, email and phone are trimmed; the optional wizard
/// fields pass through untouched. Custom fields are appended in a fixed
/// order (zip, birth year, retirement assets) and only when both the inbound
/// value and the configured field id are present.
pub fn build_contact_payload(
    config: &Config,
    name: &str,
    email: &str,
    phone: &str,
    lead: &LeadRequest,
) -> ContactPayload {
    let (first_name, last_name) = split_name(name);

    let mut custom_fields = Vec::new();

    if let (Some(zip), Some(id)) = (
        lead.zip_code.as_deref().filter(|z| !z.is_empty()),
        config.ghl_field_zip_code.as_deref(),
    ) {
        custom_fields.push(CustomField {
            id: id.to_string(),
            value: zip.to_string(),
        });
    }
    if let (Some(year), Some(id)) = (
        lead.birth_year.as_ref().filter(|y| scalar_present(y)),
        config.ghl_field_birth_year.as_deref(),
    ) {
        custom_fields.push(CustomField {
            id: id.to_string(),
            value: scalar_to_string(year),
        });
    }
    if let (Some(assets), Some(id)) = (
        lead.retirement_assets.as_deref().filter(|a| !a.is_empty()),
        config.ghl_field_retirement_assets.as_deref(),
    ) {
        custom_fields.push(CustomField {
            id: id.to_string(),
            value: assets.to_string(),
        });
    }

    ContactPayload {
        first_name,
        last_name,
        email: email.trim().to_lowercase(),
        phone: phone.trim().to_string(),
        location_id: config.ghl_location_id.clone(),
        source: LEAD_SOURCE.to_string(),
        tags: LEAD_TAGS.iter().map(|t| t.to_string()).collect(),
        custom_fields,
    }
}
