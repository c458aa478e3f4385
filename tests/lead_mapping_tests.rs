/// Unit tests for lead mapping logic
/// Tests name splitting, field normalization, and custom-field gating
use annuityhelp_lead_api::config::Config;
use annuityhelp_lead_api::intake::{build_contact_payload, split_name};
use annuityhelp_lead_api::models::{CustomField, LeadRequest, LeadResponse};
use serde_json::json;

/// Helper function to create a test config with all three field mappings set
fn full_config() -> Config {
    Config {
        port: 3000,
        ghl_api_token: "test_token".to_string(),
        ghl_location_id: "loc_123".to_string(),
        ghl_base_url: "https://services.leadconnectorhq.com".to_string(),
        ghl_field_zip_code: Some("field_zip".to_string()),
        ghl_field_birth_year: Some("field_birth".to_string()),
        ghl_field_retirement_assets: Some("field_assets".to_string()),
    }
}

#[cfg(test)]
mod name_splitting_tests {
    use super::*;

    #[test]
    fn test_multi_token_name() {
        let (first, last) = split_name("Jane Q Public");
        assert_eq!(first, "Jane");
        assert_eq!(last, "Q Public");
    }

    #[test]
    fn test_single_token_name_has_empty_last_name() {
        let (first, last) = split_name("Madonna");
        assert_eq!(first, "Madonna");
        assert_eq!(last, "");
    }

    #[test]
    fn test_surrounding_and_internal_whitespace() {
        let (first, last) = split_name("  John   Ronald  Reuel   Tolkien ");
        assert_eq!(first, "John");
        assert_eq!(last, "Ronald Reuel Tolkien");
    }

    #[test]
    fn test_whitespace_only_name() {
        let (first, last) = split_name("   ");
        assert_eq!(first, "");
        assert_eq!(last, "");
    }
}

#[cfg(test)]
mod normalization_tests {
    use super::*;

    #[test]
    fn test_email_trimmed_and_lowercased() {
        let lead = LeadRequest::default();
        let payload =
            build_contact_payload(&full_config(), "Jane Doe", " John@Example.COM ", "555-0100", &lead);
        assert_eq!(payload.email, "john@example.com");
    }

    #[test]
    fn test_phone_trimmed_but_not_reformatted() {
        let lead = LeadRequest::default();
        let payload =
            build_contact_payload(&full_config(), "Jane Doe", "j@x.com", " (305) 555-0100 ", &lead);
        assert_eq!(payload.phone, "(305) 555-0100");
    }

    #[test]
    fn test_fixed_source_tags_and_location() {
        let lead = LeadRequest::default();
        let payload = build_contact_payload(&full_config(), "Jane Doe", "j@x.com", "555", &lead);
        assert_eq!(payload.location_id, "loc_123");
        assert_eq!(payload.source, "annuityhelp.net");
        assert_eq!(payload.tags, vec!["annuityhelp-lead", "website"]);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let lead = LeadRequest {
            zip_code: Some("33101".to_string()),
            ..Default::default()
        };
        let payload =
            build_contact_payload(&full_config(), "Jane Q Public", "j@x.com", "555", &lead);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["lastName"], "Q Public");
        assert_eq!(value["locationId"], "loc_123");
        assert_eq!(value["customFields"][0]["id"], "field_zip");
    }
}

#[cfg(test)]
mod custom_field_tests {
    use super::*;

    #[test]
    fn test_all_three_fields_in_fixed_order() {
        let lead = LeadRequest {
            zip_code: Some("33101".to_string()),
            birth_year: Some(json!(1958)),
            retirement_assets: Some("250k-500k".to_string()),
            ..Default::default()
        };
        let payload = build_contact_payload(&full_config(), "Jane Doe", "j@x.com", "555", &lead);
        assert_eq!(
            payload.custom_fields,
            vec![
                CustomField {
                    id: "field_zip".to_string(),
                    value: "33101".to_string()
                },
                CustomField {
                    id: "field_birth".to_string(),
                    value: "1958".to_string()
                },
                CustomField {
                    id: "field_assets".to_string(),
                    value: "250k-500k".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_birth_year_string_passes_through() {
        let lead = LeadRequest {
            birth_year: Some(json!("1958")),
            ..Default::default()
        };
        let payload = build_contact_payload(&full_config(), "Jane Doe", "j@x.com", "555", &lead);
        assert_eq!(payload.custom_fields[0].value, "1958");
    }

    #[test]
    fn test_value_present_but_mapping_absent_is_omitted() {
        let config = Config {
            ghl_field_birth_year: None,
            ..full_config()
        };
        let lead = LeadRequest {
            zip_code: Some("33101".to_string()),
            birth_year: Some(json!(1958)),
            ..Default::default()
        };
        let payload = build_contact_payload(&config, "Jane Doe", "j@x.com", "555", &lead);
        assert_eq!(payload.custom_fields.len(), 1);
        assert_eq!(payload.custom_fields[0].id, "field_zip");
    }

    #[test]
    fn test_mapping_present_but_value_absent_is_omitted() {
        let lead = LeadRequest {
            retirement_assets: Some("250k-500k".to_string()),
            ..Default::default()
        };
        let payload = build_contact_payload(&full_config(), "Jane Doe", "j@x.com", "555", &lead);
        assert_eq!(payload.custom_fields.len(), 1);
        assert_eq!(payload.custom_fields[0].id, "field_assets");
    }

    #[test]
    fn test_empty_and_zero_values_are_omitted() {
        let lead = LeadRequest {
            zip_code: Some("".to_string()),
            birth_year: Some(json!(0)),
            retirement_assets: Some("".to_string()),
            ..Default::default()
        };
        let payload = build_contact_payload(&full_config(), "Jane Doe", "j@x.com", "555", &lead);
        assert!(payload.custom_fields.is_empty());
    }

    #[test]
    fn test_no_mappings_configured_sends_empty_list() {
        let config = Config {
            ghl_field_zip_code: None,
            ghl_field_birth_year: None,
            ghl_field_retirement_assets: None,
            ..full_config()
        };
        let lead = LeadRequest {
            zip_code: Some("33101".to_string()),
            birth_year: Some(json!(1958)),
            retirement_assets: Some("250k-500k".to_string()),
            ..Default::default()
        };
        let payload = build_contact_payload(&config, "Jane Doe", "j@x.com", "555", &lead);
        assert!(payload.custom_fields.is_empty());
    }
}

#[cfg(test)]
mod response_serialization_tests {
    use super::*;

    #[test]
    fn test_contact_id_present() {
        let response = LeadResponse {
            success: true,
            contact_id: Some("abc123".to_string()),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": true, "contactId": "abc123"}));
    }

    #[test]
    fn test_missing_contact_id_key_is_dropped() {
        let response = LeadResponse {
            success: true,
            contact_id: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": true}));
    }
}

#[cfg(test)]
mod request_deserialization_tests {
    use super::*;

    #[test]
    fn test_camel_case_fields_accepted() {
        let lead: LeadRequest = serde_json::from_value(json!({
            "name": "Jane Q Public",
            "email": "jane@example.com",
            "phone": "555-0100",
            "zipCode": "33101",
            "birthYear": 1958,
            "retirementAssets": "250k-500k"
        }))
        .unwrap();
        assert_eq!(lead.zip_code.as_deref(), Some("33101"));
        assert_eq!(lead.birth_year, Some(json!(1958)));
        assert_eq!(lead.retirement_assets.as_deref(), Some("250k-500k"));
    }

    #[test]
    fn test_absent_fields_deserialize_as_none() {
        let lead: LeadRequest = serde_json::from_value(json!({"name": "Madonna"})).unwrap();
        assert!(lead.email.is_none());
        assert!(lead.phone.is_none());
        assert!(lead.zip_code.is_none());
        assert!(lead.birth_year.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let lead: LeadRequest = serde_json::from_value(json!({
            "name": "Jane",
            "email": "j@x.com",
            "phone": "555",
            "utm_campaign": "spring"
        }))
        .unwrap();
        assert_eq!(lead.name.as_deref(), Some("Jane"));
    }
}
