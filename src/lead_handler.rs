use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::errors::AppError;
use crate::handlers::AppState;
use crate::intake::build_contact_payload;
use crate::models::{LeadRequest, LeadResponse};

/// Lead intake handler.
///
/// Flow:
/// 1. Require `name`, `email`, `phone` (presence only, no shape checks).
/// 2. Split the name and normalize email/phone.
/// 3. Map optional wizard fields onto configured GHL custom fields.
/// 4. Create the contact in GHL (single awaited call, no retry).
/// 5. Report the GHL contact id back to the wizard.
///
/// Stateless: every value lives for exactly one request.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(lead): Json<LeadRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(name), Some(email), Some(phone)) = (
        lead.name.as_deref().filter(|s| !s.is_empty()),
        lead.email.as_deref().filter(|s| !s.is_empty()),
        lead.phone.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    };

    let payload = build_contact_payload(&state.config, name, email, phone, &lead);

    let start = std::time::Instant::now();
    let contact_id = state.ghl.create_contact(&payload).await?;
    let latency_ms = start.elapsed().as_millis();

    tracing::info!(
        "✅ Lead captured: {} {} | {} | GHL contact: {} ({}ms)",
        payload.first_name,
        payload.last_name,
        payload.email,
        contact_id.as_deref().unwrap_or("-"),
        latency_ms
    );

    Ok((
        StatusCode::OK,
        Json(LeadResponse {
            success: true,
            contact_id,
        }),
    ))
}

/// Answers bare OPTIONS probes with an empty 200.
///
/// Preflights carrying the CORS request headers are short-circuited by the
/// CORS layer before they reach the router.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for any method other than POST/OPTIONS on the lead route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
