//! Valuation handlers

use axum::{extract::State, Json};
use validator::Validate;

use domain_claims::DamageAssessment;

use crate::dto::valuation::*;
use crate::{error::ApiError, AppState};

/// Values a vehicle and damage without filing a claim
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;

    let breakdown = state.service.quote(
        &request.vehicle_details.into(),
        &DamageAssessment::new(request.location, request.severity),
    );
    Ok(Json(breakdown.into()))
}
