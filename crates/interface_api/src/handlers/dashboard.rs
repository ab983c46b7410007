//! Dashboard handler

use axum::{extract::State, Extension, Json};

use domain_claims::User;

use crate::dto::claims::ClaimResponse;
use crate::dto::dashboard::DashboardResponse;
use crate::{error::ApiError, AppState};

const RECENT_CLAIMS: usize = 5;

/// Summary cards and recent claims for the caller
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let summary = state.service.dashboard(&user).await?;
    let recent = state
        .service
        .claims_for(&user)
        .await?
        .into_iter()
        .take(RECENT_CLAIMS)
        .map(ClaimResponse::from)
        .collect();

    Ok(Json(DashboardResponse::new(summary, recent)))
}
