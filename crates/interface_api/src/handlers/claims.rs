//! Claims handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::ClaimId;
use domain_claims::{AuthState, User};

use crate::auth::{permissions, require_role, Claims};
use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

fn parse_claim_id(raw: &str) -> Result<ClaimId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid claim id: {}", raw)))
}

/// Submits a damage claim
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<SubmitClaimRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let claim = state
        .service
        .submit_claim(&AuthState::signed_in(user), request.into())
        .await?;

    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists the caller's claims, newest first
pub async fn list_claims(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.claims_for(&user).await?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.service.claim(&user, parse_claim_id(&id)?).await?;
    Ok(Json(claim.into()))
}

/// Gets the claim currently open for the caller
pub async fn get_active_claim(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Option<ClaimResponse>>, ApiError> {
    let claim = state.service.active_claim(&user).await?;
    Ok(Json(claim.map(ClaimResponse::from)))
}

/// Opens or closes a claim for the caller
pub async fn set_active_claim(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<SetActiveClaimRequest>,
) -> Result<Json<Option<ClaimResponse>>, ApiError> {
    let id = request.claim_id.as_deref().map(parse_claim_id).transpose()?;
    let claim = state.service.set_active_claim(&user, id).await?;
    Ok(Json(claim.map(ClaimResponse::from)))
}

/// Updates claim status
pub async fn update_status(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    require_role(&claims, permissions::CLAIM_REVIEW)?;

    let claim = state
        .service
        .update_status(&user, parse_claim_id(&id)?, request.status)
        .await?;
    Ok(Json(claim.into()))
}
