//! Login and registration handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain_claims::User;

use crate::auth::{create_token, roles_for};
use crate::dto::auth::*;
use crate::{error::ApiError, AppState};

fn issue(state: &AppState, user: &User) -> Result<AuthResponse, ApiError> {
    let token = create_token(
        user,
        roles_for(user),
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.config.jwt_expiration_secs,
        user: UserResponse::from(user),
    })
}

/// Signs in and returns a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    request.validate()?;

    let user = state.authenticator.login(&request.email, &request.password).await?;
    info!(user = %user.id, "User signed in");

    Ok(Json(issue(&state, &user)?))
}

/// Creates an account and signs it in
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    request.validate()?;

    let user = state
        .authenticator
        .register(&request.username, &request.email, &request.password)
        .await?;
    info!(user = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(issue(&state, &user)?)))
}
