use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest},
        password::{hash_password, verify_password},
        repo_types::StoredUser,
        services::{is_valid_email, normalize_email, validate_registration},
    },
    error::{ApiError, ApiResult},
    extract::ApiJson,
    profile::dto::PublicProfile,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<PublicProfile>)> {
    let registration = match validate_registration(&payload, state.config.min_password_len) {
        Ok(r) => r,
        Err(errors) => {
            warn!(%errors, "registration rejected");
            return Err(errors.into());
        }
    };

    let password_hash = hash_password(registration.password).await?;

    if let Some(previous) = state.profiles.load().await? {
        info!(previous_user_id = %previous.id, "replacing stored profile record");
    }

    let user = StoredUser {
        id: Uuid::new_v4(),
        name: registration.name,
        email: registration.email,
        password_hash,
        profile: registration.profile,
        registered_at: OffsetDateTime::now_utc(),
    };
    state.profiles.save(&user).await?;

    info!(user_id = %user.id, email = %user.email, objective = ?user.profile.objective, "user registered");
    Ok((StatusCode::CREATED, Json(PublicProfile::from(&user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<PublicProfile>> {
    let email = normalize_email(&payload.email);
    if !is_valid_email(&email) {
        warn!(%email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    }

    let user = match state.profiles.load().await? {
        Some(u) if u.email == email => u,
        _ => {
            warn!(%email, "login unknown email");
            return Err(invalid_credentials());
        }
    };

    if !verify_password(payload.password, user.password_hash.clone()).await? {
        warn!(%email, user_id = %user.id, "login invalid password");
        return Err(invalid_credentials());
    }

    info!(user_id = %user.id, "user logged in");
    Ok(Json(PublicProfile::from(&user)))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> ApiResult<StatusCode> {
    state.profiles.clear().await?;
    info!("profile record cleared");
    Ok(StatusCode::NO_CONTENT)
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".into())
}
