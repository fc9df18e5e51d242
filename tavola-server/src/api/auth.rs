//! Authentication endpoints: register, login, logout, me

use axum::http::StatusCode;
use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::user::PublicUser;

use crate::auth::session::{self, SessionUser};
use crate::db;
use crate::state::AppState;
use crate::util::{hash_password, verify_password};

use super::ApiResult;

/// POST /api/auth/register
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    let email = req.email.trim().to_lowercase();

    let existing = db::users::find_by_email(&state.pool, &email)
        .await
        .map_err(|e| {
            tracing::error!("DB error during register: {e}");
            AppError::new(ErrorCode::InternalError)
        })?;
    if existing.is_some() {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered));
    }

    let hashed =
        hash_password(&req.password).map_err(|_| AppError::new(ErrorCode::InternalError))?;
    let now = shared::util::now_millis();

    let user = db::users::create(&state.pool, &req.name, &email, &hashed, now)
        .await
        .map_err(|e| {
            tracing::error!("DB error creating user: {e}");
            AppError::new(ErrorCode::InternalError)
        })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<PublicUser>), AppError> {
    let email = req.email.trim().to_lowercase();
    let user = db::users::find_by_email(&state.pool, &email)
        .await
        .map_err(|e| {
            tracing::error!("DB error during login: {e}");
            AppError::new(ErrorCode::InternalError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

    if !verify_password(&req.password, &user.hashed_password) {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }

    let token = session::create_token(user.id, &state.jwt_secret).map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    Ok((jar.add(session::session_cookie(token)), Json(user.into())))
}

/// POST /api/auth/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    (
        jar.add(session::clear_session_cookie()),
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    )
}

/// GET /api/auth/me
pub async fn me(SessionUser(user): SessionUser) -> ApiResult<PublicUser> {
    Ok(Json(user.into()))
}
