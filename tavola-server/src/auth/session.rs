//! Session-cookie JWT authentication
//!
//! Tokens are HS256-signed with the server secret, carried in an http-only
//! cookie, and resolved to a full user row on every request. The resolved
//! user is threaded through handlers as an explicit [`SessionUser`]
//! parameter, never stashed on a shared request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::user::User;

use crate::db;
use crate::state::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "jwt";

/// Sessions expire 30 days after login
const TOKEN_EXPIRY_DAYS: i64 = 30;

/// JWT claims for a console session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub sub: i64,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Create a session JWT for a user
pub fn create_token(user_id: i64, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = SessionClaims {
        sub: user_id,
        exp: (now + chrono::Duration::days(TOKEN_EXPIRY_DAYS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a session JWT (signature + expiry) and return its claims
pub fn verify_token(token: &str, secret: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let validation = Validation::default();
    let token_data = jsonwebtoken::decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

/// Session cookie set on login: http-only, 30-day Max-Age
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::days(TOKEN_EXPIRY_DAYS))
        .build()
}

/// Replacement cookie set on logout: empty value, immediate expiry
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Authenticated user resolved from the session cookie
///
/// Guards every menu and reservation endpoint; `/api/auth/me` uses it to
/// report the current session. Stateless per request.
#[derive(Debug, Clone)]
pub struct SessionUser(pub User);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::NotAuthenticated, "No session token")
            })?;

        let claims = verify_token(&token, &state.jwt_secret).map_err(|e| {
            tracing::debug!("JWT validation failed: {e}");
            match e.kind() {
                ErrorKind::ExpiredSignature => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid session token"),
            }
        })?;

        let user = db::users::find_by_id(&state.pool, claims.sub)
            .await
            .map_err(|e| {
                tracing::error!("DB error during session lookup: {e}");
                AppError::new(ErrorCode::InternalError)
            })?
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::NotAuthenticated, "User not found")
            })?;

        Ok(SessionUser(user))
    }
}
