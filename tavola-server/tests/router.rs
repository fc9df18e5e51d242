//! Router-level tests for the auth gate and cookie handling.
//!
//! The pool is created lazily and never connected: every path exercised
//! here resolves before reaching a query, so no database is required.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use tavola_server::api;
use tavola_server::auth::session::SessionClaims;
use tavola_server::state::AppState;

const SECRET: &str = "test-secret";

fn test_router() -> axum::Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/tavola_test")
        .expect("lazy pool");
    api::create_router(AppState {
        pool,
        jwt_secret: SECRET.to_string(),
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let response = test_router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "tavola-server");
}

#[tokio::test]
async fn menu_rejects_missing_cookie() {
    let response = test_router()
        .oneshot(Request::get("/api/menu").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 1001);
}

#[tokio::test]
async fn menu_rejects_malformed_token() {
    let response = test_router()
        .oneshot(
            Request::get("/api/menu")
                .header(header::COOKIE, "jwt=not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 1004);
}

#[tokio::test]
async fn menu_rejects_expired_token() {
    // Correctly signed, expired two hours ago (beyond validation leeway)
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: 1,
        exp: (now - 7200) as usize,
        iat: (now - 7300) as usize,
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let response = test_router()
        .oneshot(
            Request::get("/api/menu")
                .header(header::COOKIE, format!("jwt={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 1003);
}

#[tokio::test]
async fn menu_rejects_token_signed_with_other_secret() {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: 1,
        exp: (now + 3600) as usize,
        iat: now as usize,
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = test_router()
        .oneshot(
            Request::get("/api/menu")
                .header(header::COOKIE, format!("jwt={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 1004);
}

#[tokio::test]
async fn reservations_are_gated_too() {
    let response = test_router()
        .oneshot(
            Request::patch("/api/reservations/1/cancel")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_reports_unauthenticated() {
    let response = test_router()
        .oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_cookie() {
    let response = test_router()
        .oneshot(
            Request::post("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout sets a cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("jwt="));
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(set_cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["message"], "Logged out successfully");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = test_router()
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
