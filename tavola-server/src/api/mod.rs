//! API routes for tavola-server

pub mod auth;
pub mod health;
pub mod menu;
pub mod reservation;

use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Map a store error to an opaque 500, logging the cause.
pub(crate) fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Store query error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Session endpoints (unguarded; /me resolves the cookie itself)
    let auth_routes = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me));

    // Menu CRUD (session-gated via SessionUser)
    let menu = Router::new()
        .route(
            "/api/menu",
            get(menu::list_menu_items).post(menu::create_menu_item),
        )
        .route(
            "/api/menu/{id}",
            get(menu::get_menu_item)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        );

    // Reservation CRUD (session-gated via SessionUser)
    let reservations = Router::new()
        .route(
            "/api/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            put(reservation::update_reservation).delete(reservation::delete_reservation),
        )
        .route(
            "/api/reservations/{id}/cancel",
            patch(reservation::cancel_reservation),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .merge(menu)
        .merge(reservations)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
