//! Menu CRUD endpoints
//!
//! Payloads are persisted as-is beyond type coercion; get/update/delete
//! answer 404 uniformly for unknown ids.

use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::auth::session::SessionUser;
use crate::db;
use crate::state::AppState;

use super::{ApiResult, internal};

pub async fn list_menu_items(
    State(state): State<AppState>,
    _session: SessionUser,
) -> ApiResult<Vec<MenuItem>> {
    let items = db::menu_items::list(&state.pool).await.map_err(internal)?;
    Ok(Json(items))
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<MenuItem> {
    let item = db::menu_items::find_by_id(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    Ok(Json(item))
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    _session: SessionUser,
    Json(data): Json<MenuItemCreate>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let item = db::menu_items::create(&state.pool, &data)
        .await
        .map_err(internal)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(id): Path<i64>,
    Json(data): Json<MenuItemUpdate>,
) -> ApiResult<MenuItem> {
    let item = db::menu_items::update(&state.pool, id, &data)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    Ok(Json(item))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::menu_items::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::MenuItemNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}
