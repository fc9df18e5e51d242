//! Reservation endpoints: CRUD, cancel transition, day-window listing

use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::reservation::{Reservation, ReservationCreate, ReservationUpdate};

use crate::auth::session::SessionUser;
use crate::db;
use crate::state::AppState;

use super::{ApiResult, internal};

/// GET /api/reservations?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct ReservationsQuery {
    pub date: Option<String>,
}

/// Half-open day window `[date 00:00:00, date+1d 00:00:00)` in UTC
fn day_window(date: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let start = day.and_hms_opt(0, 0, 0)?.and_utc();
    Some((start, start + Duration::days(1)))
}

pub async fn list_reservations(
    State(state): State<AppState>,
    _session: SessionUser,
    Query(query): Query<ReservationsQuery>,
) -> ApiResult<Vec<Reservation>> {
    let window = match query.date.as_deref() {
        Some(date) => Some(day_window(date).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ReservationInvalidDate,
                "Invalid date format, expected YYYY-MM-DD",
            )
        })?),
        None => None,
    };

    let reservations = db::reservations::list(&state.pool, window)
        .await
        .map_err(internal)?;
    Ok(Json(reservations))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    _session: SessionUser,
    Json(data): Json<ReservationCreate>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    if data.guests < 1 {
        return Err(AppError::new(ErrorCode::ReservationInvalidGuests));
    }

    let reservation = db::reservations::create(&state.pool, &data)
        .await
        .map_err(internal)?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn update_reservation(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(id): Path<i64>,
    Json(data): Json<ReservationUpdate>,
) -> ApiResult<Reservation> {
    if data.guests < 1 {
        return Err(AppError::new(ErrorCode::ReservationInvalidGuests));
    }

    let reservation = db::reservations::update(&state.pool, id, &data)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::ReservationNotFound))?;
    Ok(Json(reservation))
}

/// PATCH /api/reservations/{id}/cancel
///
/// The only enforced transition: status moves to `canceled`, every other
/// field stays untouched. Idempotent — canceling twice is a no-op success.
pub async fn cancel_reservation(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Reservation> {
    let reservation = db::reservations::cancel(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::ReservationNotFound))?;
    Ok(Json(reservation))
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::reservations::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::ReservationNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_window_bounds() {
        let (start, end) = day_window("2024-05-01").unwrap();
        assert_eq!(start.to_rfc3339(), "2024-05-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-05-02T00:00:00+00:00");
    }

    #[test]
    fn test_day_window_contains_evening_seating() {
        let (start, end) = day_window("2024-05-01").unwrap();
        let seating: DateTime<Utc> = "2024-05-01T19:00:00Z".parse().unwrap();
        assert!(seating >= start && seating < end);

        let (next_start, next_end) = day_window("2024-05-02").unwrap();
        assert!(!(seating >= next_start && seating < next_end));
    }

    #[test]
    fn test_day_window_half_open() {
        let (start, end) = day_window("2024-05-01").unwrap();
        let midnight: DateTime<Utc> = "2024-05-01T00:00:00Z".parse().unwrap();
        let next_midnight: DateTime<Utc> = "2024-05-02T00:00:00Z".parse().unwrap();
        // Start is inclusive, end is exclusive
        assert!(midnight >= start && midnight < end);
        assert!(!(next_midnight < end));
    }

    #[test]
    fn test_day_window_rejects_malformed() {
        assert!(day_window("not-a-date").is_none());
        assert!(day_window("2024-13-01").is_none());
        assert!(day_window("2024-05-01T19:00:00Z").is_none());
        assert!(day_window("").is_none());
    }
}
