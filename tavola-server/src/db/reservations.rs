//! Reservation database operations

use chrono::{DateTime, Utc};
use shared::models::reservation::{
    Reservation, ReservationCreate, ReservationStatus, ReservationUpdate,
};
use sqlx::PgPool;

/// Raw row; `status` is re-parsed into [`ReservationStatus`] on the way out,
/// falling back to `confirmed` for anything unknown.
#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    name: String,
    phone: Option<String>,
    email: Option<String>,
    guests: i32,
    date: DateTime<Utc>,
    table_number: Option<i32>,
    status: String,
    created_at: i64,
    updated_at: i64,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            guests: row.guests,
            date: row.date,
            table_number: row.table_number,
            status: ReservationStatus::from_db(&row.status),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// List reservations ascending by seating time, optionally restricted to a
/// half-open `[start, end)` window.
pub async fn list(
    pool: &PgPool,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> Result<Vec<Reservation>, sqlx::Error> {
    let rows: Vec<ReservationRow> = match window {
        Some((start, end)) => {
            sqlx::query_as(
                "SELECT * FROM reservations WHERE date >= $1 AND date < $2 ORDER BY date",
            )
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM reservations ORDER BY date")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows.into_iter().map(Reservation::from).collect())
}

pub async fn create(pool: &PgPool, data: &ReservationCreate) -> Result<Reservation, sqlx::Error> {
    let now = shared::util::now_millis();
    let status = data.status.unwrap_or_default();

    let row: ReservationRow = sqlx::query_as(
        r#"
        INSERT INTO reservations (name, phone, email, guests, date, table_number, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.guests)
    .bind(data.date)
    .bind(data.table_number)
    .bind(status.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row.into())
}

/// Full-field overwrite; returns None when the id does not exist.
pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &ReservationUpdate,
) -> Result<Option<Reservation>, sqlx::Error> {
    let now = shared::util::now_millis();
    let status = data.status.unwrap_or_default();

    let row: Option<ReservationRow> = sqlx::query_as(
        r#"
        UPDATE reservations SET
            name = $1, phone = $2, email = $3, guests = $4, date = $5,
            table_number = $6, status = $7, updated_at = $8
        WHERE id = $9
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.guests)
    .bind(data.date)
    .bind(data.table_number)
    .bind(status.as_str())
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Reservation::from))
}

/// Set status to `canceled`, leaving every other field untouched.
/// Idempotent; returns None when the id does not exist.
pub async fn cancel(pool: &PgPool, id: i64) -> Result<Option<Reservation>, sqlx::Error> {
    let now = shared::util::now_millis();
    let row: Option<ReservationRow> = sqlx::query_as(
        "UPDATE reservations SET status = 'canceled', updated_at = $1 WHERE id = $2 RETURNING *",
    )
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Reservation::from))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
