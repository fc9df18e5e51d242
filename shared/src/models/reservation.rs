//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// Initial state is `confirmed`. No state is terminal at the data-model
/// level: a full update may set any status. The dedicated cancel operation
/// only ever transitions *into* `canceled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    Canceled,
    Completed,
}

impl ReservationStatus {
    /// Database/text representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
        }
    }

    /// Parse a status string coming from the database.
    ///
    /// Unknown or missing values fall back to `confirmed`, the only sane
    /// default for a stored booking.
    pub fn from_db(s: &str) -> Self {
        match s {
            "canceled" => Self::Canceled,
            "completed" => Self::Completed,
            _ => Self::Confirmed,
        }
    }
}

/// Reservation entity (a booking for a future seating)
///
/// `table_number` is a plain label, not a foreign key. The JSON field name
/// is `table`, matching the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub guests: i32,
    pub date: DateTime<Utc>,
    #[serde(rename = "table")]
    pub table_number: Option<i32>,
    pub status: ReservationStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub guests: i32,
    pub date: DateTime<Utc>,
    #[serde(rename = "table")]
    pub table_number: Option<i32>,
    pub status: Option<ReservationStatus>,
}

/// Update reservation payload (full-field overwrite)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub guests: i32,
    pub date: DateTime<Utc>,
    #[serde(rename = "table")]
    pub table_number: Option<i32>,
    pub status: Option<ReservationStatus>,
}
