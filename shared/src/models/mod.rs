//! Data models
//!
//! Shared between the server and the browser console (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod menu_item;
pub mod reservation;
pub mod user;

// Re-exports
pub use menu_item::*;
pub use reservation::*;
pub use user::*;
