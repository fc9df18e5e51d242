//! Database access layer

pub mod menu_items;
pub mod reservations;
pub mod users;
