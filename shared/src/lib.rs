//! Shared types for the Tavola backend
//!
//! Data models, the unified error system and small utilities used by
//! the server crate (and, via JSON, the browser console).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
