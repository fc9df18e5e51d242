//! Session authentication for the management API

pub mod session;
