//! School management information system: generic collection resource layer
//! over SQLite, identity/session handling, and a typed HTTP client facade.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;
