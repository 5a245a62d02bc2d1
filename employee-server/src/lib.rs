//! employee-server — Employee records over HTTP/JSON
//!
//! Layers, outermost first:
//! - `api`: routing, body validation, problem+json error responses
//! - `services`: the email uniqueness rule
//! - `db`: the persistence gateway (PostgreSQL or in-memory)

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod services;
pub mod state;

pub use config::Config;
pub use state::AppState;
