//! Shared types for the employee service
//!
//! The employee model and its field rules, the validation engine, and the
//! error/problem-response types used by the server.

pub mod error;
pub mod models;
pub mod validation;

