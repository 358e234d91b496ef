//! Tracker Types - Pure record and response types
//!
//! This crate holds the plain data shared by the storage ports, the services
//! and the HTTP layer. It has no async runtime dependencies.

pub mod calendar;
pub mod exercise;
pub mod user;

pub use exercise::*;
pub use user::*;
