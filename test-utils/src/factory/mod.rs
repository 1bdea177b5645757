//! Factories for creating test entities with sensible defaults.
//!
//! Each factory uses a builder pattern so tests can override only the fields
//! they care about. The `helpers` module provides shortcuts for creating
//! entity hierarchies (owner + item, booking with dependencies, etc.).

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;
