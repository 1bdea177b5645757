//! HTTP request handlers.
//!
//! Controllers extract the caller identity, run boundary validation, delegate
//! to the service layer, and convert the outcome into a JSON response.

pub mod booking;
pub mod item;
pub mod param;
pub mod request;
pub mod user;
