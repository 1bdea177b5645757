//! Data access layer: one repository per entity.
//!
//! Repositories own the SeaORM queries and return entity models; conversion to
//! transfer representations happens above, in the service layer. Every finder
//! the booking state dispatch needs is an explicit predicate/sort query here.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;
