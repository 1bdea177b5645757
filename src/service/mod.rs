//! Business rules layer.
//!
//! Services own the domain rules: existence and ownership checks, the booking
//! status transition, comment eligibility, and view enrichment. They consume
//! repositories and produce transfer representations for the controllers.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;
