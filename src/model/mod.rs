//! Transfer representations and hand-written entity conversions.
//!
//! One view struct per entity plus the request payloads accepted at the HTTP
//! boundary. All conversions from persisted models are explicit constructor
//! functions; there is no reflection-based mapping layer.

pub mod api;
pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;
