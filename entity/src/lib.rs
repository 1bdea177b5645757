pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod prelude;
pub mod user;
