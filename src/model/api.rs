use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Pagination window taken from `from`/`size` query parameters.
///
/// `from` is the zero-based offset of the first element; `size` the number of
/// elements per page. Bounds are validated at the controller boundary.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub from: u64,
    pub size: u64,
}

impl Page {
    pub fn new(from: u64, size: u64) -> Self {
        Self { from, size }
    }
}
