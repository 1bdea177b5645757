use serde::Deserialize;

use crate::{
    error::AppError,
    model::{api::Page, booking::QueryState},
    validation::validate_page_params,
};

/// `from`/`size` query parameters shared by every paged route.
///
/// `from` is a zero-based offset (default 0), `size` a page size (default 10).
/// Bounds are validated before the values are narrowed to unsigned.
#[derive(Debug, Deserialize)]
pub struct PaginationParam {
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl PaginationParam {
    pub fn resolve(&self) -> Result<Page, AppError> {
        let from = self.from.unwrap_or(0);
        let size = self.size.unwrap_or(10);

        validate_page_params(from, size)?;

        Ok(Page::new(from as u64, size as u64))
    }
}

/// Query parameters for the booking list routes: a state filter on top of the
/// shared pagination pair. The filter defaults to ALL.
#[derive(Debug, Deserialize)]
pub struct BookingListParam {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl BookingListParam {
    pub fn resolve_state(&self) -> Result<QueryState, AppError> {
        match &self.state {
            Some(state) => state.parse(),
            None => Ok(QueryState::All),
        }
    }

    pub fn resolve_page(&self) -> Result<Page, AppError> {
        PaginationParam {
            from: self.from,
            size: self.size,
        }
        .resolve()
    }
}

/// Query parameters for item search.
#[derive(Debug, Deserialize)]
pub struct SearchParam {
    pub text: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl SearchParam {
    pub fn resolve_page(&self) -> Result<Page, AppError> {
        PaginationParam {
            from: self.from,
            size: self.size,
        }
        .resolve()
    }
}

/// The `approved` flag on the booking transition route.
#[derive(Debug, Deserialize)]
pub struct ApprovedParam {
    pub approved: bool,
}
