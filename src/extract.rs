//! Request extractors whose rejections surface as `AppError::Validation` (422).

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use crate::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct ValidForm<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// `?skip=&limit=` for list endpoints. Unsigned fields reject negative values.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// (offset, limit) with the limit capped at `max_page_size`.
    pub fn bounds(&self, max_page_size: i64) -> (i64, i64) {
        (i64::from(self.skip), i64::from(self.limit).min(max_page_size))
    }
}
