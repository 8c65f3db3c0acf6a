//! REST API module.
//!
//! Exposes the store and derived page views to the browser front end. Public routes only
//! read; admin routes are mounted behind the session gate in `create_router`.

mod admin;
mod datastore;
mod events;
mod gallery;
mod news;
mod programs;
mod session;
mod team;

pub use admin::*;
pub use datastore::*;
pub use events::*;
pub use gallery::*;
pub use news::*;
pub use programs::*;
pub use session::*;
pub use team::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: u64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: u64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Result of a delete; `removed` is false when the id was unknown.
#[derive(Debug, Serialize)]
pub struct RemoveResult {
    pub removed: bool,
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: u64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Titles are required on create and cannot be blanked on update.
pub fn validate_title(title: &str) -> Result<(), crate::errors::AppError> {
    if title.trim().is_empty() {
        return Err(crate::errors::AppError::Validation(
            "Title is required".to_string(),
        ));
    }
    Ok(())
}

/// Create an error API response.
pub fn error<T: Serialize>(err: crate::errors::AppError, revision_id: u64) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithRevision {
        error: err,
        revision_id,
    })
}
