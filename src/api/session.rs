//! Operator session API endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::AppState;

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// GET /api/session - Whether an operator is logged in.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionStatus> {
    let revision_id = state.store.read().await.revision();
    success(
        SessionStatus {
            authenticated: state.session.is_authenticated(),
        },
        revision_id,
    )
}

/// POST /api/session/login - Check the operator credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<SessionStatus> {
    let revision_id = state.store.read().await.revision();

    if state.session.login(&request.username, &request.password) {
        success(SessionStatus { authenticated: true }, revision_id)
    } else {
        error(
            AppError::Unauthorized("Invalid username or password".to_string()),
            revision_id,
        )
    }
}

/// POST /api/session/logout - End the operator session.
pub async fn logout(State(state): State<AppState>) -> ApiResult<SessionStatus> {
    let revision_id = state.store.read().await.revision();
    state.session.logout();
    success(
        SessionStatus {
            authenticated: false,
        },
        revision_id,
    )
}
