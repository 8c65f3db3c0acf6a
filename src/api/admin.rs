//! Admin dashboard endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::filters::{dashboard, Dashboard};
use crate::AppState;

/// GET /api/admin/dashboard - Content counts and recent activity.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Dashboard> {
    let store = state.store.read().await;
    success(dashboard(&store), store.revision())
}
