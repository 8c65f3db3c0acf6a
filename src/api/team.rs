//! Team API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::TeamMember;
use crate::AppState;

/// GET /api/team - List the team shown on the About page.
pub async fn list_team(State(state): State<AppState>) -> ApiResult<Vec<TeamMember>> {
    let store = state.store.read().await;
    success(store.team().to_vec(), store.revision())
}
