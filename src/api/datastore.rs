//! Datastore API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{Datastore, RevisionInfo};
use crate::AppState;

/// GET /api/datastore - Get every collection at the current revision.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<Datastore> {
    let store = state.store.read().await;
    let datastore = store.datastore();
    let revision_id = datastore.revision_id;
    success(datastore, revision_id)
}

/// GET /api/datastore/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_id = state.store.read().await.revision();
    success(RevisionInfo { revision_id }, revision_id)
}
