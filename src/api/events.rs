//! Event API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{error, success, validate_title, ApiResult, RemoveResult};
use crate::errors::AppError;
use crate::filters::{filter_events, is_soon};
use crate::models::{CreateEventRequest, Event, EventKind, UpdateEventRequest};
use crate::AppState;

/// Tab selection on the events page.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

/// An event with its "happening soon" highlight.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListing {
    #[serde(flatten)]
    pub event: Event,
    pub is_soon: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    pub tab: EventKind,
    pub events: Vec<EventListing>,
}

/// GET /api/events - Events on one tab (default: upcoming).
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventsQuery>,
) -> ApiResult<EventsPage> {
    let store = state.store.read().await;
    let revision_id = store.revision();

    let tab = match params.tab.as_deref() {
        None | Some("") => EventKind::Upcoming,
        Some(raw) => match EventKind::from_str(raw) {
            Some(tab) => tab,
            None => {
                return error(
                    AppError::BadRequest(format!("Unknown events tab {}", raw)),
                    revision_id,
                )
            }
        },
    };

    let today = Utc::now().date_naive();
    let events = filter_events(store.events(), tab)
        .into_iter()
        .map(|event| EventListing {
            is_soon: is_soon(event.date, today),
            event: event.clone(),
        })
        .collect();

    success(EventsPage { tab, events }, revision_id)
}

/// GET /api/admin/events - List every event.
pub async fn list_all_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    let store = state.store.read().await;
    success(store.events().to_vec(), store.revision())
}

/// POST /api/admin/events - Create a new event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<Event> {
    let mut store = state.store.write().await;

    if let Err(err) = validate_title(&request.title) {
        return error(err, store.revision());
    }

    let event = store.add_event(request).clone();
    success(event, store.revision())
}

/// PUT /api/admin/events/{id} - Update an event. Unknown ids yield `null`.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEventRequest>,
) -> ApiResult<Option<Event>> {
    let mut store = state.store.write().await;

    if let Some(title) = &request.title {
        if let Err(err) = validate_title(title) {
            return error(err, store.revision());
        }
    }

    let event = store.update_event(&id, &request).cloned();
    success(event, store.revision())
}

/// DELETE /api/admin/events/{id} - Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RemoveResult> {
    let mut store = state.store.write().await;
    let removed = store.remove_event(&id);
    success(RemoveResult { removed }, store.revision())
}
