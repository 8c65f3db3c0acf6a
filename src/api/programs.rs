//! Program API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error, success, validate_title, ApiResult, RemoveResult};
use crate::errors::AppError;
use crate::filters::{
    filter_programs, program_categories, program_statuses, Choice, ProgramCriteria,
};
use crate::models::{CreateProgramRequest, Program, UpdateProgramRequest};
use crate::AppState;

/// Search and filter parameters of the programs page.
#[derive(Debug, Default, Deserialize)]
pub struct ProgramQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Filtered programs together with the select-box options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramsPage {
    pub programs: Vec<Program>,
    pub total: usize,
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
}

/// GET /api/programs - Search and filter programs.
pub async fn list_programs(
    State(state): State<AppState>,
    Query(params): Query<ProgramQuery>,
) -> ApiResult<ProgramsPage> {
    let store = state.store.read().await;
    let revision_id = store.revision();

    let Some(status) = Choice::parse_status(params.status.as_deref()) else {
        return error(
            AppError::BadRequest(format!(
                "Unknown status {}",
                params.status.unwrap_or_default()
            )),
            revision_id,
        );
    };

    let criteria = ProgramCriteria {
        query: params.q,
        category: Choice::parse(params.category.as_deref()),
        status,
    };
    let programs: Vec<Program> = filter_programs(store.programs(), &criteria)
        .into_iter()
        .cloned()
        .collect();

    success(
        ProgramsPage {
            total: programs.len(),
            programs,
            categories: program_categories(store.programs()),
            statuses: program_statuses(),
        },
        revision_id,
    )
}

/// GET /api/admin/programs - List every program.
pub async fn list_all_programs(State(state): State<AppState>) -> ApiResult<Vec<Program>> {
    let store = state.store.read().await;
    success(store.programs().to_vec(), store.revision())
}

/// POST /api/admin/programs - Create a new program.
pub async fn create_program(
    State(state): State<AppState>,
    Json(request): Json<CreateProgramRequest>,
) -> ApiResult<Program> {
    let mut store = state.store.write().await;

    if let Err(err) = validate_title(&request.title) {
        return error(err, store.revision());
    }

    let program = store.add_program(request).clone();
    success(program, store.revision())
}

/// PUT /api/admin/programs/{id} - Update a program. Unknown ids yield `null`.
pub async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProgramRequest>,
) -> ApiResult<Option<Program>> {
    let mut store = state.store.write().await;

    if let Some(title) = &request.title {
        if let Err(err) = validate_title(title) {
            return error(err, store.revision());
        }
    }

    let program = store.update_program(&id, &request).cloned();
    success(program, store.revision())
}

/// DELETE /api/admin/programs/{id} - Delete a program.
pub async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RemoveResult> {
    let mut store = state.store.write().await;
    let removed = store.remove_program(&id);
    success(RemoveResult { removed }, store.revision())
}
