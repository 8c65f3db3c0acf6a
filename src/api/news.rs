//! News API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error, success, validate_title, ApiResult, RemoveResult};
use crate::errors::AppError;
use crate::filters::{find_published_by_slug, latest_news, published_news, related_news};
use crate::models::{CreateNewsRequest, NewsPost, UpdateNewsRequest};
use crate::AppState;

/// Related posts shown under an article.
const RELATED_LIMIT: usize = 2;

/// Query parameters for the home page teaser.
#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    /// Number of posts (default: 3).
    #[serde(default = "default_latest_limit")]
    pub limit: usize,
}

fn default_latest_limit() -> usize {
    3
}

/// A single article with its related posts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub post: NewsPost,
    pub related: Vec<NewsPost>,
}

fn owned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}

/// GET /api/news - List published posts.
pub async fn list_news(State(state): State<AppState>) -> ApiResult<Vec<NewsPost>> {
    let store = state.store.read().await;
    success(owned(published_news(store.news())), store.revision())
}

/// GET /api/news/latest - First published posts for the home page.
pub async fn list_latest_news(
    State(state): State<AppState>,
    Query(params): Query<LatestQuery>,
) -> ApiResult<Vec<NewsPost>> {
    let store = state.store.read().await;
    success(owned(latest_news(store.news(), params.limit)), store.revision())
}

/// GET /api/news/{slug} - Get a published post by slug.
pub async fn get_news_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<NewsArticle> {
    let store = state.store.read().await;
    let revision_id = store.revision();

    match find_published_by_slug(store.news(), &slug) {
        Some(post) => success(
            NewsArticle {
                related: owned(related_news(store.news(), &post.id, RELATED_LIMIT)),
                post: post.clone(),
            },
            revision_id,
        ),
        None => error(
            AppError::NotFound(format!("Post {} not found", slug)),
            revision_id,
        ),
    }
}

/// GET /api/admin/news - List every post, drafts included.
pub async fn list_all_news(State(state): State<AppState>) -> ApiResult<Vec<NewsPost>> {
    let store = state.store.read().await;
    success(store.news().to_vec(), store.revision())
}

/// POST /api/admin/news - Create a new post.
pub async fn create_news(
    State(state): State<AppState>,
    Json(request): Json<CreateNewsRequest>,
) -> ApiResult<NewsPost> {
    let mut store = state.store.write().await;

    if let Err(err) = validate_title(&request.title) {
        return error(err, store.revision());
    }

    let post = store.add_news(request).clone();
    success(post, store.revision())
}

/// PUT /api/admin/news/{id} - Update a post. Unknown ids yield `null`.
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNewsRequest>,
) -> ApiResult<Option<NewsPost>> {
    let mut store = state.store.write().await;

    if let Some(title) = &request.title {
        if let Err(err) = validate_title(title) {
            return error(err, store.revision());
        }
    }

    let post = store.update_news(&id, &request).cloned();
    success(post, store.revision())
}

/// POST /api/admin/news/{id}/toggle-published - Flip a post between draft and published.
pub async fn toggle_news_published(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Option<NewsPost>> {
    let mut store = state.store.write().await;
    let Some(published) = store.get_news(&id).map(|post| post.published) else {
        return success(None, store.revision());
    };

    let patch = UpdateNewsRequest {
        published: Some(!published),
        ..Default::default()
    };
    let post = store.update_news(&id, &patch).cloned();
    success(post, store.revision())
}

/// DELETE /api/admin/news/{id} - Delete a post.
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RemoveResult> {
    let mut store = state.store.write().await;
    let removed = store.remove_news(&id);
    success(RemoveResult { removed }, store.revision())
}
