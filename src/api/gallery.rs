//! Gallery and lightbox API endpoints.
//!
//! The viewer state lives on the server for the single browsing session. Handlers take the
//! store lock before the viewer lock.

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::filters::Choice;
use crate::gallery::{GalleryPage, LightboxKey, LightboxView};
use crate::AppState;

/// Request body for changing the program tag.
#[derive(Debug, Deserialize)]
pub struct GalleryFilterRequest {
    #[serde(default)]
    pub program: Option<String>,
}

/// Request body for opening an image.
#[derive(Debug, Deserialize)]
pub struct OpenImageRequest {
    pub url: String,
}

/// Request body for a key press inside the lightbox.
#[derive(Debug, Deserialize)]
pub struct KeyRequest {
    pub key: LightboxKey,
}

/// GET /api/gallery - Images under the current program tag.
pub async fn get_gallery(State(state): State<AppState>) -> ApiResult<GalleryPage> {
    let store = state.store.read().await;
    let viewer = state.gallery.read().await;
    success(viewer.page(store.gallery()), store.revision())
}

/// PUT /api/gallery/filter - Select a program tag. Closes the lightbox.
pub async fn set_gallery_filter(
    State(state): State<AppState>,
    Json(request): Json<GalleryFilterRequest>,
) -> ApiResult<GalleryPage> {
    let store = state.store.read().await;
    let mut viewer = state.gallery.write().await;
    viewer.select(Choice::parse(request.program.as_deref()));
    success(viewer.page(store.gallery()), store.revision())
}

/// GET /api/gallery/lightbox - Current lightbox state.
pub async fn get_lightbox(State(state): State<AppState>) -> ApiResult<LightboxView> {
    let store = state.store.read().await;
    let viewer = state.gallery.read().await;
    success(viewer.lightbox_view(store.gallery()), store.revision())
}

/// POST /api/gallery/lightbox/open - Open the image with the given url.
pub async fn open_lightbox(
    State(state): State<AppState>,
    Json(request): Json<OpenImageRequest>,
) -> ApiResult<LightboxView> {
    let store = state.store.read().await;
    let mut viewer = state.gallery.write().await;

    if let Err(e) = viewer.open(store.gallery(), &request.url) {
        return error(e, store.revision());
    }
    success(viewer.lightbox_view(store.gallery()), store.revision())
}

/// POST /api/gallery/lightbox/next - Show the next image.
pub async fn next_image(State(state): State<AppState>) -> ApiResult<LightboxView> {
    let store = state.store.read().await;
    let mut viewer = state.gallery.write().await;
    viewer.next(store.gallery());
    success(viewer.lightbox_view(store.gallery()), store.revision())
}

/// POST /api/gallery/lightbox/prev - Show the previous image.
pub async fn prev_image(State(state): State<AppState>) -> ApiResult<LightboxView> {
    let store = state.store.read().await;
    let mut viewer = state.gallery.write().await;
    viewer.prev(store.gallery());
    success(viewer.lightbox_view(store.gallery()), store.revision())
}

/// POST /api/gallery/lightbox/close - Close the lightbox.
pub async fn close_lightbox(State(state): State<AppState>) -> ApiResult<LightboxView> {
    let store = state.store.read().await;
    let mut viewer = state.gallery.write().await;
    viewer.close();
    success(viewer.lightbox_view(store.gallery()), store.revision())
}

/// POST /api/gallery/lightbox/key - Escape closes, arrows navigate.
pub async fn lightbox_key(
    State(state): State<AppState>,
    Json(request): Json<KeyRequest>,
) -> ApiResult<LightboxView> {
    let store = state.store.read().await;
    let mut viewer = state.gallery.write().await;
    viewer.handle_key(request.key, store.gallery());
    success(viewer.lightbox_view(store.gallery()), store.revision())
}
