//! Gallery viewer: program-tag selection plus the full-screen lightbox.
//!
//! The lightbox does not own the images it walks through. Every call takes the currently
//! filtered sequence, so positions are always interpreted against what the visitor sees.
//! Changing the program selection closes the lightbox, which keeps an open position valid
//! for as long as the selection stays the same.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::filters::{filter_gallery, gallery_programs, Choice};
use crate::models::GalleryImage;

/// Whether the lightbox is showing an image, and which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LightboxState {
    #[default]
    Closed,
    Open { index: usize },
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Show the first image in `images` whose url is `url`.
    pub fn open(&mut self, images: &[&GalleryImage], url: &str) -> Result<usize, AppError> {
        let index = images
            .iter()
            .position(|img| img.url == url)
            .ok_or_else(|| {
                AppError::InvalidOpenTarget(format!("Image {} is not in the current gallery", url))
            })?;
        self.state = LightboxState::Open { index };
        tracing::debug!(index, url, "Lightbox opened");
        Ok(index)
    }

    /// Advance one image, wrapping from the last to the first. No-op while closed.
    pub fn next(&mut self, images: &[&GalleryImage]) {
        if let LightboxState::Open { index } = self.state {
            if images.is_empty() {
                self.close();
                return;
            }
            self.state = LightboxState::Open {
                index: (index + 1) % images.len(),
            };
        }
    }

    /// Go back one image, wrapping from the first to the last. No-op while closed.
    pub fn prev(&mut self, images: &[&GalleryImage]) {
        if let LightboxState::Open { index } = self.state {
            if images.is_empty() {
                self.close();
                return;
            }
            let index = if index == 0 {
                images.len() - 1
            } else {
                (index - 1).min(images.len() - 1)
            };
            self.state = LightboxState::Open { index };
        }
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn handle_key(&mut self, key: LightboxKey, images: &[&GalleryImage]) {
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.prev(images),
            LightboxKey::ArrowRight => self.next(images),
        }
    }

    /// The image on screen, if any.
    pub fn current<'a>(&self, images: &[&'a GalleryImage]) -> Option<&'a GalleryImage> {
        match self.state {
            LightboxState::Open { index } => images.get(index).copied(),
            LightboxState::Closed => None,
        }
    }
}

/// What a visitor currently sees on the gallery page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    pub selected_program: String,
    pub programs: Vec<String>,
    pub images: Vec<GalleryImage>,
    pub lightbox: LightboxView,
}

/// Lightbox state with the image it points at and a "3 of 7" style position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightboxView {
    #[serde(flatten)]
    pub state: LightboxState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<GalleryImage>,
    pub position: Option<usize>,
    pub total: usize,
}

/// Per-visitor gallery state: the selected program tag and the lightbox over it.
#[derive(Debug, Clone, Default)]
pub struct GalleryViewer {
    selection: Choice<String>,
    lightbox: Lightbox,
}

impl GalleryViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Choice<String> {
        &self.selection
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Change the program tag. Any open image is closed, even if the tag is unchanged.
    pub fn select(&mut self, selection: Choice<String>) {
        if self.lightbox.is_open() {
            tracing::debug!("Closing lightbox on gallery filter change");
        }
        self.lightbox.close();
        self.selection = selection;
    }

    pub fn visible<'a>(&self, gallery: &'a [GalleryImage]) -> Vec<&'a GalleryImage> {
        filter_gallery(gallery, &self.selection)
    }

    pub fn open(&mut self, gallery: &[GalleryImage], url: &str) -> Result<usize, AppError> {
        let images = self.visible(gallery);
        self.lightbox.open(&images, url)
    }

    pub fn next(&mut self, gallery: &[GalleryImage]) {
        let images = self.visible(gallery);
        self.lightbox.next(&images);
    }

    pub fn prev(&mut self, gallery: &[GalleryImage]) {
        let images = self.visible(gallery);
        self.lightbox.prev(&images);
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    pub fn handle_key(&mut self, key: LightboxKey, gallery: &[GalleryImage]) {
        let images = self.visible(gallery);
        self.lightbox.handle_key(key, &images);
    }

    pub fn lightbox_view(&self, gallery: &[GalleryImage]) -> LightboxView {
        let images = self.visible(gallery);
        let image = self.lightbox.current(&images).cloned();
        let position = match self.lightbox.state() {
            LightboxState::Open { index } if image.is_some() => Some(index + 1),
            _ => None,
        };
        LightboxView {
            state: self.lightbox.state(),
            image,
            position,
            total: images.len(),
        }
    }

    pub fn page(&self, gallery: &[GalleryImage]) -> GalleryPage {
        GalleryPage {
            selected_program: self.selection.as_str().to_string(),
            programs: gallery_programs(gallery),
            images: self.visible(gallery).into_iter().cloned().collect(),
            lightbox: self.lightbox_view(gallery),
        }
    }
}
