//! Gallery image model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A photo in the gallery. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Free-text tag, not a reference to `Program::id`.
    pub program: String,
    pub date: NaiveDate,
}
