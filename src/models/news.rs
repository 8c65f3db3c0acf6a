//! News post model matching the frontend NewsPost interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A news article. Only published posts are visible on the public pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub id: String,
    pub title: String,
    /// Derived from the title once, at creation.
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    pub publish_date: NaiveDate,
    pub published: bool,
}

/// Request body for creating a new post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsRequest {
    pub title: String,
    /// Accepted for compatibility with the admin form and always overwritten.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub author: String,
    pub publish_date: NaiveDate,
    #[serde(default)]
    pub published: bool,
}

/// Request body for updating an existing post.
///
/// There is intentionally no `slug` here: links to a post stay valid after a title edit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
    #[serde(default)]
    pub published: Option<bool>,
}
