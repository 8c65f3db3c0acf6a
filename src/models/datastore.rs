//! Snapshot and seed models covering all five collections.

use serde::{Deserialize, Serialize};

use super::{Event, GalleryImage, NewsPost, Program, TeamMember};

/// Initial contents for a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    #[serde(default)]
    pub news: Vec<NewsPost>,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

/// The full store contents at one revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub revision_id: u64,
    pub news: Vec<NewsPost>,
    pub programs: Vec<Program>,
    pub events: Vec<Event>,
    pub team: Vec<TeamMember>,
    pub gallery: Vec<GalleryImage>,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: u64,
}
