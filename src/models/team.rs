//! Team member model matching the frontend TeamMember interface.

use serde::{Deserialize, Serialize};

/// A staff member shown on the About page. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: String,
    pub email: String,
}
