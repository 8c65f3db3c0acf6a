//! Event model matching the frontend Event interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which events tab a record belongs on.
///
/// Assigned by the operator and independent of `Event::date`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Upcoming,
    Past,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Upcoming => "upcoming",
            EventKind::Past => "past",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(EventKind::Upcoming),
            "past" => Some(EventKind::Past),
            _ => None,
        }
    }
}

/// A workshop, fair, or competition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Free text as entered, e.g. "09:00 AM".
    pub time: String,
    pub location: String,
    pub registration_url: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// Request body for creating a new event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub registration_url: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// Request body for updating an existing event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<EventKind>,
}
