//! Program model matching the frontend Program interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a program. Only ever changed by an operator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    Ongoing,
    Completed,
    Upcoming,
}

impl ProgramStatus {
    pub const ALL: [ProgramStatus; 3] = [
        ProgramStatus::Ongoing,
        ProgramStatus::Completed,
        ProgramStatus::Upcoming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramStatus::Ongoing => "ongoing",
            ProgramStatus::Completed => "completed",
            ProgramStatus::Upcoming => "upcoming",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ongoing" => Some(ProgramStatus::Ongoing),
            "completed" => Some(ProgramStatus::Completed),
            "upcoming" => Some(ProgramStatus::Upcoming),
            _ => None,
        }
    }
}

/// An education program run by the organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Open set; the filter options are derived from whatever values exist.
    pub category: String,
    pub date: NaiveDate,
    pub status: ProgramStatus,
}

/// Request body for creating a new program.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    pub status: ProgramStatus,
}

/// Request body for updating an existing program.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<ProgramStatus>,
}
