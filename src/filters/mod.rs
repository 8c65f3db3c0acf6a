//! Page-level views derived from the store.
//!
//! Every function here is a stable filter: it returns borrowed records in collection order
//! and never re-sorts. An empty result is a normal outcome.

mod dashboard;
mod news;

pub use dashboard::*;
pub use news::*;

use chrono::NaiveDate;

use crate::models::{Event, EventKind, GalleryImage, Program, ProgramStatus};

/// Sentinel option shown first in every select box.
pub const ALL: &str = "all";

/// Number of days ahead (inclusive) that counts as "soon" for an event.
const SOON_WINDOW_DAYS: i64 = 7;

/// A filter selection: either everything or one specific value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl Choice<String> {
    /// `None` and `"all"` select everything. Any other value, the empty string included,
    /// selects records whose field equals it exactly.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some(ALL) => Choice::All,
            Some(value) => Choice::Only(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(value) => value,
        }
    }
}

impl Choice<ProgramStatus> {
    /// Same sentinels as `parse`, but unknown statuses are rejected.
    pub fn parse_status(raw: Option<&str>) -> Option<Self> {
        match raw {
            None | Some(ALL) => Some(Choice::All),
            Some(value) => ProgramStatus::from_str(value).map(Choice::Only),
        }
    }
}

/// "all" followed by each distinct value in order of first appearance.
fn options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for value in values {
        if !out[1..].iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}

// ==================== PROGRAMS ====================

/// Search and select-box state on the programs page.
#[derive(Debug, Clone, Default)]
pub struct ProgramCriteria {
    pub query: String,
    pub category: Choice<String>,
    pub status: Choice<ProgramStatus>,
}

impl ProgramCriteria {
    fn matches(&self, program: &Program) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = program.title.to_lowercase().contains(&query)
            || program.description.to_lowercase().contains(&query);

        matches_search
            && self.category.matches(&program.category)
            && self.status.matches(&program.status)
    }
}

pub fn filter_programs<'a>(
    programs: &'a [Program],
    criteria: &ProgramCriteria,
) -> Vec<&'a Program> {
    programs.iter().filter(|p| criteria.matches(p)).collect()
}

/// Category select options, computed from the records present right now.
pub fn program_categories(programs: &[Program]) -> Vec<String> {
    options(programs.iter().map(|p| p.category.as_str()))
}

/// Status select options. Fixed, unlike categories.
pub fn program_statuses() -> Vec<String> {
    std::iter::once(ALL)
        .chain(ProgramStatus::ALL.iter().map(|s| s.as_str()))
        .map(str::to_string)
        .collect()
}

// ==================== EVENTS ====================

pub fn filter_events(events: &[Event], tab: EventKind) -> Vec<&Event> {
    events.iter().filter(|e| e.kind == tab).collect()
}

/// Whether an event falls within the next week, counting today.
///
/// Only used for highlighting; the tab filter ignores dates entirely.
pub fn is_soon(date: NaiveDate, today: NaiveDate) -> bool {
    (0..=SOON_WINDOW_DAYS).contains(&(date - today).num_days())
}

// ==================== GALLERY ====================

pub fn filter_gallery<'a>(
    images: &'a [GalleryImage],
    program: &Choice<String>,
) -> Vec<&'a GalleryImage> {
    images.iter().filter(|img| program.matches(&img.program)).collect()
}

/// Program tag select options for the gallery.
pub fn gallery_programs(images: &[GalleryImage]) -> Vec<String> {
    options(images.iter().map(|img| img.program.as_str()))
}
