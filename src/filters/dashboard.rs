//! Admin overview figures.

use serde::Serialize;

use crate::models::{Event, EventKind, NewsPost};
use crate::store::ContentStore;

/// How many rows each dashboard list shows.
const DASHBOARD_LIST_LEN: usize = 5;

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_news: usize,
    pub published_news: usize,
    pub total_programs: usize,
    pub upcoming_events: usize,
}

/// Stats plus the most recent posts (drafts included) and the next upcoming events.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_news: Vec<NewsPost>,
    pub upcoming_events: Vec<Event>,
}

pub fn dashboard(store: &ContentStore) -> Dashboard {
    let upcoming = super::filter_events(store.events(), EventKind::Upcoming);

    Dashboard {
        stats: DashboardStats {
            total_news: store.news().len(),
            published_news: super::published_news(store.news()).len(),
            total_programs: store.programs().len(),
            upcoming_events: upcoming.len(),
        },
        recent_news: store.news().iter().take(DASHBOARD_LIST_LEN).cloned().collect(),
        upcoming_events: upcoming
            .into_iter()
            .take(DASHBOARD_LIST_LEN)
            .cloned()
            .collect(),
    }
}
