//! Dashboard and organize-screen state for snapshots, streaks, and tips.

#[cfg(test)]
#[path = "declutter_test.rs"]
mod declutter_test;

use crate::net::types::{DigitalSnapshot, Streak, Tip};

/// Shared declutter-progress state backed by the REST API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeclutterState {
    pub snapshot: Option<DigitalSnapshot>,
    pub streak: Option<Streak>,
    pub tips: Vec<Tip>,
    pub loading: bool,
    pub save_pending: bool,
}

impl DeclutterState {
    /// Total items across all snapshot categories, zero when none recorded.
    #[must_use]
    pub fn total_items(&self) -> i64 {
        self.snapshot.map_or(0, |s| {
            s.photos + s.videos + s.apps + s.emails + s.files + s.downloads
        })
    }

    /// The tip to surface on the dashboard, rotating by day index.
    #[must_use]
    pub fn tip_of_the_day(&self, day_index: usize) -> Option<&Tip> {
        if self.tips.is_empty() {
            return None;
        }
        self.tips.get(day_index % self.tips.len())
    }
}
