//! User category priorities and the insight ranking they drive.
//!
//! DESIGN
//! ======
//! Onboarding captures which digital categories the user cares about, in
//! order. Ranking a snapshot is a small deterministic pass: each category
//! scores `count * weight`, where weight falls off with priority position and
//! unlisted categories weigh zero. Ordering is total (score, then count,
//! then the fixed category order) so the insights screen never reshuffles
//! between renders with unchanged data.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use crate::net::types::DigitalSnapshot;
use crate::util::persistence::{KeyValueStore, load_json, save_json};

/// Storage key for the persisted priorities record.
pub const PREFERENCES_KEY: &str = "clearspace_preferences";

/// The digital categories a snapshot counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Photos,
    Videos,
    Apps,
    Emails,
    Files,
    Downloads,
}

impl Category {
    /// Every category in fixed display order.
    pub const ALL: [Self; 6] = [
        Self::Photos,
        Self::Videos,
        Self::Apps,
        Self::Emails,
        Self::Files,
        Self::Downloads,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Photos => "Photos",
            Self::Videos => "Videos",
            Self::Apps => "Apps",
            Self::Emails => "Emails",
            Self::Files => "Files",
            Self::Downloads => "Downloads",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(Self::ALL.len())
    }
}

/// The user's ranked category priorities, highest interest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPriorities {
    pub ordered: Vec<Category>,
}

impl CategoryPriorities {
    /// Load the persisted priorities; an empty ranking when none are stored.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        load_json(store, PREFERENCES_KEY).unwrap_or_default()
    }

    /// Persist this ranking.
    pub fn save(&self, store: &dyn KeyValueStore) {
        save_json(store, PREFERENCES_KEY, self);
    }

    /// Weight of `category`: highest priority weighs `len`, falling off by
    /// one per position; unlisted categories weigh zero.
    #[must_use]
    pub fn weight_of(&self, category: Category) -> i64 {
        self.ordered
            .iter()
            .position(|c| *c == category)
            .map_or(0, |pos| (self.ordered.len() - pos) as i64)
    }
}

/// A category ranked for the insights screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusArea {
    pub category: Category,
    pub count: i64,
    pub weight: i64,
    pub score: i64,
}

fn count_for(snapshot: &DigitalSnapshot, category: Category) -> i64 {
    match category {
        Category::Photos => snapshot.photos,
        Category::Videos => snapshot.videos,
        Category::Apps => snapshot.apps,
        Category::Emails => snapshot.emails,
        Category::Files => snapshot.files,
        Category::Downloads => snapshot.downloads,
    }
}

/// Rank every category for `snapshot` under `priorities`.
///
/// Ordering: score descending, then count descending, then the fixed
/// category order as the final tiebreak.
#[must_use]
pub fn rank_focus(snapshot: &DigitalSnapshot, priorities: &CategoryPriorities) -> Vec<FocusArea> {
    let mut ranked: Vec<FocusArea> = Category::ALL
        .into_iter()
        .map(|category| {
            let count = count_for(snapshot, category);
            let weight = priorities.weight_of(category);
            FocusArea { category, count, weight, score: count * weight }
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(b.count.cmp(&a.count))
            .then(a.category.position().cmp(&b.category.position()))
    });
    ranked
}

/// Human-readable insight lines for ranked focus areas, top first.
#[must_use]
pub fn insight_lines(ranked: &[FocusArea]) -> Vec<String> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, area)| {
            if area.count == 0 {
                format!("{} is already tidy.", area.category.label())
            } else if index == 0 {
                format!(
                    "Start with {}: {} items to review.",
                    area.category.label(),
                    area.count
                )
            } else {
                format!("{}: {} items.", area.category.label(), area.count)
            }
        })
        .collect()
}
