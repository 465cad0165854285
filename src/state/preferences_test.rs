use super::*;
use crate::util::persistence::MemoryStore;

fn snapshot() -> DigitalSnapshot {
    DigitalSnapshot {
        photos: 1200,
        videos: 80,
        apps: 64,
        emails: 5400,
        files: 300,
        downloads: 150,
    }
}

fn priorities(ordered: &[Category]) -> CategoryPriorities {
    CategoryPriorities { ordered: ordered.to_vec() }
}

#[test]
fn weight_falls_off_by_priority_position() {
    let prefs = priorities(&[Category::Emails, Category::Photos, Category::Apps]);
    assert_eq!(prefs.weight_of(Category::Emails), 3);
    assert_eq!(prefs.weight_of(Category::Photos), 2);
    assert_eq!(prefs.weight_of(Category::Apps), 1);
}

#[test]
fn unlisted_categories_weigh_zero() {
    let prefs = priorities(&[Category::Emails]);
    assert_eq!(prefs.weight_of(Category::Downloads), 0);
}

#[test]
fn ranking_orders_by_weighted_score() {
    let prefs = priorities(&[Category::Photos, Category::Emails]);
    let ranked = rank_focus(&snapshot(), &prefs);
    // emails 5400*1 = 5400 > photos 1200*2 = 2400; everything unlisted scores 0.
    assert_eq!(ranked[0].category, Category::Emails);
    assert_eq!(ranked[0].score, 5400);
    assert_eq!(ranked[1].category, Category::Photos);
    assert_eq!(ranked[1].score, 2400);
}

#[test]
fn zero_scores_fall_back_to_count_then_category_order() {
    let ranked = rank_focus(&snapshot(), &CategoryPriorities::default());
    // All scores are zero; counts decide: emails, photos, files, downloads, videos, apps.
    let order: Vec<Category> = ranked.iter().map(|a| a.category).collect();
    assert_eq!(
        order,
        vec![
            Category::Emails,
            Category::Photos,
            Category::Files,
            Category::Downloads,
            Category::Videos,
            Category::Apps,
        ]
    );
}

#[test]
fn equal_counts_use_fixed_category_order() {
    let flat = DigitalSnapshot { photos: 5, videos: 5, apps: 5, emails: 5, files: 5, downloads: 5 };
    let ranked = rank_focus(&flat, &CategoryPriorities::default());
    let order: Vec<Category> = ranked.iter().map(|a| a.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}

#[test]
fn ranking_is_deterministic() {
    let prefs = priorities(&[Category::Files, Category::Videos]);
    assert_eq!(rank_focus(&snapshot(), &prefs), rank_focus(&snapshot(), &prefs));
}

#[test]
fn priorities_round_trip_through_storage() {
    let store = MemoryStore::default();
    let prefs = priorities(&[Category::Downloads, Category::Emails]);
    prefs.save(&store);
    assert_eq!(CategoryPriorities::load(&store), prefs);
}

#[test]
fn missing_priorities_load_as_empty() {
    let store = MemoryStore::default();
    assert_eq!(CategoryPriorities::load(&store), CategoryPriorities::default());
}

#[test]
fn insight_lines_phrase_top_zero_and_rest() {
    let areas = [
        FocusArea { category: Category::Emails, count: 5400, weight: 2, score: 10800 },
        FocusArea { category: Category::Photos, count: 1200, weight: 1, score: 1200 },
        FocusArea { category: Category::Apps, count: 0, weight: 0, score: 0 },
    ];
    let lines = insight_lines(&areas);
    assert_eq!(lines[0], "Start with Emails: 5400 items to review.");
    assert_eq!(lines[1], "Photos: 1200 items.");
    assert_eq!(lines[2], "Apps is already tidy.");
}
