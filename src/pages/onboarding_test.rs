use super::*;

#[test]
fn toggle_appends_in_click_order() {
    let mut ordered = Vec::new();
    toggle_category(&mut ordered, Category::Emails);
    toggle_category(&mut ordered, Category::Photos);
    assert_eq!(ordered, vec![Category::Emails, Category::Photos]);
}

#[test]
fn toggle_removes_on_second_tap_and_renumbers() {
    let mut ordered = vec![Category::Emails, Category::Photos, Category::Apps];
    toggle_category(&mut ordered, Category::Emails);
    assert_eq!(ordered, vec![Category::Photos, Category::Apps]);
    assert_eq!(priority_badge(&ordered, Category::Photos), Some(1));
}

#[test]
fn priority_badge_is_one_based_and_absent_when_unselected() {
    let ordered = vec![Category::Files];
    assert_eq!(priority_badge(&ordered, Category::Files), Some(1));
    assert_eq!(priority_badge(&ordered, Category::Apps), None);
}
