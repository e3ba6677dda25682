use super::*;

fn controls() -> Vec<String> {
    vec!["all".to_owned(), "web".to_owned(), "design".to_owned()]
}

fn items() -> Vec<Vec<&'static str>> {
    vec![vec!["gallery-item", "web"], vec!["gallery-item", "design"], vec!["gallery-item", "web"]]
}

#[test]
fn defaults_to_all_control() {
    let state = FilterState::new(controls(), None);
    assert_eq!(state.active_index(), Some(0));
    assert_eq!(state.selected(), "all");
}

#[test]
fn respects_markup_active_control() {
    let state = FilterState::new(controls(), Some(2));
    assert_eq!(state.selected(), "design");
}

#[test]
fn out_of_range_markup_active_falls_back() {
    let state = FilterState::new(controls(), Some(9));
    assert_eq!(state.selected(), "all");
}

#[test]
fn no_all_control_falls_back_to_first() {
    let state = FilterState::new(vec!["web".to_owned(), "print".to_owned()], None);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn empty_controls_select_all() {
    let state = FilterState::new(Vec::new(), None);
    assert!(state.is_empty());
    assert_eq!(state.active_index(), None);
    assert_eq!(state.selected(), FILTER_ALL);
}

#[test]
fn exactly_one_control_is_active_after_each_click() {
    let mut state = FilterState::new(controls(), None);
    for click in [1, 2, 0, 2, 1] {
        state.select(click);
        let active = (0..state.len()).filter(|i| state.is_active(*i)).count();
        assert_eq!(active, 1);
        assert!(state.is_active(click));
    }
}

#[test]
fn select_out_of_range_keeps_state() {
    let mut state = FilterState::new(controls(), None);
    state.select(1);
    assert_eq!(state.select(7), None);
    assert_eq!(state.selected(), "web");
}

#[test]
fn web_filter_hides_design_item() {
    let mut state = FilterState::new(controls(), None);
    assert_eq!(state.select(1), Some("web"));
    let shown = state.presentations(items());
    assert_eq!(shown.iter().map(|p| p.visible).collect::<Vec<_>>(), vec![true, false, true]);

    assert_eq!((shown[0].opacity(), shown[0].transform()), ("1", "scale(1)"));
    assert_eq!(shown[0].display(), "block");
    assert_eq!((shown[1].opacity(), shown[1].transform()), ("0", "scale(0.95)"));
    assert_eq!(shown[1].display(), "none");
}

#[test]
fn all_filter_shows_everything() {
    let mut state = FilterState::new(controls(), None);
    state.select(2);
    state.select(0);
    assert!(state.presentations(items()).iter().all(|p| p.visible));
}

#[test]
fn item_matches_requires_exact_class() {
    assert!(item_matches("web", ["gallery-item", "web"]));
    assert!(!item_matches("web", ["gallery-item", "webapp"]));
    assert!(item_matches(FILTER_ALL, []));
}
