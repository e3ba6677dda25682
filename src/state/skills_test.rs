use super::*;

#[test]
fn trigger_zone_uses_divided_viewport() {
    // 960 / 1.2 = 800
    assert!(section_in_trigger_zone(799.0, 960.0, DEFAULT_TRIGGER_DIVISOR));
    assert!(!section_in_trigger_zone(800.0, 960.0, DEFAULT_TRIGGER_DIVISOR));
}

#[test]
fn fires_once_and_latches() {
    let mut bars = SkillBars::default();
    assert!(!bars.update(2000.0, 960.0));
    assert!(bars.update(500.0, 960.0));
    assert!(bars.is_triggered());
    assert!(!bars.update(100.0, 960.0));
    // scrolling back up does not reset
    assert!(!bars.update(3000.0, 960.0));
    assert!(bars.is_triggered());
}

#[test]
fn bar_width_appends_percent() {
    assert_eq!(bar_width("85").as_deref(), Some("85%"));
    assert_eq!(bar_width(" 72.5 ").as_deref(), Some("72.5%"));
    assert_eq!(bar_width("90%").as_deref(), Some("90%"));
}

#[test]
fn bar_width_rejects_garbage() {
    assert_eq!(bar_width(""), None);
    assert_eq!(bar_width("lots"), None);
    assert_eq!(bar_width("-5"), None);
    assert_eq!(bar_width("NaN"), None);
}
