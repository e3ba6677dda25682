use super::*;

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn from_stored_reads_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn toggled_flips_and_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn icon_matches_state() {
    assert_eq!(Theme::Light.toggle_icon(), ICON_OFFER_DARK);
    assert_eq!(Theme::Dark.toggle_icon(), ICON_OFFER_LIGHT);
}

#[test]
fn persisted_value_is_dark_iff_click_count_is_odd() {
    for clicks in 0..7 {
        let mut theme = Theme::from_stored(None);
        for _ in 0..clicks {
            theme = theme.toggled();
        }
        assert_eq!(theme.storage_value() == "dark", clicks % 2 == 1, "clicks={clicks}");
        assert_eq!(theme.toggle_icon() == ICON_OFFER_LIGHT, theme.is_dark());
    }
}

#[test]
fn first_click_then_reload_starts_dark() {
    let initial = Theme::from_stored(None);
    assert!(!initial.is_dark());
    assert_eq!(initial.toggle_icon(), ICON_OFFER_DARK);

    let stored = initial.toggled().storage_value();
    assert_eq!(stored, "dark");

    let reloaded = Theme::from_stored(Some(stored));
    assert!(reloaded.is_dark());
    assert_eq!(reloaded.toggle_icon(), ICON_OFFER_LIGHT);
}
