use super::*;

#[test]
fn starts_closed() {
    let drawer = NavDrawer::default();
    assert!(!drawer.is_open());
    assert_eq!(drawer.aria_expanded(), "false");
}

#[test]
fn even_toggle_clicks_return_to_closed() {
    let mut drawer = NavDrawer::default();
    for n in 1..=6 {
        drawer.on_click(ClickOrigin::Toggle);
        assert_eq!(drawer.is_open(), n % 2 == 1);
    }
    assert!(!drawer.is_open());
}

#[test]
fn toggle_click_is_not_undone_by_document_handler() {
    let mut drawer = NavDrawer::default();
    assert!(drawer.on_click(ClickOrigin::Toggle));
    assert_eq!(drawer.aria_expanded(), "true");
}

#[test]
fn link_click_always_closes() {
    let mut drawer = NavDrawer::default();
    drawer.on_click(ClickOrigin::Toggle);
    assert!(!drawer.on_click(ClickOrigin::DrawerLink));
    assert!(!drawer.on_click(ClickOrigin::DrawerLink));
}

#[test]
fn outside_click_always_closes() {
    let mut drawer = NavDrawer::default();
    drawer.on_click(ClickOrigin::Toggle);
    assert!(!drawer.on_click(ClickOrigin::Outside));
    assert!(!drawer.on_click(ClickOrigin::Outside));
}

#[test]
fn click_inside_drawer_keeps_it_open() {
    let mut drawer = NavDrawer::default();
    drawer.on_click(ClickOrigin::Toggle);
    assert!(drawer.on_click(ClickOrigin::InsideDrawer));
}

#[test]
fn mixed_click_sequence_follows_each_rule() {
    let mut drawer = NavDrawer::default();
    let clicks = [
        (ClickOrigin::Toggle, true),
        (ClickOrigin::InsideDrawer, true),
        (ClickOrigin::DrawerLink, false),
        (ClickOrigin::DrawerLink, false),
        (ClickOrigin::Toggle, true),
        (ClickOrigin::Toggle, false),
        (ClickOrigin::Outside, false),
    ];
    for (origin, open) in clicks {
        assert_eq!(drawer.on_click(origin), open, "{origin:?}");
        assert_eq!(drawer.aria_expanded(), if open { "true" } else { "false" });
    }
}
