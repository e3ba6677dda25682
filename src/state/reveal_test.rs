use super::*;

#[test]
fn zone_is_strictly_above_offset_line() {
    assert!(in_reveal_zone(619.0, 700.0, 80.0));
    assert!(!in_reveal_zone(620.0, 700.0, 80.0));
    assert!(in_reveal_zone(-500.0, 700.0, 80.0));
}

#[test]
fn initial_pass_reveals_above_the_fold() {
    let mut state = RevealState::new(3, DEFAULT_REVEAL_OFFSET_PX);
    let newly = state.update(&[10.0, 600.0, 1500.0], 800.0);
    assert_eq!(newly, vec![0, 1]);
    assert!(state.is_revealed(0));
    assert!(state.is_revealed(1));
    assert!(!state.is_revealed(2));
}

#[test]
fn revealed_elements_are_only_reported_once() {
    let mut state = RevealState::new(2, DEFAULT_REVEAL_OFFSET_PX);
    assert_eq!(state.update(&[100.0, 2000.0], 800.0), vec![0]);
    assert!(state.update(&[50.0, 1900.0], 800.0).is_empty());
    assert_eq!(state.update(&[-900.0, 300.0], 800.0), vec![1]);
    assert!(state.all_revealed());
}

#[test]
fn scrolling_back_up_never_unreveals() {
    let mut state = RevealState::new(2, DEFAULT_REVEAL_OFFSET_PX);
    state.update(&[100.0, 200.0], 800.0);
    for top in [900.0, 5000.0, 10_000.0] {
        state.update(&[top, top], 800.0);
        assert!(state.is_revealed(0));
        assert!(state.is_revealed(1));
    }
}

#[test]
fn out_of_range_index_is_not_revealed() {
    let state = RevealState::new(1, DEFAULT_REVEAL_OFFSET_PX);
    assert!(!state.is_revealed(5));
}

#[test]
fn short_measurement_slice_only_touches_measured_elements() {
    let mut state = RevealState::new(3, DEFAULT_REVEAL_OFFSET_PX);
    assert_eq!(state.update(&[0.0], 800.0), vec![0]);
    assert!(!state.is_revealed(1));
}
