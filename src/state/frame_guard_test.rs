use super::*;

#[test]
fn first_schedule_claims_frame() {
    let guard = FrameGuard::new();
    assert!(!guard.is_pending());
    assert!(guard.try_schedule());
    assert!(guard.is_pending());
}

#[test]
fn events_within_same_frame_are_dropped() {
    let guard = FrameGuard::new();
    assert!(guard.try_schedule());
    assert!(!guard.try_schedule());
    assert!(!guard.try_schedule());
}

#[test]
fn finish_allows_next_frame() {
    let guard = FrameGuard::new();
    assert!(guard.try_schedule());
    guard.finish();
    assert!(!guard.is_pending());
    assert!(guard.try_schedule());
}
