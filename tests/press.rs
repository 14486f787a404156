//! Host-level tests for press-length classification.

use embassy_time::Instant;
use panel_meter_clock::{Commit, PressClassifier};

/// One full press: down at `down_ms`, up at `up_ms`.
fn press(classifier: &mut PressClassifier, down_ms: u64, up_ms: u64) -> Option<Commit> {
    assert!(
        classifier
            .on_edge(true, Instant::from_millis(down_ms))
            .is_none(),
        "a down edge never commits"
    );
    classifier.on_edge(false, Instant::from_millis(up_ms))
}

#[test]
fn just_under_minimum_is_bounce() {
    let mut classifier = PressClassifier::new();
    assert_eq!(press(&mut classifier, 0, 49), None);
}

#[test]
fn minimum_is_inclusive() {
    let mut classifier = PressClassifier::new();
    assert_eq!(press(&mut classifier, 0, 50), Some(Commit));
}

#[test]
fn just_under_maximum_commits() {
    let mut classifier = PressClassifier::new();
    assert_eq!(press(&mut classifier, 0, 399), Some(Commit));
}

#[test]
fn maximum_is_exclusive() {
    let mut classifier = PressClassifier::new();
    assert_eq!(press(&mut classifier, 0, 400), None);
}

#[test]
fn release_without_press_is_ignored() {
    let mut classifier = PressClassifier::new();
    assert_eq!(classifier.on_edge(false, Instant::from_millis(10)), None);
}

#[test]
fn overlapping_down_edges_keep_the_first_start() {
    let mut classifier = PressClassifier::new();
    assert_eq!(classifier.on_edge(true, Instant::from_millis(0)), None);
    // Contact noise 100 ms in; must not restart the timing.
    assert_eq!(classifier.on_edge(true, Instant::from_millis(100)), None);
    // 140 ms from the first start commits; 40 ms from the second would not.
    assert_eq!(
        classifier.on_edge(false, Instant::from_millis(140)),
        Some(Commit)
    );
}

#[test]
fn classification_clears_the_timer() {
    let mut classifier = PressClassifier::new();
    assert_eq!(press(&mut classifier, 0, 100), Some(Commit));
    assert_eq!(
        classifier.on_edge(false, Instant::from_millis(200)),
        None,
        "a stray release after classification finds no timer"
    );
    // The classifier is ready for the next press.
    assert_eq!(press(&mut classifier, 300, 400), Some(Commit));
}

#[test]
fn long_hold_is_discarded_silently() {
    let mut classifier = PressClassifier::new();
    assert_eq!(press(&mut classifier, 0, 5_000), None);
    // And nothing lingers from the discarded press.
    assert_eq!(press(&mut classifier, 6_000, 6_100), Some(Commit));
}
