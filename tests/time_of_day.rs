//! Host-level tests for time stepping, wrapping and the dirty flag.

use panel_meter_clock::{TimeOfDay, fold_hour_12};

#[test]
fn twelve_hour_steps_return_to_start() {
    let mut time = TimeOfDay::default();
    let start = time.hour();
    for _ in 0..12 {
        time.step_hour(1);
        assert!((1..=12).contains(&time.hour()), "never leaves 1-12");
    }
    assert_eq!(time.hour(), start);
}

#[test]
fn hour_wraps_both_directions() {
    let mut time = TimeOfDay::default();
    assert_eq!(time.hour(), 1);
    time.step_hour(-1);
    assert_eq!(time.hour(), 12, "1 steps down to 12");
    time.step_hour(1);
    assert_eq!(time.hour(), 1, "12 steps up to 1");
}

#[test]
fn sixty_minute_steps_return_to_start() {
    let mut time = TimeOfDay::default();
    for _ in 0..60 {
        time.step_minute(1);
        assert!(time.minute() <= 59);
    }
    assert_eq!(time.minute(), 0);
}

#[test]
fn minute_and_second_wrap_below_zero() {
    let mut time = TimeOfDay::default();
    time.step_minute(-1);
    assert_eq!(time.minute(), 59);
    time.step_second(-1);
    assert_eq!(time.second(), 59);
}

#[test]
fn stepping_marks_dirty_only_on_change() {
    let mut time = TimeOfDay::default();
    assert!(!time.is_dirty());

    // The redraw-forcing zero step is not an edit.
    time.step_hour(0);
    time.step_minute(0);
    time.step_second(0);
    assert!(!time.is_dirty());

    time.step_minute(1);
    assert!(time.is_dirty());

    time.mark_clean();
    assert!(!time.is_dirty());
}

#[test]
fn sync_from_wall_folds_and_leaves_dirty_alone() {
    let mut time = TimeOfDay::default();
    time.sync_from_wall(13, 45, 7);
    assert_eq!((time.hour(), time.minute(), time.second()), (1, 45, 7));
    assert!(!time.is_dirty());

    time.step_second(1);
    assert!(time.is_dirty());
    time.sync_from_wall(0, 0, 0);
    assert_eq!(time.hour(), 12, "midnight shows as 12");
    assert!(time.is_dirty(), "a wall refresh is not a commit");
}

#[test]
fn fold_hour_12_table() {
    assert_eq!(fold_hour_12(0), 12);
    assert_eq!(fold_hour_12(1), 1);
    assert_eq!(fold_hour_12(11), 11);
    assert_eq!(fold_hour_12(12), 12);
    assert_eq!(fold_hour_12(13), 1);
    assert_eq!(fold_hour_12(23), 11);
}
