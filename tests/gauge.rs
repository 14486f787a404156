//! Host-level tests for the value-to-duty mapping and write suppression.

use panel_meter_clock::{Gauge, GaugeCalibration, GaugeScale, METER_TOP};

const CAL: GaugeCalibration = GaugeCalibration {
    setup: 790,
    upper: 765,
};

#[test]
fn hour_one_maps_to_zero_deflection() {
    let gauge = Gauge::new(GaugeScale::Hours12, CAL);
    assert_eq!(gauge.target(Some(1)), 0);
}

#[test]
fn hour_twelve_stays_below_the_upper_point() {
    let gauge = Gauge::new(GaugeScale::Hours12, CAL);
    // 11/12 of the upper calibration.
    assert_eq!(gauge.target(Some(12)), 765 * 11 / 12);
    assert!(gauge.target(Some(12)) < CAL.upper);
}

#[test]
fn minute_zero_maps_to_zero_and_59_stays_below_upper() {
    let gauge = Gauge::new(GaugeScale::Sixty, CAL);
    assert_eq!(gauge.target(Some(0)), 0);
    assert_eq!(gauge.target(Some(59)), 765 * 59 / 60);
    assert!(gauge.target(Some(59)) < CAL.upper);
}

#[test]
fn sentinel_maps_to_the_setup_point() {
    let gauge = Gauge::new(GaugeScale::Sixty, CAL);
    assert_eq!(gauge.target(None), CAL.setup);
}

#[test]
fn mapping_is_monotonic_over_the_whole_range() {
    let hours = Gauge::new(GaugeScale::Hours12, CAL);
    for hour in 1..12 {
        assert!(hours.target(Some(hour)) <= hours.target(Some(hour + 1)));
    }
    let sixty = Gauge::new(GaugeScale::Sixty, CAL);
    for value in 0..59 {
        assert!(sixty.target(Some(value)) <= sixty.target(Some(value + 1)));
    }
}

#[test]
fn first_plan_always_writes() {
    let mut gauge = Gauge::new(GaugeScale::Sixty, CAL);
    assert_eq!(gauge.plan(Some(0)), Some(0), "even duty zero must be written");
}

#[test]
fn repeated_identical_updates_are_suppressed() {
    let mut gauge = Gauge::new(GaugeScale::Sixty, CAL);
    assert!(gauge.plan(Some(30)).is_some());
    assert_eq!(gauge.plan(Some(30)), None);
    assert_eq!(gauge.plan(Some(30)), None);
}

#[test]
fn changed_values_write_again() {
    let mut gauge = Gauge::new(GaugeScale::Sixty, CAL);
    assert!(gauge.plan(Some(30)).is_some());
    assert!(gauge.plan(None).is_some(), "to the setup point");
    assert_eq!(gauge.plan(None), None, "already parked there");
    assert!(gauge.plan(Some(30)).is_some(), "and back");
}

#[test]
fn distinct_values_with_equal_duty_are_suppressed_too() {
    // With a small upper calibration, neighbouring values can round to the
    // same tick count; the cache must still suppress the second write.
    let mut gauge = Gauge::new(
        GaugeScale::Sixty,
        GaugeCalibration {
            setup: 10,
            upper: 6,
        },
    );
    assert_eq!(gauge.plan(Some(10)), Some(1));
    assert_eq!(gauge.plan(Some(11)), None, "6 * 11 / 60 is still tick 1");
}

#[test]
fn cycle_calibration_lands_inside_the_frame() {
    let calibration = GaugeCalibration::from_cycles(0.790, 0.765);
    assert!(calibration.setup <= METER_TOP);
    assert!(calibration.upper <= METER_TOP);
    // Fractions of the 25_000-tick frame, rounded.
    assert_eq!(calibration.setup, 19_750);
    assert_eq!(calibration.upper, 19_125);
}
