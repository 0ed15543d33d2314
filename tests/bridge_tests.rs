//! Integration tests for the bridge helpers.
//!
//! The sensor pipeline mirrors a typical firmware reading: classify the raw
//! ADC value, then convert it to a voltage and classify again. A failure in
//! the first stage must keep the second stage from running.

#![cfg(feature = "effect")]

use funcy::control::Either;
use funcy::effect::{Async, IO, bridge};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

const MINIMUM_RAW: u16 = 6;
const MAXIMUM_VOLTS: f64 = 3.0;
const REFERENCE_VOLTS: f64 = 3.3;
const ADC_STEPS: f64 = 1023.0;

fn read_sensor(raw: u16) -> IO<Either<u16, String>> {
    bridge::lift_io_to_either(
        IO::pure(raw),
        |_| "Sensor read too low".to_string(),
        |value| *value < MINIMUM_RAW,
    )
}

fn to_voltage(raw: u16, calls: &Rc<Cell<u32>>) -> IO<Either<f64, String>> {
    calls.set(calls.get() + 1);
    bridge::lift_io_to_either(
        IO::pure(f64::from(raw) * REFERENCE_VOLTS / ADC_STEPS),
        |volts| format!("Voltage too high: {volts:.3}"),
        |volts| *volts > MAXIMUM_VOLTS,
    )
}

fn sensor_pipeline(raw: u16, calls: &Rc<Cell<u32>>) -> IO<Either<f64, String>> {
    let calls = Rc::clone(calls);
    bridge::flat_map_io_either(read_sensor(raw), move |value| to_voltage(value, &calls))
}

// =============================================================================
// Predicate Lifting
// =============================================================================

#[rstest]
#[case(5, Either::right(5))]
#[case(-3, Either::left(-3))]
#[case(0, Either::left(0))]
fn lift_io_to_either_with_identity_error(#[case] input: i32, #[case] expected: Either<i32, i32>) {
    let lifted = bridge::lift_io_to_either(IO::pure(input), |value| *value, |value| *value <= 0);
    assert_eq!(lifted.run_unsafe(), expected);
}

#[rstest]
fn lifting_runs_the_source_once_per_trigger() {
    let runs = Rc::new(Cell::new(0));
    let runs_clone = Rc::clone(&runs);
    let source = IO::new(move || {
        runs_clone.set(runs_clone.get() + 1);
        runs_clone.get()
    });
    let lifted = bridge::lift_io_to_either(source, |value| *value, |value| *value % 2 == 0);

    assert_eq!(runs.get(), 0);
    assert_eq!(lifted.run_unsafe(), Either::right(1));
    assert_eq!(lifted.run_unsafe(), Either::left(2));
    assert_eq!(runs.get(), 2);
}

#[rstest]
fn lift_helpers_pick_the_expected_side() {
    let success: IO<Either<i32, String>> = bridge::lift_io(bridge::pure(3));
    let failure: IO<Either<i32, String>> = bridge::lift_io_left(IO::pure("nope".to_string()));
    let unit: IO<Either<Vec<u8>, String>> = bridge::lift_unit_io(bridge::unit());

    assert_eq!(success.run_unsafe(), Either::right(3));
    assert_eq!(failure.run_unsafe(), Either::left("nope".to_string()));
    assert_eq!(unit.run_unsafe(), Either::right(Vec::new()));
}

#[rstest]
fn lift_unit_io_runs_the_effect_on_each_trigger() {
    let writes = Rc::new(Cell::new(0));
    let writes_clone = Rc::clone(&writes);
    let effect = IO::new(move || writes_clone.set(writes_clone.get() + 1));
    let lifted = bridge::lift_unit_io::<u8, String>(effect);

    assert_eq!(writes.get(), 0);
    assert_eq!(lifted.run_unsafe(), Either::right(0));
    assert_eq!(writes.get(), 1);
    assert_eq!(lifted.run_unsafe(), Either::right(0));
    assert_eq!(writes.get(), 2);
}

// =============================================================================
// Two-Stage Sensor Pipeline
// =============================================================================

#[rstest]
fn sensor_pipeline_succeeds_for_a_valid_reading() {
    let calls = Rc::new(Cell::new(0));
    let volts = sensor_pipeline(8, &calls).run_unsafe().unwrap_right();

    assert!((volts - 0.0258).abs() < 1e-4);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn sensor_pipeline_stops_at_the_first_failure() {
    let calls = Rc::new(Cell::new(0));
    let result = sensor_pipeline(5, &calls).run_unsafe();

    assert_eq!(result, Either::left("Sensor read too low".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn sensor_pipeline_reports_second_stage_failure() {
    let calls = Rc::new(Cell::new(0));
    let result = sensor_pipeline(1000, &calls).run_unsafe();

    assert_eq!(result, Either::left("Voltage too high: 3.226".to_string()));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn sensor_pipeline_is_inert_until_triggered() {
    let calls = Rc::new(Cell::new(0));
    let pipeline = sensor_pipeline(8, &calls);
    assert_eq!(calls.get(), 0);

    pipeline.run_unsafe();
    pipeline.run_unsafe();
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// Mapping Helpers
// =============================================================================

#[rstest]
fn map_helpers_touch_one_side() {
    let success: IO<Either<u16, String>> = read_sensor(100);
    let failure: IO<Either<u16, String>> = read_sensor(1);

    let doubled = bridge::map_io_either(success, |raw| raw * 2);
    let tagged = bridge::map_left_io_either(failure, |message| format!("[adc] {message}"));

    assert_eq!(doubled.run_unsafe(), Either::right(200));
    assert_eq!(tagged.run_unsafe(), Either::left("[adc] Sensor read too low".to_string()));
}

// =============================================================================
// Async Counterparts
// =============================================================================

#[rstest]
fn async_either_pipeline_short_circuits_after_resolution() {
    let (reading, resolver) = Async::<u16>::deferred();
    let stage_two_calls = Rc::new(Cell::new(0));
    let stage_two_calls_clone = Rc::clone(&stage_two_calls);

    let classified = bridge::lift_async::<u16, String>(reading).flat_map(|either| {
        Async::pure(either.flat_map(|raw| {
            if raw < MINIMUM_RAW {
                Either::left("Sensor read too low".to_string())
            } else {
                Either::right(raw)
            }
        }))
    });
    let volts = bridge::flat_map_async_either(classified, move |raw| {
        stage_two_calls_clone.set(stage_two_calls_clone.get() + 1);
        Async::pure(Either::right(f64::from(raw) * REFERENCE_VOLTS / ADC_STEPS))
    });
    let labelled = bridge::map_left_async_either(
        bridge::map_async_either(volts, |v| format!("{v:.4} V")),
        |message| format!("error: {message}"),
    );

    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let first = Rc::clone(&seen);
    let second = Rc::clone(&seen);
    labelled.run_async(move |result| first.borrow_mut().push(result));
    labelled.run_async(move |result| second.borrow_mut().push(result));

    resolver.resolve(8).unwrap();
    resolver.resolve(5).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            Either::right("0.0258 V".to_string()),
            Either::left("error: Sensor read too low".to_string()),
        ]
    );
    assert_eq!(stage_two_calls.get(), 1);
}
