//! Sensor handle registry tests.

use crate::mock_platform::{Call, MockPlatform};
use proptest::prelude::*;
use sensorinfo::sensors::registry::SensorRegistry;
use sensorinfo::sensors::types::{FrequencyHint, Reading, SensorError, SensorKind};

fn registry() -> (SensorRegistry<MockPlatform>, MockPlatform) {
    let platform = MockPlatform::new();
    (SensorRegistry::new(platform.clone()), platform)
}

#[test]
fn test_add_without_selection() {
    let (mut registry, platform) = registry();

    let result = registry.add(None, FrequencyHint::Default).map(|h| h.id);

    assert_eq!(result, Err(SensorError::MissingSelection));
    assert!(registry.is_empty());
    assert_eq!(platform.opened_count(), 0);
}

#[test]
fn test_add_unsupported_kind() {
    let platform = MockPlatform::without(&[SensorKind::Magnetometer]);
    let mut registry = SensorRegistry::new(platform);

    let result = registry
        .add(Some(SensorKind::Magnetometer), FrequencyHint::Default)
        .map(|h| h.id);

    assert_eq!(
        result,
        Err(SensorError::UnsupportedSensorKind(SensorKind::Magnetometer))
    );
    assert!(registry.is_empty());
}

#[test]
fn test_add_constructs_without_starting() {
    let (mut registry, platform) = registry();

    let handle = registry
        .add(Some(SensorKind::Gyroscope), FrequencyHint::Hz(30.0))
        .unwrap();

    assert_eq!(handle.id, 0);
    assert_eq!(handle.kind, SensorKind::Gyroscope);
    assert_eq!(handle.frequency, FrequencyHint::Hz(30.0));
    assert!(!handle.active);
    assert!(!handle.activated);
    assert!(handle.last_reading.is_none());
    assert_eq!(platform.frequency(0), FrequencyHint::Hz(30.0));
    assert!(platform.calls().is_empty());
    assert!(!registry.is_running(0));
}

#[test]
fn test_set_active_starts_and_stops() {
    let (mut registry, platform) = registry();
    registry
        .add(Some(SensorKind::Accelerometer), FrequencyHint::Default)
        .unwrap();
    let key = platform.key(0);

    registry.set_active(0, true);
    assert!(registry.get(0).unwrap().active);
    assert!(registry.is_running(0));

    platform.emit_activated(key);
    registry.drain_events();
    assert!(registry.get(0).unwrap().activated);

    registry.set_active(0, false);
    let handle = registry.get(0).unwrap();
    assert!(!handle.active);
    assert!(!handle.activated);
    assert_eq!(platform.calls(), vec![Call::Start(key), Call::Stop(key)]);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let (mut registry, platform) = registry();
    registry
        .add(Some(SensorKind::Accelerometer), FrequencyHint::Default)
        .unwrap();

    registry.set_active(5, true);
    registry.remove(5);

    assert_eq!(registry.len(), 1);
    assert!(platform.calls().is_empty());
}

#[test]
fn test_remove_first_of_two_accelerometers() {
    let (mut registry, platform) = registry();
    for _ in 0..2 {
        registry
            .add(Some(SensorKind::Accelerometer), FrequencyHint::Default)
            .unwrap();
    }
    registry.set_active(0, true);
    registry.set_active(1, true);
    let (first, second) = (platform.key(0), platform.key(1));

    registry.remove(0);

    assert_eq!(registry.len(), 1);
    let survivor = registry.get(0).unwrap();
    assert_eq!(survivor.id, 0);
    assert_eq!(survivor.key(), second);
    assert!(survivor.active);
    assert!(registry.is_running(0));
    assert_eq!(platform.calls().last(), Some(&Call::Stop(first)));
}

#[test]
fn test_events_follow_renumbered_handles() {
    let (mut registry, platform) = registry();
    registry
        .add(Some(SensorKind::AmbientLight), FrequencyHint::Default)
        .unwrap();
    registry
        .add(Some(SensorKind::Gyroscope), FrequencyHint::Default)
        .unwrap();
    let (light, gyro) = (platform.key(0), platform.key(1));

    platform.emit_reading(light, Reading::illuminance(1.0, 10.0));
    platform.emit_reading(gyro, Reading::vector(1.0, 0.5, 0.5, 0.5));
    registry.remove(0);
    platform.emit_reading(gyro, Reading::vector(2.0, 1.0, 2.0, 3.0));

    let readings = registry.drain_events();

    // The light reading was queued before removal and is dropped with its handle.
    assert_eq!(readings.len(), 2);
    assert!(readings.iter().all(|(id, _)| *id == 0));

    let handle = registry.get(0).unwrap();
    assert_eq!(handle.kind, SensorKind::Gyroscope);
    assert_eq!(handle.last_reading, Some(Reading::vector(2.0, 1.0, 2.0, 3.0)));
    let lines: Vec<&str> = handle.display.as_ref().unwrap().lines().collect();
    assert_eq!(lines, vec!["timestamp: 2", "x: 1", "y: 2", "z: 3"]);
}

#[test]
fn test_error_event_marks_handle() {
    let (mut registry, platform) = registry();
    registry
        .add(Some(SensorKind::Magnetometer), FrequencyHint::Default)
        .unwrap();
    let key = platform.key(0);
    registry.set_active(0, true);
    platform.emit_activated(key);
    platform.emit_reading(key, Reading::vector(1.0, 1.0, 1.0, 1.0));
    platform.emit_error(key, "NotReadableError", "Could not connect to a sensor");

    registry.drain_events();

    let handle = registry.get(0).unwrap();
    assert!(!handle.activated);
    assert!(handle.active);
    assert!(handle.last_reading.is_some());
    let fault = handle.last_error.as_ref().unwrap();
    assert_eq!(fault.type_line(), "Error: NotReadableError");
}

#[test]
fn test_drop_stops_subscriptions() {
    let (mut registry, platform) = registry();
    registry
        .add(Some(SensorKind::Accelerometer), FrequencyHint::Default)
        .unwrap();
    let key = platform.key(0);
    registry.set_active(0, true);

    drop(registry);

    assert_eq!(platform.calls().last(), Some(&Call::Stop(key)));
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), (0usize..8).prop_map(Op::Remove)]
}

proptest! {
    #[test]
    fn prop_ids_stay_dense(ops in proptest::collection::vec(op(), 0..40)) {
        let (mut registry, _platform) = registry();

        for op in ops {
            match op {
                Op::Add => {
                    registry
                        .add(Some(SensorKind::Accelerometer), FrequencyHint::Default)
                        .unwrap();
                }
                Op::Remove(id) => registry.remove(id),
            }

            let ids: Vec<usize> = registry.handles().map(|h| h.id).collect();
            let expected: Vec<usize> = (0..registry.len()).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
