//! End-to-end recording through the application state.

use crate::mock_platform::MockPlatform;
use sensorinfo::recording::{DirectorySink, RecordingState, CSV_HEADER};
use sensorinfo::sensors::types::{FrequencyHint, Quaternion, Reading, SensorKind};
use sensorinfo::SensorInfoState;

#[test]
fn test_ambient_light_recording_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let platform = MockPlatform::new();
    let mut state = SensorInfoState::new(platform.clone());

    state
        .registry
        .add(Some(SensorKind::AmbientLight), FrequencyHint::Default)
        .unwrap();
    state.registry.set_active(0, true);
    let key = platform.key(0);

    state.session.start();
    for (timestamp, lux) in [(1000.0, 100.1234), (2000.0, 200.5), (3000.0, 300.0)] {
        platform.emit_reading(key, Reading::illuminance(timestamp, lux));
    }
    assert_eq!(state.process_events(), 3);
    state.session.stop();

    let record = state
        .exports
        .export("test", &state.session, &sink)
        .unwrap()
        .clone();

    assert_eq!(record.file_name, "test.csv");
    assert_eq!(record.row_count, 3);

    let contents = std::fs::read_to_string(dir.path().join("test.csv")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            CSV_HEADER,
            "AmbientLight,60,1000,100.123",
            "AmbientLight,60,2000,200.5",
            "AmbientLight,60,3000,300",
        ]
    );
}

#[test]
fn test_suspended_readings_still_update_display() {
    let platform = MockPlatform::new();
    let mut state = SensorInfoState::new(platform.clone());
    state
        .registry
        .add(Some(SensorKind::AbsoluteOrientation), FrequencyHint::Hz(10.0))
        .unwrap();
    let key = platform.key(0);

    state.session.start_at(1_700_000_000);
    platform.emit_reading(key, Reading::quaternion(1.0, Quaternion::identity()));
    state.process_events();

    state.session.toggle_suspend();
    assert_eq!(state.session.state(), RecordingState::Suspended);
    platform.emit_reading(key, Reading::quaternion(2.0, Quaternion::new(0.1, 0.2, 0.3, 0.9)));
    assert_eq!(state.process_events(), 0);

    let handle = state.registry.get(0).unwrap();
    assert_eq!(handle.last_reading.map(|r| r.timestamp), Some(2.0));
    assert_eq!(state.session.row_count(), 1);
    assert!(state
        .session
        .csv()
        .ends_with("AbsoluteOrientation,10,1,,,,,0,0,0,1\n"));
}

#[test]
fn test_mixed_sensors_share_one_buffer() {
    let platform = MockPlatform::new();
    let mut state = SensorInfoState::new(platform.clone());
    state
        .registry
        .add(Some(SensorKind::Accelerometer), FrequencyHint::Default)
        .unwrap();
    state
        .registry
        .add(Some(SensorKind::AmbientLight), FrequencyHint::Hz(5.0))
        .unwrap();
    let (accel, light) = (platform.key(0), platform.key(1));

    state.session.start_at(0);
    platform.emit_reading(accel, Reading::vector(1.0, 0.0, 0.0, 9.81));
    platform.emit_reading(light, Reading::illuminance(2.0, 50.0));
    state.process_events();

    let rows: Vec<&str> = state.session.csv().lines().skip(1).collect();
    assert_eq!(
        rows,
        vec!["Accelerometer,60,1,,0,0,9.81", "AmbientLight,5,2,50"]
    );
}
