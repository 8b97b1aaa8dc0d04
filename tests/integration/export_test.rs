//! Export naming and collision handling against a real directory.

use crate::mock_platform::MockPlatform;
use sensorinfo::recording::{DirectorySink, ExportError};
use sensorinfo::sensors::types::{FrequencyHint, Reading, SensorKind};
use sensorinfo::SensorInfoState;

fn recording_state() -> (SensorInfoState<MockPlatform>, MockPlatform) {
    let platform = MockPlatform::new();
    let mut state = SensorInfoState::new(platform.clone());
    state
        .registry
        .add(Some(SensorKind::Gyroscope), FrequencyHint::Default)
        .unwrap();
    state.session.start_at(1_650_000_000);
    (state, platform)
}

fn file_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

#[test]
fn test_default_names_count_up() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let (mut state, _platform) = recording_state();

    let mut names = Vec::new();
    for _ in 0..3 {
        let proposal = state.exports.proposed_name(&state.session).unwrap();
        let record = state.exports.export(&proposal, &state.session, &sink).unwrap();
        names.push(record.file_name.clone());
    }

    assert_eq!(
        names,
        vec![
            "sensor_1650000000.csv",
            "sensor_1650000000_1.csv",
            "sensor_1650000000_2.csv",
        ]
    );
    assert_eq!(file_count(dir.path()), 3);
}

#[test]
fn test_new_recording_restarts_default_names() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let (mut state, _platform) = recording_state();

    state.exports.export("", &state.session, &sink).unwrap();
    state.session.start_at(1_650_000_100);

    assert_eq!(
        state.exports.proposed_name(&state.session).as_deref(),
        Some("sensor_1650000100.csv")
    );
}

#[test]
fn test_duplicate_name_is_rejected_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let (mut state, platform) = recording_state();

    platform.emit_reading(platform.key(0), Reading::vector(1.0, 1.0, 2.0, 3.0));
    state.process_events();
    state.exports.export("run", &state.session, &sink).unwrap();

    platform.emit_reading(platform.key(0), Reading::vector(2.0, 1.0, 2.0, 3.0));
    state.process_events();
    let err = state
        .exports
        .export("run.csv", &state.session, &sink)
        .unwrap_err();

    assert!(matches!(err, ExportError::DuplicateName(ref name) if name == "run.csv"));
    assert_eq!(
        err.to_string(),
        "The csv name run.csv already exists, please choose a new one."
    );
    assert_eq!(state.exports.records().len(), 1);
    assert_eq!(state.exports.records()[0].row_count, 1);
    assert_eq!(file_count(dir.path()), 1);

    let contents = std::fs::read_to_string(dir.path().join("run.csv")).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn test_export_before_start() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path().join("out"));
    let mut state = SensorInfoState::new(MockPlatform::new());

    assert!(!state.can_export());
    let err = state
        .exports
        .export("early", &state.session, &sink)
        .unwrap_err();

    assert!(matches!(err, ExportError::NothingRecorded));
    assert!(!dir.path().join("out").exists());
}
