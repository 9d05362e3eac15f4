#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use chimp_load_generator::domain::{LoadConfig, LoadController, MemoryBlock, StatusLine};
use std::time::Duration;

#[test]
fn default_config_matches_constants() {
    let cfg = LoadConfig::default();
    assert_eq!(cfg.ceiling_mb, 1000);
    assert_eq!(cfg.chunk_elements, 1_000_000);
    assert_eq!(cfg.cpu_steps, 1_000_000);
    assert!((cfg.seed - 0.0001).abs() < f64::EPSILON);
    assert_eq!(cfg.pause(), Duration::from_millis(100));
    assert_eq!(cfg.ceiling_elements(), 262_144_000);
}

#[test]
fn status_line_format() {
    let line = StatusLine { allocated_mb: 42 }.to_string();
    assert_eq!(line, "Allocated: 42 MB | CPU Usage Ongoing...");
}

#[test]
fn controller_start_record_stop() {
    let ctrl = LoadController::default();
    assert!(!ctrl.is_running());
    ctrl.start(1000, 0.5);
    let observer = ctrl.clone();
    assert!(observer.is_running());

    let block = MemoryBlock::new(16);
    ctrl.record(3, &block, 1.5);
    let st = observer.snapshot();
    assert_eq!(st.iterations, 3);
    assert_eq!(st.allocated_elements, 0);
    assert!(!st.at_ceiling);
    assert_eq!(st.started_ts_seconds, 1000);

    observer.stop();
    assert!(!ctrl.is_running());
}

#[test]
fn snapshot_serializes_field_names() {
    let ctrl = LoadController::default();
    ctrl.start(7, 0.25);
    let v = serde_json::to_value(ctrl.snapshot()).expect("json");
    assert_eq!(v["running"], true);
    assert_eq!(v["iterations"], 0);
    assert_eq!(v["allocated_mb"], 0);
    assert_eq!(v["started_ts_seconds"], 7);
}
