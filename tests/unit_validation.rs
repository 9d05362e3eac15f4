#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use chimp_load_generator::domain::LoadConfig;
use chimp_load_generator::validation::validate_config;

#[test]
fn ok_defaults() {
    assert!(validate_config(&LoadConfig::default()).is_ok());
}

#[test]
fn err_zero_ceiling() {
    let c = LoadConfig { ceiling_mb: 0, ..LoadConfig::default() };
    assert!(validate_config(&c).is_err());
}

#[test]
fn err_zero_chunk() {
    let c = LoadConfig { chunk_elements: 0, ..LoadConfig::default() };
    assert!(validate_config(&c).is_err());
}

#[test]
fn err_zero_cpu_steps() {
    let c = LoadConfig { cpu_steps: 0, ..LoadConfig::default() };
    assert!(validate_config(&c).is_err());
}

#[test]
fn err_non_finite_seed() {
    let c1 = LoadConfig { seed: f64::NAN, ..LoadConfig::default() };
    assert!(validate_config(&c1).is_err());
    let c2 = LoadConfig { seed: f64::INFINITY, ..LoadConfig::default() };
    assert!(validate_config(&c2).is_err());
}

#[test]
fn err_zero_pause() {
    let c = LoadConfig { pause_ms: 0, ..LoadConfig::default() };
    assert!(validate_config(&c).is_err());
}
