#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod lib_cpu;
pub mod lib_mem;
pub mod metrics;
pub mod service;
pub mod validation;

pub use domain::{Accumulator, LoadConfig, LoadController, LoadState, MemoryBlock, StatusLine};
pub use lib_mem::GrowthOutcome;
pub use metrics::Metrics;
pub use service::{IterationReport, LoadRunner};
pub use validation::validate_config;
