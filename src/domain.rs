#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result as AnyResult};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const CEILING_MB: u64 = 1000;
pub const CHUNK_ELEMENTS: usize = 1_000_000;
pub const CPU_STEPS: u32 = 1_000_000;
pub const SEED: f64 = 0.0001;
pub const PAUSE_MS: u64 = 100;

/// Fill value for every element appended to the memory block.
pub const FILL_VALUE: i32 = 1;
pub const ELEMENT_BYTES: usize = std::mem::size_of::<i32>();

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadConfig {
    pub ceiling_mb: u64,
    pub chunk_elements: usize,
    pub cpu_steps: u32,
    pub seed: f64,
    pub pause_ms: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            ceiling_mb: CEILING_MB,
            chunk_elements: CHUNK_ELEMENTS,
            cpu_steps: CPU_STEPS,
            seed: SEED,
            pause_ms: PAUSE_MS,
        }
    }
}

impl LoadConfig {
    /// Element count implied by the megabyte ceiling.
    pub fn ceiling_elements(&self) -> usize {
        let mb = usize::try_from(self.ceiling_mb).unwrap_or(usize::MAX);
        mb.saturating_mul(BYTES_PER_MB) / ELEMENT_BYTES
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// The value the CPU burn keeps mutating. It lives for the whole run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accumulator(f64);

impl Accumulator {
    pub fn new(seed: f64) -> Self {
        Self(seed)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    // No guard for negative input: sqrt yields NaN and it propagates.
    pub fn step(&mut self) {
        self.0 += self.0.sqrt() * self.0.sin();
    }
}

/// Append-only buffer of `i32` that stops growing at its ceiling.
#[derive(Debug)]
pub struct MemoryBlock {
    data: Vec<i32>,
    ceiling_elements: usize,
}

impl MemoryBlock {
    pub fn new(ceiling_elements: usize) -> Self {
        Self {
            data: Vec::new(),
            ceiling_elements,
        }
    }

    /// Like [`MemoryBlock::new`] but reserves the full ceiling up front.
    pub fn with_reserved(ceiling_elements: usize) -> AnyResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(ceiling_elements)
            .with_context(|| format!("reserve {ceiling_elements} elements for memory block"))?;
        Ok(Self {
            data,
            ceiling_elements,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn ceiling_elements(&self) -> usize {
        self.ceiling_elements
    }

    pub fn at_ceiling(&self) -> bool {
        self.data.len() >= self.ceiling_elements
    }

    pub fn bytes(&self) -> usize {
        self.data.len() * ELEMENT_BYTES
    }

    /// Whole megabytes currently held, rounded down.
    pub fn megabytes(&self) -> usize {
        self.bytes() / BYTES_PER_MB
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Appends up to `count` fill values without passing the ceiling.
    /// Returns how many elements were added.
    pub(crate) fn append(&mut self, count: usize) -> usize {
        let room = self.ceiling_elements.saturating_sub(self.data.len());
        let added = count.min(room);
        let new_len = self.data.len() + added;
        self.data.resize(new_len, FILL_VALUE);
        added
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadState {
    pub running: bool,
    pub iterations: u64,
    pub allocated_elements: usize,
    pub allocated_mb: usize,
    pub at_ceiling: bool,
    pub accumulator: f64,
    pub started_ts_seconds: i64,
}

/// Shared handle on the loop's progress. Clones observe the same state.
#[derive(Clone, Default)]
pub struct LoadController {
    pub state: Arc<Mutex<LoadState>>,
}

impl LoadController {
    pub fn start(&self, started_ts_seconds: i64, accumulator: f64) {
        let mut st = self.state.lock();
        *st = LoadState {
            running: true,
            accumulator,
            started_ts_seconds,
            ..LoadState::default()
        };
    }

    /// Asks the loop to return after the iteration in progress.
    pub fn stop(&self) {
        self.state.lock().running = false;
    }

    pub fn is_running(&self) -> bool {
        self.state.lock().running
    }

    pub fn record(&self, iterations: u64, block: &MemoryBlock, accumulator: f64) {
        let mut st = self.state.lock();
        st.iterations = iterations;
        st.allocated_elements = block.len();
        st.allocated_mb = block.megabytes();
        st.at_ceiling = block.at_ceiling();
        st.accumulator = accumulator;
    }

    pub fn snapshot(&self) -> LoadState {
        self.state.lock().clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub allocated_mb: usize,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocated: {} MB | CPU Usage Ongoing...", self.allocated_mb)
    }
}
