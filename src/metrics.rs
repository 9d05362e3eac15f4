#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result as AnyResult};
use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,
    pub iterations_total: IntCounter,
    pub allocated_bytes: IntGauge,
    pub ceiling_bytes: IntGauge,
    pub at_ceiling: IntGauge,
    pub accumulator: Gauge,
}

impl Metrics {
    pub fn new() -> AnyResult<Self> {
        let registry = Registry::new();
        let iterations_total = IntCounter::with_opts(Opts::new(
            "loadgen_iterations_total",
            "completed loop iterations",
        ))
        .context("create iterations_total")?;
        let allocated_bytes = IntGauge::with_opts(Opts::new(
            "loadgen_allocated_bytes",
            "bytes held by the memory block",
        ))
        .context("create allocated_bytes")?;
        let ceiling_bytes = IntGauge::with_opts(Opts::new(
            "loadgen_ceiling_bytes",
            "configured memory ceiling",
        ))
        .context("create ceiling_bytes")?;
        let at_ceiling = IntGauge::with_opts(Opts::new(
            "loadgen_at_ceiling",
            "1 once the memory block stopped growing",
        ))
        .context("create at_ceiling")?;
        let accumulator = Gauge::with_opts(Opts::new(
            "loadgen_accumulator",
            "current accumulator value",
        ))
        .context("create accumulator")?;
        registry
            .register(Box::new(iterations_total.clone()))
            .context("register iterations_total")?;
        registry
            .register(Box::new(allocated_bytes.clone()))
            .context("register allocated_bytes")?;
        registry
            .register(Box::new(ceiling_bytes.clone()))
            .context("register ceiling_bytes")?;
        registry
            .register(Box::new(at_ceiling.clone()))
            .context("register at_ceiling")?;
        registry
            .register(Box::new(accumulator.clone()))
            .context("register accumulator")?;
        Ok(Self {
            registry,
            iterations_total,
            allocated_bytes,
            ceiling_bytes,
            at_ceiling,
            accumulator,
        })
    }

    pub fn set_ceiling(&self, bytes: usize) {
        self.ceiling_bytes.set(to_gauge(bytes));
    }

    pub fn observe_iteration(&self, allocated_bytes: usize, at_ceiling: bool, accumulator: f64) {
        self.iterations_total.inc();
        self.allocated_bytes.set(to_gauge(allocated_bytes));
        self.at_ceiling.set(i64::from(at_ceiling));
        self.accumulator.set(accumulator);
    }

    pub fn encode_text(&self) -> AnyResult<Vec<u8>> {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        let mf = self.registry.gather();
        encoder.encode(&mf, &mut buf).context("encode metrics")?;
        Ok(buf)
    }
}

fn to_gauge(bytes: usize) -> i64 {
    i64::try_from(bytes).unwrap_or(i64::MAX)
}
