#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::Result as AnyResult;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::domain::{Accumulator, LoadConfig, LoadController, LoadState, MemoryBlock, StatusLine};
use crate::lib_cpu::burn;
use crate::lib_mem::{grow, GrowthOutcome};
use crate::metrics::Metrics;
use crate::validation::validate_config;

/// What one pass through the loop did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationReport {
    pub iteration: u64,
    pub accumulator: f64,
    pub growth: GrowthOutcome,
    pub status: StatusLine,
}

pub struct LoadRunner {
    ctrl: LoadController,
    metrics: Metrics,
    config: LoadConfig,
    acc: Accumulator,
    block: MemoryBlock,
    iterations: u64,
}

impl LoadRunner {
    pub fn new(ctrl: LoadController, metrics: Metrics, config: LoadConfig) -> AnyResult<Self> {
        validate_config(&config)?;
        let block = MemoryBlock::new(config.ceiling_elements());
        Ok(Self::assemble(ctrl, metrics, config, block))
    }

    /// Same as [`LoadRunner::new`], with the whole ceiling reserved before the first iteration.
    pub fn with_reserved(
        ctrl: LoadController,
        metrics: Metrics,
        config: LoadConfig,
    ) -> AnyResult<Self> {
        validate_config(&config)?;
        let block = MemoryBlock::with_reserved(config.ceiling_elements())?;
        Ok(Self::assemble(ctrl, metrics, config, block))
    }

    fn assemble(
        ctrl: LoadController,
        metrics: Metrics,
        config: LoadConfig,
        block: MemoryBlock,
    ) -> Self {
        let acc = Accumulator::new(config.seed);
        ctrl.start(chrono::Utc::now().timestamp(), acc.value());
        metrics.set_ceiling(block.ceiling_elements() * crate::domain::ELEMENT_BYTES);
        Self {
            ctrl,
            metrics,
            config,
            acc,
            block,
            iterations: 0,
        }
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    pub fn block(&self) -> &MemoryBlock {
        &self.block
    }

    pub fn accumulator(&self) -> f64 {
        self.acc.value()
    }

    /// CPU burn, bounded growth and bookkeeping for one iteration. Does not pause or print.
    pub fn iterate(&mut self) -> IterationReport {
        let accumulator = burn(&mut self.acc, self.config.cpu_steps);
        let growth = grow(&mut self.block, self.config.chunk_elements);
        self.iterations += 1;

        if let GrowthOutcome::Grew {
            reached_ceiling: true,
            ..
        } = growth
        {
            info!(
                iteration = self.iterations,
                elements = self.block.len(),
                mb = self.block.megabytes(),
                "memory ceiling reached"
            );
        }

        self.ctrl.record(self.iterations, &self.block, accumulator);
        self.metrics
            .observe_iteration(self.block.bytes(), self.block.at_ceiling(), accumulator);

        let status = StatusLine {
            allocated_mb: self.block.megabytes(),
        };
        debug!(
            iteration = self.iterations,
            mb = status.allocated_mb,
            accumulator,
            ?growth,
            "iteration done"
        );
        IterationReport {
            iteration: self.iterations,
            accumulator,
            growth,
            status,
        }
    }

    async fn tick(&mut self) -> IterationReport {
        let report = self.iterate();
        println!("{}", report.status);
        sleep(self.config.pause()).await;
        report
    }

    /// Runs exactly `n` full iterations, pause included.
    pub async fn run_iterations(&mut self, n: u64) -> Vec<IterationReport> {
        let mut reports = Vec::new();
        for _ in 0..n {
            reports.push(self.tick().await);
        }
        reports
    }

    /// Loops until [`LoadController::stop`] is called. Nothing in the binary calls it.
    pub async fn run(mut self) -> LoadState {
        info!(
            ceiling_mb = self.config.ceiling_mb,
            ceiling_elements = self.block.ceiling_elements(),
            pause_ms = self.config.pause_ms,
            "load loop started"
        );
        while self.ctrl.is_running() {
            self.tick().await;
        }
        info!(iterations = self.iterations, "load loop stopped");
        self.status()
    }

    pub fn status(&self) -> LoadState {
        self.ctrl.snapshot()
    }

    pub fn encode_metrics(&self) -> AnyResult<Vec<u8>> {
        self.metrics.encode_text()
    }
}
