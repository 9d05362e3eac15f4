#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{bail, Result as AnyResult};
use crate::domain::LoadConfig;

pub fn validate_config(cfg: &LoadConfig) -> AnyResult<()> {
    if cfg.ceiling_mb == 0 { bail!("ceiling_mb must be > 0"); }
    if cfg.chunk_elements == 0 { bail!("chunk_elements must be > 0"); }
    if cfg.cpu_steps == 0 { bail!("cpu_steps must be > 0"); }
    if !cfg.seed.is_finite() { bail!("seed must be finite, got {}", cfg.seed); }
    if cfg.pause_ms == 0 { bail!("pause_ms must be > 0"); }
    Ok(())
}
