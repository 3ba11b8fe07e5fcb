// src/workload.rs

use anyhow::{Result, anyhow};
use rand::Rng;

use crate::geometry::DiskGeometry;
use crate::request::{DiskRequest, Operation};

pub const DEFAULT_HORIZON_MS: f64 = 300_000.0;

#[derive(Debug, Clone, Copy)]
pub struct WorkloadConfig {
    pub interarrival_scale_ms: f64,
    pub max_transfer: u32,
    pub horizon_ms: f64,
}

impl WorkloadConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.interarrival_scale_ms > 0.0) {
            return Err(anyhow!(
                "Inter-arrival scale must be positive, got {} ms",
                self.interarrival_scale_ms
            ));
        }
        if self.max_transfer < 1 {
            return Err(anyhow!("Max transfer size must be at least 1 sector"));
        }
        if !(self.horizon_ms > 0.0) {
            return Err(anyhow!(
                "Simulation horizon must be positive, got {} ms",
                self.horizon_ms
            ));
        }
        Ok(())
    }
}

// Arrival gaps are drawn uniformly from [0, scale). The arrival that would
// cross the horizon is discarded, not clamped, so every generated request
// lies strictly inside [0, horizon).
pub fn generate(
    geometry: &DiskGeometry,
    config: &WorkloadConfig,
    rng: &mut impl Rng,
) -> Vec<DiskRequest> {
    // Mean gap is scale / 2, so about 2 * horizon / scale arrivals are
    // expected; pre-size for that and let the vector grow if the draw runs
    // long.
    let estimate = (config.horizon_ms / config.interarrival_scale_ms * 2.0) as usize;
    let mut requests = Vec::with_capacity(estimate.clamp(16, 1 << 20));

    let mut clock = 0.0;
    loop {
        clock += rng.gen_range(0.0..config.interarrival_scale_ms);
        if clock >= config.horizon_ms {
            break;
        }
        requests.push(DiskRequest {
            arrival_time: clock,
            cylinder: rng.gen_range(0..geometry.cylinders),
            head: rng.gen_range(0..geometry.heads),
            sector: rng.gen_range(0..geometry.sectors_per_track),
            operation: if rng.gen_bool(0.5) { Operation::Write } else { Operation::Read },
            sector_count: rng.gen_range(1..=config.max_transfer),
            start_time: 0.0,
            completion_time: 0.0,
        });
    }
    requests
}
