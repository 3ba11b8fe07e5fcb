// src/stats.rs

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationStats {
    pub min_response: f64,
    pub max_response: f64,
    pub mean_response: f64,
    pub std_dev: f64,
    pub peak_queue_length: usize,
    pub total_idle_time: f64,
    pub serviced: usize,
    pub final_clock: f64,
}

// Running reduction over one scheduler run. Mean and population standard
// deviation come from the sum / sum-of-squares identity, so no sample needs
// to be retained.
pub struct StatsAccumulator {
    min: f64,
    max: f64,
    sum: f64,
    sum_squares: f64,
    count: usize,
    peak_queue: usize,
    idle: f64,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        StatsAccumulator {
            min: f64::INFINITY,
            max: 0.0,
            sum: 0.0,
            sum_squares: 0.0,
            count: 0,
            peak_queue: 0,
            idle: 0.0,
        }
    }

    pub fn record_response(&mut self, response: f64) {
        if response < self.min {
            self.min = response;
        }
        if response > self.max {
            self.max = response;
        }
        self.sum += response;
        self.sum_squares += response * response;
        self.count += 1;
    }

    pub fn observe_queue(&mut self, depth: usize) {
        if depth > self.peak_queue {
            self.peak_queue = depth;
        }
    }

    pub fn add_idle(&mut self, gap: f64) {
        self.idle += gap;
    }

    pub fn finish(self, final_clock: f64) -> SimulationStats {
        if self.count == 0 {
            // Nothing was serviced; leave every aggregate at zero.
            return SimulationStats { final_clock, ..SimulationStats::default() };
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        // Rounding can push E[X^2] - E[X]^2 a hair below zero.
        let variance = (self.sum_squares / n - mean * mean).max(0.0);
        SimulationStats {
            min_response: self.min,
            max_response: self.max,
            mean_response: mean,
            std_dev: variance.sqrt(),
            peak_queue_length: self.peak_queue,
            total_idle_time: self.idle,
            serviced: self.count,
            final_clock,
        }
    }
}
