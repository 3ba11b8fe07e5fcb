// src/report.rs

use crate::geometry::DiskGeometry;
use crate::stats::SimulationStats;

pub fn parameter_header(
    geometry: &DiskGeometry,
    t_max_s: f64,
    max_transfer: u32,
    horizon_ms: f64,
) -> String {
    let mut output = Vec::new();
    output.push("Rotating-disk subsystem simulation".to_string());
    output.push("==================================".to_string());
    output.push("Disk parameters:".to_string());
    output.push(format!("- Preset: {}", geometry.name));
    output.push(format!("- Cylinders: {}", geometry.cylinders));
    output.push(format!("- Heads: {}", geometry.heads));
    output.push(format!("- Sectors per track: {}", geometry.sectors_per_track));
    output.push(format!(
        "- Seek time per cylinder: {:.1} ms",
        geometry.seek_ms_per_cylinder
    ));
    output.push(format!("- Rotation speed: {:.0} RPM", geometry.rpm));
    output.push(format!("- Simulation horizon: {:.0} ms", horizon_ms));
    output.push(format!("- Initial t_max: {:.1} s", t_max_s));
    output.push(format!("- Max sectors per request: {}", max_transfer));
    output.join("\n")
}

pub fn policy_summary(label: &str, stats: &SimulationStats) -> String {
    let mut output = Vec::new();
    output.push(format!("{} results:", label));
    output.push(format!(
        "Mean: {:.2} | Max: {:.2} | Min: {:.2} | Std: {:.2} | Peak queue: {}",
        stats.mean_response,
        stats.max_response,
        stats.min_response,
        stats.std_dev,
        stats.peak_queue_length
    ));
    output.push(format!(
        "Idle: {:.2} ms | Serviced: {} | Final clock: {:.2} ms",
        stats.total_idle_time, stats.serviced, stats.final_clock
    ));
    output.join("\n")
}
