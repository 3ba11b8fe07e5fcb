// Pure timing model: every function is a closed-form expression over the
// geometry and the current head position.

use crate::geometry::DiskGeometry;
use crate::request::Operation;

pub fn seek_time(geometry: &DiskGeometry, from_cylinder: u32, to_cylinder: u32) -> f64 {
    f64::from(from_cylinder.abs_diff(to_cylinder)) * geometry.seek_ms_per_cylinder
}

// Forward angular distance only; the platter never spins backwards.
pub fn rotational_latency(geometry: &DiskGeometry, current_angle: f64, target_sector: u32) -> f64 {
    let degrees_per_sector = 360.0 / f64::from(geometry.sectors_per_track);
    let target_angle = f64::from(target_sector) * degrees_per_sector;
    let forward = (target_angle - current_angle).rem_euclid(360.0);
    forward / 360.0 * geometry.rotation_time_ms()
}

pub fn transfer_time(geometry: &DiskGeometry, sector_count: u32, operation: Operation) -> f64 {
    let base = f64::from(sector_count) * geometry.sector_time_ms();
    match operation {
        Operation::Read => base,
        Operation::Write => base * 2.0, // write-verify pass
    }
}
