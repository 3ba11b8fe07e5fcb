use super::SchedulingPolicy;
use crate::request::DiskRequest;

// Shortest seek first: the admitted request with the smallest cylinder
// distance from the head wins; ties go to the lowest index. Rotational
// position plays no part in the choice - seek distance is the whole policy.
pub struct Sstf;

impl Sstf {
    pub fn new() -> Self {
        Sstf
    }
}

impl SchedulingPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn select(
        &mut self,
        requests: &[DiskRequest],
        admitted: &[bool],
        served: &[bool],
        head_cylinder: u32,
    ) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, request) in requests.iter().enumerate() {
            if !admitted[index] || served[index] {
                continue;
            }
            let distance = head_cylinder.abs_diff(request.cylinder);
            if best.map_or(true, |(_, shortest)| distance < shortest) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }
}
