// src/sched/mod.rs
//
// One discrete-event loop drives both policies. The engine owns the clock,
// the head state, the admitted/served side tables and all accounting; a
// policy only answers "which admitted request goes next".

pub mod fifo;
pub mod sstf;

use crate::geometry::DiskGeometry;
use crate::request::{DiskRequest, HeadState};
use crate::stats::{SimulationStats, StatsAccumulator};
use crate::timing;

pub trait SchedulingPolicy {
    fn name(&self) -> &'static str;

    // Pick an index among admitted-and-unserved requests, or None if the
    // queue is empty from the policy's point of view.
    fn select(
        &mut self,
        requests: &[DiskRequest],
        admitted: &[bool],
        served: &[bool],
        head_cylinder: u32,
    ) -> Option<usize>;
}

// Requests must be sorted by arrival time; the generator guarantees it, and
// admission exploits it with a single forward cursor.
pub fn run(
    policy: &mut dyn SchedulingPolicy,
    requests: &mut [DiskRequest],
    geometry: &DiskGeometry,
) -> SimulationStats {
    debug_assert!(requests.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time));

    let total = requests.len();
    let mut admitted = vec![false; total];
    let mut served = vec![false; total];
    let mut head = HeadState::parked();
    let mut clock = 0.0_f64;
    let mut cursor = 0;
    let mut queue_length = 0;
    let mut served_count = 0;
    let mut acc = StatsAccumulator::new();

    while served_count < total {
        while cursor < total && requests[cursor].arrival_time <= clock {
            admitted[cursor] = true;
            queue_length += 1;
            cursor += 1;
        }
        acc.observe_queue(queue_length);

        if queue_length > 0 {
            let Some(index) = policy.select(requests, &admitted, &served, head.cylinder) else {
                break;
            };
            let request = &mut requests[index];
            debug_assert!(!request.is_dispatched());

            let seek = timing::seek_time(geometry, head.cylinder, request.cylinder);
            let latency = timing::rotational_latency(geometry, head.angle_deg, request.sector);
            let transfer = timing::transfer_time(geometry, request.sector_count, request.operation);

            request.start_time = clock;
            request.completion_time = clock + seek + latency + transfer;
            acc.record_response(request.response_time());

            clock = request.completion_time;
            head.cylinder = request.cylinder;
            // The platter keeps spinning while the head waits and transfers;
            // seek motion does not advance the angle in this model.
            head.rotate_by(latency + transfer, geometry);

            admitted[index] = false;
            served[index] = true;
            queue_length -= 1;
            served_count += 1;
        } else if cursor < total {
            let next_arrival = requests[cursor].arrival_time;
            acc.add_idle(next_arrival - clock);
            clock = next_arrival;
        } else {
            // Queue drained and no arrivals left to admit.
            break;
        }
    }

    acc.finish(clock)
}
