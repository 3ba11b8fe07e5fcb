use anyhow::{Result, anyhow};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod geometry;
mod histogram;
mod report;
mod request;
mod sched;
mod stats;
mod timing;
mod workload;

use sched::SchedulingPolicy;
use sched::fifo::Fifo;
use sched::sstf::Sstf;
use workload::WorkloadConfig;

#[derive(Parser)]
#[command(about = "Rotating-disk scheduling simulator: FIFO vs SSTF")]
struct Cli {
    /// Inter-arrival scale for the first experiment, in seconds
    #[arg(long, default_value_t = 2.0)]
    t_max: f64,
    /// Largest transfer size drawn per request, in sectors
    #[arg(long, default_value_t = 16)]
    max_transfer: u32,
    /// Number of experiments; the scale shrinks tenfold each time
    #[arg(long, default_value_t = 3)]
    experiments: u32,
    /// Fix the workload RNG for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Disk geometry preset ('server-10k' or 'desktop-5400')
    #[arg(long, default_value = "server-10k")]
    disk: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let geometry = geometry::preset(&cli.disk).ok_or_else(|| {
        anyhow!("Unknown disk preset: {} (expected 'server-10k' or 'desktop-5400')", cli.disk)
    })?;
    if cli.experiments == 0 {
        return Err(anyhow!("At least one experiment is required"));
    }

    println!(
        "{}\n",
        report::parameter_header(geometry, cli.t_max, cli.max_transfer, workload::DEFAULT_HORIZON_MS)
    );

    let mut scale_ms = cli.t_max * 1000.0;
    for experiment in 1..=cli.experiments {
        let config = WorkloadConfig {
            interarrival_scale_ms: scale_ms,
            max_transfer: cli.max_transfer,
            horizon_ms: workload::DEFAULT_HORIZON_MS,
        };
        config.validate()?;

        println!("Experiment {}: t_max = {:.3} s", experiment, scale_ms / 1000.0);
        println!("----------------------------------------");

        // Fresh entropy per experiment unless pinned. An explicit seed is
        // mixed with the scale so the experiments draw distinct streams.
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ scale_ms.to_bits()),
            None => StdRng::from_entropy(),
        };
        let requests = workload::generate(geometry, &config, &mut rng);
        println!("Generated requests: {}\n", requests.len());

        // Each policy mutates start/completion in place, so each gets its
        // own copy of the sequence.
        let mut fifo_policy = Fifo::new();
        let mut fifo_run = requests.clone();
        let fifo_stats = sched::run(&mut fifo_policy, &mut fifo_run, geometry);

        let mut sstf_policy = Sstf::new();
        let mut sstf_run = requests.clone();
        let sstf_stats = sched::run(&mut sstf_policy, &mut sstf_run, geometry);

        println!("{}\n", report::policy_summary(fifo_policy.name(), &fifo_stats));
        println!("{}\n", report::policy_summary(sstf_policy.name(), &sstf_stats));

        if let Some(hist) = histogram::build(&fifo_run) {
            println!("{}\n", hist.render(fifo_policy.name()));
        }
        if let Some(hist) = histogram::build(&sstf_run) {
            println!("{}\n", hist.render(sstf_policy.name()));
        }

        scale_ms /= 10.0;
    }

    Ok(())
}
