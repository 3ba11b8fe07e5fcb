// src/histogram.rs

use crate::request::DiskRequest;

pub struct HistogramBin {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub total: usize,
}

// Equal-width bins over [min, max]; bin count adapts as sqrt(n) clamped to
// [10, 40]. Returns None for an empty run - there is nothing to report.
pub fn build(requests: &[DiskRequest]) -> Option<Histogram> {
    if requests.is_empty() {
        return None;
    }

    let mut times: Vec<f64> = requests.iter().map(DiskRequest::response_time).collect();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &t in &times {
        min = min.min(t);
        max = max.max(t);
        sum += t;
    }
    let total = times.len();
    let mean = sum / total as f64;

    times.sort_by(f64::total_cmp);
    let median = if total % 2 == 0 {
        (times[total / 2 - 1] + times[total / 2]) / 2.0
    } else {
        times[total / 2]
    };

    let bin_count = ((total as f64).sqrt().round() as usize).clamp(10, 40);
    let width = (max - min) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            min: min + i as f64 * width,
            max: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &t in &times {
        // The exact maximum clamps into the last bin; a zero width (all
        // samples equal) collapses everything into the first.
        let index = if width > 0.0 {
            (((t - min) / width) as usize).min(bin_count - 1)
        } else {
            0
        };
        bins[index].count += 1;
    }

    Some(Histogram { bins, min, max, mean, median, total })
}

impl Histogram {
    pub fn render(&self, label: &str) -> String {
        let mut output = Vec::new();
        output.push("=".repeat(71));
        output.push(format!("Response time distribution ({})", label));
        output.push("(x axis: response time, ms | y axis: request count)".to_string());
        output.push(format!(
            "Range: [{:.2} .. {:.2}] ms | Mean: {:.2} | Median: {:.2}",
            self.min, self.max, self.mean, self.median
        ));
        output.push("-".repeat(71));
        output.push(format!("{:<21} {:>6} {:>8}  | Graph", "Interval (ms)", "Count", "%"));
        output.push("-".repeat(71));

        let busiest = self.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for bin in &self.bins {
            let percent = bin.count as f64 * 100.0 / self.total as f64;
            let bar_length = bin.count * 50 / busiest;
            output.push(format!(
                "{:8.2} - {:<10.2} {:>6} {:7.2}% | {}",
                bin.min,
                bin.max,
                bin.count,
                percent,
                "█".repeat(bar_length)
            ));
        }

        output.push("-".repeat(71));
        output.push(format!(
            "Mean: {:.2} ms | Median: {:.2} ms | Min: {:.2} | Max: {:.2}",
            self.mean, self.median, self.min, self.max
        ));
        output.push("=".repeat(71));
        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{DiskRequest, Operation};

    fn served_request(response: f64) -> DiskRequest {
        DiskRequest {
            arrival_time: 1.0,
            cylinder: 0,
            head: 0,
            sector: 0,
            operation: Operation::Read,
            sector_count: 1,
            start_time: 1.0,
            completion_time: 1.0 + response,
        }
    }

    #[test]
    fn bin_counts_sum_to_total() {
        let requests: Vec<DiskRequest> =
            (0..100).map(|i| served_request((i % 17) as f64 + 0.5)).collect();
        let hist = build(&requests).unwrap();
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(hist.bins.len(), 10); // sqrt(100)
        assert_eq!(hist.total, 100);
    }

    #[test]
    fn empty_run_builds_no_histogram() {
        assert!(build(&[]).is_none());
    }

    #[test]
    fn bin_count_is_clamped_to_its_bounds() {
        let few: Vec<DiskRequest> = (0..4).map(|i| served_request(i as f64)).collect();
        assert_eq!(build(&few).unwrap().bins.len(), 10);

        let many: Vec<DiskRequest> = (0..5_000).map(|i| served_request((i % 97) as f64)).collect();
        assert_eq!(build(&many).unwrap().bins.len(), 40);
    }

    #[test]
    fn exact_maximum_lands_in_the_last_bin() {
        let requests: Vec<DiskRequest> = (0..50).map(|i| served_request(i as f64)).collect();
        let hist = build(&requests).unwrap();
        assert!(hist.bins.last().unwrap().count >= 1);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 50);
        assert_eq!(hist.max, 49.0);
    }

    #[test]
    fn identical_samples_collapse_into_one_bin() {
        let requests: Vec<DiskRequest> = (0..20).map(|_| served_request(5.0)).collect();
        let hist = build(&requests).unwrap();
        assert_eq!(hist.bins[0].count, 20);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 20);
        assert_eq!(hist.median, 5.0);
        assert_eq!(hist.mean, 5.0);
    }

    #[test]
    fn median_averages_the_middle_pair_for_even_counts() {
        let responses = [1.0, 10.0, 4.0, 2.0];
        let requests: Vec<DiskRequest> = responses.iter().map(|&r| served_request(r)).collect();
        assert_eq!(build(&requests).unwrap().median, 3.0);
    }

    #[test]
    fn render_lists_every_bin() {
        let requests: Vec<DiskRequest> = (0..30).map(|i| served_request(i as f64)).collect();
        let hist = build(&requests).unwrap();
        let report = hist.render("FIFO");
        assert!(report.contains("Response time distribution (FIFO)"));
        // Header block is 7 lines, footer is 3; one line per bin in between.
        assert_eq!(report.lines().count(), 10 + hist.bins.len());
    }
}
