use std::time::Duration;

/// Percentiles shown in every report.
pub const REPORTED_PERCENTILES: [u8; 4] = [50, 75, 90, 99];

const PERCENT_DIVISOR: usize = 100;
const NANOS_PER_SEC: u128 = 1_000_000_000;
/// Throughput is kept in hundredths of a request per second.
const RATE_SCALE: u128 = 100;

/// Nearest-rank percentile of `samples`.
///
/// Works on a sorted copy, so the caller's ordering is untouched. Returns
/// [`Duration::ZERO`] for an empty slice; `p` above 100 is treated as 100.
#[must_use]
pub fn percentile(samples: &[Duration], p: u8) -> Duration {
    let mut sorted = samples.to_vec();
    sorted.sort();
    percentile_of_sorted(&sorted, p)
}

fn percentile_of_sorted(sorted: &[Duration], p: u8) -> Duration {
    let len = sorted.len();
    if len == 0 {
        return Duration::ZERO;
    }
    let p = usize::from(p.min(100));
    let last = len.saturating_sub(1);
    let index = p
        .saturating_mul(len)
        .checked_div(PERCENT_DIVISOR)
        .unwrap_or(0)
        .min(last);
    sorted.get(index).copied().unwrap_or(Duration::ZERO)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyPercentiles {
    pub p50: Duration,
    pub p75: Duration,
    pub p90: Duration,
    pub p99: Duration,
}

impl LatencyPercentiles {
    /// Computes all reported percentiles with a single sort. `None` when
    /// there are no samples.
    #[must_use]
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort();
        let [p50, p75, p90, p99] = REPORTED_PERCENTILES;
        Some(Self {
            p50: percentile_of_sorted(&sorted, p50),
            p75: percentile_of_sorted(&sorted, p75),
            p90: percentile_of_sorted(&sorted, p90),
            p99: percentile_of_sorted(&sorted, p99),
        })
    }

    #[must_use]
    pub const fn as_pairs(&self) -> [(u8, Duration); 4] {
        let [p50, p75, p90, p99] = REPORTED_PERCENTILES;
        [
            (p50, self.p50),
            (p75, self.p75),
            (p90, self.p90),
            (p99, self.p99),
        ]
    }
}

/// Requests per second, scaled by 100, for `samples` measured over
/// `total_duration`. `None` when there are no samples or the duration is zero.
#[must_use]
pub fn requests_per_second_x100(samples: usize, total_duration: Duration) -> Option<u64> {
    if samples == 0 {
        return None;
    }
    let nanos = total_duration.as_nanos();
    if nanos == 0 {
        return None;
    }
    let scaled = u128::try_from(samples)
        .unwrap_or(u128::MAX)
        .saturating_mul(RATE_SCALE)
        .saturating_mul(NANOS_PER_SEC)
        .checked_div(nanos)?;
    Some(u64::try_from(scaled).unwrap_or(u64::MAX))
}
