use std::collections::BTreeMap;
use std::time::Duration;

use super::{LatencyPercentiles, Report, RequestErrorKind, requests_per_second_x100};

/// Everything the reporting layer shows, derived once from a finished
/// [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_duration: Duration,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub error_count: u64,
    pub error_kinds: BTreeMap<RequestErrorKind, u64>,
    pub status_codes: BTreeMap<u16, u64>,
    pub latency_samples: usize,
    pub percentiles: Option<LatencyPercentiles>,
    pub requests_per_second_x100: Option<u64>,
}

impl RunSummary {
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            total_duration: report.total_duration,
            total_requests: report.total_requests,
            successful_requests: report.successful_requests,
            error_count: report.error_count,
            error_kinds: report.error_kinds.clone(),
            status_codes: report.status_codes.clone(),
            latency_samples: report.latencies.len(),
            percentiles: LatencyPercentiles::from_samples(&report.latencies),
            requests_per_second_x100: requests_per_second_x100(
                report.latencies.len(),
                report.total_duration,
            ),
        }
    }
}
