use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::error::AppResult;
use crate::metrics::{LatencyPercentiles, RequestErrorKind, RunSummary};

/// Machine-readable report. Durations are microseconds; throughput is in
/// hundredths of a request per second.
#[derive(Debug, Serialize)]
pub(crate) struct JsonSummary {
    total_duration_us: u64,
    total_requests: u64,
    successful_requests: u64,
    error_count: u64,
    error_kinds: BTreeMap<RequestErrorKind, u64>,
    status_codes: BTreeMap<u16, u64>,
    latency_samples: usize,
    latency_percentiles_us: Option<JsonPercentiles>,
    requests_per_second_x100: Option<u64>,
}

#[derive(Debug, Serialize)]
struct JsonPercentiles {
    p50: u64,
    p75: u64,
    p90: u64,
    p99: u64,
}

impl From<&RunSummary> for JsonSummary {
    fn from(summary: &RunSummary) -> Self {
        Self {
            total_duration_us: micros(summary.total_duration),
            total_requests: summary.total_requests,
            successful_requests: summary.successful_requests,
            error_count: summary.error_count,
            error_kinds: summary.error_kinds.clone(),
            status_codes: summary.status_codes.clone(),
            latency_samples: summary.latency_samples,
            latency_percentiles_us: summary.percentiles.as_ref().map(JsonPercentiles::from),
            requests_per_second_x100: summary.requests_per_second_x100,
        }
    }
}

impl From<&LatencyPercentiles> for JsonPercentiles {
    fn from(percentiles: &LatencyPercentiles) -> Self {
        Self {
            p50: micros(percentiles.p50),
            p75: micros(percentiles.p75),
            p90: micros(percentiles.p90),
            p99: micros(percentiles.p99),
        }
    }
}

fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

pub(crate) fn render_json(summary: &RunSummary) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&JsonSummary::from(summary))?)
}
