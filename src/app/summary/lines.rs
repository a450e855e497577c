use std::time::Duration;

use crate::metrics::RunSummary;

/// Nanoseconds per millisecond.
const NS_PER_MS: u128 = 1_000_000;
/// Half a millisecond, for round-half-up.
const HALF_MS_NS: u128 = 500_000;
/// Scale of fixed-point values carried as hundredths.
const X100_DIVISOR: u64 = 100;

pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("=== LOAD TEST REPORT ===".to_owned());
    lines.push(format!(
        "Total time: {}",
        format_duration_ms(summary.total_duration)
    ));
    lines.push(format!("Total requests: {}", summary.total_requests));
    lines.push(format!(
        "Successful requests (HTTP 200): {}",
        summary.successful_requests
    ));

    if summary.error_count > 0 {
        lines.push(String::new());
        lines.push(format!("Errors: {}", summary.error_count));
        for (kind, count) in &summary.error_kinds {
            lines.push(format!("  {}: {}", kind, count));
        }
    }

    lines.push(String::new());
    lines.push("Status code distribution:".to_owned());
    for (status, count) in &summary.status_codes {
        lines.push(format!("  HTTP {}: {} requests", status, count));
    }

    if let Some(percentiles) = summary.percentiles {
        lines.push(String::new());
        lines.push("Latency percentiles:".to_owned());
        for (rank, value) in percentiles.as_pairs() {
            lines.push(format!("  p{}: {}", rank, format_duration_ms(value)));
        }
    }

    if let Some(rps_x100) = summary.requests_per_second_x100 {
        lines.push(String::new());
        lines.push(format!("Requests per second: {}", format_x100(rps_x100)));
    }

    lines
}

/// Formats `duration` rounded to the nearest millisecond.
pub(crate) fn format_duration_ms(duration: Duration) -> String {
    let millis = duration
        .as_nanos()
        .saturating_add(HALF_MS_NS)
        .checked_div(NS_PER_MS)
        .unwrap_or(0);
    format!("{}ms", millis)
}

pub(crate) fn format_x100(value: u64) -> String {
    format!(
        "{}.{:02}",
        value.checked_div(X100_DIVISOR).unwrap_or(0),
        value.checked_rem(X100_DIVISOR).unwrap_or(0)
    )
}
