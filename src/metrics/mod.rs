//! Outcome aggregation, nearest-rank percentiles, and run summaries.
mod aggregator;
mod percentiles;
mod summary;
mod types;


pub use aggregator::{aggregate_outcomes, setup_result_aggregator};
pub use percentiles::{
    LatencyPercentiles, REPORTED_PERCENTILES, percentile, requests_per_second_x100,
};
pub use summary::RunSummary;
pub use types::{Report, RequestErrorKind, RequestOutcome};
