use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// HTTP status counted as a successful request.
pub(crate) const SUCCESS_STATUS: u16 = 200;

/// Why a single request failed to produce a usable response.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestErrorKind {
    #[error("timeout")]
    Timeout,
    #[error("connect")]
    Connect,
    #[error("body")]
    Body,
    #[error("request")]
    Request,
}

/// Result of one executed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    pub duration: Duration,
    /// Response status, or 0 when no response was obtained.
    pub status_code: u16,
    pub error: Option<RequestErrorKind>,
}

impl RequestOutcome {
    #[must_use]
    pub const fn success(duration: Duration, status_code: u16) -> Self {
        Self {
            duration,
            status_code,
            error: None,
        }
    }

    #[must_use]
    pub const fn failure(duration: Duration, status_code: u16, kind: RequestErrorKind) -> Self {
        Self {
            duration,
            status_code,
            error: Some(kind),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Accumulated statistics for a run. Owned and mutated only by the
/// aggregator; read-only once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub status_codes: BTreeMap<u16, u64>,
    /// Durations of outcomes without an error, in arrival order.
    pub latencies: Vec<Duration>,
    pub error_count: u64,
    pub error_kinds: BTreeMap<RequestErrorKind, u64>,
    pub total_duration: Duration,
}

impl Report {
    #[must_use]
    pub fn with_capacity(expected_requests: usize) -> Self {
        Self {
            latencies: Vec::with_capacity(expected_requests),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, outcome: RequestOutcome) {
        self.total_requests = self.total_requests.saturating_add(1);

        if outcome.status_code == SUCCESS_STATUS {
            self.successful_requests = self.successful_requests.saturating_add(1);
        }

        if outcome.status_code > 0 {
            let count = self.status_codes.entry(outcome.status_code).or_insert(0);
            *count = count.saturating_add(1);
        }

        match outcome.error {
            Some(kind) => {
                self.error_count = self.error_count.saturating_add(1);
                let count = self.error_kinds.entry(kind).or_insert(0);
                *count = count.saturating_add(1);
            }
            None => self.latencies.push(outcome.duration),
        }
    }
}
