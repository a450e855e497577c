use std::time::Duration;

use url::Url;

use crate::args::{
    DEFAULT_REQUEST_TIMEOUT, LoadArgs, PositiveU64, PositiveUsize, RemainderPolicy,
};
use crate::error::{AppError, AppResult, ValidationError};

/// Parameters of a single load run. Construction validates everything, so a
/// `RunSettings` value is always safe to hand to the worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    url: String,
    total_requests: PositiveU64,
    concurrency: PositiveUsize,
    request_timeout: Duration,
    remainder: RemainderPolicy,
}

impl RunSettings {
    /// # Errors
    ///
    /// Returns a validation error when the URL is empty, unparsable, not
    /// http/https, or has no host.
    pub fn new(
        url: impl Into<String>,
        total_requests: PositiveU64,
        concurrency: PositiveUsize,
    ) -> AppResult<Self> {
        let url = url.into();
        validate_url(&url)?;
        Ok(Self {
            url,
            total_requests,
            concurrency,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            remainder: RemainderPolicy::Drop,
        })
    }

    /// Validates parsed CLI/config values.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the URL or request count is missing,
    /// or the URL is invalid.
    pub fn from_args(args: &LoadArgs) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        let total_requests = args
            .requests
            .ok_or_else(|| AppError::validation(ValidationError::MissingRequests))?;
        Ok(Self::new(url, total_requests, args.concurrency)?
            .with_request_timeout(args.request_timeout)
            .with_remainder(args.remainder))
    }

    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    #[must_use]
    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn total_requests(&self) -> PositiveU64 {
        self.total_requests
    }

    #[must_use]
    pub const fn concurrency(&self) -> PositiveUsize {
        self.concurrency
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub const fn remainder(&self) -> RemainderPolicy {
        self.remainder
    }
}

fn validate_url(url: &str) -> AppResult<()> {
    if url.trim().is_empty() {
        return Err(AppError::validation(ValidationError::EmptyUrl));
    }
    let parsed = Url::parse(url).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: url.to_owned(),
            source: err,
        })
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            }));
        }
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }
    Ok(())
}
