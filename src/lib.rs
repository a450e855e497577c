//! Core library for the `volley` CLI.
//!
//! `volley` fires a fixed number of HTTP GET requests at one URL from a fixed
//! number of parallel workers and reports status counts, latency percentiles
//! and throughput. The building blocks are public so a run can be driven
//! without the binary:
//!
//! - [`domain::RunSettings`] validates the target and load shape.
//! - [`application::run_load`] dispatches the workers and returns a
//!   [`metrics::Report`].
//! - [`metrics::RunSummary`] derives percentiles and throughput from it.
pub mod application;
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;

mod app;
mod entry;
mod system;

pub use entry::run;
