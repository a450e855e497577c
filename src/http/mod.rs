//! Request execution and the worker pool that fans the load out.
mod client;
mod executor;
mod pool;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::build_client;
pub use executor::{HttpExecutor, RequestExecutor, execute_get};
pub use pool::{outcome_channel, partition_requests, spawn_worker_pool};
