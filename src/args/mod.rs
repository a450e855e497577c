//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::LoadArgs;
pub use defaults::{DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT};

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
pub use types::{OutputFormat, PositiveU64, PositiveUsize, RemainderPolicy};
