//! Validated run parameters.
mod run;


pub use run::RunSettings;
