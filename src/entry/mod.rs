use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::args::{DEFAULT_CONFIG_FILES, LoadArgs};
use crate::config::{apply_config, load_config};
use crate::error::AppResult;

/// Parses arguments, merges the config file, and runs one load test.
///
/// # Errors
///
/// Returns an error for invalid arguments or configuration, when the runtime
/// cannot be built, or when the run itself fails to set up.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    let loaded = load_config(args.config.as_deref())?;
    if let Some(loaded) = loaded.as_ref() {
        apply_config(&mut args, &matches, &loaded.config)?;
    }

    crate::system::logger::init_logging(args.verbose, args.no_color);
    if let Some(loaded) = loaded {
        debug!("Using config {}", loaded.path.display());
    }

    let runtime = build_runtime()?;
    runtime.block_on(crate::app::run_local(&args))
}

fn build_runtime() -> AppResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

fn parse_args() -> AppResult<Option<(LoadArgs, ArgMatches)>> {
    let mut cmd = LoadArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = LoadArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
