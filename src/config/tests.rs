use super::{apply_config, load_config, load_config_file, types::ConfigFile};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{LoadArgs, OutputFormat, RemainderPolicy};
use crate::error::{AppError, ConfigError};

fn parse_with_matches(argv: &[&str]) -> Result<(LoadArgs, clap::ArgMatches), String> {
    let matches = LoadArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = LoadArgs::from_arg_matches(&matches).map_err(|err| format!("{}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    let content = r#"
url = "http://localhost:3000/ping"
requests = 100
concurrency = 8
timeout = "2s"
remainder = "distribute"
output_format = "json"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| format!("{}", err))?;
    if config.url.as_deref() != Some("http://localhost:3000/ping") {
        return Err("Unexpected url".to_owned());
    }
    if config.requests != Some(100) || config.concurrency != Some(8) {
        return Err("Unexpected requests/concurrency".to_owned());
    }
    if config.remainder != Some(RemainderPolicy::Distribute) {
        return Err("Unexpected remainder".to_owned());
    }
    if config.output_format != Some(OutputFormat::Json) {
        return Err("Unexpected output format".to_owned());
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| "Expected timeout".to_owned())?
        .to_duration()
        .map_err(|err| format!("{}", err))?;
    if timeout != Duration::from_secs(2) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    Ok(())
}

#[test]
fn parse_json_config_with_workers_alias() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.json");
    let content = r#"{"url": "http://localhost", "requests": 20, "workers": 4, "timeout": 3}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| format!("{}", err))?;
    if config.concurrency != Some(4) {
        return Err("Expected workers alias to set concurrency".to_owned());
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| "Expected timeout".to_owned())?
        .to_duration()
        .map_err(|err| format!("{}", err))?;
    if timeout != Duration::from_secs(3) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.yaml");
    std::fs::write(&path, "url: x").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected unsupported extension error".to_owned()),
    }
}

#[test]
fn unknown_field_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    std::fs::write(&path, "method = \"post\"\n").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected parse failure for unknown field".to_owned()),
    }
}

#[test]
fn apply_config_fills_missing_values() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["volley"])?;
    let config = ConfigFile {
        url: Some("http://localhost:9000".to_owned()),
        requests: Some(50),
        concurrency: Some(5),
        timeout: Some(super::types::DurationValue::Text("750ms".to_owned())),
        remainder: Some(RemainderPolicy::Distribute),
        output_format: Some(OutputFormat::Json),
        verbose: Some(true),
        no_color: Some(true),
    };

    apply_config(&mut args, &matches, &config).map_err(|err| format!("{}", err))?;

    if args.url.as_deref() != Some("http://localhost:9000") {
        return Err("Expected url from config".to_owned());
    }
    if args.requests.map(|value| value.get()) != Some(50) {
        return Err("Expected requests from config".to_owned());
    }
    if args.concurrency.get() != 5 {
        return Err("Expected concurrency from config".to_owned());
    }
    if args.request_timeout != Duration::from_millis(750) {
        return Err("Expected timeout from config".to_owned());
    }
    if args.remainder != RemainderPolicy::Distribute || !args.verbose || !args.no_color {
        return Err("Expected remaining fields from config".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_keeps_cli_values() -> Result<(), String> {
    let (mut args, matches) =
        parse_with_matches(&["volley", "-u", "http://cli", "-n", "9", "-c", "3"])?;
    let config = ConfigFile {
        url: Some("http://config".to_owned()),
        requests: Some(1000),
        concurrency: Some(100),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| format!("{}", err))?;

    if args.url.as_deref() != Some("http://cli") {
        return Err("CLI url should win".to_owned());
    }
    if args.requests.map(|value| value.get()) != Some(9) {
        return Err("CLI requests should win".to_owned());
    }
    if args.concurrency.get() != 3 {
        return Err("CLI concurrency should win".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_rejects_zero_concurrency() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["volley"])?;
    let config = ConfigFile {
        concurrency: Some(0),
        ..ConfigFile::default()
    };

    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field, .. }))
            if field == "concurrency" =>
        {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(()) => Err("Expected zero concurrency to be rejected".to_owned()),
    }
}

#[test]
fn load_config_reports_the_path_it_read() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("custom.json");
    std::fs::write(&path, r#"{"requests": 3}"#).map_err(|err| format!("write failed: {}", err))?;
    let path_str = path.to_str().ok_or("tempdir path is not UTF-8")?;

    let loaded = load_config(Some(path_str))
        .map_err(|err| format!("load failed: {}", err))?
        .ok_or("Expected a config for an explicit path")?;
    if loaded.path != path {
        return Err(format!("Unexpected path {}", loaded.path.display()));
    }
    if loaded.config.requests != Some(3) {
        return Err(format!("Unexpected requests {:?}", loaded.config.requests));
    }
    Ok(())
}
