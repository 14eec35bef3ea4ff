mod config;

use config::Config;
use std::env;
use std::process::ExitCode;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/development.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config_path = parse_config_path();

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load environment config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_level.as_deref());

    report(&config_path, &config);

    ExitCode::SUCCESS
}

/// Log the resolved record so a deployment can be eyeballed before rollout.
fn report(path: &str, config: &Config) {
    let mode = if config.production {
        "production"
    } else {
        "development"
    };

    info!(config = %path, mode, "Environment config loaded");
    info!(url = %config.api_server_url, "API server");
    info!(
        domain = %config.auth.domain_prefix,
        audience = %config.auth.audience,
        client_id = %config.auth.client_id,
        callback = %config.auth.callback_url,
        "Auth tenant"
    );
}
