mod cli;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use app_registry::AppRegistry;
use app_registry::config::{RegistryConfig, default_config_path};
use clap::Parser;
use log::{error, info};

fn main() -> ExitCode {
    // Initialize logger; RUST_LOG overrides the info default, stdout is reserved for command output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();

    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn real_main() -> Result<ExitCode> {
    let args = cli::Args::parse();

    let registry = load_registry(args.config, args.builtin)?;
    info!("{} apps registered", registry.len());

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match args.sub.unwrap_or(cli::Cmd::List { json: false }) {
        cli::Cmd::List { json } => {
            handle_list(&registry, json, &mut stdout.lock())?;
            Ok(ExitCode::SUCCESS)
        }
        cli::Cmd::Resolve { name } => {
            if handle_resolve(&registry, &name, &mut stdout.lock(), &mut stderr.lock())? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Build the registry from CLI arguments
///
/// Only the default config location is created on first run; an explicit
/// `--config` path must already exist.
fn load_registry(config_path: Option<String>, use_builtin: bool) -> Result<AppRegistry> {
    if use_builtin {
        info!("Using built-in app list");
        return Ok(AppRegistry::builtin());
    }

    let cfg = match config_path {
        Some(path) => RegistryConfig::load(&PathBuf::from(path))?,
        None => RegistryConfig::load_or_create(&default_config_path()?)?,
    };
    cfg.into_registry()
}

/// Handle list command - print apps in registry order
fn handle_list(registry: &AppRegistry, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, registry.entries())
            .context("Failed to serialize app list")?;
        writeln!(out)?;
    } else {
        for app in registry {
            writeln!(out, "{}\t{}", app.app_name, app.api_server_url)?;
        }
    }
    Ok(())
}

/// Handle resolve command - print the API server for one app
///
/// Returns false for an unknown app (exit 1)
fn handle_resolve(
    registry: &AppRegistry,
    name: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    match registry.lookup(name) {
        Some(url) => {
            writeln!(out, "{url}")?;
            Ok(true)
        }
        None => {
            writeln!(err, "Unknown app: {name}")?;
            writeln!(
                err,
                "Known apps: {}",
                registry.names().collect::<Vec<_>>().join(", ")
            )?;
            Ok(false)
        }
    }
}
