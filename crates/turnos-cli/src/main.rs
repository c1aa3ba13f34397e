//! Terminal front end for the turnos booking page.

mod console;
mod render;
mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use turnos_core::config::{AppConfig, DEFAULT_LOG_FILTER};

use crate::console::Console;
use crate::shell::Shell;

#[derive(Parser)]
#[command(name = "turnos")]
#[command(version)]
#[command(about = "Search doctors by specialty and coverage and book appointments", long_about = None)]
struct Cli {
    /// Catalog document (overrides TURNOS_CATALOG)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Session storage file (overrides TURNOS_STORAGE; in memory when unset)
    #[arg(short, long)]
    storage: Option<PathBuf>,

    /// How messages address the user (overrides TURNOS_PATIENT_LABEL)
    #[arg(long)]
    patient_label: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = apply_overrides(AppConfig::from_env(), cli);
    info!(
        catalog = %config.catalog_path.display(),
        ephemeral = config.is_ephemeral(),
        "Starting turnos"
    );

    let today = chrono::Local::now().date_naive();
    let page = turnos_core::open_page(&config, today).context("booking page could not be loaded")?;

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    Shell::new(page, console).run()?;
    Ok(())
}

fn apply_overrides(mut config: AppConfig, cli: Cli) -> AppConfig {
    if let Some(path) = cli.catalog {
        config = config.with_catalog_path(path);
    }
    if let Some(path) = cli.storage {
        config = config.with_storage_path(path);
    }
    if let Some(label) = cli.patient_label {
        config = config.with_patient_label(label);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "turnos",
            "--catalog",
            "doctors.json",
            "--patient-label",
            "usuario",
        ]);
        let config = apply_overrides(AppConfig::default(), cli);

        assert_eq!(config.catalog_path, PathBuf::from("doctors.json"));
        assert_eq!(config.patient_label, "usuario");
        assert!(config.is_ephemeral());
    }
}
