//! zonesync command-line frontend
//!
//! Hosting panel hooks call `zonesync event ...`; operators use `sync` and
//! `domains` by hand.
//!
//! ```bash
//! # Sync every selected domain
//! zonesync sync
//!
//! # Panel hook after a zone edit
//! zonesync event zone-changed example.com
//!
//! # Manage which domains are synced
//! zonesync domains registrar
//! zonesync domains enable example.com
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zonesync_app::{AppConfig, AppState};
use zonesync_core::types::SyncReport;

/// Keeps panel DNS zones and registrar zones in step
#[derive(Parser, Debug)]
#[command(name = "zonesync", author, version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: <config dir>/zonesync/config.toml)
    #[arg(short, long, global = true, env = "ZONESYNC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sync selected domains now (all selected domains when none are given)
    Sync {
        domains: Vec<String>,
    },

    /// Panel event hooks
    Event {
        #[command(subcommand)]
        event: EventCommand,
    },

    /// Manage the set of synced domains
    Domains {
        #[command(subcommand)]
        action: DomainsCommand,
    },

    /// Check the configured registrar credentials
    Check,
}

#[derive(Subcommand, Debug)]
enum EventCommand {
    /// A domain's zone was edited in the panel
    ZoneChanged { domain: String },
    /// A domain was created in the panel
    DomainCreated { domain: String },
}

#[derive(Subcommand, Debug)]
enum DomainsCommand {
    /// List domains selected for sync
    List,
    /// List registrar account domains with their selection state
    Registrar,
    /// Select a domain for sync
    Enable { domain: String },
    /// Stop syncing a domain
    Disable { domain: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    // stdout 留给 JSON 输出
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_path().context("Cannot determine config path")?,
    };
    let config = AppConfig::load(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    let state = AppState::from_config(&config)
        .await
        .context("Failed to initialize storage")?;

    match cli.command {
        Commands::Sync { domains } => {
            let report = state
                .trigger_service
                .manual_sync(&domains)
                .await
                .context("Sync failed")?;
            print_report(&report)
        }
        Commands::Event { event } => match event {
            EventCommand::ZoneChanged { domain } => {
                let report = state
                    .trigger_service
                    .handle_zone_changed(&domain)
                    .await
                    .with_context(|| format!("Sync of {domain} failed"))?;
                print_report(&report)
            }
            EventCommand::DomainCreated { domain } => {
                let enrolled = state
                    .trigger_service
                    .handle_domain_created(&domain)
                    .await
                    .with_context(|| format!("Failed to enrol {domain}"))?;
                print_json(&json!({ "domain": domain, "enrolled": enrolled }))?;
                Ok(ExitCode::SUCCESS)
            }
        },
        Commands::Domains { action } => {
            run_domains(&state, action).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            let Some(provider) = state.ctx.registrar().await? else {
                tracing::warn!("No registrar credentials configured");
                return Ok(ExitCode::FAILURE);
            };
            let valid = provider
                .validate_credentials()
                .await
                .context("Credential check failed")?;
            print_json(&json!({ "provider": provider.id(), "valid": valid }))?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

async fn run_domains(state: &AppState, action: DomainsCommand) -> Result<()> {
    let selection = &state.selection_service;
    match action {
        DomainsCommand::List => print_json(&selection.list_selected().await?),
        DomainsCommand::Registrar => print_json(&selection.list_registrar_domains().await?),
        DomainsCommand::Enable { domain } => {
            let domain = selection.enable(&domain).await?;
            tracing::info!("{domain} selected for sync");
            Ok(())
        }
        DomainsCommand::Disable { domain } => {
            let domain = selection.disable(&domain).await?;
            tracing::info!("{domain} no longer synced");
            Ok(())
        }
    }
}

/// 有域名失败时返回非零退出码
fn print_report(report: &SyncReport) -> Result<ExitCode> {
    print_json(report)?;
    Ok(if report.failed() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{out}");
    Ok(())
}
