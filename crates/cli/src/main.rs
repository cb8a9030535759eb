mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use host::PermissionGate;
use permissions::{PermissionToken, ProfileOptions, extract_markers, required_permissions_for_field_value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::Result;

const CONFIG_FILE: &str = "permcheck.toml";

#[derive(Parser)]
#[command(name = "permcheck")]
#[command(about = "Check which permissions profile options require", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the field markers in a card template
    Markers {
        /// Template text, e.g. "{expression} {clipboard-text}"
        template: String,
    },
    /// List the permissions a card template requires
    Required {
        /// Template text, e.g. "{expression} {clipboard-text}"
        template: String,
    },
    /// Check whether held permissions cover the configured options
    Check {
        /// Config file with [host] and profile option tables
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,
        /// Profile options exported as JSON or TOML (overrides the config's options)
        #[arg(short, long)]
        options: Option<PathBuf>,
        /// Treat this permission as held (repeatable)
        #[arg(short, long = "grant")]
        grants: Vec<PermissionToken>,
        /// Request missing permissions before checking
        #[arg(long)]
        request: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Markers { template } => {
            for marker in extract_markers(&template) {
                println!("{marker}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Required { template } => {
            for permission in required_permissions_for_field_value(&template) {
                println!("{permission}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            config,
            options,
            grants,
            request,
        } => cmd_check(&config, options.as_deref(), &grants, request).await,
    }
}

async fn cmd_check(
    config_path: &Path,
    options_path: Option<&Path>,
    grants: &[PermissionToken],
    request: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let options = match options_path {
        Some(path) => ProfileOptions::load(path)?,
        None => config.options.clone(),
    };

    let gate = PermissionGate::new(config.build_host(grants));

    if request && !gate.request_missing_permissions(&options).await? {
        info!("host declined the permission request");
    }

    if gate.has_required_permissions_for_options(&options).await? {
        println!("sufficient");
        return Ok(ExitCode::SUCCESS);
    }

    println!("insufficient");
    for permission in gate.missing_permissions_for_options(&options).await? {
        println!("  missing: {permission}");
    }
    Ok(ExitCode::from(2))
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        debug!(path = %path.display(), "loading config");
        Ok(Config::load(path)?)
    } else {
        debug!(path = %path.display(), "config not found, using defaults");
        Ok(Config::default())
    }
}
