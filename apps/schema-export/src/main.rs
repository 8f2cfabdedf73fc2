use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use firmdesk_config::{load as load_config, AppConfig};
use firmdesk_contracts::schema;
use tracing::info;

#[derive(Parser)]
#[command(name = "firmdesk-schema-export")]
#[command(about = "Write the OpenAPI description of the Firmdesk contracts")]
struct Cli {
    /// Write the document to this file instead of the configured destination
    #[arg(long)]
    output: Option<PathBuf>,
    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
    /// Print the schema component names and exit
    #[arg(long)]
    list: bool,
}

/// Export settings after command-line flags are applied over the configuration
#[derive(Debug, PartialEq)]
struct ExportPlan {
    destination: Option<PathBuf>,
    pretty: bool,
}

impl ExportPlan {
    fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        Self {
            destination: cli
                .output
                .clone()
                .or_else(|| config.output.path.as_ref().map(PathBuf::from)),
            pretty: config.output.pretty && !cli.compact,
        }
    }
}

mod telemetry {
    use anyhow::Result;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // stdout carries the document
        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing().context("failed to initialise tracing")?;

    if cli.list {
        let mut stdout = std::io::stdout().lock();
        for name in schema::component_names() {
            writeln!(stdout, "{name}").context("failed to write to stdout")?;
        }
        return Ok(());
    }

    let config = load_config().context("failed to load configuration")?;
    let plan = ExportPlan::resolve(&cli, &config);

    let document = schema::openapi_json(
        &config.openapi.title,
        &config.openapi.version,
        config.openapi.description.as_deref(),
        plan.pretty,
    )
    .context("failed to render OpenAPI document")?;

    match plan.destination {
        Some(path) => {
            write_document(&path, &document)?;
            info!(path = %path.display(), bytes = document.len(), "wrote OpenAPI document");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{document}").context("failed to write to stdout")?;
        }
    }

    Ok(())
}

fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))
}
