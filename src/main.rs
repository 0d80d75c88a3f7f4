use analytics::{MetricsEngine, OwnerSelection};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use configuration::{LogLevel, PointRateTable};
use presentation::RenderOptions;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Shown when a command needs an upload and none was given.
const UPLOAD_PROMPT: &str = "⚠ Please upload a CSV file to proceed.";

/// The main entry point for the Perfboard performance dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables (RUST_LOG and friends) from a .env file, if any.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_config(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    let _guard = configuration::init_tracing(&settings.logging)?;
    let rates = settings.points.rate_table()?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &rates),
        Commands::Owners(args) => handle_owners(args),
        Commands::Serve(args) => {
            let mut server = settings.server.clone();
            if let Some(addr) = args.addr {
                server.addr = addr;
            }
            web_server::run_server(&server, rates).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Employee performance dashboard: business points, AUM/SIP and activity metrics
/// from a CSV activity export.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file with logging, server and point-rate settings.
    #[arg(long, global = true, default_value = configuration::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Overrides the configured log level (RUST_LOG still wins).
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate and display the dashboard for an export.
    Report(ReportArgs),
    /// List the owners of an export, in the order they first appear.
    Owners(UploadArgs),
    /// Serve the upload API over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct UploadArgs {
    /// The CSV export to analyse.
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
struct ReportArgs {
    #[command(flatten)]
    upload: UploadArgs,

    /// Narrow the dashboard to these owners. Repeat for several; omit for all.
    #[arg(long = "owner")]
    owners: Vec<String>,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Width of the longest bar in the charts.
    #[arg(long, default_value_t = RenderOptions::default().chart_width)]
    chart_width: usize,
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to listen on; defaults to the configured `[server] addr`.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// The upload to read, or `None` when no file was given or it does not exist.
fn upload_path(args: &UploadArgs) -> Option<&Path> {
    let path = args.file.as_deref()?;
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Upload not found.");
        return None;
    }
    Some(path)
}

/// Loads the upload named by `args`, or prints the upload prompt when there is none.
fn load_upload(args: &UploadArgs) -> anyhow::Result<Option<ingest::UploadedTable>> {
    let Some(path) = upload_path(args) else {
        println!("{UPLOAD_PROMPT}");
        return Ok(None);
    };

    let table = ingest::load_from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if table.coerced_cells > 0 {
        tracing::info!(
            cells = table.coerced_cells,
            "Non-numeric values were treated as missing."
        );
    }
    Ok(Some(table))
}

/// Runs the metrics pipeline once and prints the result.
fn handle_report(args: ReportArgs, rates: &PointRateTable) -> anyhow::Result<ExitCode> {
    let Some(table) = load_upload(&args.upload)? else {
        return Ok(ExitCode::FAILURE);
    };

    let selection = OwnerSelection::of(args.owners);
    let report = MetricsEngine::new(rates).calculate(&table.records, &selection)?;

    match args.format {
        OutputFormat::Table => {
            let options = RenderOptions {
                chart_width: args.chart_width,
                ..RenderOptions::default()
            };
            println!("✅ File uploaded successfully!\n");
            println!("{}", presentation::render_dashboard(&report, &options));
        }
        OutputFormat::Json => println!("{}", presentation::render_json(&report)?),
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the owners available for selection.
fn handle_owners(args: UploadArgs) -> anyhow::Result<ExitCode> {
    let Some(table) = load_upload(&args)? else {
        return Ok(ExitCode::FAILURE);
    };
    for owner in table.owners() {
        println!("{owner}");
    }
    Ok(ExitCode::SUCCESS)
}
