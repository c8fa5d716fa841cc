use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "idnconv")]
#[command(about = "Convert internationalized domain names with libidn2", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    /// Emit results as JSON objects instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let cli = Cli::parse();

    // Fail fast when the linked libidn2 predates the flag set and status
    // codes this binary was written against.
    let version = idnconv_libidn2_ffi_bridge::ensure_supported_version()?;
    tracing::debug!(version, "libidn2 version check passed");

    cli.command.execute(cli.json)
}

fn init_tracing() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
