#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CommandStrategy, DemoInput, DemoStrategy, ExtractInput, ExtractStrategy, FilterArgs,
    InitStrategy, OutputFormat, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "biodata")]
#[command(about = "Extract labeled field/value pairs from biodata documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract profiles from a text file (or stdin)
    Extract {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Attach diagnostic output
        #[arg(long)]
        debug: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Explicit config file path
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Run extraction over the built-in two-profile sample text
    Demo {
        /// Attach diagnostic output
        #[arg(long)]
        debug: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            debug,
            format,
            config,
            filters,
        } => {
            if let Some(path) = &file {
                info!("Reading input from {}", path.display());
            }
            ExtractStrategy.execute(ExtractInput {
                file,
                debug,
                format,
                config,
                filters,
            })
        }
        Commands::Demo {
            debug,
            format,
            filters,
        } => DemoStrategy.execute(DemoInput {
            debug,
            format,
            filters,
        }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
