//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input,
//! dispatched statically. Shared extract-filter-export plumbing lives here
//! so the `extract` and `demo` strategies stay thin.

use biodata_config::Config;
use biodata_core::ExtractionEngine;
use biodata_filter::{FilterSpec, filter_profiles, parse_date};
use clap::{Args, ValueEnum};
use tracing::info;

mod demo;
mod extract;
mod init;
mod version;

pub use demo::{DemoInput, DemoStrategy};
pub use extract::{ExtractInput, ExtractStrategy};
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type,
/// enabling type-safe parameter passing without boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Output serialization for extracted profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Filter flags shared by `extract` and `demo`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Keep profiles born on or after this date (DD-MM-YYYY or DD/MM/YYYY)
    #[arg(long)]
    pub dob_from: Option<String>,

    /// Keep profiles born on or before this date (DD-MM-YYYY or DD/MM/YYYY)
    #[arg(long)]
    pub dob_to: Option<String>,

    /// Minimum income in lakhs per annum
    #[arg(long)]
    pub income_min: Option<f64>,

    /// Maximum income in lakhs per annum
    #[arg(long)]
    pub income_max: Option<f64>,

    /// Substring matched against address or place of birth
    #[arg(long)]
    pub location: Option<String>,

    /// Substring matched against the education field
    #[arg(long)]
    pub education: Option<String>,

    /// Substring matched against the job field
    #[arg(long)]
    pub job: Option<String>,
}

impl FilterArgs {
    /// Convert CLI flags to a filter spec, rejecting unparseable dates.
    pub fn to_spec(&self) -> anyhow::Result<FilterSpec> {
        let dob_from = parse_bound(self.dob_from.as_deref(), "--dob-from")?;
        let dob_to = parse_bound(self.dob_to.as_deref(), "--dob-to")?;

        Ok(FilterSpec {
            dob_range: (dob_from, dob_to),
            income_range: (self.income_min, self.income_max),
            location: self.location.clone(),
            education: self.education.clone(),
            job: self.job.clone(),
        })
    }
}

fn parse_bound(value: Option<&str>, flag: &str) -> anyhow::Result<Option<chrono::NaiveDate>> {
    value
        .map(|raw| {
            parse_date(raw).ok_or_else(|| anyhow::anyhow!("{flag}: cannot parse '{raw}' as a date"))
        })
        .transpose()
}

/// Run the full pipeline over raw text: extract, filter, export, print.
pub fn run_pipeline(
    text: &str,
    debug: bool,
    format: OutputFormat,
    filters: &FilterArgs,
    config: &Config,
) -> anyhow::Result<()> {
    let engine = ExtractionEngine::new(config.vocabulary());
    let debug = debug || config.extraction.debug;

    let result = engine.extract(text, debug);

    if debug {
        if let Some(payload) = result.debug() {
            eprintln!("{}", serde_json::to_string_pretty(payload)?);
        }
    }

    if result.is_empty() {
        println!("{}", serde_json::to_string_pretty(&result)?);
        anyhow::bail!("no profile data found in input");
    }

    let spec = filters.to_spec()?;
    let mut profiles = result.into_profiles();
    if !spec.is_empty() {
        let before = profiles.len();
        profiles = filter_profiles(&profiles, &spec);
        info!(
            "Filtered: {} profiles (from {} total)",
            profiles.len(),
            before
        );
    }

    if profiles.is_empty() {
        anyhow::bail!("no profiles match the active filters");
    }

    let output = match format {
        OutputFormat::Json => biodata_export::to_json(&profiles)?,
        OutputFormat::Csv => biodata_export::to_csv(&profiles)?,
    };
    println!("{output}");
    Ok(())
}
