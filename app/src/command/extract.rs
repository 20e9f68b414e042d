use std::io::Read;
use std::path::PathBuf;

use biodata_config::Config;

use super::{FilterArgs, OutputFormat, run_pipeline};

/// Input for the extract command.
pub struct ExtractInput {
    pub file: Option<PathBuf>,
    pub debug: bool,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub filters: FilterArgs,
}

/// Strategy for extracting profiles from a file or stdin.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = match &input.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let text = match &input.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        run_pipeline(&text, input.debug, input.format, &input.filters, &config)
    }
}
