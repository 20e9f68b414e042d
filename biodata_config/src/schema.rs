use std::path::{Path, PathBuf};

use biodata_core::Vocabulary;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionSection,
}

/// Extraction settings layered over the built-in vocabulary.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ExtractionSection {
    /// Extra labels to recognize beyond the built-in set.
    #[serde(default)]
    pub extra_labels: Vec<LabelDef>,

    /// Extra artifact tokens to drop from value runs.
    #[serde(default)]
    pub extra_skip_tokens: Vec<String>,

    /// Attach the debug payload to extraction results by default.
    #[serde(default)]
    pub debug: bool,
}

/// One vocabulary extension: the exact label text and, optionally, the
/// canonical output key. Without a key the label surfaces under its own
/// lowercased name.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LabelDef {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Config {
    /// Load from `~/.biodata/config.json`. A missing file means defaults;
    /// the extractor must work with zero setup.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load from an explicit path, failing if the file is missing or
    /// malformed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the scan vocabulary: built-in tables plus this config's
    /// extensions.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        let mut vocabulary = Vocabulary::default();
        for def in &self.extraction.extra_labels {
            vocabulary = vocabulary.with_label(&def.label, def.key.as_deref());
        }
        for token in &self.extraction.extra_skip_tokens {
            vocabulary = vocabulary.with_skip_token(token);
        }
        vocabulary
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".biodata"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write a starter config file, refusing to overwrite an existing one.
    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "extraction": {
    "extra_labels": [
      { "label": "CASTE" },
      { "label": "HOROSCOPE", "key": "horoscope_match" }
    ],
    "extra_skip_tokens": [],
    "debug": false
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Labels listed under extra_labels are recognized in addition to");
        println!("the built-in vocabulary. A label without a key appears in output");
        println!("under its own lowercased name.");
        Ok(())
    }
}
