//! Command line and config file handling.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults (`index.css` → `json/colors.json`,
//!    `json/vipps-colors.json`, `json/pink-ribbon-colors.json`)
//! 2. An optional JSON config file (`--config`)
//! 3. `--input` / `--out-dir` flags
//!
//! ```json
//! {
//!   "group_prefix": "kf-color",
//!   "grouped_file": "colors.json",
//!   "families": [
//!     { "prefix": "vipps-color", "name": "vipps", "file": "vipps-colors.json" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};
use tokencss::{FlatFamily, TokenGrammar};

use crate::error::{ExportError, Result};

/// Export OKLCH color tokens from a stylesheet as hex/rgba JSON.
#[derive(Debug, Parser)]
#[command(name = "tokenhue", version, about)]
pub struct Cli {
    /// Stylesheet to read tokens from [default: index.css]
    #[arg(short, long, value_name = "CSS")]
    pub input: Option<PathBuf>,

    /// Directory the JSON files are written to [default: json]
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// JSON file with token prefixes and output file names
    #[arg(short, long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A flat family and the file its records are written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyOutput {
    #[serde(flatten)]
    pub family: FlatFamily,
    pub file: String,
}

impl FamilyOutput {
    pub fn new(prefix: &str, name: &str, file: &str) -> Self {
        Self {
            family: FlatFamily::new(prefix, name),
            file: file.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub group_prefix: String,
    pub grouped_file: String,
    pub families: Vec<FamilyOutput>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let grammar = TokenGrammar::default();
        Self {
            input: PathBuf::from("index.css"),
            out_dir: PathBuf::from("json"),
            group_prefix: grammar.group_prefix,
            grouped_file: "colors.json".to_string(),
            families: vec![
                FamilyOutput::new("vipps-color", "vipps", "vipps-colors.json"),
                FamilyOutput::new("pink-ribbon-color", "pink-ribbon", "pink-ribbon-colors.json"),
            ],
        }
    }
}

impl ExportConfig {
    /// Loads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ExportError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the effective config from command line arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(input) = &cli.input {
            config.input = input.clone();
        }
        if let Some(out_dir) = &cli.out_dir {
            config.out_dir = out_dir.clone();
        }

        log::debug!("Effective config: {:?}", config);
        Ok(config)
    }

    /// The grammar handed to the extractor.
    pub fn grammar(&self) -> TokenGrammar {
        TokenGrammar {
            group_prefix: self.group_prefix.clone(),
            flat_families: self.families.iter().map(|out| out.family.clone()).collect(),
        }
    }

    pub fn grouped_path(&self) -> PathBuf {
        self.out_dir.join(&self.grouped_file)
    }

    pub fn family_path(&self, output: &FamilyOutput) -> PathBuf {
        self.out_dir.join(&output.file)
    }
}
