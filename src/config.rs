//! Command line and TOML configuration for the replay tool.

use crate::error::CliError;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of a `--config` file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub mask: String,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parsed command line, before any config file is read.
#[derive(Parser, Clone, Debug, Default, PartialEq, Eq)]
#[command(
    name = "maskedit",
    version,
    about = "Replay field events against an input mask",
    after_help = "Reads event script lines from stdin (focus, blur, select <a> <b>,\n\
                  key [ctrl+]<name> [@pos], type <text>, paste <text>) and prints the\n\
                  field value and cursor after each event."
)]
pub struct Args {
    /// Mask pattern, e.g. "(999) 999-9999"
    #[arg(
        value_name = "MASK",
        allow_hyphen_values = true,
        required_unless_present = "config",
        conflicts_with = "config"
    )]
    pub mask: Option<String>,

    /// Read the mask and defaults from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one JSON object per event
    #[arg(long)]
    pub json: bool,

    /// Reject masks with chars outside every class
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Merge with the config file, if any. Flags win over file settings.
    pub fn resolve(self) -> Result<Settings, CliError> {
        let file = match &self.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => None,
        };
        let mask = match (self.mask, &file) {
            (Some(_), Some(_)) => {
                return Err(CliError::Usage(
                    "give the mask either inline or in --config, not both".into(),
                ));
            }
            (Some(mask), None) => mask,
            (None, Some(file)) => file.mask.clone(),
            (None, None) => return Err(CliError::Usage("missing mask".into())),
        };
        let file_output = file.as_ref().map(|f| f.output).unwrap_or_default();
        Ok(Settings {
            mask,
            strict: self.strict || file.as_ref().is_some_and(|f| f.strict),
            output: if self.json {
                OutputFormat::Json
            } else {
                file_output
            },
        })
    }
}

/// Effective settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub mask: String,
    pub strict: bool,
    pub output: OutputFormat,
}
