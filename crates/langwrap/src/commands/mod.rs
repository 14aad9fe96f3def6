//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use std::io::Read;

use langwrap_core::{Config, Country, Options, Rate, Volume};

pub mod info;
pub mod speak;
pub mod ssml;

/// Voice flags shared by the `ssml` and `speak` subcommands.
///
/// Each flag overrides the matching config-file default field-by-field.
#[derive(Args, Debug, Default)]
pub struct VoiceArgs {
    /// Country code for <lang> tags
    #[arg(long, value_enum)]
    pub country: Option<Country>,

    /// Speech rate for Latin runs
    #[arg(long, value_enum)]
    pub rate: Option<Rate>,

    /// Volume for Latin runs
    #[arg(long, value_enum)]
    pub volume: Option<Volume>,

    /// Volume wrapping the entire output
    #[arg(long, value_enum)]
    pub global_volume: Option<Volume>,
}

impl VoiceArgs {
    /// Resolve the effective options: config-file defaults with these
    /// flags merged over them.
    pub fn resolve(&self, config: &Config) -> Options {
        let mut options = config.options();
        options.merge(&Options {
            country: self.country,
            rate: self.rate,
            global_volume: self.global_volume,
            volume: self.volume,
        });
        options
    }
}

/// Read input text from a file, or from stdin when no file is given.
///
/// Validates file size against the configured limit via a metadata
/// preflight before reading into memory.
pub fn read_input(file: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let Some(path) = file else {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        if let Some(max) = max_bytes
            && content.len() > max
        {
            anyhow::bail!(
                "input too large: stdin is {} bytes (limit: {max} bytes)",
                content.len()
            );
        }
        return Ok(content);
    };

    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
