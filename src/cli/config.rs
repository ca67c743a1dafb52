//! Shared configuration types for CLI commands

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{Result, codec::Encoding, error::Error};

/// Serialized form of a written document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// MessagePack behind a binary header
    #[default]
    Msgpack,
}

/// Where and how a command writes its result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// Gzip the body; binary output only.
    pub compress: bool,
}

impl OutputConfig {
    /// Map the requested format onto a codec encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when compression is requested
    /// for JSON output.
    pub fn encoding(&self) -> Result<Encoding> {
        match (self.format, self.compress) {
            (OutputFormat::Json, true) => Err(Error::InvalidConfiguration {
                message: "--compress only applies to msgpack output".to_string(),
            }),
            (OutputFormat::Json, false) => Ok(Encoding::Text),
            (OutputFormat::Msgpack, compressed) => Ok(Encoding::Binary { compressed }),
        }
    }
}

/// Output flags shared by every generating command
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Msgpack)]
    pub format: OutputFormat,

    /// Gzip-compress the binary body
    #[arg(long)]
    pub compress: bool,
}

impl From<OutputArgs> for OutputConfig {
    fn from(args: OutputArgs) -> Self {
        Self {
            path: args.output,
            format: args.format,
            compress: args.compress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(format: OutputFormat, compress: bool) -> OutputConfig {
        OutputConfig {
            path: PathBuf::from("out"),
            format,
            compress,
        }
    }

    #[test]
    fn compression_requires_binary_output() {
        assert!(matches!(
            config(OutputFormat::Json, true).encoding(),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert_eq!(
            config(OutputFormat::Json, false).encoding().unwrap(),
            Encoding::Text
        );
        assert_eq!(
            config(OutputFormat::Msgpack, true).encoding().unwrap(),
            Encoding::Binary { compressed: true }
        );
    }
}
