//! Error types for checker configuration.
//!
//! The checks themselves are total; only building a checker from
//! user-supplied configuration can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::QualityConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A call-to-action pattern is not a valid regular expression.
    #[error("Invalid call-to-action pattern '{pattern}': {cause}")]
    InvalidPattern {
        /// The pattern as written in the configuration.
        pattern: String,
        /// Compiler message from the regex engine.
        cause: String,
    },

    /// An emoji range is reversed or has a bound that is not a Unicode scalar value.
    #[error("Invalid emoji range U+{start:04X}..=U+{end:04X}: {cause}")]
    InvalidRange {
        /// Lower bound as written.
        start: u32,
        /// Upper bound as written.
        end: u32,
        /// Human-readable description of the problem.
        cause: String,
    },

    /// An engagement word is empty after trimming, which would match every text.
    #[error("Engagement word #{index} is empty")]
    EmptyEngagementWord {
        /// 1-based position in the configured list.
        index: usize,
    },

    /// The configuration document could not be decoded.
    #[error("Failed to parse {format} configuration: {cause}")]
    Parse {
        /// `YAML` or `JSON`.
        format: &'static str,
        /// Decoder message.
        cause: String,
    },

    /// The configuration file extension is not one of `yaml`, `yml` or `json`.
    #[error("Unsupported configuration format: {}", path.display())]
    UnsupportedFormat {
        /// Path of the rejected file.
        path: PathBuf,
    },

    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
