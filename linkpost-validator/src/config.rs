//! Configuration for the quality checker.
//!
//! Every field has a default matching the published posting guidelines, so
//! a configuration file only needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// LinkedIn's visible-text limit before "see more", in characters.
pub const DEFAULT_MAX_LENGTH: usize = 1300;

/// Phrases that invite a reply. Matched case-insensitively anywhere in the text.
pub const DEFAULT_CTA_PATTERNS: &[&str] = &[
    "what.*think",
    "share.*experience",
    "thoughts",
    "comment",
    "discuss",
    "agree",
    "disagree",
];

/// Emoticons, misc symbols & pictographs, transport & map, regional indicators.
pub const DEFAULT_EMOJI_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x1F600, 0x1F64F),
    CodePointRange::new(0x1F300, 0x1F5FF),
    CodePointRange::new(0x1F680, 0x1F6FF),
    CodePointRange::new(0x1F1E0, 0x1F1FF),
];

/// Words that make a post read as worth opening. Lower case.
pub const DEFAULT_ENGAGEMENT_WORDS: &[&str] = &[
    "discover",
    "learn",
    "insight",
    "tip",
    "secret",
    "mistake",
    "breakthrough",
];

/// Inclusive range of Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointRange {
    pub start: u32,
    pub end: u32,
}

impl CodePointRange {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Tunable inputs of [`crate::QualityChecker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct QualityConfig {
    /// Maximum text length in Unicode scalar values (default: 1300).
    pub max_length: usize,
    /// Call-to-action regular expressions, compiled case-insensitive.
    /// Evaluated in order; the first match wins.
    pub cta_patterns: Vec<String>,
    /// Code-point ranges counted as emoji.
    pub emoji_ranges: Vec<CodePointRange>,
    /// Engagement vocabulary, matched as lower-case substrings.
    pub engagement_words: Vec<String>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            cta_patterns: DEFAULT_CTA_PATTERNS.iter().map(|&p| p.to_owned()).collect(),
            emoji_ranges: DEFAULT_EMOJI_RANGES.to_vec(),
            engagement_words: DEFAULT_ENGAGEMENT_WORDS
                .iter()
                .map(|&w| w.to_owned())
                .collect(),
        }
    }
}

impl QualityConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the document is malformed or has unknown keys.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str::<Self>(content).map_err(|e| ConfigError::Parse {
            format: "YAML",
            cause: e.to_string(),
        })
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the document is malformed or has unknown keys.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(content).map_err(|e| ConfigError::Parse {
            format: "JSON",
            cause: e.to_string(),
        })
    }

    /// Load a configuration file, choosing the decoder by extension
    /// (`.yaml`/`.yml` or `.json`).
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedFormat`] for other extensions,
    /// [`ConfigError::Io`] if the file cannot be read, and
    /// [`ConfigError::Parse`] if decoding fails.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded quality config");
        parse(&content)
    }
}
