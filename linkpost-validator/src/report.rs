//! Quality report types.

use serde::Serialize;

/// Outcome of the four checks for one text.
///
/// Each flag is an independent signal consumed by the workflow, so they stay
/// separate fields rather than a bitset or enum.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QualityReport {
    /// Character count is within the configured maximum.
    pub within_length_limit: bool,
    /// A call-to-action phrase was found.
    pub has_call_to_action: bool,
    /// At least one emoji was found.
    pub has_emoji: bool,
    /// An engagement word was found.
    pub is_engaging: bool,
}

impl QualityReport {
    /// Whether every check passed.
    #[must_use]
    pub fn passed(self) -> bool {
        self.within_length_limit && self.has_call_to_action && self.has_emoji && self.is_engaging
    }

    /// Names of the failing checks, in field order.
    #[must_use]
    pub fn failed_checks(self) -> Vec<&'static str> {
        [
            (self.within_length_limit, "length"),
            (self.has_call_to_action, "call_to_action"),
            (self.has_emoji, "emoji"),
            (self.is_engaging, "engagement"),
        ]
        .into_iter()
        .filter_map(|(ok, name)| (!ok).then_some(name))
        .collect()
    }
}

/// One checked post with the details the report printers need.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct PostResult {
    /// Where the text came from (file path or `<stdin>`).
    pub source: String,
    /// Length in Unicode scalar values.
    pub char_count: usize,
    /// Length limit the post was checked against.
    pub max_length: usize,
    /// Source of the first matching call-to-action pattern, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_call_to_action: Option<String>,
    #[serde(flatten)]
    pub report: QualityReport,
}

/// Result of checking a batch of posts.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct BatchReport {
    /// Per-post results, in input order.
    pub posts: Vec<PostResult>,
    /// Whether every post passed every check.
    pub ok: bool,
}

impl BatchReport {
    /// Number of posts checked.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.posts.len()
    }

    /// Number of posts with at least one failing check.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.posts.iter().filter(|p| !p.report.passed()).count()
    }
}
