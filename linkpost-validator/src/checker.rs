//! The four post quality checks.
//!
//! Each check is a pure predicate over a `&str`. Matching is deliberately
//! unanchored: call-to-action patterns and engagement words match anywhere,
//! including inside longer words ("tip" matches "multiple").

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::config::{CodePointRange, QualityConfig};
use crate::error::ConfigError;
use crate::report::QualityReport;

/// Checker built from [`QualityConfig::default`], shared process-wide.
static STANDARD: LazyLock<QualityChecker> = LazyLock::new(|| {
    match QualityChecker::new(&QualityConfig::default()) {
        Ok(checker) => checker,
        Err(err) => panic!("Invalid default quality config: {err}"),
    }
});

/// Evaluates generated post text against the configured quality rules.
///
/// Immutable after construction and `Send + Sync`; share one instance
/// across threads by reference.
#[derive(Debug, Clone)]
pub struct QualityChecker {
    max_length: usize,
    cta_patterns: Vec<Regex>,
    emoji_ranges: Vec<RangeInclusive<char>>,
    engagement_words: Vec<String>,
}

impl QualityChecker {
    /// Compile `config` into a checker.
    ///
    /// Engagement words are lower-cased here so they can match the
    /// lower-cased text.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPattern`] if a pattern fails to compile,
    /// [`ConfigError::InvalidRange`] for a reversed range or a bound outside
    /// the Unicode scalar values, and [`ConfigError::EmptyEngagementWord`]
    /// for an empty word.
    pub fn new(config: &QualityConfig) -> Result<Self, ConfigError> {
        let cta_patterns = config
            .cta_patterns
            .iter()
            .map(|pattern| compile_cta_pattern(pattern.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let emoji_ranges = config
            .emoji_ranges
            .iter()
            .map(|&range| to_char_range(range))
            .collect::<Result<Vec<_>, _>>()?;

        let engagement_words = config
            .engagement_words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if word.is_empty() {
                    Err(ConfigError::EmptyEngagementWord { index: i + 1 })
                } else {
                    Ok(word.to_lowercase())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            max_length = config.max_length,
            cta_patterns = cta_patterns.len(),
            emoji_ranges = emoji_ranges.len(),
            engagement_words = engagement_words.len(),
            "built quality checker"
        );

        Ok(Self {
            max_length: config.max_length,
            cta_patterns,
            emoji_ranges,
            engagement_words,
        })
    }

    /// The shared checker with default rules.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Length as counted by [`Self::check_length`]: Unicode scalar values.
    #[must_use]
    pub fn char_count(text: &str) -> usize {
        text.chars().count()
    }

    /// `true` if `text` has at most `max_length` characters.
    #[must_use]
    pub fn check_length(&self, text: &str) -> bool {
        Self::char_count(text) <= self.max_length
    }

    /// `true` if any call-to-action pattern matches somewhere in `text`.
    #[must_use]
    pub fn has_call_to_action(&self, text: &str) -> bool {
        self.cta_patterns.iter().any(|re| re.is_match(text))
    }

    /// Source of the first call-to-action pattern that matches `text`.
    #[must_use]
    pub fn matched_call_to_action(&self, text: &str) -> Option<&str> {
        self.cta_patterns
            .iter()
            .find(|re| re.is_match(text))
            .map(Regex::as_str)
    }

    /// `true` if any character of `text` is in an emoji range.
    #[must_use]
    pub fn has_emoji(&self, text: &str) -> bool {
        text.chars()
            .any(|c| self.emoji_ranges.iter().any(|range| range.contains(&c)))
    }

    /// `true` if lower-cased `text` contains an engagement word.
    #[must_use]
    pub fn is_engaging(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.engagement_words
            .iter()
            .any(|word| lowered.contains(word.as_str()))
    }

    /// Run all four checks.
    #[must_use]
    pub fn evaluate(&self, text: &str) -> QualityReport {
        let report = QualityReport {
            within_length_limit: self.check_length(text),
            has_call_to_action: self.has_call_to_action(text),
            has_emoji: self.has_emoji(text),
            is_engaging: self.is_engaging(text),
        };
        tracing::trace!(?report, "evaluated text");
        report
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        STANDARD.clone()
    }
}

fn compile_cta_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_owned(),
            cause: e.to_string(),
        })
}

fn to_char_range(range: CodePointRange) -> Result<RangeInclusive<char>, ConfigError> {
    let invalid = |cause: &str| ConfigError::InvalidRange {
        start: range.start,
        end: range.end,
        cause: cause.to_owned(),
    };

    if range.start > range.end {
        return Err(invalid("start is greater than end"));
    }
    let start = char::from_u32(range.start)
        .ok_or_else(|| invalid("start is not a Unicode scalar value"))?;
    let end =
        char::from_u32(range.end).ok_or_else(|| invalid("end is not a Unicode scalar value"))?;
    Ok(start..=end)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn checker() -> &'static QualityChecker {
        QualityChecker::standard()
    }

    fn checker_with(edit: impl FnOnce(&mut QualityConfig)) -> QualityChecker {
        let mut config = QualityConfig::default();
        edit(&mut config);
        QualityChecker::new(&config).unwrap()
    }

    // ---- check_length ----

    #[test]
    fn test_length_boundary() {
        assert!(checker().check_length(&"a".repeat(1300)));
        assert!(!checker().check_length(&"a".repeat(1301)));
    }

    #[test]
    fn test_length_empty() {
        assert!(checker().check_length(""));
    }

    #[test]
    fn test_length_counts_scalar_values_not_bytes() {
        // 1300 two-byte chars and 1300 four-byte chars are both within the limit.
        assert!(checker().check_length(&"\u{E9}".repeat(1300)));
        assert!(checker().check_length(&"\u{1F680}".repeat(1300)));
        assert!(!checker().check_length(&"\u{1F680}".repeat(1301)));
    }

    #[test]
    fn test_length_custom_max() {
        let short = checker_with(|c| c.max_length = 10);
        assert!(!short.check_length("12345678901"));
        assert!(short.check_length("1234567890"));
        assert_eq!(short.max_length(), 10);
    }

    // ---- has_call_to_action ----

    #[test]
    fn test_cta_detected() {
        assert!(checker().has_call_to_action("What do you think about this?"));
        assert!(checker().has_call_to_action("Share your experience below."));
        assert!(checker().has_call_to_action("Thoughts?"));
        assert!(checker().has_call_to_action("I totally DISAGREE with this"));
    }

    #[test]
    fn test_cta_absent() {
        assert!(!checker().has_call_to_action("This is a plain statement."));
        assert!(!checker().has_call_to_action(""));
    }

    #[test]
    fn test_cta_does_not_span_lines() {
        // `.` does not match a newline, so the words must share a line.
        assert!(!checker().has_call_to_action("what\nthink"));
        assert!(checker().has_call_to_action("what do you\nthink? what they think"));
    }

    #[test]
    fn test_cta_matches_inside_words() {
        assert!(checker().has_call_to_action("Turn on the commentary track"));
    }

    #[test]
    fn test_matched_cta_reports_first_pattern() {
        assert_eq!(
            checker().matched_call_to_action("Share your experience, and comment!"),
            Some("share.*experience")
        );
        assert_eq!(checker().matched_call_to_action("Nothing here."), None);
    }

    // ---- has_emoji ----

    #[test]
    fn test_emoji_detected() {
        assert!(checker().has_emoji("Great news! \u{1F680}"));
        assert!(!checker().has_emoji("Great news!"));
    }

    #[test]
    fn test_emoji_above_bmp_from_surrogate_pair() {
        let decoded = String::from_utf16(&[0x0047, 0xD83D, 0xDE80]).unwrap();
        assert_eq!(decoded, "G\u{1F680}");
        assert!(checker().has_emoji(&decoded));
    }

    #[test]
    fn test_emoji_unpaired_surrogate_does_not_match() {
        let decoded = String::from_utf16_lossy(&[0xD83D, 0x0041]);
        assert_eq!(decoded, "\u{FFFD}A");
        assert!(!checker().has_emoji(&decoded));
    }

    #[test]
    fn test_emoji_range_bounds() {
        assert!(checker().has_emoji("\u{1F600}"));
        assert!(checker().has_emoji("\u{1F64F}"));
        assert!(checker().has_emoji("\u{1F300}"));
        assert!(checker().has_emoji("\u{1F5FF}"));
        assert!(checker().has_emoji("\u{1F6FF}"));
        assert!(checker().has_emoji("\u{1F1FA}\u{1F1F8}"));
        assert!(!checker().has_emoji("\u{1F650}"));
        assert!(!checker().has_emoji("\u{1F700}"));
    }

    #[test]
    fn test_emoji_outside_recognized_blocks() {
        // Robot face, brain and high voltage live in other blocks.
        assert!(!checker().has_emoji("\u{1F916}"));
        assert!(!checker().has_emoji("\u{1F9E0}"));
        assert!(!checker().has_emoji("\u{26A1}"));
    }

    #[test]
    fn test_emoji_custom_ranges() {
        let symbols = checker_with(|c| c.emoji_ranges = vec![CodePointRange::new(0x2600, 0x26FF)]);
        assert!(symbols.has_emoji("\u{26A1} fast"));
        assert!(!symbols.has_emoji("\u{1F680} rocket"));
    }

    // ---- is_engaging ----

    #[test]
    fn test_engaging_detected() {
        assert!(checker().is_engaging("We just had a breakthrough"));
        assert!(!checker().is_engaging("Nothing special happened"));
    }

    #[test]
    fn test_engaging_case_insensitive() {
        assert!(checker().is_engaging("DISCOVER this"));
        assert!(checker().is_engaging("A Secret Weapon"));
    }

    #[test]
    fn test_engaging_substring_match() {
        // "tip" inside "multiple" counts.
        assert!(checker().is_engaging("multiple"));
        assert!(checker().is_engaging("unlearned"));
    }

    #[test]
    fn test_engaging_custom_words_are_lowercased() {
        let custom = checker_with(|c| c.engagement_words = vec!["Lesson".to_owned()]);
        assert!(custom.is_engaging("A LESSON learned"));
        assert!(!custom.is_engaging("We just had a breakthrough"));
    }

    // ---- evaluate ----

    #[test]
    fn test_evaluate_combines_checks() {
        let report = checker().evaluate(
            "\u{1F680} Discover the deployment trick we use. What do you think?",
        );
        assert!(report.within_length_limit);
        assert!(report.has_call_to_action);
        assert!(report.has_emoji);
        assert!(report.is_engaging);
        assert!(report.passed());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let text = "Share your experience \u{1F600} with this tip";
        let first = checker().evaluate(text);
        let second = checker().evaluate(text);
        assert_eq!(first, second);
        assert_eq!(checker().is_engaging(text), checker().is_engaging(text));
    }

    #[test]
    fn test_default_matches_standard() {
        let owned = QualityChecker::default();
        let text = "Great news! \u{1F680} Thoughts?";
        assert_eq!(owned.evaluate(text), checker().evaluate(text));
    }

    #[test]
    fn test_shared_across_threads() {
        let texts = ["Thoughts?", "plain", "\u{1F680}", "breakthrough"];
        std::thread::scope(|s| {
            let handles: Vec<_> = texts
                .iter()
                .map(|t| s.spawn(move || checker().evaluate(t)))
                .collect();
            for (handle, text) in handles.into_iter().zip(texts) {
                assert_eq!(handle.join().unwrap(), checker().evaluate(text));
            }
        });
    }

    // ---- configuration errors ----

    #[test]
    fn test_invalid_pattern() {
        let mut config = QualityConfig::default();
        config.cta_patterns = vec!["(unclosed".to_owned()];
        let err = QualityChecker::new(&config).unwrap_err();
        match err {
            ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected InvalidPattern, got: {other}"),
        }
    }

    #[test]
    fn test_reversed_range() {
        let mut config = QualityConfig::default();
        config.emoji_ranges = vec![CodePointRange::new(0x1F64F, 0x1F600)];
        let err = QualityChecker::new(&config).unwrap_err();
        assert!(
            err.to_string().contains("start is greater than end"),
            "got: {err}"
        );
    }

    #[test]
    fn test_surrogate_bound_rejected() {
        let mut config = QualityConfig::default();
        config.emoji_ranges = vec![CodePointRange::new(0xD800, 0xDBFF)];
        let err = QualityChecker::new(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { start: 0xD800, .. }), "got: {err}");
    }

    #[test]
    fn test_empty_engagement_word_rejected() {
        let mut config = QualityConfig::default();
        config.engagement_words = vec!["tip".to_owned(), String::new()];
        let err = QualityChecker::new(&config).unwrap_err();
        assert!(
            matches!(err, ConfigError::EmptyEngagementWord { index: 2 }),
            "got: {err}"
        );
    }
}
