//! # linkpost-validator
//!
//! Quality checks for generated LinkedIn posts.
//!
//! A [`QualityChecker`] answers four independent questions about a text:
//! is it within the length limit, does it ask the reader to respond, does
//! it carry an emoji, and does it use engagement wording. The checks are
//! total pure functions; only building a checker from a custom
//! [`QualityConfig`] can fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkpost_validator::{QualityChecker, QualityConfig};
//!
//! let checker = QualityChecker::standard();
//! let report = checker.evaluate("We just had a breakthrough \u{1F680} What do you think?");
//! assert!(report.passed());
//!
//! let mut config = QualityConfig::default();
//! config.max_length = 10;
//! let short = QualityChecker::new(&config).unwrap();
//! assert!(!short.check_length("12345678901"));
//! ```

mod checker;
mod config;
mod error;
pub mod output;
mod report;

pub use checker::QualityChecker;
pub use config::{
    CodePointRange, DEFAULT_CTA_PATTERNS, DEFAULT_EMOJI_RANGES, DEFAULT_ENGAGEMENT_WORDS,
    DEFAULT_MAX_LENGTH, QualityConfig,
};
pub use error::ConfigError;
pub use report::{BatchReport, PostResult, QualityReport};

/// Check a batch of `(source, text)` posts with `checker`.
///
/// `source` is a label carried into the report (a file path, `<stdin>`, an
/// item id from the workflow).
#[must_use]
pub fn check_posts<I, S, T>(checker: &QualityChecker, posts: I) -> BatchReport
where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: AsRef<str>,
{
    let posts: Vec<PostResult> = posts
        .into_iter()
        .map(|(source, text)| {
            let text = text.as_ref();
            PostResult {
                source: source.into(),
                char_count: QualityChecker::char_count(text),
                max_length: checker.max_length(),
                matched_call_to_action: checker.matched_call_to_action(text).map(str::to_owned),
                report: checker.evaluate(text),
            }
        })
        .collect();

    let ok = posts.iter().all(|p| p.report.passed());
    tracing::info!(checked = posts.len(), ok, "checked posts");
    BatchReport { posts, ok }
}
