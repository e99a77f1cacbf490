//! Static content tables for LinkedIn post generation.
//!
//! Everything in this crate is read-only `'static` data: opening hooks and
//! post structures per [`Category`], hashtag lists per [`HashtagStrategy`],
//! image prompts, LLM prompt templates and the weekly posting schedule.
//! Lookups are plain `match` tables with no behavior attached beyond
//! placeholder rendering in [`PromptTemplate::render`].

mod category;
mod hashtags;
mod prompts;
mod schedule;

use thiserror::Error;

pub use category::{Category, hooks, image_prompts, structures};
pub use hashtags::HashtagStrategy;
pub use prompts::PromptTemplate;
pub use schedule::{ContentTheme, OPTIMAL_TIMES, PostingSlot, next_posting_slot};

/// Errors from content lookups and prompt rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    /// A category name did not match any known [`Category`].
    #[error("Unknown category '{0}' (expected one of: devops, ai, cloud)")]
    UnknownCategory(String),

    /// A strategy name did not match any known [`HashtagStrategy`].
    #[error("Unknown hashtag strategy '{0}' (expected one of: trending, niche, community, engagement)")]
    UnknownHashtagStrategy(String),

    /// A template name did not match any known [`PromptTemplate`].
    #[error("Unknown prompt template '{0}' (expected one of: post, hashtags, image)")]
    UnknownTemplate(String),

    /// A placeholder in the template had no value supplied.
    #[error("Template '{template}' is missing a value for placeholder '{{{name}}}'")]
    MissingVariable {
        /// Short name of the template being rendered.
        template: &'static str,
        /// Placeholder name without braces.
        name: String,
    },
}

/// Lower-cases and trims a user-supplied table key.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}
