//! LLM prompt templates with `{name}` placeholders.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

use serde::Serialize;

use crate::{ContentError, normalize_key};

const POST_GENERATION: &str = concat!(
    "Create an engaging LinkedIn post for DevOps/AI professionals based on this content:\n",
    "\n",
    "Title: {title}\n",
    "Description: {description}\n",
    "URL: {url}\n",
    "Category: {category}\n",
    "\n",
    "Requirements:\n",
    "- Target audience: Senior developers, DevOps engineers, tech leaders\n",
    "- Tone: Professional but conversational, thought-provoking\n",
    "- Length: 800-1200 characters (leave room for hashtags)\n",
    "- Structure: Hook + Insight + Practical value + Call to action\n",
    "- Include 1-2 relevant emojis (not excessive)\n",
    "- Make it discussion-worthy\n",
    "- Avoid buzzwords and hype\n",
    "- Focus on practical insights and real-world applications\n",
    "\n",
    "Style guidelines:\n",
    "- Start with an attention-grabbing hook\n",
    "- Share a specific insight or learning\n",
    "- Provide actionable advice or perspective\n",
    "- End with a question or discussion starter\n",
    "- Use line breaks for readability\n",
    "\n",
    "Do NOT include hashtags in the response.\n",
);

const HASHTAG_GENERATION: &str = concat!(
    "Generate 10-12 strategic hashtags for this LinkedIn post about {category}:\n",
    "\n",
    "Post content: {postContent}\n",
    "\n",
    "Hashtag strategy:\n",
    "- 3-4 broad trending tags (#DevOps, #AI, #CloudComputing)\n",
    "- 3-4 specific technical tags related to the content\n",
    "- 2-3 community/engagement tags (#TechLeadership, #DevOpsCommunity)\n",
    "- 1-2 niche tags for targeted reach\n",
    "\n",
    "Requirements:\n",
    "- Mix of high-volume and niche hashtags\n",
    "- Relevant to the content and audience\n",
    "- Include both trending and evergreen tags\n",
    "- Format: #HashTag #AnotherTag (space-separated)\n",
    "- No explanations, just the hashtags\n",
);

const IMAGE_GENERATION: &str = concat!(
    "Create a professional LinkedIn-appropriate image for a post about: {topic}\n",
    "\n",
    "Style requirements:\n",
    "- Clean, modern, professional aesthetic\n",
    "- Color scheme: Blues, whites, grays (LinkedIn-friendly)\n",
    "- Minimalist design with clear visual hierarchy\n",
    "- Tech-focused but not overly complex\n",
    "- Suitable for business social media\n",
    "- No text overlay needed\n",
    "- High contrast for mobile viewing\n",
    "- Professional illustration style, not photorealistic\n",
    "\n",
    "Visual elements to include:\n",
    "- Relevant tech icons or symbols\n",
    "- Clean geometric shapes\n",
    "- Modern typography elements (if any)\n",
    "- Professional color gradients\n",
    "\n",
    "Avoid:\n",
    "- Cluttered designs\n",
    "- Bright, flashy colors\n",
    "- Comic or cartoon styles\n",
    "- Text overlays\n",
    "- Stock photo aesthetics\n",
);

/// A prompt sent to the text or image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    /// Post body; placeholders `title`, `description`, `url`, `category`.
    PostGeneration,
    /// Hashtag line; placeholders `category`, `postContent`.
    HashtagGeneration,
    /// Illustration; placeholder `topic`.
    ImageGeneration,
}

impl PromptTemplate {
    pub const ALL: [Self; 3] = [
        Self::PostGeneration,
        Self::HashtagGeneration,
        Self::ImageGeneration,
    ];

    /// Short name used on the command line and in errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PostGeneration => "post",
            Self::HashtagGeneration => "hashtags",
            Self::ImageGeneration => "image",
        }
    }

    /// Raw template text with placeholders intact.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::PostGeneration => POST_GENERATION,
            Self::HashtagGeneration => HASHTAG_GENERATION,
            Self::ImageGeneration => IMAGE_GENERATION,
        }
    }

    /// Placeholder names in order of first appearance, without braces.
    #[must_use]
    pub fn placeholders(self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        let mut rest = self.text();
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            let name = &after[..close];
            if is_placeholder_name(name) && !names.contains(&name) {
                names.push(name);
            }
            rest = &after[close + 1..];
        }
        names
    }

    /// Substitutes every `{name}` placeholder with `vars[name]`.
    ///
    /// Variables the template does not use are ignored. Braces that do not
    /// enclose a placeholder name are copied through unchanged.
    ///
    /// # Errors
    /// Returns [`ContentError::MissingVariable`] for the first placeholder
    /// without a value.
    pub fn render<S: BuildHasher>(
        self,
        vars: &HashMap<String, String, S>,
    ) -> Result<String, ContentError> {
        let text = self.text();
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) if is_placeholder_name(&after[..close]) => {
                    let name = &after[..close];
                    let value = vars.get(name).ok_or_else(|| ContentError::MissingVariable {
                        template: self.name(),
                        name: name.to_owned(),
                    })?;
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);

        Ok(out)
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptTemplate {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "post" | "post-generation" => Ok(Self::PostGeneration),
            "hashtags" | "hashtag-generation" => Ok(Self::HashtagGeneration),
            "image" | "image-generation" => Ok(Self::ImageGeneration),
            _ => Err(ContentError::UnknownTemplate(s.to_owned())),
        }
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            PromptTemplate::PostGeneration.placeholders(),
            vec!["title", "description", "url", "category"]
        );
        assert_eq!(
            PromptTemplate::HashtagGeneration.placeholders(),
            vec!["category", "postContent"]
        );
        assert_eq!(PromptTemplate::ImageGeneration.placeholders(), vec!["topic"]);
    }

    #[test]
    fn test_render_image_prompt() {
        let out = PromptTemplate::ImageGeneration
            .render(&vars(&[("topic", "GitOps rollouts")]))
            .unwrap();
        assert!(out.starts_with("Create a professional LinkedIn-appropriate image for a post about: GitOps rollouts\n"));
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_render_keeps_non_placeholder_braces() {
        // Hashtag template has no stray braces, but the renderer must not
        // eat a literal `{` that is not followed by a placeholder name.
        let out = PromptTemplate::HashtagGeneration
            .render(&vars(&[("category", "ai"), ("postContent", "uses {} in Rust")]))
            .unwrap();
        assert!(out.contains("Post content: uses {} in Rust\n"), "got: {out}");
        assert!(out.contains("LinkedIn post about ai:"));
    }

    #[test]
    fn test_render_missing_variable() {
        let err = PromptTemplate::PostGeneration
            .render(&vars(&[("title", "t"), ("description", "d")]))
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingVariable {
                template: "post",
                name: "url".to_owned(),
            }
        );
        assert!(err.to_string().contains("'{url}'"), "got: {err}");
    }

    #[test]
    fn test_render_ignores_extra_variables() {
        let out = PromptTemplate::ImageGeneration
            .render(&vars(&[("topic", "SRE"), ("unused", "never rendered")]))
            .unwrap();
        assert!(out.contains("about: SRE"));
        assert!(!out.contains("never rendered"));
    }

    #[test]
    fn test_parse_template_names() {
        for template in PromptTemplate::ALL {
            assert_eq!(template.name().parse::<PromptTemplate>().unwrap(), template);
        }
        assert_eq!(
            "post_generation".parse::<PromptTemplate>().unwrap(),
            PromptTemplate::PostGeneration
        );
        assert!("video".parse::<PromptTemplate>().is_err());
    }
}
