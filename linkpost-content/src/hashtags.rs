use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{ContentError, normalize_key};

/// Hashtag pools mixed into a post's tag line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashtagStrategy {
    /// Broad, high-volume tags.
    Trending,
    /// Tool- and platform-specific tags.
    Niche,
    /// Practitioner community tags.
    Community,
    /// Tags that invite interaction.
    Engagement,
}

impl HashtagStrategy {
    pub const ALL: [Self; 4] = [
        Self::Trending,
        Self::Niche,
        Self::Community,
        Self::Engagement,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Niche => "niche",
            Self::Community => "community",
            Self::Engagement => "engagement",
        }
    }

    /// Tags in this pool, `#`-prefixed.
    ///
    /// `#Platform Engineering` keeps its embedded space as published by the
    /// content team; callers that join tags with spaces should be aware of it.
    #[must_use]
    pub const fn hashtags(self) -> &'static [&'static str] {
        match self {
            Self::Trending => &[
                "#DevOps",
                "#CloudComputing",
                "#AI",
                "#MachineLearning",
                "#Automation",
                "#TechTrends",
                "#Innovation",
            ],
            Self::Niche => &[
                "#Kubernetes",
                "#Docker",
                "#Terraform",
                "#Jenkins",
                "#AWS",
                "#Azure",
                "#GCP",
                "#Monitoring",
            ],
            Self::Community => &[
                "#DevOpsCommunity",
                "#TechLeadership",
                "#SoftwareEngineering",
                "#CloudNative",
                "#SRE",
                "#Platform Engineering",
            ],
            Self::Engagement => &[
                "#TechTalk",
                "#LearningInPublic",
                "#TechTips",
                "#DeveloperLife",
                "#TechInsights",
            ],
        }
    }
}

impl fmt::Display for HashtagStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashtagStrategy {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == key)
            .ok_or_else(|| ContentError::UnknownHashtagStrategy(s.to_owned()))
    }
}
