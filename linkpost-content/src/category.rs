use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{ContentError, normalize_key};

/// Topic a post is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    DevOps,
    Ai,
    Cloud,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: [Self; 3] = [Self::DevOps, Self::Ai, Self::Cloud];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DevOps => "devops",
            Self::Ai => "ai",
            Self::Cloud => "cloud",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "devops" | "dev-ops" => Ok(Self::DevOps),
            "ai" => Ok(Self::Ai),
            "cloud" => Ok(Self::Cloud),
            _ => Err(ContentError::UnknownCategory(s.to_owned())),
        }
    }
}

const DEVOPS_HOOKS: &[&str] = &[
    "\u{1F680} DevOps teams are seeing 40% faster deployments with this approach...",
    "\u{1F4A1} Here's what most DevOps engineers get wrong about automation:",
    "\u{1F527} Just discovered a game-changing DevOps practice that's saving teams hours:",
    "\u{26A1} The DevOps trend that's quietly revolutionizing how we deploy:",
];

const AI_HOOKS: &[&str] = &[
    "\u{1F916} AI is reshaping software development in ways we didn't expect...",
    "\u{1F9E0} The AI breakthrough that's changing how developers work:",
    "\u{1F4AD} Most teams are using AI wrong. Here's the right approach:",
    "\u{1F3AF} This AI tool just solved a problem that took us weeks:",
];

const CLOUD_HOOKS: &[&str] = &[
    "\u{2601}\u{FE0F} Cloud costs spiraling out of control? Here's what we learned:",
    "\u{1F329}\u{FE0F} The cloud architecture mistake that cost us $50K:",
    "\u{26A1} Multi-cloud strategy or vendor lock-in? Here's our take:",
    "\u{1F512} Cloud security isn't what you think it is...",
];

/// Opening lines for a post in `category`.
#[must_use]
pub const fn hooks(category: Category) -> &'static [&'static str] {
    match category {
        Category::DevOps => DEVOPS_HOOKS,
        Category::Ai => AI_HOOKS,
        Category::Cloud => CLOUD_HOOKS,
    }
}

/// Post outlines for `category`. Cloud has none.
#[must_use]
pub const fn structures(category: Category) -> &'static [&'static str] {
    match category {
        Category::DevOps => &[
            "hook + insight + practical tip + CTA",
            "question + answer + example + discussion starter",
            "trend observation + personal experience + actionable advice",
        ],
        Category::Ai => &[
            "surprising fact + explanation + real-world application",
            "problem statement + AI solution + implementation tips",
            "trend analysis + personal insight + future prediction",
        ],
        Category::Cloud => &[],
    }
}

/// Image generation prompts for `category`.
#[must_use]
pub const fn image_prompts(category: Category) -> &'static [&'static str] {
    match category {
        Category::DevOps => &[
            "Modern DevOps pipeline visualization with clean geometric shapes, professional blue and white color scheme, minimalist tech aesthetic",
            "CI/CD workflow diagram with modern icons, clean lines, professional color palette, suitable for LinkedIn",
            "DevOps tools integration graphic, modern flat design, tech-focused, professional presentation",
        ],
        Category::Ai => &[
            "Abstract AI neural network visualization, clean modern design, professional color scheme with blues and whites",
            "Machine learning concept illustration, geometric patterns, professional tech aesthetic, LinkedIn-appropriate",
            "AI automation concept with clean icons and modern typography, professional presentation",
        ],
        Category::Cloud => &[
            "Cloud architecture diagram with modern icons, clean professional design, suitable for business social media",
            "Multi-cloud infrastructure visualization, modern flat design, professional color scheme",
            "Cloud computing concept with clean geometric shapes, professional tech aesthetic",
        ],
    }
}
