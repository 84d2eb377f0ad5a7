use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conversation topic used to pick a response pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Projects,
    Skills,
    TechStack,
    Experience,
    Ai,
    Leadership,
    Hiring,
    Approach,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Self::Projects,
        Self::Skills,
        Self::TechStack,
        Self::Experience,
        Self::Ai,
        Self::Leadership,
        Self::Hiring,
        Self::Approach,
    ];

    /// Category used when no keyword rule matches.
    pub const DEFAULT: Category = Self::Approach;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::TechStack => "techstack",
            Self::Experience => "experience",
            Self::Ai => "ai",
            Self::Leadership => "leadership",
            Self::Hiring => "hiring",
            Self::Approach => "approach",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
