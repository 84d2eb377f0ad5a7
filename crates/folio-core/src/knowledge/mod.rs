//! Static portfolio knowledge: keyword rules, response pools, projects, labs.
//!
//! The data ships as `knowledge/portfolio.toml` (embedded at compile time) and
//! can be replaced by a user file. Either way it is validated once at load so
//! that classification and selection can never fail afterwards.

mod category;

#[cfg(test)]
mod tests;

pub use category::Category;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::info;

use crate::config::KnowledgeConfig;
use crate::error::FolioError;

const BUNDLED_KNOWLEDGE: &str = include_str!("../../knowledge/portfolio.toml");

/// Trigger substrings for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// A named project the assistant can explain directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: String,
}

/// A playground demo with its own canned replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lab {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub greeting: String,
    pub responses: Vec<String>,
}

/// A named group of skills (e.g. "backend").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// Who the portfolio belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub leadership: Vec<String>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
}

/// Session opening lines. `project` may contain a `{project}` placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greetings {
    pub general: String,
    pub project: String,
}

/// On-disk shape, before validation.
#[derive(Debug, Deserialize)]
struct RawKnowledge {
    #[serde(default)]
    quick_questions: Vec<String>,
    owner: Owner,
    greetings: Greetings,
    rules: Vec<KeywordRule>,
    pools: HashMap<String, Vec<String>>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    labs: Vec<Lab>,
}

/// Validated, read-only knowledge base. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    owner: Owner,
    greetings: Greetings,
    quick_questions: Vec<String>,
    rules: Vec<KeywordRule>,
    pools: BTreeMap<Category, Vec<String>>,
    projects: Vec<Project>,
    labs: Vec<Lab>,
}

impl KnowledgeBase {
    /// The knowledge base compiled into the binary.
    pub fn bundled() -> Result<Self, FolioError> {
        Self::from_toml_str(BUNDLED_KNOWLEDGE)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Knowledge(format!("failed to read {}: {}", path.display(), e))
        })?;
        let kb = Self::from_toml_str(&content)?;
        info!(
            "knowledge: loaded {} ({} rules, {} projects, {} labs)",
            path.display(),
            kb.rules.len(),
            kb.projects.len(),
            kb.labs.len()
        );
        Ok(kb)
    }

    /// Bundled data unless the config names an override file.
    pub fn from_config(cfg: &KnowledgeConfig) -> Result<Self, FolioError> {
        match cfg.override_path() {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::bundled(),
        }
    }

    /// Parse and validate knowledge TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, FolioError> {
        let raw: RawKnowledge = toml::from_str(content)
            .map_err(|e| FolioError::Knowledge(format!("failed to parse knowledge: {}", e)))?;
        validate(raw)
    }

    /// Keyword rules in evaluation order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Response pool for a category. Never empty.
    pub fn pool(&self, category: Category) -> &[String] {
        self.pools.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exact, case-sensitive project lookup.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn lab(&self, id: u32) -> Option<&Lab> {
        self.labs.iter().find(|l| l.id == id)
    }

    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn greeting(&self) -> &str {
        &self.greetings.general
    }

    /// Greeting for a session opened on a named project.
    pub fn project_greeting(&self, project: &str) -> String {
        self.greetings.project.replace("{project}", project)
    }

    pub fn quick_questions(&self) -> &[String] {
        &self.quick_questions
    }
}

/// Enforce the invariants selection relies on and normalize keywords.
fn validate(raw: RawKnowledge) -> Result<KnowledgeBase, FolioError> {
    let mut pools = BTreeMap::new();
    for (name, entries) in raw.pools {
        let category: Category = name.parse().map_err(FolioError::Knowledge)?;
        pools.insert(category, entries);
    }
    for category in Category::ALL {
        match pools.get(&category) {
            None => {
                return Err(FolioError::Knowledge(format!(
                    "no response pool for category '{category}'"
                )))
            }
            Some(entries) if entries.is_empty() => {
                return Err(FolioError::Knowledge(format!(
                    "response pool for '{category}' is empty"
                )))
            }
            Some(entries) if entries.iter().any(|e| e.trim().is_empty()) => {
                return Err(FolioError::Knowledge(format!(
                    "response pool for '{category}' contains a blank entry"
                )))
            }
            Some(_) => {}
        }
    }

    let mut seen = HashSet::new();
    let mut rules = Vec::with_capacity(raw.rules.len());
    for rule in raw.rules {
        if !seen.insert(rule.category) {
            return Err(FolioError::Knowledge(format!(
                "duplicate keyword rule for '{}'",
                rule.category
            )));
        }
        if rule.keywords.iter().any(|kw| kw.trim().is_empty()) {
            return Err(FolioError::Knowledge(format!(
                "blank keyword in rule for '{}'",
                rule.category
            )));
        }
        rules.push(KeywordRule {
            category: rule.category,
            keywords: rule.keywords.iter().map(|kw| kw.to_lowercase()).collect(),
        });
    }

    let mut names = HashSet::new();
    for project in &raw.projects {
        if !names.insert(project.name.as_str()) {
            return Err(FolioError::Knowledge(format!(
                "duplicate project '{}'",
                project.name
            )));
        }
    }

    let mut ids = HashSet::new();
    for lab in &raw.labs {
        if !ids.insert(lab.id) {
            return Err(FolioError::Knowledge(format!("duplicate lab id {}", lab.id)));
        }
        if lab.responses.is_empty() || lab.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(FolioError::Knowledge(format!(
                "lab {} needs at least one non-blank response",
                lab.id
            )));
        }
    }

    Ok(KnowledgeBase {
        owner: raw.owner,
        greetings: raw.greetings,
        quick_questions: raw.quick_questions,
        rules,
        pools,
        projects: raw.projects,
        labs: raw.labs,
    })
}
