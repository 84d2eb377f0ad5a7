//! Response selection: subject template or uniform pool sampling.

use folio_core::knowledge::{Category, KnowledgeBase, Project};
use folio_core::traits::Picker;
use tracing::debug;

/// Fixed explanation for a named project.
pub fn explain_project(project: &Project) -> String {
    format!(
        "Let me tell you about {}: {}. It's built with {}. \
         What specific aspect would you like to know more about?",
        project.name, project.description, project.tech
    )
}

/// Pick one entry from a pool. An out-of-range pick is clamped to the last entry.
pub fn sample<'a>(pool: &'a [String], picker: &mut dyn Picker) -> &'a str {
    let idx = picker.pick(pool.len());
    pool.get(idx)
        .or_else(|| pool.last())
        .map(String::as_str)
        .unwrap_or_default()
}

/// Choose the reply for `category`, unless `subject` names a known project.
///
/// An unknown subject is not an error; selection falls back to the pool.
pub fn select(
    kb: &KnowledgeBase,
    category: Category,
    subject: Option<&str>,
    picker: &mut dyn Picker,
) -> String {
    if let Some(name) = subject {
        if let Some(project) = kb.project(name) {
            return explain_project(project);
        }
        debug!("selector: unknown subject '{name}', using {category} pool");
    }
    sample(kb.pool(category), picker).to_string()
}
