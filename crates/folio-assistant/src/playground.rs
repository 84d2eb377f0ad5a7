//! Playground labs: fixed demo chats that answer from their own pool and
//! ignore what the user typed.

use folio_core::config::LatencyConfig;
use folio_core::error::FolioError;
use folio_core::knowledge::{KnowledgeBase, Lab};
use folio_core::traits::{Picker, Responder};

use crate::selector;

/// Responder for one lab.
#[derive(Debug, Clone)]
pub struct LabResponder {
    lab: Lab,
    latency: LatencyConfig,
}

impl LabResponder {
    pub fn new(lab: Lab, latency: LatencyConfig) -> Self {
        Self { lab, latency }
    }

    /// Look up lab `id` in the knowledge base.
    pub fn from_knowledge(
        kb: &KnowledgeBase,
        id: u32,
        latency: LatencyConfig,
    ) -> Result<Self, FolioError> {
        let lab = kb.lab(id).cloned().ok_or(FolioError::UnknownLab(id))?;
        Ok(Self::new(lab, latency))
    }

    pub fn lab(&self) -> &Lab {
        &self.lab
    }
}

impl Responder for LabResponder {
    fn name(&self) -> &str {
        &self.lab.title
    }

    fn greeting(&self, _subject: Option<&str>) -> String {
        self.lab.greeting.clone()
    }

    fn compose(&self, _query: &str, _subject: Option<&str>, picker: &mut dyn Picker) -> String {
        selector::sample(&self.lab.responses, picker).to_string()
    }

    fn latency(&self) -> LatencyConfig {
        self.latency
    }
}
