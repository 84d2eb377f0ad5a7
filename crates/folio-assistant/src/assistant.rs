use std::sync::Arc;

use folio_core::config::LatencyConfig;
use folio_core::knowledge::{Category, KnowledgeBase};
use folio_core::traits::{Picker, Responder};
use tracing::debug;

use crate::reply::{self, PendingReply};
use crate::{classifier, selector};

/// The portfolio assistant: classifier + selector over a shared knowledge base.
///
/// Holds no mutable state, so one instance can serve any number of sessions.
#[derive(Debug, Clone)]
pub struct Assistant {
    kb: Arc<KnowledgeBase>,
    latency: LatencyConfig,
}

impl Assistant {
    pub fn new(kb: Arc<KnowledgeBase>, latency: LatencyConfig) -> Self {
        Self { kb, latency }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn classify(&self, query: &str) -> Category {
        classifier::classify(&self.kb, query)
    }

    /// Reply text for `query`, without the delay.
    ///
    /// A subject naming a known project skips classification entirely.
    pub fn answer(&self, query: &str, subject: Option<&str>, picker: &mut dyn Picker) -> String {
        if let Some(project) = subject.and_then(|name| self.kb.project(name)) {
            debug!("assistant: explaining project '{}'", project.name);
            return selector::explain_project(project);
        }
        let category = self.classify(query);
        debug!("assistant: classified as {category}");
        selector::select(&self.kb, category, subject, picker)
    }

    /// Reply for `query`, delivered after the configured latency.
    pub fn respond(
        &self,
        query: &str,
        subject: Option<&str>,
        picker: &mut dyn Picker,
    ) -> PendingReply {
        reply::respond(self, query, subject, picker)
    }
}

impl Responder for Assistant {
    fn name(&self) -> &str {
        "portfolio"
    }

    fn greeting(&self, subject: Option<&str>) -> String {
        match subject {
            Some(project) => self.kb.project_greeting(project),
            None => self.kb.greeting().to_string(),
        }
    }

    fn compose(&self, query: &str, subject: Option<&str>, picker: &mut dyn Picker) -> String {
        self.answer(query, subject, picker)
    }

    fn latency(&self) -> LatencyConfig {
        self.latency
    }
}
