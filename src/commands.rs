//! Output builders for the one-shot commands, kept free of I/O.

use folio_assistant::{classifier, Assistant};
use folio_core::knowledge::{Category, KnowledgeBase};
use serde_json::{json, Value};

/// Category that routed a reply, or `None` when a known project answered it.
pub fn route(assistant: &Assistant, query: &str, subject: Option<&str>) -> Option<Category> {
    match subject.and_then(|name| assistant.knowledge().project(name)) {
        Some(_) => None,
        None => Some(assistant.classify(query)),
    }
}

/// Machine-readable result of `folio ask --json`.
pub fn ask_report(query: &str, subject: Option<&str>, route: Option<Category>, reply: &str) -> Value {
    json!({
        "query": query,
        "subject": subject,
        "category": route,
        "reply": reply,
    })
}

/// One-line explanation of how a message is routed.
pub fn describe_classification(kb: &KnowledgeBase, query: &str) -> String {
    match classifier::matched_keyword(kb, query) {
        Some((category, keyword)) => format!("{category} (matched \"{keyword}\")"),
        None => format!("{} (no keyword matched, default)", Category::DEFAULT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::LatencyConfig;
    use std::sync::Arc;

    fn assistant() -> Assistant {
        Assistant::new(
            Arc::new(KnowledgeBase::bundled().unwrap()),
            LatencyConfig::instant(),
        )
    }

    #[test]
    fn test_route_with_known_subject() {
        let a = assistant();
        assert_eq!(route(&a, "skills", Some("Rentera")), None);
        assert_eq!(route(&a, "skills", Some("Nope")), Some(Category::Skills));
        assert_eq!(route(&a, "", None), Some(Category::Approach));
    }

    #[test]
    fn test_ask_report_shape() {
        let report = ask_report("hire?", None, Some(Category::Hiring), "yes");
        assert_eq!(report["category"], "hiring");
        assert_eq!(report["subject"], Value::Null);
        assert_eq!(report["reply"], "yes");

        let report = ask_report("x", Some("Jarvis"), None, "about jarvis");
        assert_eq!(report["category"], Value::Null);
        assert_eq!(report["subject"], "Jarvis");
    }

    #[test]
    fn test_describe_classification() {
        let kb = KnowledgeBase::bundled().unwrap();
        assert_eq!(
            describe_classification(&kb, "What projects have you built?"),
            "projects (matched \"project\")"
        );
        assert_eq!(
            describe_classification(&kb, "hello"),
            "approach (no keyword matched, default)"
        );
    }
}
