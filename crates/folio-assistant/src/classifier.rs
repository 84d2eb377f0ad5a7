//! Keyword intent classification.
//!
//! Rules are tried in knowledge-base order and the first rule with any
//! keyword contained in the lower-cased message wins. There is no scoring:
//! "tell me about aiesec" lands in `ai` because "aiesec" contains "ai" and
//! the `ai` rule comes before `leadership`.

use folio_core::knowledge::{Category, KnowledgeBase};

/// Check if any keyword in the list is contained in the lowercased message.
fn kw_match<'k>(msg_lower: &str, keywords: &'k [String]) -> Option<&'k str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|kw| msg_lower.contains(kw))
}

/// The first rule that fires for `query`, with the keyword that fired it.
pub fn matched_keyword<'a>(kb: &'a KnowledgeBase, query: &str) -> Option<(Category, &'a str)> {
    let msg_lower = query.to_lowercase();
    kb.rules()
        .iter()
        .find_map(|rule| kw_match(&msg_lower, &rule.keywords).map(|kw| (rule.category, kw)))
}

/// Map a free-text query to exactly one category. Never fails.
pub fn classify(kb: &KnowledgeBase, query: &str) -> Category {
    matched_keyword(kb, query)
        .map(|(category, _)| category)
        .unwrap_or(Category::DEFAULT)
}
