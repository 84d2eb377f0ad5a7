use super::*;

/// Smallest knowledge file that passes validation; tests splice in faults.
fn minimal_toml(extra_pools: &str, extra: &str) -> String {
    let mut pools = String::new();
    for category in Category::ALL {
        pools.push_str(&format!("{} = [\"{} answer\"]\n", category, category));
    }
    format!(
        r#"
[owner]
name = "Test Owner"

[greetings]
general = "hello"
project = "about {{project}}"

[[rules]]
category = "skills"
keywords = ["Skill", "Tech"]
{extra}
[pools]
{pools}{extra_pools}"#
    )
}

#[test]
fn test_bundled_knowledge_is_valid() {
    let kb = KnowledgeBase::bundled().unwrap();
    for category in Category::ALL {
        assert!(
            !kb.pool(category).is_empty(),
            "pool for {category} should not be empty"
        );
    }
    assert_eq!(kb.rules().len(), 8);
    assert_eq!(kb.projects().len(), 5);
    assert_eq!(kb.labs().len(), 3);
    assert_eq!(kb.owner().name, "Krishala Shrestha");
    assert_eq!(kb.quick_questions().len(), 3);
}

#[test]
fn test_bundled_rule_order() {
    let kb = KnowledgeBase::bundled().unwrap();
    let order: Vec<Category> = kb.rules().iter().map(|r| r.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
    assert_eq!(kb.rules()[4].keywords, vec!["ai", "machine learning", "intelligence"]);
}

#[test]
fn test_project_lookup_is_exact() {
    let kb = KnowledgeBase::bundled().unwrap();
    let rentera = kb.project("Rentera").unwrap();
    assert_eq!(rentera.description, "Safe rental platform for students & workers");
    assert_eq!(rentera.tech, "HTML, CSS, JavaScript, Python, SQLite");
    assert!(kb.project("rentera").is_none());
    assert!(kb.project("Unknown").is_none());
}

#[test]
fn test_greetings() {
    let kb = KnowledgeBase::bundled().unwrap();
    assert!(kb.greeting().contains("Krishala's AI assistant"));
    assert_eq!(
        kb.project_greeting("Jarvis"),
        "Hi! 👋 I'm here to explain the Jarvis project. Ask me anything about its features, technology, challenges, or impact!"
    );
}

#[test]
fn test_lab_lookup() {
    let kb = KnowledgeBase::bundled().unwrap();
    let lab = kb.lab(2).unwrap();
    assert_eq!(lab.title, "Problem Reasoning");
    assert_eq!(lab.responses.len(), 3);
    assert!(kb.lab(99).is_none());
}

#[test]
fn test_minimal_knowledge_parses_and_lowercases_keywords() {
    let kb = KnowledgeBase::from_toml_str(&minimal_toml("", "")).unwrap();
    assert_eq!(kb.rules()[0].keywords, vec!["skill", "tech"]);
    assert_eq!(kb.project_greeting("X"), "about X");
    assert!(kb.projects().is_empty());
    assert!(kb.labs().is_empty());
}

#[test]
fn test_missing_pool_fails_fast() {
    let toml_str = minimal_toml("", "").replace("hiring = [\"hiring answer\"]\n", "");
    let err = KnowledgeBase::from_toml_str(&toml_str).unwrap_err();
    assert!(matches!(err, FolioError::Knowledge(_)));
    assert!(err.to_string().contains("hiring"));
}

#[test]
fn test_empty_pool_fails_fast() {
    let toml_str = minimal_toml("", "").replace("[\"ai answer\"]", "[]");
    let err = KnowledgeBase::from_toml_str(&toml_str).unwrap_err();
    assert!(err.to_string().contains("'ai' is empty"), "got: {err}");
}

#[test]
fn test_blank_pool_entry_rejected() {
    let toml_str = minimal_toml("", "").replace("[\"ai answer\"]", "[\"  \"]");
    let err = KnowledgeBase::from_toml_str(&toml_str).unwrap_err();
    assert!(err.to_string().contains("blank entry"));
}

#[test]
fn test_unknown_pool_category_rejected() {
    let err = KnowledgeBase::from_toml_str(&minimal_toml("weather = [\"sunny\"]\n", ""))
        .unwrap_err();
    assert!(err.to_string().contains("unknown category 'weather'"));
}

#[test]
fn test_duplicate_rule_rejected() {
    let extra = r#"
[[rules]]
category = "skills"
keywords = ["expertise"]
"#;
    let err = KnowledgeBase::from_toml_str(&minimal_toml("", extra)).unwrap_err();
    assert!(err.to_string().contains("duplicate keyword rule"));
}

#[test]
fn test_blank_keyword_rejected() {
    let extra = r#"
[[rules]]
category = "ai"
keywords = ["ai", " "]
"#;
    let err = KnowledgeBase::from_toml_str(&minimal_toml("", extra)).unwrap_err();
    assert!(err.to_string().contains("blank keyword"));
}

#[test]
fn test_duplicate_project_rejected() {
    let extra = r#"
[[projects]]
name = "Dup"
description = "a"
tech = "b"

[[projects]]
name = "Dup"
description = "c"
tech = "d"
"#;
    let err = KnowledgeBase::from_toml_str(&minimal_toml("", extra)).unwrap_err();
    assert!(err.to_string().contains("duplicate project 'Dup'"));
}

#[test]
fn test_lab_without_responses_rejected() {
    let extra = r#"
[[labs]]
id = 7
title = "Empty"
description = "nothing"
greeting = "hi"
responses = []
"#;
    let err = KnowledgeBase::from_toml_str(&minimal_toml("", extra)).unwrap_err();
    assert!(err.to_string().contains("lab 7"));
}

#[test]
fn test_load_from_file_and_config() {
    let tmp = std::env::temp_dir().join("__folio_test_knowledge__.toml");
    std::fs::write(&tmp, minimal_toml("", "")).unwrap();

    let kb = KnowledgeBase::load(&tmp).unwrap();
    assert_eq!(kb.owner().name, "Test Owner");

    let cfg = KnowledgeConfig {
        path: tmp.to_string_lossy().into_owned(),
    };
    let kb = KnowledgeBase::from_config(&cfg).unwrap();
    assert_eq!(kb.pool(Category::Hiring), ["hiring answer".to_string()]);

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_missing_file_is_knowledge_error() {
    let err = KnowledgeBase::load(Path::new("/nonexistent/__folio__.toml")).unwrap_err();
    assert!(matches!(err, FolioError::Knowledge(_)));
}

#[test]
fn test_category_round_trips_through_str() {
    for category in Category::ALL {
        assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
    }
    assert!("TechStack".parse::<Category>().is_err());
}
