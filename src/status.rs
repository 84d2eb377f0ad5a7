use console::style;
use folio_core::config::Config;
use folio_core::knowledge::{Category, KnowledgeBase};

/// Print configuration and knowledge base summary.
pub fn run(config_path: &str, cfg: &Config, kb: &KnowledgeBase) -> anyhow::Result<()> {
    cliclack::intro(style("folio status").bold().to_string())?;

    cliclack::log::info(format!("Config: {config_path}"))?;
    let source = cfg
        .knowledge
        .override_path()
        .unwrap_or_else(|| "bundled".to_string());
    cliclack::log::info(format!("Knowledge: {source}"))?;
    cliclack::log::info(format!(
        "Latency: {}–{}ms (labs: {}ms)",
        cfg.latency.min_ms, cfg.latency.max_ms, cfg.playground.latency_ms
    ))?;

    let owner = kb.owner();
    cliclack::log::success(format!("Owner: {} — {}", owner.name, owner.role))?;

    let rules = kb
        .rules()
        .iter()
        .map(|r| format!("{:<11} {}", r.category.as_str(), r.keywords.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::note("Keyword rules (first match wins)", rules)?;

    let pools = Category::ALL
        .iter()
        .map(|c| format!("{:<11} {} responses", c.as_str(), kb.pool(*c).len()))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::note("Response pools", pools)?;

    let projects = kb
        .projects()
        .iter()
        .map(|p| format!("{} — {}", p.name, p.description))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::note("Projects", projects)?;

    let labs = kb
        .labs()
        .iter()
        .map(|l| format!("{}. {} — {}", l.id, l.title, l.description))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::note("Labs", labs)?;

    cliclack::outro("Done")?;
    Ok(())
}
