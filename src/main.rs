mod chat;
mod commands;
mod logging;
mod status;

use clap::{Parser, Subcommand};
use folio_assistant::{Assistant, LabResponder, Session};
use folio_core::{
    config,
    knowledge::KnowledgeBase,
    traits::{Picker, RandomPicker},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "folio — ask a portfolio about its owner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Open an interactive chat with the portfolio assistant.
    Chat {
        /// Explain a specific project instead of routing by keyword.
        #[arg(short, long)]
        project: Option<String>,
        /// Seed the response picker for reproducible answers.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Send a one-shot message to the assistant.
    Ask {
        /// Explain a specific project instead of routing by keyword.
        #[arg(short, long)]
        project: Option<String>,
        /// Seed the response picker for reproducible answers.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the reply with its routing as JSON.
        #[arg(long)]
        json: bool,
        /// The message to send.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Show which category a message is routed to.
    Classify {
        /// The message to classify.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Chat with one of the playground labs.
    Lab {
        /// Lab id. Prompts for a choice when omitted.
        id: Option<u32>,
        /// Seed the response picker for reproducible answers.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show configuration, keyword rules, and knowledge base contents.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Subscriber goes in first so config loading is logged.
    let filter = logging::init();
    let cfg = config::load(&cli.config)?;
    if let Some(handle) = &filter {
        logging::apply_log_level(handle, &cfg.folio.log_level)?;
    }

    // Knowledge validation errors abort startup.
    let kb = Arc::new(KnowledgeBase::from_config(&cfg.knowledge)?);
    let assistant = Arc::new(Assistant::new(kb.clone(), cfg.latency));

    match cli.command {
        Commands::Chat { project, seed } => {
            let title = match &project {
                Some(name) => format!("{name} AI Assistant"),
                None => format!("{}'s AI Assistant", first_name(&kb.owner().name)),
            };
            let session = Session::new(assistant, project, build_picker(seed));
            chat::run(session, &title, &cfg.folio.name, kb.quick_questions()).await?;
        }
        Commands::Ask {
            project,
            seed,
            json,
            message,
        } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: folio ask <message>");
            }

            let prompt = message.join(" ");
            let mut picker = build_picker(seed);
            let route = commands::route(&assistant, &prompt, project.as_deref());
            let Some(reply) = assistant
                .respond(&prompt, project.as_deref(), picker.as_mut())
                .wait()
                .await
            else {
                anyhow::bail!("reply was cancelled");
            };

            if json {
                let report = commands::ask_report(&prompt, project.as_deref(), route, &reply);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{reply}");
            }
        }
        Commands::Classify { message } => {
            let prompt = message.join(" ");
            println!("{}", commands::describe_classification(&kb, &prompt));
        }
        Commands::Lab { id, seed } => {
            let id = match id {
                Some(id) => id,
                None => pick_lab(&kb)?,
            };
            let lab = LabResponder::from_knowledge(&kb, id, cfg.playground.latency())?;
            let title = format!("{} — Live Demo", lab.lab().title);
            let name = lab.lab().title.clone();
            let session = Session::new(Arc::new(lab), None, build_picker(seed));
            chat::run(session, &title, &name, &[]).await?;
        }
        Commands::Status => {
            status::run(&cli.config, &cfg, &kb)?;
        }
    }

    Ok(())
}

/// Seeded picker when asked for, entropy otherwise.
fn build_picker(seed: Option<u64>) -> Box<dyn Picker> {
    match seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::from_entropy()),
    }
}

fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}

/// Interactive lab chooser.
fn pick_lab(kb: &KnowledgeBase) -> anyhow::Result<u32> {
    if kb.labs().is_empty() {
        anyhow::bail!("the knowledge base defines no labs");
    }
    let mut select = cliclack::select("Playground lab");
    for lab in kb.labs() {
        select = select.item(lab.id, &lab.title, &lab.description);
    }
    Ok(select.interact()?)
}
