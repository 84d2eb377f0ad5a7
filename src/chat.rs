//! Interactive chat loop on stdin/stdout.
//!
//! `/quit` or EOF closes the session. Ctrl-C while a reply is pending drops
//! that reply; Ctrl-C at the prompt closes the session.

use chrono::Local;
use console::style;
use folio_assistant::Session;
use folio_core::error::FolioError;
use folio_core::message::{ChatMessage, Role};
use std::io::{BufRead, Write};
use tokio::sync::mpsc;

fn print_message(msg: &ChatMessage, assistant_name: &str) {
    let time = msg.timestamp.with_timezone(&Local).format("%H:%M");
    let who = match msg.role {
        Role::User => style("you".to_string()).cyan().bold(),
        Role::Assistant => style(assistant_name.to_string()).magenta().bold(),
    };
    println!("{who} {}\n{}\n", style(time).dim(), msg.text);
}

/// Read stdin lines on a plain thread. A blocked read there cannot hold up
/// runtime shutdown the way `tokio::io::stdin` does.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Forward every Ctrl-C as a message.
fn spawn_interrupts() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(4);
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if tx.send(()).await.is_err() {
                break;
            }
        }
    });
    rx
}

fn prompt() -> std::io::Result<()> {
    print!("{} ", style("›").cyan());
    std::io::stdout().flush()
}

/// Run `session` until the user leaves. Always closes the session.
pub async fn run(
    mut session: Session,
    title: &str,
    assistant_name: &str,
    quick_questions: &[String],
) -> anyhow::Result<()> {
    println!("{}", style(title).bold());
    if !quick_questions.is_empty() {
        println!("{}", style("Quick questions:").dim());
        for q in quick_questions {
            println!("  {} {q}", style("•").dim());
        }
    }
    println!("{}\n", style("Type /quit to leave, /transcript to dump the log.").dim());

    if let Some(greeting) = session.messages().first() {
        print_message(greeting, assistant_name);
    }

    let mut lines = spawn_stdin_reader();
    let mut interrupts = spawn_interrupts();
    let result = converse(&mut session, &mut lines, &mut interrupts, assistant_name).await;

    session.close();
    result
}

/// Answer `lines` until `/quit`, end of input, or an interrupt at the
/// prompt. An interrupt while a reply is pending drops only that reply.
pub async fn converse(
    session: &mut Session,
    lines: &mut mpsc::Receiver<String>,
    interrupts: &mut mpsc::Receiver<()>,
    assistant_name: &str,
) -> anyhow::Result<()> {
    loop {
        prompt()?;
        let line = tokio::select! {
            biased;
            line = lines.recv() => line,
            Some(()) = interrupts.recv() => None,
        };
        let Some(line) = line else {
            println!();
            break;
        };

        let text = line.trim();
        match text {
            "" => continue,
            "/quit" | "/exit" => break,
            "/transcript" => {
                println!("{}", session.transcript_json()?);
                continue;
            }
            _ => {}
        }

        println!("{}", style("thinking…").dim().italic());
        let outcome = tokio::select! {
            biased;
            result = session.send(text) => Some(result.map(ChatMessage::clone)),
            Some(()) = interrupts.recv() => None,
        };

        match outcome {
            Some(Ok(reply)) => print_message(&reply, assistant_name),
            Some(Err(FolioError::EmptyMessage)) => {}
            Some(Err(e)) => eprintln!("{} {e}", style("error:").red()),
            None => println!("{}\n", style("(reply cancelled)").yellow()),
        }
    }

    Ok(())
}
