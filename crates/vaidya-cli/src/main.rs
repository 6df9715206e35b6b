//! Vaidya console — interactive disease-information assistant.
//!
//! Run with: cargo run -p vaidya-cli

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use vaidya_kb::{dispatch, KnowledgeBase};

mod config;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // RUST_LOG wins over the configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting Vaidya console...");
    let kb = KnowledgeBase::load(&config.dataset.path).await;
    info!("📚 {} diseases available", kb.len());

    println!("🏥 Vaidya — ask a health question, or type 'exit' to quit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("you> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }
        let answer = dispatch::process(&kb, query);
        println!("\n{answer}\n");
    }

    info!("Goodbye");
    Ok(())
}
