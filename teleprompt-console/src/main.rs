use anyhow::Result;
use std::sync::Arc;
use teleprompt_agent::AgentClient;
use teleprompt_console::commands::{Command, CommandParser, help_text};
use teleprompt_console::config::Config;
use teleprompt_console::dossier_data::demo_dossier;
use teleprompt_console::sink::TermSink;
use teleprompt_core::PortfolioEngine;
use teleprompt_core::prefs::Prefs;
use teleprompt_core::reveal::Player;
use teleprompt_core::sched::TokioScheduler;
use teleprompt_core::theme::ThemeSwitch;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let prefs = Prefs::open(&config.prefs_path)?;
    let theme = ThemeSwitch::new(prefs);

    let agent = Arc::new(AgentClient::new(&config.agent_url));
    let player = Player::with_delay(
        TermSink::new(),
        Arc::new(TokioScheduler),
        config.step_delay,
    );
    let engine = PortfolioEngine::new(player, demo_dossier(), theme, agent);

    eprintln!("=== Teleprompt Starting (theme: {}) ===", engine.theme()?);

    // Auto-play the opening section, like the site does on load.
    engine.show_first()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match CommandParser::parse(&line) {
            Command::Show(slug) => {
                if let Err(e) = engine.show(&slug) {
                    println!("❌ {}", e);
                }
            }
            Command::Sections => {
                println!("🗂  Sections: {}", engine.sections().join(", "));
            }
            Command::ToggleTheme => {
                let theme = engine.toggle_theme()?;
                println!("🎨 Theme is now {}", theme);
            }
            Command::Ask(question) => {
                println!("🧠 Asking the agent...");
                let reply = engine.ask(&question).await;
                println!("{}", reply);
            }
            Command::Help => println!("{}", help_text()),
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("❓ Unknown command: {} (try 'help')", input);
            }
        }
    }

    Ok(())
}
