use crate::dossier::Dossier;
use crate::reveal::Player;
use crate::sink::RenderSink;
use crate::theme::{Theme, ThemeSwitch};
use anyhow::{Result, anyhow};
use std::sync::{Arc, Mutex};
use teleprompt_agent::ChatBackend;
use tracing::warn;

/// Fixed message shown when the chat backend fails. No retries.
pub const SYSTEM_ERROR: &str = "⚠️ System Error";

/// The main entry point. The front-end holds one instance of this.
pub struct PortfolioEngine<S> {
    player: Player<S>,
    dossier: Dossier,
    theme: ThemeSwitch,
    agent: Arc<dyn ChatBackend>,
}

impl<S: RenderSink + Send + 'static> PortfolioEngine<S> {
    pub fn new(
        player: Player<S>,
        dossier: Dossier,
        theme: ThemeSwitch,
        agent: Arc<dyn ChatBackend>,
    ) -> Self {
        Self {
            player,
            dossier,
            theme,
            agent,
        }
    }

    /// Play the named section, superseding whatever is on screen.
    pub fn show(&self, slug: &str) -> Result<()> {
        let section = self
            .dossier
            .get(slug)
            .ok_or_else(|| anyhow!("no such section: {}", slug))?;
        self.player.play(&section.body)?;
        Ok(())
    }

    /// Play the opening section, the one auto-shown when the experience loads.
    pub fn show_first(&self) -> Result<()> {
        match self.dossier.first() {
            Some(section) => {
                let slug = section.slug.clone();
                self.show(&slug)
            }
            None => Ok(()),
        }
    }

    /// Forward a question to the agent. The viewer always gets a string:
    /// the reply, or the fixed error message.
    pub async fn ask(&self, question: &str) -> String {
        match self.agent.ask(question).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("agent call failed: {:#}", e);
                SYSTEM_ERROR.to_string()
            }
        }
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        Ok(self.theme.toggle()?)
    }

    pub fn theme(&self) -> Result<Theme> {
        Ok(self.theme.current()?)
    }

    pub fn sections(&self) -> Vec<&str> {
        self.dossier.slugs()
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    /// Shared handle to the render sink, for the presenting side.
    pub fn sink(&self) -> Arc<Mutex<S>> {
        self.player.sink()
    }
}
