use anyhow::Result;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

/// Chat endpoint used when `TELEPROMPT_AGENT_URL` is unset.
pub const DEFAULT_AGENT_URL: &str = "http://localhost:8000/ask";

/// Typing speed used when `TELEPROMPT_DELAY_MS` is unset or unparseable.
pub const DEFAULT_STEP_DELAY_MS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub agent_url: String,
    pub step_delay: Duration,
    pub prefs_path: PathBuf,
}

impl Config {
    /// Environment-driven config with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`] but with an injectable variable source, so
    /// tests never have to mutate the process environment.
    ///
    /// [`from_env`]: Config::from_env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let agent_url =
            lookup("TELEPROMPT_AGENT_URL").unwrap_or_else(|| DEFAULT_AGENT_URL.to_string());

        let step_delay = lookup("TELEPROMPT_DELAY_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_STEP_DELAY_MS));

        let prefs_path = match lookup("TELEPROMPT_PREFS") {
            Some(path) => PathBuf::from(path),
            None => default_prefs_path()?,
        };

        Ok(Self {
            agent_url,
            step_delay,
            prefs_path,
        })
    }
}

fn default_prefs_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "teleprompt")
        .ok_or_else(|| anyhow::anyhow!("no home directory for the prefs store"))?;
    let dir = dirs.data_dir();
    std::fs::create_dir_all(dir)?;
    Ok(dir.join("prefs.db"))
}
