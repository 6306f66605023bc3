/// What the viewer typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a section of the dossier.
    Show(String),
    /// List available section slugs.
    Sections,
    /// Flip light/dark and persist it.
    ToggleTheme,
    /// Forward a question to the chat agent.
    Ask(String),
    Help,
    Quit,
    /// Anything unrecognized; echoed back with a hint.
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    /// Parse one line of input. Command words are case-insensitive;
    /// arguments keep their original casing.
    pub fn parse(input: &str) -> Command {
        let trimmed = input.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or("").to_ascii_lowercase();
        let rest = parts.next().unwrap_or("").trim();

        match head.as_str() {
            "show" if !rest.is_empty() => Command::Show(rest.to_string()),
            "sections" | "ls" => Command::Sections,
            "theme" => Command::ToggleTheme,
            "ask" if !rest.is_empty() => Command::Ask(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

pub fn help_text() -> String {
    [
        "🎞  Teleprompt Commands:",
        "",
        "  show <slug>      Play a section of the dossier",
        "  sections         List available sections",
        "  theme            Toggle light/dark (persisted)",
        "  ask <question>   Ask the portfolio agent",
        "  help             This help message",
        "  quit             Leave",
    ]
    .join("\n")
}
