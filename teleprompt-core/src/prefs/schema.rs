/// Initial schema for the preference store.
pub const MIGRATION_INIT: &str = "
CREATE TABLE IF NOT EXISTS prefs (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
";
