use chrono::Utc;
use rusqlite::{Connection, Result, params};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

pub mod schema;

/// Durable key-value store for viewer preferences (theme, etc).
///
/// Cheap to clone; all clones share one connection.
#[derive(Debug, Clone)]
pub struct Prefs {
    conn: Arc<Mutex<Connection>>,
}

impl Prefs {
    /// Open (and migrate) the store at `path`. `":memory:"` works for tests.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(&path)?;

        // WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;

        conn.execute_batch(schema::MIGRATION_INIT)?;

        info!("prefs store open");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO prefs (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let result = conn.query_row(
            "SELECT value FROM prefs WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
