//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::snippet::Snippet;
use super::schema;

/// SQLite-backed storage for snippets
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening snippet database {}", path.display());
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Snippet Operations ==========

    /// Store a snippet, overwriting the body and hidden flag of an existing
    /// row with the same name. Returns the stored name and body.
    pub fn put(&self, name: &str, body: &str, hidden: bool) -> Result<(String, String)> {
        tracing::debug!("Storing snippet {:?} (hidden: {})", name, hidden);
        self.conn.execute(
            r#"
            INSERT INTO snippets (keyword, message, hidden)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(keyword) DO UPDATE SET
                message = excluded.message,
                hidden = excluded.hidden
            "#,
            params![name, body, hidden],
        )?;
        tracing::debug!("Snippet {:?} stored", name);
        Ok((name.to_string(), body.to_string()))
    }

    /// Get a snippet body by exact name, regardless of visibility
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        tracing::debug!("Fetching snippet {:?}", name);
        self.conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                [name],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get the full snippet row by exact name
    pub fn get_snippet(&self, name: &str) -> Result<Option<Snippet>> {
        self.conn
            .query_row(
                "SELECT keyword, message, hidden FROM snippets WHERE keyword = ?1",
                [name],
                |row| self.row_to_snippet(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Names of all visible snippets, ascending
    pub fn catalog(&self) -> Result<Vec<String>> {
        tracing::debug!("Listing visible snippet names");
        let mut stmt = self.conn.prepare(
            "SELECT keyword FROM snippets WHERE COALESCE(hidden, 0) = 0 ORDER BY keyword ASC"
        )?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(names)
    }

    /// Bodies of all visible snippets containing `needle` (case-sensitive,
    /// matched literally), ordered by name
    pub fn contains(&self, needle: &str) -> Result<Vec<String>> {
        tracing::debug!("Searching visible snippet bodies for {:?}", needle);
        let mut stmt = self.conn.prepare(
            "SELECT message FROM snippets
             WHERE COALESCE(hidden, 0) = 0 AND instr(message, ?1) > 0
             ORDER BY keyword ASC"
        )?;

        let bodies = stmt
            .query_map([needle], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(bodies)
    }

    /// Get database statistics (single snapshot of the table)
    pub fn stats(&self) -> Result<DbStats> {
        let (total, hidden): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(COALESCE(hidden, 0) != 0), 0) FROM snippets",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(DbStats {
            total: total as usize,
            visible: total.saturating_sub(hidden) as usize,
            hidden: hidden as usize,
        })
    }

    /// Helper to convert a row to a Snippet
    fn row_to_snippet(&self, row: &rusqlite::Row) -> rusqlite::Result<Snippet> {
        let name: String = row.get(0)?;
        let body: String = row.get(1)?;
        let hidden: Option<bool> = row.get(2)?;
        Ok(Snippet::new(name, body).hidden(hidden.unwrap_or(false)))
    }
}

/// Database statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DbStats {
    pub total: usize,
    pub visible: usize,
    pub hidden: usize,
}
