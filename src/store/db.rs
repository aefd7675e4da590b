//! `SQLite` database operations for snippet storage.
//!
//! All access flows through an explicit [`SnippetStore`] handle owned by the
//! caller; there is no process-global connection.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use tracing::{debug, info, instrument};

use super::snippet::Snippet;
use crate::error::{Result, SnipError};

/// `SQLite` schema for snippet storage.
const SCHEMA_SQL: &str = r"
-- Keyword-addressed snippets
CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY,
    message TEXT NOT NULL,
    hidden BOOLEAN NOT NULL DEFAULT FALSE,
    recorded_at TEXT NOT NULL
);
";

/// Database wrapper owning the snippet store connection.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Opens or creates a database at the given path.
    ///
    /// The parent directory is created if it does not exist, and the
    /// schema is applied on first use.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SnipError::OpenFailed {
                path: path.display().to_string(),
                reason: format!("cannot create {}: {e}", parent.display()),
            })?;
        }

        debug!(path = %path.display(), "Connecting to snippet database");
        let conn = Connection::open(path).map_err(|e| SnipError::OpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let store = Self { conn };
        store.init_schema()?;
        info!(path = %path.display(), "Database connection established");
        Ok(store)
    }

    /// Creates an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initializes the database schema.
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Stores a snippet under a keyword, overwriting any existing one.
    ///
    /// Insert is attempted first; a primary key conflict falls back to an
    /// update of the existing row. `hidden` set to `None` leaves the stored
    /// visibility untouched on overwrite (new snippets default to visible).
    ///
    /// Returns the snippet as stored.
    #[instrument(skip(self))]
    pub fn put(&mut self, keyword: &str, message: &str, hidden: Option<bool>) -> Result<Snippet> {
        info!(keyword, message, "Storing snippet");

        let now = Utc::now().to_rfc3339();
        let tx = self.conn.transaction()?;

        let insert = tx.execute(
            "INSERT INTO snippets (keyword, message, hidden, recorded_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![keyword, message, hidden.unwrap_or(false), now],
        );

        match insert {
            Ok(_) => debug!(keyword, "Inserted new snippet"),
            Err(e) if is_unique_violation(&e) => {
                debug!(keyword, "Keyword exists, updating");
                if let Some(flag) = hidden {
                    tx.execute(
                        "UPDATE snippets SET message = ?2, hidden = ?3, recorded_at = ?4
                         WHERE keyword = ?1",
                        params![keyword, message, flag, now],
                    )?;
                } else {
                    tx.execute(
                        "UPDATE snippets SET message = ?2, recorded_at = ?3
                         WHERE keyword = ?1",
                        params![keyword, message, now],
                    )?;
                }
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit()?;
        debug!(keyword, "Snippet stored successfully");

        self.get(keyword)?
            .ok_or_else(|| SnipError::Other(format!("Snippet {keyword:?} vanished after store")))
    }

    /// Fetches a snippet by exact keyword.
    ///
    /// Returns `None` when the keyword is unknown. Hidden snippets are
    /// returned like any other.
    #[instrument(skip(self))]
    pub fn get(&self, keyword: &str) -> Result<Option<Snippet>> {
        info!(keyword, "Retrieving snippet");

        let result = self.conn.query_row(
            "SELECT keyword, message, hidden, recorded_at FROM snippets WHERE keyword = ?1",
            params![keyword],
            map_snippet_row,
        );

        match result {
            Ok(raw) => Ok(Some(into_snippet(raw)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                debug!(keyword, "Snippet not found");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all visible keywords in ascending order.
    #[instrument(skip(self))]
    pub fn catalog(&self) -> Result<Vec<String>> {
        info!("Listing snippet keywords");

        let mut stmt = self
            .conn
            .prepare("SELECT keyword FROM snippets WHERE NOT hidden ORDER BY keyword")?;
        let keywords = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        debug!(count = keywords.len(), "Catalog listed");
        Ok(keywords)
    }

    /// Finds visible snippets whose message contains `needle` as a literal,
    /// case-sensitive substring.
    ///
    /// `%` and `_` have no wildcard meaning. An empty needle matches every
    /// visible snippet. Row order is unspecified.
    #[instrument(skip(self))]
    pub fn search(&self, needle: &str) -> Result<Vec<Snippet>> {
        info!(needle, "Searching snippets");

        let mut stmt = self.conn.prepare(
            "SELECT keyword, message, hidden, recorded_at FROM snippets
             WHERE NOT hidden AND instr(message, ?1) > 0",
        )?;
        let rows = stmt
            .query_map(params![needle], map_snippet_row)?
            .collect::<rusqlite::Result<Vec<SnippetRow>>>()?;

        let mut matches = Vec::with_capacity(rows.len());
        for raw in rows {
            matches.push(into_snippet(raw)?);
        }

        debug!(count = matches.len(), "Search complete");
        Ok(matches)
    }
}

/// Raw column values for one snippet row, before timestamp parsing.
type SnippetRow = (String, String, bool, String);

fn map_snippet_row(row: &rusqlite::Row) -> rusqlite::Result<SnippetRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn into_snippet((keyword, message, hidden, recorded_at): SnippetRow) -> Result<Snippet> {
    let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
        .map_err(|e| SnipError::Other(format!("Invalid recorded_at timestamp: {e}")))?
        .with_timezone(&Utc);

    Ok(Snippet {
        keyword,
        message,
        hidden,
        recorded_at,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
