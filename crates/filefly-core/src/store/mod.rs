//! Received-document record store.
//!
//! One row per received file, held in an embedded SQLite database:
//! filename, sender's first and last name, and the transfer timestamp.
//!
//! ## Schema
//!
//! | Column | Type | Notes |
//! |--------|------|-------|
//! | `id` | `INTEGER PRIMARY KEY AUTOINCREMENT` | surrogate key, not exposed |
//! | `filename` | `TEXT NOT NULL` | original name, duplicates allowed |
//! | `owner_first_name` | `TEXT` | parsed from the encoded filename |
//! | `owner_last_name` | `TEXT` | parsed from the encoded filename |
//! | `transferred_at` | `TEXT NOT NULL` | RFC 3339 timestamp |
//!
//! Schema versioning uses `PRAGMA user_version`. A version mismatch drops
//! and recreates the table: the upgrade policy is destructive by design,
//! inherited from the system this store replaces.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::error::Result;

/// Current schema version, stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 3;

/// Metadata describing one received file.
///
/// Values returned by the store are independent copies; rows themselves
/// are never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Original filename of the transferred file, extension included
    pub filename: String,
    /// Sender's first name
    pub owner_first_name: String,
    /// Sender's last name
    pub owner_last_name: String,
    /// When the record was created
    pub transferred_at: DateTime<Utc>,
}

/// Embedded store of [`DocumentRecord`] rows.
#[derive(Debug)]
pub struct DocumentStore {
    conn: Connection,
}

impl DocumentStore {
    /// Open (or create) the document database at `path`.
    ///
    /// Creates the parent directory if needed and brings the schema up to
    /// [`SCHEMA_VERSION`]. On a version mismatch the existing tables are
    /// dropped and recreated, discarding their contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the database
    /// cannot be opened or initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;

        tracing::debug!(path = %path.display(), "document store opened");
        Ok(store)
    }

    /// Open a transient in-memory store. Used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        let version: i32 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version != 0 && version != SCHEMA_VERSION {
            tracing::warn!(
                from = version,
                to = SCHEMA_VERSION,
                "schema version changed, dropping and recreating tables"
            );
            self.conn.execute_batch("DROP TABLE IF EXISTS documents;")?;
        }

        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                owner_first_name TEXT,
                owner_last_name TEXT,
                transferred_at TEXT NOT NULL
            );",
        )?;

        self.conn
            .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;

        Ok(())
    }

    /// Insert one record.
    ///
    /// No uniqueness is enforced: re-receiving a file with the same name
    /// adds a second row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn insert(&self, record: &DocumentRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO documents (filename, owner_first_name, owner_last_name, transferred_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.filename,
                record.owner_first_name,
                record.owner_last_name,
                record.transferred_at.to_rfc3339(),
            ],
        )?;

        tracing::debug!(filename = %record.filename, "document record inserted");
        Ok(())
    }

    /// Delete every record with the given filename.
    ///
    /// Returns the number of rows removed; zero matches is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete cannot execute.
    pub fn delete_by_filename(&self, filename: &str) -> Result<usize> {
        let removed = self.conn.execute(
            "DELETE FROM documents WHERE filename = ?1",
            params![filename],
        )?;

        tracing::debug!(filename, removed, "document records deleted");
        Ok(removed)
    }

    /// Fetch every record, in insertion order.
    ///
    /// The whole table is materialized into the returned vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot execute.
    pub fn get_all(&self) -> Result<Vec<DocumentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT filename, owner_first_name, owner_last_name, transferred_at
             FROM documents ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw: String = row.get(3)?;
            let transferred_at = DateTime::parse_from_rfc3339(&raw)
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                })?
                .with_timezone(&Utc);

            Ok(DocumentRecord {
                filename: row.get(0)?,
                owner_first_name: row.get(1)?,
                owner_last_name: row.get(2)?,
                transferred_at,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot execute.
    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
