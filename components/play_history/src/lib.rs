//! Append-only history of what was playing
//!
//! The history lives in a single embedded database file with one table:
//!
//! ```sql
//! CREATE TABLE now_playing (
//!     recorded_at   TIMESTAMP,
//!     title         TEXT,
//!     album         TEXT,
//!     artist        TEXT,
//!     playback_rate REAL,
//!     duration      REAL,
//!     elapsed_time  REAL
//! )
//! ```
//!
//! `recorded_at` holds whole seconds since the Unix epoch. Rows are only
//! ever inserted. Opening a store creates the table when it is missing and
//! leaves existing rows alone.

use now_playing_primitives::StoredSample;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "my_music_data.db";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS now_playing (recorded_at TIMESTAMP, title TEXT, album TEXT, artist TEXT, playback_rate REAL, duration REAL, elapsed_time REAL)";

const INSERT_SAMPLE: &str = "INSERT INTO now_playing VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create now_playing table")]
    Schema(#[source] rusqlite::Error),

    #[error("failed to insert sample: {0}")]
    Insert(#[source] rusqlite::Error),

    #[error("failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
}

/// Owns the open database connection
///
/// The connection is released by [`HistoryStore::close`] or, failing that,
/// when the store is dropped.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Open (or create) the database file and make sure the table exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Opened history database {}", path.display());
        Self::with_connection(conn)
    }

    #[cfg(test)]
    fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(CREATE_TABLE, []).map_err(StoreError::Schema)?;
        Ok(Self { conn })
    }

    /// Append one sample as a single insert
    pub fn record(&self, sample: &StoredSample) -> Result<(), StoreError> {
        let record = &sample.record;
        self.conn
            .execute(
                INSERT_SAMPLE,
                params![
                    sample.epoch_seconds(),
                    record.title,
                    record.album,
                    record.artist,
                    f64::from(record.playback_rate),
                    record.duration,
                    record.elapsed_time,
                ],
            )
            .map_err(StoreError::Insert)?;
        Ok(())
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.conn
            .close()
            .map_err(|(_conn, source)| StoreError::Close(source))
    }
}
