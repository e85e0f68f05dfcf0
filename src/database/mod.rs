mod import;
mod queries;
mod routines;
mod sessions;
mod tables;

pub use import::RoutineImport;

use crate::{CONFIG_DIRECTORY, DATABASE_FILENAME};
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use std::{fs, path::Path};
use tracing::debug;

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open() -> Result<Self> {
        let db_path = dirs::config_dir()
            .ok_or_else(|| anyhow!("Config folder not present on system!"))?
            .join(CONFIG_DIRECTORY);

        fs::create_dir_all(&db_path).context("Failed to create or access config directory")?;

        Self::open_at(db_path.join(DATABASE_FILENAME))
    }

    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = %path.as_ref().display(), "opening database");
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let mut db = Database { conn };
        db.create_tables()?;

        Ok(db)
    }

    fn create_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(tables::CREATE_TABLES)?;
        tx.commit()?;

        Ok(())
    }
}
