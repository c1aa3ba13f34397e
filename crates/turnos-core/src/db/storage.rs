//! Key/value operations.

use rusqlite::{params, OptionalExtension};

use super::{SessionStorage, StorageResult};

impl SessionStorage {
    /// Store a value under a key, replacing any previous value.
    pub fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO session_storage (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Get the value stored under a key.
    pub fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM session_storage WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Remove a key. Returns whether it existed.
    pub fn remove_item(&self, key: &str) -> StorageResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM session_storage WHERE key = ?", [key])?;
        Ok(rows_affected > 0)
    }
}
