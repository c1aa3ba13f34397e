//! SQLite schema definition.

/// Complete storage schema.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Session Storage
-- ============================================================================

CREATE TABLE IF NOT EXISTS session_storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
