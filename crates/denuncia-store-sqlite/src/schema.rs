//! SQL schema for the Denuncia SQLite store.
//!
//! Executed once when the store is opened. `PRAGMA user_version` records the
//! schema revision; there is no migration path beyond it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Reports are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS reports (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    category    TEXT NOT NULL CHECK (category    != ''),
    description TEXT NOT NULL CHECK (description != ''),
    created_at  TEXT NOT NULL      -- RFC 3339 UTC, fixed width; server-assigned
);

CREATE INDEX IF NOT EXISTS reports_created_idx ON reports(created_at);

PRAGMA user_version = 1;
";
