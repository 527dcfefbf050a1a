use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

/// Ordered list of schema migrations: (version, description, SQL).
/// Versions are applied once and recorded in the `log` table.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250901_0001_create_kv_store",
        "Created kv_store table",
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key         TEXT PRIMARY KEY NOT NULL,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250915_0002_index_kv_updated_at",
        "Indexed kv_store by update time",
        r#"
        CREATE INDEX IF NOT EXISTS idx_kv_store_updated_at ON kv_store(updated_at);
        "#,
    ),
];

/// Ensure that the `log` table exists. It records applied migrations.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    conn.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    info!(version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Safe to call on every open; already-applied versions are skipped.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            debug!(version, "migration already applied");
            continue;
        }
        apply(conn, version, message, sql)?;
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;

    let versions = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(versions)
}
