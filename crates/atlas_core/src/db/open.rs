//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas and the optional statement echo hook.
//! - Apply the schema before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and the schema applied.
//! - `StoreConfig` is constructed once by the caller and passed in; no
//!   process-wide implicit connection state exists.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-store configuration consumed at connection bootstrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// When set, every executed SQL statement is echoed to the log.
    /// Purely observational; no behavior change.
    pub echo_sql: bool,
}

/// Opens a SQLite database file with default configuration.
///
/// # Side effects
/// - May create the file if it does not exist.
/// - Emits `store_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with(path, &StoreConfig::default())
}

/// Opens a SQLite database file and applies the schema.
pub fn open_db_with(path: impl AsRef<Path>, config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=store_open module=db status=start mode=file echo_sql={}",
        config.echo_sql
    );
    finish_open(Connection::open(path), config, "file", started_at)
}

/// Opens an in-memory SQLite database with default configuration.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_db_in_memory_with(&StoreConfig::default())
}

/// Opens an in-memory SQLite database and applies the schema.
pub fn open_db_in_memory_with(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=store_open module=db status=start mode=memory echo_sql={}",
        config.echo_sql
    );
    finish_open(Connection::open_in_memory(), config, "memory", started_at)
}

fn finish_open(
    opened: rusqlite::Result<Connection>,
    config: &StoreConfig,
    mode: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    let mut conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode={mode} duration_ms={} error_code=store_open_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn, config) {
        Ok(()) => {
            info!(
                "event=store_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode={mode} duration_ms={} error_code=store_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, config: &StoreConfig) -> DbResult<()> {
    // The echo hook is installed first so schema statements are echoed too.
    if config.echo_sql {
        conn.trace(Some(echo_statement));
    }
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}

fn echo_statement(statement: &str) {
    info!("event=sql_echo module=db statement={statement}");
}
