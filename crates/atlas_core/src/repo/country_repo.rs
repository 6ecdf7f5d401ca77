//! Country repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Stage and commit country rows as single atomic transactions.
//! - Provide the minimal read-back needed to verify inserted state.
//!
//! # Invariants
//! - Each insert runs inside its own unit-of-work; a failed insert leaves
//!   the table untouched.
//! - Connections are pre-flighted before use; an unmigrated or malformed
//!   store is rejected instead of written to.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::country::{Country, CountryId, CountryRecord, CountryValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COUNTRY_SELECT_SQL: &str = "SELECT id, Name, Continent, Population FROM countries";

const REQUIRED_COLUMNS: &[&str] = &["id", "Name", "Continent", "Population"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for country persistence and read-back operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(CountryValidationError),
    Db(DbError),
    /// The unique constraint on `Name` rejected the staged row.
    DuplicateName(String),
    InvalidData(String),
    /// The connection's schema version does not match this binary.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateName(name) => {
                write!(f, "a country named `{name}` already exists")
            }
            Self::InvalidData(message) => {
                write!(f, "invalid persisted country data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateName(_)
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<CountryValidationError> for RepoError {
    fn from(value: CountryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for country persistence.
///
/// The read operations exist to verify inserted state; no broader query
/// surface is provided.
pub trait CountryRepository {
    /// Stages one row and commits it atomically, returning the assigned id.
    fn insert_country(&mut self, country: &Country) -> RepoResult<CountryId>;
    /// Reads one row back by its unique name.
    fn get_country_by_name(&self, name: &str) -> RepoResult<Option<CountryRecord>>;
    /// Returns the total number of persisted rows.
    fn count_countries(&self) -> RepoResult<i64>;
}

/// SQLite-backed country repository.
pub struct SqliteCountryRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteCountryRepository<'conn> {
    /// Wraps a bootstrapped connection after pre-flighting its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` does not match.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the
    ///   `countries` shape is absent or incomplete.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        if !table_exists(conn, "countries")? {
            return Err(RepoError::MissingRequiredTable("countries"));
        }
        for column in REQUIRED_COLUMNS {
            if !table_has_column(conn, "countries", column)? {
                return Err(RepoError::MissingRequiredColumn {
                    table: "countries",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl CountryRepository for SqliteCountryRepository<'_> {
    fn insert_country(&mut self, country: &Country) -> RepoResult<CountryId> {
        country.validate()?;

        let tx = self.conn.transaction()?;
        let staged = tx.execute(
            "INSERT INTO countries (Name, Continent, Population) VALUES (?1, ?2, ?3);",
            params![
                country.name.as_str(),
                country.continent.as_str(),
                country.population,
            ],
        );
        if let Err(err) = staged {
            // Dropping `tx` rolls the unit-of-work back; nothing is written.
            return Err(map_insert_error(err, &country.name));
        }

        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    fn get_country_by_name(&self, name: &str) -> RepoResult<Option<CountryRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COUNTRY_SELECT_SQL} WHERE Name = ?1;"))?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_country_row(row)?));
        }

        Ok(None)
    }

    fn count_countries(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM countries;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn map_insert_error(err: rusqlite::Error, name: &str) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepoError::DuplicateName(name.to_string())
        }
        _ => RepoError::from(err),
    }
}

fn parse_country_row(row: &Row<'_>) -> RepoResult<CountryRecord> {
    let name: Option<String> = row.get("Name")?;
    let continent: Option<String> = row.get("Continent")?;
    let population: Option<i64> = row.get("Population")?;

    Ok(CountryRecord {
        id: row.get("id")?,
        name: name.ok_or_else(|| null_column("Name"))?,
        continent: continent.ok_or_else(|| null_column("Continent"))?,
        population: population.ok_or_else(|| null_column("Population"))?,
    })
}

fn null_column(column: &str) -> RepoError {
    RepoError::InvalidData(format!("null value in countries.{column}"))
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table_name: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query([table_name])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(0)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
