//! Seed entry point for a local countries store.
//!
//! # Responsibility
//! - Ensure the countries schema exists at the target path.
//! - Insert the bundled sample rows and report per-row confirmations.
//! - Exit nonzero when any store operation fails.

use atlas_core::db::open_db;
use atlas_core::{CountryService, SqliteCountryRepository};
use std::error::Error;
use std::process::ExitCode;

const DEFAULT_STORE_PATH: &str = "countries.db";

const SAMPLE_ROWS: &[(&str, &str, i64)] = &[
    ("India", "Asia", 1_438_054_073),
    ("Nepal", "Asia", 31_143_833),
];

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());

    match seed(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("atlas: {err}");
            ExitCode::FAILURE
        }
    }
}

fn seed(path: &str) -> Result<(), Box<dyn Error>> {
    let mut conn = open_db(path)?;
    let repo = SqliteCountryRepository::try_new(&mut conn)?;
    let mut service = CountryService::new(repo);

    for (name, continent, population) in SAMPLE_ROWS {
        let id = service.add_country(*name, *continent, *population)?;
        println!("Added {name} successfully (id={id})");
    }

    Ok(())
}
