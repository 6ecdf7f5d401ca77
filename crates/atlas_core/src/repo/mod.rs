//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for country rows.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Write paths enforce `Country::validate()` before SQL mutations.
//! - Repository APIs return semantic errors (`DuplicateName`) in addition
//!   to DB transport errors.

pub mod country_repo;
