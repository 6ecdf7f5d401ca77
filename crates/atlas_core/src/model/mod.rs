//! Domain model for the country registry.
//!
//! # Responsibility
//! - Define the canonical data structures used by core persistence logic.
//! - Keep field-level input contracts next to the data they guard.
//!
//! # Invariants
//! - Persisted rows are addressed by a store-assigned surrogate `id`.
//! - `name` uniqueness is owned by the store, not by in-memory state.

pub mod country;
