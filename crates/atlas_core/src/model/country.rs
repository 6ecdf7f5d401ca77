//! Country domain model.
//!
//! # Responsibility
//! - Define the transient record staged into the persistence layer.
//! - Provide the read model returned for persisted rows.
//!
//! # Invariants
//! - `name` must be non-empty before any persistence attempt.
//! - `population` carries no range policy; it is stored as given.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key for a persisted country row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are monotone per store and never reused.
pub type CountryId = i64;

/// Transient country value handed to a unit-of-work.
///
/// The store exclusively owns the durable row; this value is staged,
/// committed, and then discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Serialized as `Name` to match the persisted column naming.
    #[serde(rename = "Name")]
    pub name: String,
    /// Serialized as `Continent` to match the persisted column naming.
    #[serde(rename = "Continent")]
    pub continent: String,
    /// Serialized as `Population` to match the persisted column naming.
    ///
    /// Intentionally unconstrained; negative values are not rejected.
    #[serde(rename = "Population")]
    pub population: i64,
}

/// Read model for a persisted country row, including its assigned key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Surrogate key assigned by the store on insert.
    pub id: CountryId,
    pub name: String,
    pub continent: String,
    pub population: i64,
}

/// Field-level contract violation for a [`Country`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
}

impl Display for CountryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "country name must not be empty"),
        }
    }
}

impl Error for CountryValidationError {}

impl Country {
    /// Creates a transient country value from its three fields.
    pub fn new(
        name: impl Into<String>,
        continent: impl Into<String>,
        population: i64,
    ) -> Self {
        Self {
            name: name.into(),
            continent: continent.into(),
            population,
        }
    }

    /// Checks field-level contracts ahead of persistence.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), CountryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CountryValidationError::EmptyName);
        }
        Ok(())
    }
}

impl CountryRecord {
    /// Returns the transient value shape of this record, without the key.
    pub fn to_country(&self) -> Country {
        Country {
            name: self.name.clone(),
            continent: self.continent.clone(),
            population: self.population,
        }
    }
}
