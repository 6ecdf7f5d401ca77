//! Country use-case service.
//!
//! # Responsibility
//! - Provide stable insert/read-back entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::country::{Country, CountryId, CountryRecord};
use crate::repo::country_repo::{CountryRepository, RepoResult};

/// Use-case service wrapper for country registry operations.
pub struct CountryService<R: CountryRepository> {
    repo: R,
}

impl<R: CountryRepository> CountryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers one country from its three field values.
    ///
    /// # Contract
    /// - Builds the transient record and commits it in one unit-of-work.
    /// - Returns the store-assigned surrogate id.
    pub fn add_country(
        &mut self,
        name: impl Into<String>,
        continent: impl Into<String>,
        population: i64,
    ) -> RepoResult<CountryId> {
        let country = Country::new(name, continent, population);
        self.repo.insert_country(&country)
    }

    /// Inserts an already-constructed transient record.
    pub fn insert_country(&mut self, country: &Country) -> RepoResult<CountryId> {
        self.repo.insert_country(country)
    }

    /// Reads one persisted row back by its unique name.
    pub fn get_country_by_name(&self, name: &str) -> RepoResult<Option<CountryRecord>> {
        self.repo.get_country_by_name(name)
    }

    /// Returns the total number of persisted rows.
    pub fn count_countries(&self) -> RepoResult<i64> {
        self.repo.count_countries()
    }
}
