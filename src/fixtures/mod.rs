//! Fixtures
//!
//! Sample company codes used to seed a fresh store. A copy of
//! `fixtures/company_codes.yml` is embedded in the binary; other files can be
//! loaded from disk with the same layout.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    company_codes::NewCompanyCode,
    store::{CompanyCodeStore, StoreError},
};

const BUNDLED: &str = include_str!("../../fixtures/company_codes.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A fixture entry was rejected by the store
    #[error("Invalid company code fixture '{code}': {source}")]
    Invalid {
        /// Business key of the rejected entry
        code: String,

        /// Store error
        source: StoreError,
    },
}

/// Wrapper for company codes in YAML
#[derive(Debug, Deserialize)]
pub struct CompanyCodesFixture {
    /// Map of business key -> company code fixture
    pub company_codes: BTreeMap<String, CompanyCodeFixture>,
}

/// Company code fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyCodeFixture {
    company_name: String,
    city: String,
    country: String,
    currency: String,
    language: String,
    #[serde(default)]
    vat_registration_number: Option<String>,
    #[serde(default)]
    input_tax_code: Option<String>,
    #[serde(default)]
    output_tax_code: Option<String>,
    #[serde(default)]
    house_number: Option<i64>,
    #[serde(default)]
    address_line1: Option<String>,
    #[serde(default)]
    address_line2: Option<String>,
    #[serde(default)]
    address_line3: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    district: Option<String>,
    #[serde(default)]
    county: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    post_code: Option<String>,
}

impl CompanyCodeFixture {
    /// Convert to a create input for the given business key
    #[must_use]
    pub fn into_input(self, company_code: String) -> NewCompanyCode {
        NewCompanyCode {
            company_code: Some(company_code),
            company_name: Some(self.company_name),
            city: Some(self.city),
            country: Some(self.country),
            currency: Some(self.currency),
            language: Some(self.language),
            vat_registration_number: self.vat_registration_number,
            input_tax_code: self.input_tax_code,
            output_tax_code: self.output_tax_code,
            house_number: self.house_number,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
            address_line3: self.address_line3,
            region: self.region,
            district: self.district,
            county: self.county,
            state: self.state,
            post_code: self.post_code,
        }
    }
}

impl CompanyCodesFixture {
    /// Parse the embedded sample data
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML cannot be parsed.
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_yaml(BUNDLED)
    }

    /// Load a fixture file from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse fixture YAML
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the fixture layout.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Insert every entry into `store`, in business-key order
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry the store rejects.
    pub fn seed(self, store: &mut CompanyCodeStore) -> Result<usize, FixtureError> {
        let count = self.company_codes.len();

        for (code, fixture) in self.company_codes {
            store
                .create(fixture.into_input(code.clone()))
                .map_err(|source| FixtureError::Invalid { code, source })?;
        }

        info!(count, "seeded company codes");

        Ok(count)
    }

    /// Build a new store holding every entry
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry the store rejects.
    pub fn into_store(self) -> Result<CompanyCodeStore, FixtureError> {
        let mut store = CompanyCodeStore::new();

        self.seed(&mut store)?;

        Ok(store)
    }
}
