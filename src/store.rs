//! Company Code Store
//!
//! The in-memory table. Records are keyed by their generated id and indexed by
//! business key so that uniqueness can be checked before any mutation.

use std::collections::BTreeMap;

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    company_codes::{
        CompanyCode, CompanyCodeFilters, CompanyCodeUpdate, CompanyCodeUuid, NewCompanyCode,
        validation::{ValidationErrors, immutable_company_code, validate_new, validate_update},
    },
    rows::Row,
};

/// Errors from store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Another record already uses the business key.
    #[error("Company code '{0}' already exists")]
    DuplicateKey(String),
}

/// Record count for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    /// Country code.
    pub country: String,

    /// Number of records.
    pub count: usize,
}

/// Record count for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyCount {
    /// Currency code.
    pub currency: String,

    /// Number of records.
    pub count: usize,
}

/// Aggregate statistics over the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCodeStats {
    /// Total number of records.
    pub total_companies: usize,

    /// Counts per country, ordered by country code.
    pub by_country: Vec<CountryCount>,

    /// Counts per currency, ordered by currency code.
    pub by_currency: Vec<CurrencyCount>,
}

/// In-memory company code table.
#[derive(Debug, Default)]
pub struct CompanyCodeStore {
    records: FxHashMap<CompanyCodeUuid, CompanyCode>,
    by_code: BTreeMap<String, CompanyCodeUuid>,
}

impl CompanyCodeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and insert a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the input is invalid and
    /// [`StoreError::DuplicateKey`] when the business key is taken.
    pub fn create(&mut self, input: NewCompanyCode) -> Result<CompanyCode, StoreError> {
        validate_new(&input)?;

        let company_code = input.company_code.unwrap_or_default();

        if self.by_code.contains_key(&company_code) {
            return Err(StoreError::DuplicateKey(company_code));
        }

        let now = Timestamp::now();

        let record = CompanyCode {
            id: CompanyCodeUuid::new(),
            company_code,
            company_name: input.company_name.unwrap_or_default(),
            city: input.city.unwrap_or_default(),
            country: input.country.unwrap_or_default(),
            currency: input.currency.unwrap_or_default(),
            language: input.language.unwrap_or_default(),
            vat_registration_number: non_empty(input.vat_registration_number),
            input_tax_code: non_empty(input.input_tax_code),
            output_tax_code: non_empty(input.output_tax_code),
            house_number: input.house_number,
            address_line1: non_empty(input.address_line1),
            address_line2: non_empty(input.address_line2),
            address_line3: non_empty(input.address_line3),
            region: non_empty(input.region),
            district: non_empty(input.district),
            county: non_empty(input.county),
            state: non_empty(input.state),
            post_code: non_empty(input.post_code),
            created_at: now,
            updated_at: now,
        };

        self.by_code
            .insert(record.company_code.clone(), record.id);
        self.records.insert(record.id, record.clone());

        debug!(id = %record.id, company_code = %record.company_code, "created company code");

        Ok(record)
    }

    /// All records passing `filters`, in business-key order.
    #[must_use]
    pub fn find_all(&self, filters: &CompanyCodeFilters) -> Vec<CompanyCode> {
        self.ordered()
            .filter(|record| filters.matches(record))
            .cloned()
            .collect()
    }

    /// Look a record up by id.
    #[must_use]
    pub fn find_by_id(&self, id: CompanyCodeUuid) -> Option<CompanyCode> {
        self.records.get(&id).cloned()
    }

    /// Look a record up by business key, matched exactly.
    #[must_use]
    pub fn find_by_company_code(&self, company_code: &str) -> Option<CompanyCode> {
        self.by_code
            .get(company_code)
            .and_then(|id| self.records.get(id))
            .cloned()
    }

    /// Merge a partial change into an existing record.
    ///
    /// Returns `Ok(None)` when no record has the id; nothing changes in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the change is empty, invalid or
    /// tries to alter the business key, and [`StoreError::DuplicateKey`] when
    /// the supplied business key belongs to another record.
    pub fn update(
        &mut self,
        id: CompanyCodeUuid,
        update: CompanyCodeUpdate,
    ) -> Result<Option<CompanyCode>, StoreError> {
        validate_update(&update)?;

        let Some(existing) = self.records.get(&id) else {
            return Ok(None);
        };

        if let Some(company_code) = update.company_code.as_deref()
            && company_code != existing.company_code
        {
            if self.by_code.contains_key(company_code) {
                return Err(StoreError::DuplicateKey(company_code.to_string()));
            }

            return Err(immutable_company_code().into());
        }

        let mut record = existing.clone();

        merge(&mut record.company_name, update.company_name);
        merge(&mut record.city, update.city);
        merge(&mut record.country, update.country);
        merge(&mut record.currency, update.currency);
        merge(&mut record.language, update.language);
        merge_nullable(
            &mut record.vat_registration_number,
            update.vat_registration_number,
        );
        merge_nullable(&mut record.input_tax_code, update.input_tax_code);
        merge_nullable(&mut record.output_tax_code, update.output_tax_code);
        if let Some(house_number) = update.house_number {
            record.house_number = house_number;
        }
        merge_nullable(&mut record.address_line1, update.address_line1);
        merge_nullable(&mut record.address_line2, update.address_line2);
        merge_nullable(&mut record.address_line3, update.address_line3);
        merge_nullable(&mut record.region, update.region);
        merge_nullable(&mut record.district, update.district);
        merge_nullable(&mut record.county, update.county);
        merge_nullable(&mut record.state, update.state);
        merge_nullable(&mut record.post_code, update.post_code);

        record.updated_at = Timestamp::now().max(record.created_at);

        self.records.insert(id, record.clone());

        debug!(%id, "updated company code");

        Ok(Some(record))
    }

    /// Remove a record. Returns whether anything was removed.
    pub fn delete(&mut self, id: CompanyCodeUuid) -> bool {
        let Some(record) = self.records.remove(&id) else {
            return false;
        };

        self.by_code.remove(&record.company_code);

        debug!(%id, company_code = %record.company_code, "deleted company code");

        true
    }

    /// Totals grouped by country and currency.
    #[must_use]
    pub fn stats(&self) -> CompanyCodeStats {
        let mut by_country: BTreeMap<&str, usize> = BTreeMap::new();
        let mut by_currency: BTreeMap<&str, usize> = BTreeMap::new();

        for record in self.records.values() {
            *by_country.entry(record.country.as_str()).or_default() += 1;
            *by_currency.entry(record.currency.as_str()).or_default() += 1;
        }

        CompanyCodeStats {
            total_companies: self.records.len(),
            by_country: by_country
                .into_iter()
                .map(|(country, count)| CountryCount {
                    country: country.to_string(),
                    count,
                })
                .collect(),
            by_currency: by_currency
                .into_iter()
                .map(|(currency, count)| CurrencyCount {
                    currency: currency.to_string(),
                    count,
                })
                .collect(),
        }
    }

    /// Row view of every record, in business-key order.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.ordered().map(CompanyCode::to_row).collect()
    }

    fn ordered(&self) -> impl Iterator<Item = &CompanyCode> {
        self.by_code.values().filter_map(|id| self.records.get(id))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn merge(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn merge_nullable(target: &mut Option<String>, value: Option<Option<String>>) {
    if let Some(value) = value {
        *target = non_empty(value);
    }
}
