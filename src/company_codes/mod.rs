//! Company Codes
//!
//! The company code master-data record and the inputs used to create and
//! change it.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{rows::Row, uuids::TypedUuid};

pub mod validation;

/// Company code identifier.
pub type CompanyCodeUuid = TypedUuid<CompanyCode>;

/// Maximum length of free-text fields.
pub const MAX_TEXT_LENGTH: usize = 132;

/// A stored company code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCode {
    /// Opaque identifier assigned by the store.
    pub id: CompanyCodeUuid,

    /// Four character business key, unique across the table.
    pub company_code: String,

    /// Legal or display name.
    pub company_name: String,

    /// City of the registered address.
    pub city: String,

    /// Two character country code.
    pub country: String,

    /// Three character currency code.
    pub currency: String,

    /// Two character language code.
    pub language: String,

    /// VAT registration number.
    pub vat_registration_number: Option<String>,

    /// Input tax code.
    pub input_tax_code: Option<String>,

    /// Output tax code.
    pub output_tax_code: Option<String>,

    /// House number.
    pub house_number: Option<i64>,

    /// First address line.
    pub address_line1: Option<String>,

    /// Second address line.
    pub address_line2: Option<String>,

    /// Third address line.
    pub address_line3: Option<String>,

    /// Region.
    pub region: Option<String>,

    /// District.
    pub district: Option<String>,

    /// County.
    pub county: Option<String>,

    /// State.
    pub state: Option<String>,

    /// Postal code.
    pub post_code: Option<String>,

    /// Creation time, never changes.
    pub created_at: Timestamp,

    /// Last successful change.
    pub updated_at: Timestamp,
}

impl CompanyCode {
    /// The table view of this record, with `snake_case` column names.
    #[must_use]
    pub fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.to_string())
            .with("company_code", self.company_code.as_str())
            .with("company_name", self.company_name.as_str())
            .with("city", self.city.as_str())
            .with("country", self.country.as_str())
            .with("currency", self.currency.as_str())
            .with("language", self.language.as_str())
            .with(
                "vat_registration_number",
                self.vat_registration_number.as_deref(),
            )
            .with("input_tax_code", self.input_tax_code.as_deref())
            .with("output_tax_code", self.output_tax_code.as_deref())
            .with("house_number", self.house_number)
            .with("address_line1", self.address_line1.as_deref())
            .with("address_line2", self.address_line2.as_deref())
            .with("address_line3", self.address_line3.as_deref())
            .with("region", self.region.as_deref())
            .with("district", self.district.as_deref())
            .with("county", self.county.as_deref())
            .with("state", self.state.as_deref())
            .with("post_code", self.post_code.as_deref())
            .with("created_at", self.created_at.to_string())
            .with("updated_at", self.updated_at.to_string())
    }
}

/// Unvalidated input for a new company code.
///
/// Required fields are optional here so that a missing value is reported as a
/// field-level validation error rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCompanyCode {
    pub company_code: Option<String>,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub vat_registration_number: Option<String>,
    pub input_tax_code: Option<String>,
    pub output_tax_code: Option<String>,
    pub house_number: Option<i64>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub post_code: Option<String>,
}

/// Partial change to an existing company code.
///
/// `None` leaves a field untouched. For nullable fields `Some(None)` clears
/// the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyCodeUpdate {
    /// Only accepted when it repeats the stored value; the business key is immutable.
    pub company_code: Option<String>,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub vat_registration_number: Option<Option<String>>,
    pub input_tax_code: Option<Option<String>>,
    pub output_tax_code: Option<Option<String>>,
    pub house_number: Option<Option<i64>>,
    pub address_line1: Option<Option<String>>,
    pub address_line2: Option<Option<String>>,
    pub address_line3: Option<Option<String>>,
    pub region: Option<Option<String>>,
    pub district: Option<Option<String>>,
    pub county: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub post_code: Option<Option<String>>,
}

impl CompanyCodeUpdate {
    /// Whether no field is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Exact-match and substring filters for listing company codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCodeFilters {
    /// Exact country match.
    pub country: Option<String>,

    /// Exact currency match.
    pub currency: Option<String>,

    /// Case-insensitive substring of the company name or code.
    pub search: Option<String>,
}

impl CompanyCodeFilters {
    /// Whether a record passes every filter that is set.
    #[must_use]
    pub fn matches(&self, record: &CompanyCode) -> bool {
        if let Some(country) = non_blank(self.country.as_deref())
            && record.country != country
        {
            return false;
        }

        if let Some(currency) = non_blank(self.currency.as_deref())
            && record.currency != currency
        {
            return false;
        }

        if let Some(search) = non_blank(self.search.as_deref()) {
            let needle = search.to_lowercase();

            return record.company_name.to_lowercase().contains(&needle)
                || record.company_code.to_lowercase().contains(&needle);
        }

        true
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
