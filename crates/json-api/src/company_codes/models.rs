//! Company Code Request and Response Models

use abwarehouse::{
    company_codes::{CompanyCode, CompanyCodeFilters, CompanyCodeUpdate, NewCompanyCode},
    options::{DropdownOptions, NamedCode},
    store::CompanyCodeStats,
};
use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A stored company code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompanyCodeResponse {
    /// Opaque identifier
    pub id: Uuid,
    /// Four character business key
    pub company_code: String,
    pub company_name: String,
    pub city: String,
    /// Two character country code
    pub country: String,
    /// Three character currency code
    pub currency: String,
    /// Two character language code
    pub language: String,
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
    #[salvo(schema(value_type = String))]
    pub created_at: Timestamp,
    #[salvo(schema(value_type = String))]
    pub updated_at: Timestamp,
}

impl From<CompanyCode> for CompanyCodeResponse {
    fn from(record: CompanyCode) -> Self {
        Self {
            id: record.id.into_uuid(),
            company_code: record.company_code,
            company_name: record.company_name,
            city: record.city,
            country: record.country,
            currency: record.currency,
            language: record.language,
            vat_registration_number: record.vat_registration_number,
            input_tax_code: record.input_tax_code,
            output_tax_code: record.output_tax_code,
            house_number: record.house_number,
            address_line1: record.address_line1,
            address_line2: record.address_line2,
            address_line3: record.address_line3,
            region: record.region,
            district: record.district,
            county: record.county,
            state: record.state,
            post_code: record.post_code,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Create Company Code Request
///
/// Required fields may be omitted here; their absence is reported as a
/// field-level validation error.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CreateCompanyCodeRequest {
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

impl From<CreateCompanyCodeRequest> for NewCompanyCode {
    fn from(request: CreateCompanyCodeRequest) -> Self {
        NewCompanyCode {
            company_code: request.company_code,
            company_name: request.company_name,
            city: request.city,
            country: request.country,
            currency: request.currency,
            language: request.language,
            vat_registration_number: request.vat_registration_number,
            input_tax_code: request.input_tax_code,
            output_tax_code: request.output_tax_code,
            house_number: request.house_number,
            address_line1: request.address_line1,
            address_line2: request.address_line2,
            address_line3: request.address_line3,
            region: request.region,
            district: request.district,
            county: request.county,
            state: request.state,
            post_code: request.post_code,
        }
    }
}

/// Distinguish an absent field from an explicit `null`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Update Company Code Request
///
/// Omitted fields keep their stored value. Optional fields sent as `null`
/// are cleared.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateCompanyCodeRequest {
    /// Accepted only when it matches the stored business key
    pub company_code: Option<String>,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub vat_registration_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub input_tax_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub output_tax_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<i64>))]
    pub house_number: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub address_line1: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub address_line2: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub address_line3: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub region: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub district: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub county: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub post_code: Option<Option<String>>,
}

impl From<UpdateCompanyCodeRequest> for CompanyCodeUpdate {
    fn from(request: UpdateCompanyCodeRequest) -> Self {
        CompanyCodeUpdate {
            company_code: request.company_code,
            company_name: request.company_name,
            city: request.city,
            country: request.country,
            currency: request.currency,
            language: request.language,
            vat_registration_number: request.vat_registration_number,
            input_tax_code: request.input_tax_code,
            output_tax_code: request.output_tax_code,
            house_number: request.house_number,
            address_line1: request.address_line1,
            address_line2: request.address_line2,
            address_line3: request.address_line3,
            region: request.region,
            district: request.district,
            county: request.county,
            state: request.state,
            post_code: request.post_code,
        }
    }
}

/// Filters echoed back with a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct FiltersResponse {
    pub country: Option<String>,
    pub currency: Option<String>,
    pub search: Option<String>,
}

impl From<&CompanyCodeFilters> for FiltersResponse {
    fn from(filters: &CompanyCodeFilters) -> Self {
        Self {
            country: filters.country.clone(),
            currency: filters.currency.clone(),
            search: filters.search.clone(),
        }
    }
}

/// List metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ListMeta {
    /// Number of matching records
    pub total: usize,
    /// Filters that were applied
    pub filters: FiltersResponse,
}

/// Company Codes Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompanyCodesResponse {
    pub success: bool,
    /// Matching company codes in business-key order
    pub data: Vec<CompanyCodeResponse>,
    pub meta: ListMeta,
}

/// Count for one country.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CountryCountResponse {
    pub country: String,
    pub count: usize,
}

/// Count for one currency.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CurrencyCountResponse {
    pub currency: String,
    pub count: usize,
}

/// Company Code Statistics
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsResponse {
    pub total_companies: usize,
    pub by_country: Vec<CountryCountResponse>,
    pub by_currency: Vec<CurrencyCountResponse>,
}

impl From<CompanyCodeStats> for StatsResponse {
    fn from(stats: CompanyCodeStats) -> Self {
        Self {
            total_companies: stats.total_companies,
            by_country: stats
                .by_country
                .into_iter()
                .map(|entry| CountryCountResponse {
                    country: entry.country,
                    count: entry.count,
                })
                .collect(),
            by_currency: stats
                .by_currency
                .into_iter()
                .map(|entry| CurrencyCountResponse {
                    currency: entry.currency,
                    count: entry.count,
                })
                .collect(),
        }
    }
}

/// A selectable code with its display name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NamedCodeResponse {
    pub code: String,
    pub name: String,
}

impl From<&NamedCode> for NamedCodeResponse {
    fn from(named: &NamedCode) -> Self {
        Self {
            code: named.code.to_string(),
            name: named.name.to_string(),
        }
    }
}

/// Dropdown Options
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OptionsResponse {
    pub currencies: Vec<String>,
    pub countries: Vec<NamedCodeResponse>,
    pub languages: Vec<NamedCodeResponse>,
}

impl From<DropdownOptions> for OptionsResponse {
    fn from(options: DropdownOptions) -> Self {
        Self {
            currencies: options.currencies.iter().map(ToString::to_string).collect(),
            countries: options.countries.iter().map(Into::into).collect(),
            languages: options.languages.iter().map(Into::into).collect(),
        }
    }
}
