//! ABWarehouse prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    company_codes::{
        CompanyCode, CompanyCodeFilters, CompanyCodeUpdate, CompanyCodeUuid, NewCompanyCode,
        validation::{FieldError, ValidationErrors},
    },
    fixtures::{CompanyCodesFixture, FixtureError},
    options::{DropdownOptions, NamedCode, dropdown_options},
    query::{
        ColumnInfo, ColumnType, PageRequest, Pagination, QueryError, QueryRequest, QueryResult,
        SortDirection, execute,
        schema::{TableSchema, describe_table},
    },
    rows::{Row, Value},
    store::{CompanyCodeStats, CompanyCodeStore, CountryCount, CurrencyCount, StoreError},
    uuids::TypedUuid,
};
