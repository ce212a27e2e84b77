//! Table description for query authors.

use serde::Serialize;

use super::columns::{ColumnInfo, describe};
use crate::rows::Row;

/// Name queries are expected to select from. It is not checked.
pub const TABLE_NAME: &str = "companies";

/// Example statements shown to query authors.
pub const SAMPLE_QUERIES: [&str; 6] = [
    "SELECT * FROM companies",
    "SELECT company_code, company_name, city FROM companies",
    "SELECT * FROM companies WHERE country = 'US'",
    "SELECT * FROM companies WHERE company_name LIKE '%Warehouse%'",
    "SELECT * FROM companies ORDER BY company_code ASC",
    "SELECT * FROM companies WHERE currency = 'USD' ORDER BY company_name LIMIT 10",
];

/// Table name, size, columns and examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    /// Queried table name.
    pub table_name: &'static str,

    /// Current row count.
    pub total_records: usize,

    /// Columns of the first row, empty for an empty table.
    pub columns: Vec<ColumnInfo>,

    /// Example statements.
    pub sample_queries: Vec<&'static str>,
}

/// Describe the table from a snapshot of its rows.
#[must_use]
pub fn describe_table(rows: &[Row]) -> TableSchema {
    TableSchema {
        table_name: TABLE_NAME,
        total_records: rows.len(),
        columns: describe(rows.first()),
        sample_queries: SAMPLE_QUERIES.to_vec(),
    }
}
