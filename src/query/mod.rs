//! Query Engine
//!
//! Runs a restricted `SELECT` statement over a snapshot of rows, then applies
//! the caller's sort and page selection to the result.
//!
//! The statement pipeline is: filter, inner `ORDER BY`, inner `LIMIT`,
//! projection. The outer sort and pagination run afterwards and never see the
//! query text.

use jiff::Timestamp;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::rows::Row;

pub mod columns;
pub mod ordering;
pub mod page;
pub mod parser;
pub mod predicate;
pub mod render;
pub mod schema;

pub use columns::{ColumnInfo, ColumnType};
pub use ordering::SortDirection;
pub use page::{PageRequest, Pagination};
pub use parser::{Projection, SelectStatement};

use predicate::Predicate;

/// Query failures.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query text is missing or blank.
    #[error("SQL query is required")]
    MissingQuery,

    /// The statement is not a `SELECT`.
    #[error(
        "Only SELECT queries are supported. Use: SELECT * FROM companies or SELECT column1, column2 FROM companies WHERE condition"
    )]
    Unsupported,

    /// The statement does not have the `SELECT ... FROM` shape.
    #[error("Invalid SELECT syntax. {0}")]
    Syntax(String),

    /// Evaluation failed.
    #[error("Query execution failed: {0}")]
    Execution(String),

    /// A page parameter is out of range.
    #[error("{0}")]
    InvalidParameter(String),
}

impl QueryError {
    /// Whether the caller can fix the failure by changing the request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, QueryError::Execution(_))
    }
}

/// A query plus outer page selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    /// Statement text. Leading and trailing whitespace is ignored.
    pub query: String,

    /// Outer sort and page.
    pub page: PageRequest,
}

impl QueryRequest {
    /// Query with default paging.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: PageRequest::default(),
        }
    }

    /// Replace the page selection.
    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

/// One page of query output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Rows on the requested page.
    pub records: Vec<Row>,

    /// Page bookkeeping.
    pub pagination: Pagination,

    /// Metadata for the columns of the first returned row.
    pub columns: Vec<ColumnInfo>,

    /// The trimmed query text.
    pub query: String,

    /// When the query ran.
    pub execution_time: Timestamp,
}

/// Run `request` over `rows`.
///
/// # Errors
///
/// Returns [`QueryError`] when the query is blank, not a `SELECT`, malformed,
/// has out-of-range page parameters, or cannot be evaluated.
pub fn execute(rows: Vec<Row>, request: &QueryRequest) -> Result<QueryResult, QueryError> {
    let query = request.query.trim();

    if query.is_empty() {
        return Err(QueryError::MissingQuery);
    }

    request.page.validate()?;

    let statement = parser::parse(query)?;
    let predicate = Predicate::compile(&statement.conditions)?;

    let mut rows: Vec<Row> = rows.into_iter().filter(|row| predicate.matches(row)).collect();

    ordering::sort_by_terms(&mut rows, &statement.order);

    if let Some(limit) = statement.limit {
        rows.truncate(limit);
    }

    if let Projection::Fields(fields) = &statement.projection {
        rows = rows.iter().map(|row| row.project(fields)).collect();
    }

    ordering::sort_by_field(
        &mut rows,
        &request.page.sort_field,
        request.page.sort_direction,
    );

    let (records, pagination) = page::paginate(rows, &request.page);
    let columns = columns::describe(records.first());

    debug!(
        total = pagination.total_records,
        returned = records.len(),
        "query executed"
    );

    Ok(QueryResult {
        records,
        pagination,
        columns,
        query: query.to_string(),
        execution_time: Timestamp::now(),
    })
}
