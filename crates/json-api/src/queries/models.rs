//! Query Request and Response Models

use abwarehouse::{
    query::{
        PageRequest, QueryRequest, QueryResult,
        columns::{ColumnInfo, ColumnType},
        ordering::SortDirection,
        page::{DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, Pagination},
        schema::TableSchema,
    },
    rows::Row,
};
use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Outer sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortDirectionRequest {
    #[default]
    #[serde(alias = "ASC")]
    Asc,
    #[serde(alias = "DESC")]
    Desc,
}

impl From<SortDirectionRequest> for SortDirection {
    fn from(direction: SortDirectionRequest) -> Self {
        match direction {
            SortDirectionRequest::Asc => SortDirection::Asc,
            SortDirectionRequest::Desc => SortDirection::Desc,
        }
    }
}

/// Execute Query Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct ExecuteQueryRequest {
    /// `SELECT` statement over the `companies` table
    pub query: Option<String>,
    /// One-based page number, defaults to 1
    pub page: Option<usize>,
    /// Page size, defaults to 50
    pub limit: Option<usize>,
    /// Column for the outer sort, defaults to `company_code`
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirectionRequest>,
}

impl From<ExecuteQueryRequest> for QueryRequest {
    fn from(request: ExecuteQueryRequest) -> Self {
        QueryRequest::new(request.query.unwrap_or_default()).with_page(PageRequest {
            page: request.page.unwrap_or(1),
            limit: request.limit.unwrap_or(DEFAULT_PAGE_SIZE),
            sort_field: request
                .sort_field
                .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
            sort_direction: request.sort_direction.unwrap_or_default().into(),
        })
    }
}

/// Page bookkeeping.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationResponse {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub records_per_page: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl From<Pagination> for PaginationResponse {
    fn from(pagination: Pagination) -> Self {
        Self {
            current_page: pagination.current_page,
            total_pages: pagination.total_pages,
            total_records: pagination.total_records,
            records_per_page: pagination.records_per_page,
            has_next_page: pagination.has_next_page,
            has_previous_page: pagination.has_previous_page,
        }
    }
}

/// Column display type.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ColumnTypeResponse {
    Number,
    Boolean,
    Date,
    String,
}

impl From<ColumnType> for ColumnTypeResponse {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Number => Self::Number,
            ColumnType::Boolean => Self::Boolean,
            ColumnType::Date => Self::Date,
            ColumnType::String => Self::String,
        }
    }
}

/// Column metadata.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ColumnResponse {
    pub field: String,
    pub header: String,
    #[serde(rename = "type")]
    pub column_type: ColumnTypeResponse,
    pub sortable: bool,
    pub filterable: bool,
}

impl From<ColumnInfo> for ColumnResponse {
    fn from(column: ColumnInfo) -> Self {
        Self {
            field: column.field,
            header: column.header,
            column_type: column.column_type.into(),
            sortable: column.sortable,
            filterable: column.filterable,
        }
    }
}

/// Query Result
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryResponse {
    /// Rows on the requested page, keyed by column name
    #[salvo(schema(value_type = Vec<Object>))]
    pub records: Vec<Row>,
    pub pagination: PaginationResponse,
    pub columns: Vec<ColumnResponse>,
    /// The trimmed query text
    pub query: String,
    #[salvo(schema(value_type = String))]
    pub execution_time: Timestamp,
}

impl From<QueryResult> for QueryResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            records: result.records,
            pagination: result.pagination.into(),
            columns: result.columns.into_iter().map(Into::into).collect(),
            query: result.query,
            execution_time: result.execution_time,
        }
    }
}

/// Table Schema
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchemaResponse {
    pub table_name: String,
    pub total_records: usize,
    pub columns: Vec<ColumnResponse>,
    pub sample_queries: Vec<String>,
}

impl From<TableSchema> for SchemaResponse {
    fn from(schema: TableSchema) -> Self {
        Self {
            table_name: schema.table_name.to_string(),
            total_records: schema.total_records,
            columns: schema.columns.into_iter().map(Into::into).collect(),
            sample_queries: schema
                .sample_queries
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_page_fields_use_defaults() -> TestResult {
        let request: ExecuteQueryRequest = serde_json::from_value(json!({
            "query": "SELECT * FROM companies",
        }))?;

        let request = QueryRequest::from(request);

        assert_eq!(request.page, PageRequest::default());

        Ok(())
    }

    #[test]
    fn sort_direction_accepts_either_case() -> TestResult {
        let request: ExecuteQueryRequest = serde_json::from_value(json!({
            "query": "SELECT * FROM companies",
            "page": 2,
            "limit": 10,
            "sortField": "city",
            "sortDirection": "DESC",
        }))?;

        let request = QueryRequest::from(request);

        assert_eq!(request.page.page, 2);
        assert_eq!(request.page.limit, 10);
        assert_eq!(request.page.sort_field, "city");
        assert_eq!(request.page.sort_direction, SortDirection::Desc);

        Ok(())
    }
}
