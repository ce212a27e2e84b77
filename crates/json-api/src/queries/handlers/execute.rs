//! Execute Query Handler

use std::sync::Arc;

use abwarehouse::query::QueryRequest;
use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    queries::{
        errors::into_api_error,
        models::{ExecuteQueryRequest, QueryResponse},
    },
    responses::{ApiError, ApiResponse},
    state::State,
};

/// Execute Query Handler
///
/// Runs a read-only `SELECT` over the company code table, then sorts and
/// pages the result by the request parameters.
#[endpoint(
    tags("sql"),
    summary = "Execute SQL Query",
    responses(
        (status_code = StatusCode::OK, description = "Query result page"),
    ),
)]
#[tracing::instrument(
    name = "queries.execute",
    skip(json, depot),
    fields(query = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ExecuteQueryRequest>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<QueryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = QueryRequest::from(json.into_inner());

    tracing::Span::current().record("query", request.query.trim());

    let result = state
        .app
        .queries
        .execute_query(request)
        .await
        .map_err(into_api_error)?;

    tracing::info!(
        returned = result.records.len(),
        total = result.pagination.total_records,
        "executed query"
    );

    Ok(Json(ApiResponse::ok(result.into())))
}
