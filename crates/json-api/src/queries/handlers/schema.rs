//! Table Schema Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    queries::{errors::into_api_error, models::SchemaResponse},
    responses::{ApiError, ApiResponse},
    state::State,
};

/// Table Schema Handler
///
/// Describes the queryable table with a few example statements.
#[endpoint(
    tags("sql"),
    summary = "Table Schema",
    responses(
        (status_code = StatusCode::OK, description = "Table description"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<ApiResponse<SchemaResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let schema = state
        .app
        .queries
        .schema()
        .await
        .map_err(into_api_error)?;

    Ok(Json(ApiResponse::ok(schema.into())))
}
