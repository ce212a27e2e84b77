//! Delete Company Code Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    company_codes::errors::into_api_error,
    extensions::*,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Delete Company Code Handler
#[endpoint(
    tags("company-codes"),
    summary = "Delete Company Code",
    responses(
        (status_code = StatusCode::OK, description = "Company code deleted"),
    ),
)]
#[tracing::instrument(
    name = "company_codes.delete",
    skip(id, depot),
    fields(company_code_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("company_code_id", tracing::field::display(id));

    state
        .app
        .company_codes
        .delete_company_code(id.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(MessageResponse::ok("Company code deleted successfully")))
}
