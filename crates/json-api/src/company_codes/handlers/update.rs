//! Update Company Code Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    company_codes::{
        errors::into_api_error,
        models::{CompanyCodeResponse, UpdateCompanyCodeRequest},
    },
    extensions::*,
    responses::{ApiError, ApiResponse},
    state::State,
};

/// Update Company Code Handler
///
/// Applies a partial update. At least one field must be present.
#[endpoint(
    tags("company-codes"),
    summary = "Update Company Code",
    responses(
        (status_code = StatusCode::OK, description = "Company code updated"),
    ),
)]
#[tracing::instrument(
    name = "company_codes.update",
    skip(id, json, depot),
    fields(company_code_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateCompanyCodeRequest>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CompanyCodeResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("company_code_id", tracing::field::display(id));

    let updated = state
        .app
        .company_codes
        .update_company_code(id.into(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(company_code = %updated.company_code, "updated company code");

    Ok(Json(
        ApiResponse::ok(updated.into()).with_message("Company code updated successfully"),
    ))
}
