//! Get Company Code Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    company_codes::{errors::into_api_error, models::CompanyCodeResponse},
    extensions::*,
    responses::{ApiError, ApiResponse},
    state::State,
};

/// Get Company Code Handler
#[endpoint(
    tags("company-codes"),
    summary = "Get Company Code",
    responses(
        (status_code = StatusCode::OK, description = "Company code found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CompanyCodeResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .company_codes
        .get_company_code(id.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ApiResponse::ok(record.into())))
}
