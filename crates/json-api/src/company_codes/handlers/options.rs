//! Dropdown Options Handler

use abwarehouse::options::dropdown_options;
use salvo::prelude::*;

use crate::{company_codes::models::OptionsResponse, responses::ApiResponse};

/// Dropdown Options Handler
///
/// Returns the selectable currencies, countries and languages.
#[endpoint(tags("company-codes"), summary = "Dropdown Options")]
pub(crate) async fn handler() -> Json<ApiResponse<OptionsResponse>> {
    Json(ApiResponse::ok(dropdown_options().into()))
}
