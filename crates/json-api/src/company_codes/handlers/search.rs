//! Find Company Code By Business Key Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    company_codes::{errors::into_api_error, models::CompanyCodeResponse},
    extensions::*,
    responses::{ApiError, ApiResponse},
    state::State,
};

/// Find Company Code By Business Key Handler
///
/// The lookup is exact and case-sensitive.
#[endpoint(
    tags("company-codes"),
    summary = "Find Company Code By Business Key",
    responses(
        (status_code = StatusCode::OK, description = "Company code found"),
    ),
)]
pub(crate) async fn handler(
    company_code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CompanyCodeResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .company_codes
        .find_by_company_code(company_code.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ApiResponse::ok(record.into())))
}

#[cfg(test)]
mod tests {
    use abwarehouse_app::domain::company_codes::{
        CompanyCodesServiceError, MockCompanyCodesService,
    };
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{company_codes_service, make_company_code};

    use super::*;

    fn make_service(company_codes: MockCompanyCodesService) -> Service {
        company_codes_service(
            company_codes,
            Router::with_path("api/company-codes/search/{company_code}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_find_by_company_code_success() -> TestResult {
        let record = make_company_code("GB01");

        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_find_by_company_code()
            .once()
            .withf(|code| code == "GB01")
            .return_once(move |_| Ok(record));

        let mut res = TestClient::get("http://example.com/api/company-codes/search/GB01")
            .send(&make_service(company_codes))
            .await;

        let body: ApiResponse<CompanyCodeResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.data.company_code, "GB01");

        Ok(())
    }

    #[tokio::test]
    async fn test_find_unknown_company_code_returns_404() -> TestResult {
        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_find_by_company_code()
            .once()
            .withf(|code| code == "ZZ99")
            .return_once(|_| Err(CompanyCodesServiceError::NotFound));

        let res = TestClient::get("http://example.com/api/company-codes/search/ZZ99")
            .send(&make_service(company_codes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
