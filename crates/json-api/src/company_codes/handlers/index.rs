//! Company Code Index Handler

use std::sync::Arc;

use abwarehouse::company_codes::CompanyCodeFilters;
use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    company_codes::{
        errors::into_api_error,
        models::{CompanyCodesResponse, FiltersResponse, ListMeta},
    },
    extensions::*,
    responses::ApiError,
    state::State,
};

/// Company Code Index Handler
///
/// Returns the company codes matching the optional filters, ordered by
/// business key.
#[endpoint(
    tags("company-codes"),
    summary = "List Company Codes",
    responses(
        (status_code = StatusCode::OK, description = "Matching company codes"),
    ),
)]
pub(crate) async fn handler(
    country: QueryParam<String, false>,
    currency: QueryParam<String, false>,
    search: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CompanyCodesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filters = CompanyCodeFilters {
        country: country.into_inner(),
        currency: currency.into_inner(),
        search: search.into_inner(),
    };

    let applied = FiltersResponse::from(&filters);

    let records = state
        .app
        .company_codes
        .list_company_codes(filters)
        .await
        .map_err(into_api_error)?;

    let total = records.len();

    Ok(Json(CompanyCodesResponse {
        success: true,
        data: records.into_iter().map(Into::into).collect(),
        meta: ListMeta {
            total,
            filters: applied,
        },
    }))
}

#[cfg(test)]
mod tests {
    use abwarehouse_app::{
        database::DatabaseError,
        domain::company_codes::{CompanyCodesServiceError, MockCompanyCodesService},
    };
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        responses::ErrorResponse,
        test_helpers::{company_codes_service, make_company_code},
    };

    use super::*;

    fn make_service(company_codes: MockCompanyCodesService) -> Service {
        company_codes_service(
            company_codes,
            Router::with_path("api/company-codes").get(handler),
        )
    }

    #[tokio::test]
    async fn test_list_company_codes_success() -> TestResult {
        let us01 = make_company_code("US01");
        let us02 = make_company_code("US02");

        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_list_company_codes()
            .once()
            .withf(|filters| *filters == CompanyCodeFilters::default())
            .return_once(move |_| Ok(vec![us01, us02]));

        let mut res = TestClient::get("http://example.com/api/company-codes")
            .send(&make_service(company_codes))
            .await;

        let body: CompanyCodesResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.meta.total, 2);
        assert_eq!(
            body.data
                .iter()
                .map(|record| record.company_code.as_str())
                .collect::<Vec<_>>(),
            vec!["US01", "US02"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_company_codes_passes_filters() -> TestResult {
        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_list_company_codes()
            .once()
            .withf(|filters| {
                *filters
                    == CompanyCodeFilters {
                        country: Some("DE".to_string()),
                        currency: None,
                        search: Some("ware".to_string()),
                    }
            })
            .return_once(|_| Ok(Vec::new()));

        let mut res =
            TestClient::get("http://example.com/api/company-codes?country=DE&search=ware")
                .send(&make_service(company_codes))
                .await;

        let body: CompanyCodesResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.meta.total, 0);
        assert_eq!(body.meta.filters.country.as_deref(), Some("DE"));
        assert_eq!(body.meta.filters.search.as_deref(), Some("ware"));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_company_codes_storage_failure_returns_500() -> TestResult {
        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_list_company_codes()
            .once()
            .return_once(|_| Err(CompanyCodesServiceError::Database(DatabaseError::Poisoned)));

        let mut res = TestClient::get("http://example.com/api/company-codes")
            .send(&make_service(company_codes))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!body.success);

        Ok(())
    }
}
