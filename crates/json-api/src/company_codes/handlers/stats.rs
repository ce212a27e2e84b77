//! Company Code Statistics Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    company_codes::{errors::into_api_error, models::StatsResponse},
    extensions::*,
    responses::{ApiError, ApiResponse},
    state::State,
};

/// Company Code Statistics Handler
///
/// Counts company codes in total, per country and per currency.
#[endpoint(
    tags("company-codes"),
    summary = "Company Code Statistics",
    responses(
        (status_code = StatusCode::OK, description = "Statistics"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<ApiResponse<StatsResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .company_codes
        .stats()
        .await
        .map_err(into_api_error)?;

    Ok(Json(ApiResponse::ok(stats.into())))
}

#[cfg(test)]
mod tests {
    use abwarehouse::store::{CompanyCodeStats, CountryCount, CurrencyCount};
    use abwarehouse_app::domain::company_codes::MockCompanyCodesService;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::company_codes_service;

    use super::*;

    #[tokio::test]
    async fn test_stats_success() -> TestResult {
        let mut company_codes = MockCompanyCodesService::new();

        company_codes.expect_stats().once().return_once(|| {
            Ok(CompanyCodeStats {
                total_companies: 3,
                by_country: vec![
                    CountryCount {
                        country: "DE".to_string(),
                        count: 1,
                    },
                    CountryCount {
                        country: "US".to_string(),
                        count: 2,
                    },
                ],
                by_currency: vec![
                    CurrencyCount {
                        currency: "EUR".to_string(),
                        count: 1,
                    },
                    CurrencyCount {
                        currency: "USD".to_string(),
                        count: 2,
                    },
                ],
            })
        });

        let service = company_codes_service(
            company_codes,
            Router::with_path("api/company-codes/stats").get(handler),
        );

        let mut res = TestClient::get("http://example.com/api/company-codes/stats")
            .send(&service)
            .await;

        let body: ApiResponse<StatsResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.data.total_companies, 3);
        assert_eq!(
            body.data
                .by_country
                .iter()
                .map(|entry| (entry.country.as_str(), entry.count))
                .collect::<Vec<_>>(),
            vec![("DE", 1), ("US", 2)]
        );
        assert_eq!(body.data.by_currency.len(), 2);

        Ok(())
    }
}
