//! Create Company Code Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    company_codes::{
        errors::into_api_error,
        models::{CompanyCodeResponse, CreateCompanyCodeRequest},
    },
    extensions::*,
    responses::{ApiError, ApiResponse},
    state::State,
};

/// Create Company Code Handler
#[endpoint(
    tags("company-codes"),
    summary = "Create Company Code",
    responses(
        (status_code = StatusCode::CREATED, description = "Company code created"),
    ),
)]
#[tracing::instrument(
    name = "company_codes.create",
    skip(json, depot, res),
    fields(company_code = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCompanyCodeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ApiResponse<CompanyCodeResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if let Some(code) = &request.company_code {
        tracing::Span::current().record("company_code", tracing::field::display(code));
    }

    let created = state
        .app
        .company_codes
        .create_company_code(request.into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/api/company-codes/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(id = %created.id, "created company code");

    Ok(Json(
        ApiResponse::ok(created.into()).with_message("Company code created successfully"),
    ))
}

#[cfg(test)]
mod tests {
    use abwarehouse::company_codes::{
        NewCompanyCode,
        validation::{FieldError, ValidationErrors},
    };
    use abwarehouse_app::domain::company_codes::{
        CompanyCodesServiceError, MockCompanyCodesService,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        responses::{ErrorResponse, FieldErrorResponse},
        test_helpers::{company_codes_service, make_company_code},
    };

    use super::*;

    fn make_service(company_codes: MockCompanyCodesService) -> Service {
        company_codes_service(
            company_codes,
            Router::with_path("api/company-codes").post(handler),
        )
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "companyCode": "US03",
            "companyName": "ABWarehouse US03",
            "city": "New York",
            "country": "US",
            "currency": "USD",
            "language": "EN",
            "houseNumber": 123,
            "postCode": "10001",
        })
    }

    #[tokio::test]
    async fn test_create_company_code_success() -> TestResult {
        let record = make_company_code("US03");
        let id = record.id;

        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_create_company_code()
            .once()
            .withf(|input| {
                *input
                    == NewCompanyCode {
                        company_code: Some("US03".to_string()),
                        company_name: Some("ABWarehouse US03".to_string()),
                        city: Some("New York".to_string()),
                        country: Some("US".to_string()),
                        currency: Some("USD".to_string()),
                        language: Some("EN".to_string()),
                        house_number: Some(123),
                        post_code: Some("10001".to_string()),
                        ..NewCompanyCode::default()
                    }
            })
            .return_once(move |_| Ok(record));

        let mut res = TestClient::post("http://example.com/api/company-codes")
            .json(&valid_body())
            .send(&make_service(company_codes))
            .await;

        let body: ApiResponse<CompanyCodeResponse> = res.take_json().await?;
        let location = res
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            location,
            Some(format!("/api/company-codes/{id}").as_str())
        );
        assert!(body.success);
        assert_eq!(body.data.company_code, "US03");
        assert_eq!(body.data.id, id.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_returns_409() -> TestResult {
        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_create_company_code()
            .once()
            .return_once(|_| Err(CompanyCodesServiceError::AlreadyExists("US03".to_string())));

        let mut res = TestClient::post("http://example.com/api/company-codes")
            .json(&valid_body())
            .send(&make_service(company_codes))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body.message, "Company code 'US03' already exists");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_invalid_returns_field_errors() -> TestResult {
        let mut company_codes = MockCompanyCodesService::new();

        company_codes
            .expect_create_company_code()
            .once()
            .return_once(|_| {
                let mut errors =
                    ValidationErrors::single("companyCode", "Company Code is required");
                errors.push("companyName", "Company Name is required");

                Err(CompanyCodesServiceError::Validation(errors))
            });

        let mut res = TestClient::post("http://example.com/api/company-codes")
            .json(&json!({ "city": "Paris" }))
            .send(&make_service(company_codes))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Validation failed");
        assert_eq!(
            body.errors,
            vec![
                FieldErrorResponse::from(FieldError::new(
                    "companyCode",
                    "Company Code is required"
                )),
                FieldErrorResponse::from(FieldError::new(
                    "companyName",
                    "Company Name is required"
                )),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_unknown_field_returns_400() -> TestResult {
        let mut company_codes = MockCompanyCodesService::new();

        company_codes.expect_create_company_code().never();

        let res = TestClient::post("http://example.com/api/company-codes")
            .json(&json!({ "companyCode": "US03", "tenant": "acme" }))
            .send(&make_service(company_codes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
