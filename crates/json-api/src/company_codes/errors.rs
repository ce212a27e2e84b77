//! Company Code Errors

use tracing::error;

use abwarehouse_app::domain::company_codes::CompanyCodesServiceError;

use crate::responses::ApiError;

pub(crate) fn into_api_error(error: CompanyCodesServiceError) -> ApiError {
    match error {
        CompanyCodesServiceError::NotFound => ApiError::not_found("Company code not found"),
        CompanyCodesServiceError::AlreadyExists(code) => {
            ApiError::conflict(format!("Company code '{code}' already exists"))
        }
        CompanyCodesServiceError::Validation(errors) => {
            ApiError::bad_request(errors.to_string()).with_errors(errors.into_errors())
        }
        CompanyCodesServiceError::Database(source) => {
            error!("company code storage failed: {source}");

            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use abwarehouse::company_codes::validation::ValidationErrors;
    use abwarehouse_app::database::DatabaseError;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn duplicate_maps_to_conflict_with_code() {
        let error = into_api_error(CompanyCodesServiceError::AlreadyExists("US01".to_string()));

        assert_eq!(error.status(), StatusCode::CONFLICT);
        assert_eq!(error.body().message, "Company code 'US01' already exists");
    }

    #[test]
    fn validation_maps_to_bad_request_with_field_errors() {
        let error = into_api_error(CompanyCodesServiceError::Validation(
            ValidationErrors::single("country", "Country code is required"),
        ));

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.body().message, "Validation failed");
        assert_eq!(error.body().errors.len(), 1);
    }

    #[test]
    fn storage_failure_is_generic() {
        let error = into_api_error(CompanyCodesServiceError::Database(DatabaseError::Poisoned));

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body().message, "Internal server error");
    }
}
