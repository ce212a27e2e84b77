//! Query Errors

use tracing::error;

use abwarehouse_app::domain::queries::QueryServiceError;

use crate::responses::ApiError;

pub(crate) fn into_api_error(error: QueryServiceError) -> ApiError {
    match error {
        QueryServiceError::Query(source) if source.is_client_error() => {
            ApiError::bad_request(source.to_string())
        }
        QueryServiceError::Query(source) => {
            error!("query execution failed: {source}");

            ApiError::new(
                salvo::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Query execution failed",
            )
        }
        QueryServiceError::Database(source) => {
            error!("query snapshot failed: {source}");

            ApiError::internal()
        }
    }
}
