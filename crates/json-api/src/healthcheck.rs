//! ABWarehouse JSON API Healthcheck Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{extensions::*, responses::ApiError, state::State};

const SERVICE_NAME: &str = "Company Code Service";

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,

    /// Time of the check
    #[salvo(schema(value_type = String))]
    pub timestamp: Timestamp,

    /// Store availability
    pub database: String,
}

/// Healthcheck handler
///
/// Returns service health status. Answers 503 when the company code store
/// cannot be read.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let (status, database) = match state.app.company_codes.stats().await {
        Ok(_stats) => ("OK", "connected"),
        Err(error) => {
            warn!("health check could not read the store: {error}");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            ("UNAVAILABLE", "unavailable")
        }
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Timestamp::now(),
        database: database.to_string(),
    }))
}
