//! Tracing subscriber lifecycle management.

use tracing::info;

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Runtime observability state.
#[derive(Debug)]
pub(crate) struct Observability {
    slow_request_threshold_ms: u64,
}

impl Observability {
    /// Initialize structured logging and request tracing settings.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        logging::init_subscriber(config)?;

        Ok(Self {
            slow_request_threshold_ms: settings::slow_request_threshold_ms(),
        })
    }

    /// Log the final state before the process exits.
    pub(crate) fn shutdown(self) {
        info!(
            slow_request_threshold_ms = self.slow_request_threshold_ms,
            "observability shut down"
        );
    }
}
