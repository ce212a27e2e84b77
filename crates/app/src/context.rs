//! App Context

use std::{path::Path, sync::Arc};

use abwarehouse::fixtures::{CompanyCodesFixture, FixtureError};
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        company_codes::{CompanyCodesService, InMemoryCompanyCodesService},
        queries::{InMemoryQueryService, QueryService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load company code fixtures")]
    Fixtures(#[source] FixtureError),
}

/// Where the initial company codes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed<'a> {
    /// Start with an empty table.
    Empty,

    /// Load the fixture set embedded in the library.
    Bundled,

    /// Load a fixture file from disk.
    File(&'a Path),
}

#[derive(Clone)]
pub struct AppContext {
    pub company_codes: Arc<dyn CompanyCodesService>,
    pub queries: Arc<dyn QueryService>,
}

impl AppContext {
    /// Build application context around an existing store handle.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            company_codes: Arc::new(InMemoryCompanyCodesService::new(db.clone())),
            queries: Arc::new(InMemoryQueryService::new(db.clone())),
        }
    }

    /// Build application context over a fresh in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error when the seed fixtures cannot be read, parsed or stored.
    pub fn in_memory(seed: Seed<'_>) -> Result<Self, AppInitError> {
        let fixtures = match seed {
            Seed::Empty => None,
            Seed::Bundled => Some(CompanyCodesFixture::bundled()),
            Seed::File(path) => Some(CompanyCodesFixture::from_path(path)),
        }
        .transpose()
        .map_err(AppInitError::Fixtures)?;

        let db = database::open(fixtures).map_err(AppInitError::Fixtures)?;

        Ok(Self::from_db(&db))
    }
}

#[cfg(test)]
mod tests {
    use abwarehouse::company_codes::NewCompanyCode;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn bundled_seed_loads_sample_companies() -> TestResult {
        let ctx = AppContext::in_memory(Seed::Bundled)?;

        assert_eq!(ctx.company_codes.stats().await?.total_companies, 5);

        Ok(())
    }

    #[tokio::test]
    async fn services_share_one_store() -> TestResult {
        let ctx = AppContext::in_memory(Seed::Empty)?;

        assert_eq!(ctx.queries.schema().await?.total_records, 0);

        ctx.company_codes
            .create_company_code(NewCompanyCode {
                company_code: Some("FR01".to_string()),
                company_name: Some("ABWarehouse France".to_string()),
                city: Some("Paris".to_string()),
                country: Some("FR".to_string()),
                currency: Some("EUR".to_string()),
                language: Some("FR".to_string()),
                ..NewCompanyCode::default()
            })
            .await?;

        assert_eq!(ctx.queries.schema().await?.total_records, 1);

        Ok(())
    }

    #[test]
    fn missing_fixture_file_fails() {
        let result = AppContext::in_memory(Seed::File(Path::new("missing/company_codes.yml")));

        assert!(matches!(result, Err(AppInitError::Fixtures(_))));
    }
}
