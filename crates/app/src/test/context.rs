//! Test context for service-level tests.

use abwarehouse::fixtures::{CompanyCodesFixture, FixtureError};

use crate::{
    database::{self, Db},
    domain::{company_codes::InMemoryCompanyCodesService, queries::InMemoryQueryService},
};

/// Services wired to one store seeded with the bundled fixtures.
pub struct TestContext {
    pub db: Db,
    pub company_codes: InMemoryCompanyCodesService,
    pub queries: InMemoryQueryService,
}

impl TestContext {
    pub fn new() -> Result<Self, FixtureError> {
        let db = database::open(Some(CompanyCodesFixture::bundled()?))?;

        Ok(Self {
            company_codes: InMemoryCompanyCodesService::new(db.clone()),
            queries: InMemoryQueryService::new(db.clone()),
            db,
        })
    }
}
