//! Company codes service.

use abwarehouse::{
    company_codes::{
        CompanyCode, CompanyCodeFilters, CompanyCodeUpdate, CompanyCodeUuid, NewCompanyCode,
    },
    store::CompanyCodeStats,
};
use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{database::Db, domain::company_codes::errors::CompanyCodesServiceError};

#[derive(Debug, Clone)]
pub struct InMemoryCompanyCodesService {
    db: Db,
}

impl InMemoryCompanyCodesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyCodesService for InMemoryCompanyCodesService {
    #[tracing::instrument(name = "company_codes.service.list", skip(self), err)]
    async fn list_company_codes(
        &self,
        filters: CompanyCodeFilters,
    ) -> Result<Vec<CompanyCode>, CompanyCodesServiceError> {
        Ok(self.db.read(|store| store.find_all(&filters))?)
    }

    #[tracing::instrument(
        name = "company_codes.service.get",
        skip(self),
        fields(company_code_id = %id),
        err
    )]
    async fn get_company_code(
        &self,
        id: CompanyCodeUuid,
    ) -> Result<CompanyCode, CompanyCodesServiceError> {
        self.db
            .read(|store| store.find_by_id(id))?
            .ok_or(CompanyCodesServiceError::NotFound)
    }

    #[tracing::instrument(name = "company_codes.service.find_by_code", skip(self), err)]
    async fn find_by_company_code(
        &self,
        company_code: String,
    ) -> Result<CompanyCode, CompanyCodesServiceError> {
        self.db
            .read(|store| store.find_by_company_code(&company_code))?
            .ok_or(CompanyCodesServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "company_codes.service.create",
        skip(self, company_code),
        fields(company_code = ?company_code.company_code),
        err
    )]
    async fn create_company_code(
        &self,
        company_code: NewCompanyCode,
    ) -> Result<CompanyCode, CompanyCodesServiceError> {
        let created = self.db.write(|store| store.create(company_code))??;

        info!(id = %created.id, company_code = %created.company_code, "company code created");

        Ok(created)
    }

    #[tracing::instrument(
        name = "company_codes.service.update",
        skip(self, update),
        fields(company_code_id = %id),
        err
    )]
    async fn update_company_code(
        &self,
        id: CompanyCodeUuid,
        update: CompanyCodeUpdate,
    ) -> Result<CompanyCode, CompanyCodesServiceError> {
        self.db
            .write(|store| store.update(id, update))??
            .ok_or(CompanyCodesServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "company_codes.service.delete",
        skip(self),
        fields(company_code_id = %id),
        err
    )]
    async fn delete_company_code(&self, id: CompanyCodeUuid) -> Result<(), CompanyCodesServiceError> {
        if !self.db.write(|store| store.delete(id))? {
            return Err(CompanyCodesServiceError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "company_codes.service.stats", skip(self), err)]
    async fn stats(&self) -> Result<CompanyCodeStats, CompanyCodesServiceError> {
        Ok(self.db.read(|store| store.stats())?)
    }
}

#[automock]
#[async_trait]
pub trait CompanyCodesService: Send + Sync {
    /// Retrieves company codes matching the filters, in business-key order.
    async fn list_company_codes(
        &self,
        filters: CompanyCodeFilters,
    ) -> Result<Vec<CompanyCode>, CompanyCodesServiceError>;

    /// Retrieve a single company code by id.
    async fn get_company_code(
        &self,
        id: CompanyCodeUuid,
    ) -> Result<CompanyCode, CompanyCodesServiceError>;

    /// Retrieve a single company code by business key.
    async fn find_by_company_code(
        &self,
        company_code: String,
    ) -> Result<CompanyCode, CompanyCodesServiceError>;

    /// Validates and creates a new company code.
    async fn create_company_code(
        &self,
        company_code: NewCompanyCode,
    ) -> Result<CompanyCode, CompanyCodesServiceError>;

    /// Applies a partial update to a company code.
    async fn update_company_code(
        &self,
        id: CompanyCodeUuid,
        update: CompanyCodeUpdate,
    ) -> Result<CompanyCode, CompanyCodesServiceError>;

    /// Deletes a company code.
    async fn delete_company_code(&self, id: CompanyCodeUuid) -> Result<(), CompanyCodesServiceError>;

    /// Counts company codes in total, per country and per currency.
    async fn stats(&self) -> Result<CompanyCodeStats, CompanyCodesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_company(code: &str) -> NewCompanyCode {
        NewCompanyCode {
            company_code: Some(code.to_string()),
            company_name: Some("ABWarehouse Canada".to_string()),
            city: Some("Toronto".to_string()),
            country: Some("CA".to_string()),
            currency: Some("CAD".to_string()),
            language: Some("EN".to_string()),
            ..NewCompanyCode::default()
        }
    }

    #[tokio::test]
    async fn create_company_code_returns_stored_record() -> TestResult {
        let ctx = TestContext::new()?;

        let created = ctx
            .company_codes
            .create_company_code(new_company("CA01"))
            .await?;

        let fetched = ctx.company_codes.get_company_code(created.id).await?;

        assert_eq!(created.company_code, "CA01");
        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn create_duplicate_returns_already_exists() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx
            .company_codes
            .create_company_code(new_company("US01"))
            .await;

        assert!(matches!(
            result,
            Err(CompanyCodesServiceError::AlreadyExists(ref code)) if code == "US01"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn create_invalid_returns_field_errors() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx
            .company_codes
            .create_company_code(NewCompanyCode::default())
            .await;

        let Err(CompanyCodesServiceError::Validation(errors)) = result else {
            return Err("expected validation errors".into());
        };

        assert_eq!(errors.errors().len(), 6);

        Ok(())
    }

    #[tokio::test]
    async fn list_company_codes_applies_filters() -> TestResult {
        let ctx = TestContext::new()?;

        let records = ctx
            .company_codes
            .list_company_codes(CompanyCodeFilters {
                search: Some("deutschland".to_string()),
                ..CompanyCodeFilters::default()
            })
            .await?;

        assert_eq!(records.len(), 1);
        assert_eq!(
            records.first().map(|r| r.company_code.as_str()),
            Some("DE01")
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_by_company_code_is_exact() -> TestResult {
        let ctx = TestContext::new()?;

        let found = ctx
            .company_codes
            .find_by_company_code("GB01".to_string())
            .await?;
        let missing = ctx
            .company_codes
            .find_by_company_code("gb01".to_string())
            .await;

        assert_eq!(found.city, "London");
        assert!(matches!(missing, Err(CompanyCodesServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn update_company_code_changes_fields() -> TestResult {
        let ctx = TestContext::new()?;
        let us01 = ctx
            .company_codes
            .find_by_company_code("US01".to_string())
            .await?;

        let updated = ctx
            .company_codes
            .update_company_code(
                us01.id,
                CompanyCodeUpdate {
                    company_name: Some("ABWarehouse Americas".to_string()),
                    ..CompanyCodeUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.company_name, "ABWarehouse Americas");
        assert_eq!(updated.company_code, "US01");
        assert_eq!(updated.created_at, us01.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_company_code_returns_not_found() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx
            .company_codes
            .update_company_code(
                CompanyCodeUuid::new(),
                CompanyCodeUpdate {
                    city: Some("Nowhere".to_string()),
                    ..CompanyCodeUpdate::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CompanyCodesServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn delete_company_code_then_get_returns_not_found() -> TestResult {
        let ctx = TestContext::new()?;
        let de01 = ctx
            .company_codes
            .find_by_company_code("DE01".to_string())
            .await?;

        ctx.company_codes.delete_company_code(de01.id).await?;

        let result = ctx.company_codes.get_company_code(de01.id).await;
        let again = ctx.company_codes.delete_company_code(de01.id).await;

        assert!(matches!(result, Err(CompanyCodesServiceError::NotFound)));
        assert!(matches!(again, Err(CompanyCodesServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn stats_count_seeded_records() -> TestResult {
        let ctx = TestContext::new()?;

        let stats = ctx.company_codes.stats().await?;

        assert_eq!(stats.total_companies, 5);
        assert_eq!(stats.by_country.len(), 4);

        Ok(())
    }
}
