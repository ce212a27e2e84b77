//! Query service.

use abwarehouse::query::{
    QueryRequest, QueryResult, execute,
    schema::{TableSchema, describe_table},
};
use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{database::Db, domain::queries::errors::QueryServiceError};

#[derive(Debug, Clone)]
pub struct InMemoryQueryService {
    db: Db,
}

impl InMemoryQueryService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QueryService for InMemoryQueryService {
    #[tracing::instrument(
        name = "queries.service.execute",
        skip(self, request),
        fields(query = %request.query.trim(), page = request.page.page, limit = request.page.limit),
        err
    )]
    async fn execute_query(&self, request: QueryRequest) -> Result<QueryResult, QueryServiceError> {
        let rows = self.db.read(|store| store.rows())?;

        debug!(snapshot = rows.len(), "took query snapshot");

        Ok(execute(rows, &request)?)
    }

    #[tracing::instrument(name = "queries.service.schema", skip(self), err)]
    async fn schema(&self) -> Result<TableSchema, QueryServiceError> {
        let rows = self.db.read(|store| store.rows())?;

        Ok(describe_table(&rows))
    }
}

#[automock]
#[async_trait]
pub trait QueryService: Send + Sync {
    /// Runs a `SELECT` statement over a snapshot of the company code table.
    async fn execute_query(&self, request: QueryRequest) -> Result<QueryResult, QueryServiceError>;

    /// Describes the queryable table.
    async fn schema(&self) -> Result<TableSchema, QueryServiceError>;
}
