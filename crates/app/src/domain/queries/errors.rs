//! Query service errors.

use abwarehouse::query::QueryError;
use thiserror::Error;

use crate::database::DatabaseError;

#[derive(Debug, Error)]
pub enum QueryServiceError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("storage error")]
    Database(#[from] DatabaseError),
}
