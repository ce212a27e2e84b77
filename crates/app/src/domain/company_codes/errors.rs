//! Company codes service errors.

use abwarehouse::{company_codes::validation::ValidationErrors, store::StoreError};
use thiserror::Error;

use crate::database::DatabaseError;

#[derive(Debug, Error)]
pub enum CompanyCodesServiceError {
    #[error("company code not found")]
    NotFound,

    #[error("Company code '{0}' already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Validation(ValidationErrors),

    #[error("storage error")]
    Database(#[from] DatabaseError),
}

impl From<StoreError> for CompanyCodesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Validation(errors) => Self::Validation(errors),
            StoreError::DuplicateKey(code) => Self::AlreadyExists(code),
        }
    }
}
