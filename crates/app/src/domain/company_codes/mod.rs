//! Company Codes

pub mod errors;
pub mod service;

pub use errors::CompanyCodesServiceError;
pub use service::*;
