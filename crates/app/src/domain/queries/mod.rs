//! Queries

pub mod errors;
pub mod service;

pub use errors::QueryServiceError;
pub use service::*;
