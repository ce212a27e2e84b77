//! ABWarehouse Domain Concerns

pub mod company_codes;
pub mod queries;
