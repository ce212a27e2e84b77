//! ABWarehouse
//!
//! ABWarehouse is the company code master-data core: an in-memory record store
//! with a unique business key, and a small `SELECT`-only query engine over it.

pub mod company_codes;
pub mod fixtures;
pub mod options;
pub mod prelude;
pub mod query;
pub mod rows;
pub mod store;
pub mod uuids;
