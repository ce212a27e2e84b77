//! Query Handlers

pub(crate) mod execute;
pub(crate) mod schema;
