//! Company Code Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod options;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod update;
