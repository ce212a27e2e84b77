//! Service test support.

mod context;

pub use context::TestContext;
