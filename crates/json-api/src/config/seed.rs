//! Seed Data Config

use std::path::PathBuf;

use abwarehouse_app::context::Seed;
use clap::{ArgAction, Args};

/// Initial company code data.
#[derive(Debug, Args)]
pub struct SeedConfig {
    /// Load sample company codes at startup.
    #[arg(
        long,
        env = "SEED_FIXTURES",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed_fixtures: bool,

    /// Fixture file to load instead of the bundled sample set.
    #[arg(long, env = "FIXTURES_PATH")]
    pub fixtures_path: Option<PathBuf>,
}

impl SeedConfig {
    /// Where the store's initial records come from.
    #[must_use]
    pub fn seed(&self) -> Seed<'_> {
        match (self.seed_fixtures, &self.fixtures_path) {
            (false, _) => Seed::Empty,
            (true, Some(path)) => Seed::File(path),
            (true, None) => Seed::Bundled,
        }
    }
}
