use std::path::PathBuf;

use abwarehouse_app::context::{AppContext, Seed};
use clap::{Args, Parser, Subcommand};

mod query;
mod stats;

#[derive(Debug, Parser)]
#[command(name = "abwarehouse-app", about = "ABWarehouse company code CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Company code fixture file; the bundled sample set is used when omitted
    #[arg(long, global = true, env = "FIXTURES_PATH")]
    fixtures: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a SELECT statement against the company code table
    Query(query::QueryArgs),

    /// Print company code statistics
    Stats(stats::StatsArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let seed = self
            .source
            .fixtures
            .as_deref()
            .map_or(Seed::Bundled, Seed::File);

        let context = AppContext::in_memory(seed)
            .map_err(|error| format!("failed to open company code store: {error}"))?;

        match self.command {
            Commands::Query(args) => query::run(&context, args).await,
            Commands::Stats(args) => stats::run(&context, args).await,
        }
    }
}
