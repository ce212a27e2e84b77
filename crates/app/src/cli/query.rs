use std::io;

use abwarehouse::query::{
    PageRequest, QueryRequest, SortDirection,
    page::{DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD},
    render,
};
use abwarehouse_app::context::AppContext;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for SortDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => SortDirection::Asc,
            Direction::Desc => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct QueryArgs {
    /// SELECT statement, e.g. "SELECT * FROM companies WHERE country = 'US'"
    query: String,

    /// One-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Page size (1 to 1000)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    limit: usize,

    /// Column used to sort the result pages
    #[arg(long, default_value = DEFAULT_SORT_FIELD)]
    sort_field: String,

    /// Direction used to sort the result pages
    #[arg(long, value_enum, default_value_t = Direction::Asc)]
    sort_direction: Direction,

    /// Print the raw JSON result instead of a table
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(context: &AppContext, args: QueryArgs) -> Result<(), String> {
    let request = QueryRequest::new(args.query).with_page(PageRequest {
        page: args.page,
        limit: args.limit,
        sort_field: args.sort_field,
        sort_direction: args.sort_direction.into(),
    });

    let result = context
        .queries
        .execute_query(request)
        .await
        .map_err(|error| format!("query failed: {error}"))?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|error| format!("failed to encode result: {error}"))?;

        println!("{json}");

        return Ok(());
    }

    render::write_to(io::stdout().lock(), &result)
        .map_err(|error| format!("failed to print result: {error}"))
}
