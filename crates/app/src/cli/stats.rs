use abwarehouse_app::context::AppContext;
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct StatsArgs {
    /// Print the raw JSON statistics
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(context: &AppContext, args: StatsArgs) -> Result<(), String> {
    let stats = context
        .company_codes
        .stats()
        .await
        .map_err(|error| format!("failed to read statistics: {error}"))?;

    if args.json {
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|error| format!("failed to encode statistics: {error}"))?;

        println!("{json}");

        return Ok(());
    }

    println!("total_companies: {}", stats.total_companies);
    println!();
    println!("by country:");

    for entry in &stats.by_country {
        println!("  {}: {}", entry.country, entry.count);
    }

    println!();
    println!("by currency:");

    for entry in &stats.by_currency {
        println!("  {}: {}", entry.currency, entry.count);
    }

    Ok(())
}
