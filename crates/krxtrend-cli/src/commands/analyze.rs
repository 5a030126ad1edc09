use std::sync::Arc;

use krxtrend_core::{fetch_listing, Analyzer, DataLocations, HttpClient};

use crate::cli::{AnalyzeArgs, Cli, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &AnalyzeArgs,
    cli: &Cli,
    client: Arc<dyn HttpClient>,
    locations: DataLocations,
) -> Result<String, CliError> {
    let listing = fetch_listing(client.as_ref(), &locations).await?;
    let analyzer = Analyzer::new(client, locations, listing);

    let report = analyzer
        .analyze_within(&args.query_text(), args.window)
        .await?;

    match cli.format {
        OutputFormat::Text => Ok(report.render()),
        OutputFormat::Json => output::to_json(&report, cli.pretty),
    }
}
