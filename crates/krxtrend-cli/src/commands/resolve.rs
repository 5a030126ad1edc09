use krxtrend_core::{fetch_listing, resolve, AnalysisError, DataLocations, HttpClient};

use crate::cli::{Cli, OutputFormat, ResolveArgs};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &ResolveArgs,
    cli: &Cli,
    client: &dyn HttpClient,
    locations: &DataLocations,
) -> Result<String, CliError> {
    let table = fetch_listing(client, locations).await?;
    let input = args.query_text();

    let listing = resolve(&input, &table).ok_or(AnalysisError::IdentifierNotFound { input })?;

    match cli.format {
        OutputFormat::Text => Ok(format!("{} ({})", listing.name, listing.code)),
        OutputFormat::Json => output::to_json(&listing, cli.pretty),
    }
}
