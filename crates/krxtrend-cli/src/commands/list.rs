use krxtrend_core::{daily_list, format_daily_list, DataLocations, HttpClient};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(
    cli: &Cli,
    client: &dyn HttpClient,
    locations: &DataLocations,
) -> Result<String, CliError> {
    let list = daily_list(client, locations).await?;

    match cli.format {
        OutputFormat::Text => Ok(format_daily_list(&list)),
        OutputFormat::Json => output::to_json(&list, cli.pretty),
    }
}
