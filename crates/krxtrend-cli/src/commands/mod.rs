mod analyze;
mod list;
mod resolve;

use std::sync::Arc;

use krxtrend_core::{DataLocations, HttpClient, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<String, CliError> {
    let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_timeout_ms(cli.timeout_ms));
    let locations = locations_from(cli);

    match &cli.command {
        Command::Analyze(args) => analyze::run(args, cli, client, locations).await,
        Command::Resolve(args) => resolve::run(args, cli, client.as_ref(), &locations).await,
        Command::List(_) => list::run(cli, client.as_ref(), &locations).await,
    }
}

fn locations_from(cli: &Cli) -> DataLocations {
    let mut locations = DataLocations::default();
    if let Some(listing_url) = &cli.listing_url {
        locations.listing_url = listing_url.clone();
    }
    if let Some(post_base) = &cli.post_base {
        locations.post_base = post_base.clone();
    }
    if let Some(price_base) = &cli.price_base {
        locations.price_base = price_base.clone();
    }
    locations
}
