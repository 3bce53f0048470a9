use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::OutputFormat;
use crate::error::{GatewayError, GatewayResult};
use crate::formatting::tables;
use crate::resolver::{self, TeamSelector};

pub async fn handle_info(context: &CliContext, matches: &ArgMatches) -> GatewayResult<()> {
    let key = matches
        .get_one::<String>("key")
        .ok_or_else(|| GatewayError::usage("--key is required"))?;

    let response = context.client.get_key_info(key).await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&response),
        OutputFormat::Table => {
            tables::print_key_info(&response);
            Ok(())
        }
    }
}

pub async fn handle_list(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    // Team scope is optional here; a selector parse failure just means the
    // listing is unscoped.
    let team_id = match TeamSelector::from_settings(&context.settings) {
        Ok(selector) => Some(resolver::resolve_team(&context.client, &selector).await?),
        Err(_) => None,
    };

    let page = context.client.list_keys(team_id.as_deref()).await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&page.keys),
        OutputFormat::Table => {
            tables::print_key_list(&page.keys);
            Ok(())
        }
    }
}
