use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::OutputFormat;
use crate::error::GatewayResult;
use crate::formatting::tables;
use crate::resolver::UserSelector;

pub async fn handle_info(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let selector = UserSelector::from_settings(&context.settings)?;
    let response = context.client.get_user_info(&selector).await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&response),
        OutputFormat::Table => {
            tables::print_user_info(&response);
            Ok(())
        }
    }
}

pub async fn handle_keys(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let selector = UserSelector::from_settings(&context.settings)?;
    let response = context.client.get_user_info(&selector).await?;

    match context.output() {
        // Sub-field emission: only the keys list.
        OutputFormat::Json => tables::print_json(&response.keys),
        OutputFormat::Table => {
            tables::print_user_keys(&response);
            Ok(())
        }
    }
}

pub async fn handle_teams(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let selector = UserSelector::from_settings(&context.settings)?;
    let response = context.client.get_user_info(&selector).await?;

    match context.output() {
        // Sub-field emission: only the teams list.
        OutputFormat::Json => tables::print_json(&response.teams),
        OutputFormat::Table => {
            tables::print_user_teams(&response);
            Ok(())
        }
    }
}

pub async fn handle_list(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let response = context.client.list_users().await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&response),
        OutputFormat::Table => {
            tables::print_users(&response);
            Ok(())
        }
    }
}
