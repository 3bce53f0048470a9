use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::OutputFormat;
use crate::error::{GatewayError, GatewayResult};
use crate::formatting::tables;

pub async fn handle_list(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let models = context.client.list_models().await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&models.data),
        OutputFormat::Table => {
            tables::print_models(&models.data);
            Ok(())
        }
    }
}

pub async fn handle_info(context: &CliContext, matches: &ArgMatches) -> GatewayResult<()> {
    let models = context.client.get_model_info().await?;

    // Client-side filter by model name or deployment id.
    let filtered = match matches.get_one::<String>("model") {
        Some(filter) => models
            .into_iter()
            .filter(|m| m.model_name == *filter || m.model_info.id == *filter)
            .collect(),
        None => models,
    };

    match context.output() {
        OutputFormat::Json => tables::print_json(&filtered),
        OutputFormat::Table => {
            tables::print_model_info(&filtered);
            Ok(())
        }
    }
}

pub async fn handle_health(context: &CliContext, matches: &ArgMatches) -> GatewayResult<()> {
    let model = matches
        .get_one::<String>("model")
        .ok_or_else(|| GatewayError::usage("--model is required"))?;

    let health = context.client.get_model_health(model).await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&health),
        OutputFormat::Table => {
            tables::print_model_health(&health);
            Ok(())
        }
    }
}
