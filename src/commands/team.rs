use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::OutputFormat;
use crate::error::{GatewayError, GatewayResult};
use crate::formatting::tables;
use crate::models::TeamMember;
use crate::resolver::{self, TeamSelector};

/// Roles the gateway accepts for team members. Validated before any request.
const VALID_ROLES: [&str; 2] = ["admin", "user"];

pub async fn handle_list(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let teams = context.client.list_teams().await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&teams),
        OutputFormat::Table => {
            tables::print_teams(&teams);
            Ok(())
        }
    }
}

pub async fn handle_info(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let selector = TeamSelector::from_settings(&context.settings)?;
    let team = context.client.get_team_info(selector.value()).await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&team),
        OutputFormat::Table => {
            tables::print_team_info(&team);
            Ok(())
        }
    }
}

pub async fn handle_keys(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let selector = TeamSelector::from_settings(&context.settings)?;
    let team_id = resolver::resolve_team(&context.client, &selector).await?;

    let keys = context.client.list_team_keys(&team_id).await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&keys),
        OutputFormat::Table => {
            tables::print_team_keys(&keys);
            Ok(())
        }
    }
}

pub async fn handle_members(context: &CliContext, _matches: &ArgMatches) -> GatewayResult<()> {
    let selector = TeamSelector::from_settings(&context.settings)?;
    let team_id = resolver::resolve_team(&context.client, &selector).await?;

    let members = context.client.list_team_members(&team_id).await?;

    match context.output() {
        OutputFormat::Json => tables::print_json(&members),
        OutputFormat::Table => {
            tables::print_members(&members);
            Ok(())
        }
    }
}

pub async fn handle_add_member(context: &CliContext, matches: &ArgMatches) -> GatewayResult<()> {
    let selector = TeamSelector::from_settings(&context.settings)?;
    let user_id = matches
        .get_one::<String>("user-id")
        .ok_or_else(|| GatewayError::usage("--user-id is required"))?;
    let role = matches
        .get_one::<String>("role")
        .ok_or_else(|| GatewayError::usage("--role is required"))?;

    if !VALID_ROLES.contains(&role.as_str()) {
        return Err(GatewayError::usage(
            "role must be either 'admin' or 'user'",
        ));
    }

    let team_id = resolver::resolve_team(&context.client, &selector).await?;
    let member = TeamMember {
        user_id: user_id.clone(),
        user_email: matches.get_one::<String>("email").cloned(),
        role: role.clone(),
    };

    let response = context.client.add_team_member(&team_id, member).await?;

    println!(
        "Successfully added user {} to team {} ({}) with role {}",
        user_id,
        response.team_id,
        response.team_alias.as_deref().unwrap_or("-"),
        role
    );
    Ok(())
}

pub async fn handle_remove_member(context: &CliContext, matches: &ArgMatches) -> GatewayResult<()> {
    let selector = TeamSelector::from_settings(&context.settings)?;
    let user_id = matches
        .get_one::<String>("user-id")
        .ok_or_else(|| GatewayError::usage("--user-id is required"))?;

    let team_id = resolver::resolve_team(&context.client, &selector).await?;
    let member = TeamMember {
        user_id: user_id.clone(),
        user_email: matches.get_one::<String>("email").cloned(),
        role: String::new(),
    };

    let response = context.client.remove_team_member(&team_id, member).await?;

    println!(
        "Successfully removed user {} from team {} ({})",
        user_id,
        response.team_id,
        response.team_alias.as_deref().unwrap_or("-")
    );
    Ok(())
}
