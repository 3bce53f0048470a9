use colored::*;
use serde::Serialize;

use super::utils::*;
use crate::error::GatewayResult;
use crate::models::*;

/// JSON mode: pretty-printed with stable 2-space indentation, structure
/// emitted verbatim.
pub fn print_json<T: Serialize>(value: &T) -> GatewayResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn rule(width: usize) {
    println!("{}", "─".repeat(width).dimmed());
}

fn field(name: &str, value: &str) {
    println!("{:<12} {}", format!("{}:", name).bold(), value);
}

pub fn print_key_info(response: &KeyResponse) {
    let info = &response.info;
    println!("{}", "Key Information".bold());
    rule(60);
    field("Name", &mask_key(&info.key_name));
    field("Alias", or_dash(info.key_alias.as_deref()));
    field("Spend", &format_spend(info.spend));
    field("Team", or_dash(info.team_id.as_deref()));
    field("User", or_dash(info.user_id.as_deref()));
    field("Models", &join_models(&info.models));
    field(
        "Created",
        &info
            .created_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string()),
    );
}

pub fn print_key_list(keys: &[KeyListEntry]) {
    if keys.is_empty() {
        println!("{}", "No API keys found.".dimmed());
        return;
    }

    rule(100);
    println!(
        "{:<12} {:<16} {:<14} {:<9} {:<22} {:<20}",
        "KEY NAME".bold(),
        "ALIAS".bold(),
        "TEAM".bold(),
        "SPEND".bold(),
        "MODELS".bold(),
        "CREATED".bold()
    );
    rule(100);

    for key in keys {
        println!(
            "{:<12} {:<16} {:<14} {:<9} {:<22} {:<20}",
            mask_key(&key.key_name),
            or_dash(key.key_alias.as_deref()),
            truncate(or_dash(key.team_id.as_deref()), 14),
            format_spend(key.spend),
            truncate(first_model(&key.models), 22),
            key.created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    rule(100);
}

pub fn print_teams(teams: &[Team]) {
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return;
    }

    rule(90);
    println!(
        "{:<38} {:<16} {:<16} {:<9}",
        "TEAM ID".bold(),
        "ALIAS".bold(),
        "MODELS".bold(),
        "SPEND".bold()
    );
    rule(90);

    for team in teams {
        println!(
            "{:<38} {:<16} {:<16} {:<9}",
            team.team_id,
            or_dash(team.team_alias.as_deref()),
            summarize_models(&team.models),
            format_spend(team.spend),
        );
    }
    rule(90);
}

pub fn print_team_info(team: &Team) {
    println!("{}", "Team Information".bold());
    rule(60);
    field("Team ID", &team.team_id);
    field("Alias", or_dash(team.team_alias.as_deref()));
    field("Spend", &format_spend(team.spend));
    field("Models", &join_models(&team.models));
    field(
        "Created",
        &team
            .created_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string()),
    );
}

pub fn print_team_keys(keys: &[KeyResponse]) {
    if keys.is_empty() {
        println!("{}", "No API keys found for team.".dimmed());
        return;
    }

    rule(100);
    println!(
        "{:<12} {:<16} {:<16} {:<9} {:<18} {:<20}",
        "KEY NAME".bold(),
        "ALIAS".bold(),
        "USER ID".bold(),
        "SPEND".bold(),
        "MODELS".bold(),
        "CREATED".bold()
    );
    rule(100);

    for key in keys {
        let info = &key.info;
        println!(
            "{:<12} {:<16} {:<16} {:<9} {:<18} {:<20}",
            mask_key(&info.key_name),
            or_dash(info.key_alias.as_deref()),
            truncate(or_dash(info.user_id.as_deref()), 16),
            format_spend(info.spend),
            summarize_models(&info.models),
            info.created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    rule(100);
}

pub fn print_members(members: &[TeamMember]) {
    if members.is_empty() {
        println!("{}", "No members found.".dimmed());
        return;
    }

    rule(70);
    println!(
        "{:<24} {:<30} {:<8}",
        "USER ID".bold(),
        "EMAIL".bold(),
        "ROLE".bold()
    );
    rule(70);

    for member in members {
        println!(
            "{:<24} {:<30} {:<8}",
            member.user_id,
            or_dash(member.user_email.as_deref()),
            member.role,
        );
    }
    rule(70);
}

pub fn print_user_info(response: &UserResponse) {
    let Some(info) = &response.user_info else {
        println!("{}", "No user information available.".dimmed());
        return;
    };

    println!("{}", "User Information".bold());
    rule(60);
    field("User ID", &info.user_id);
    field("Email", or_dash(info.user_email.as_deref()));
    field("Role", or_dash(info.user_role.as_deref()));
    field("Spend", &format_spend(info.spend));
    if let Some(max_budget) = info.max_budget {
        if max_budget > 0.0 {
            field("Max Budget", &format_spend(max_budget));
        }
    }
    field(
        "Created",
        &info
            .created_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string()),
    );
    field(
        "Updated",
        &info
            .updated_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string()),
    );
}

pub fn print_user_keys(response: &UserResponse) {
    if response.keys.is_empty() {
        println!("{}", "No API keys found for user.".dimmed());
        return;
    }

    rule(110);
    println!(
        "{:<12} {:<16} {:<16} {:<9} {:<30} {:<20}",
        "KEY NAME".bold(),
        "ALIAS".bold(),
        "TEAM".bold(),
        "SPEND".bold(),
        "MODELS".bold(),
        "CREATED".bold()
    );
    rule(110);

    for key in &response.keys {
        // Prefer the team alias when the user's team list knows the id.
        let team = key
            .team_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| {
                response
                    .teams
                    .iter()
                    .find(|t| t.team_id == id)
                    .and_then(|t| t.team_alias.as_deref().filter(|a| !a.is_empty()))
                    .unwrap_or(id)
            })
            .unwrap_or("-");

        println!(
            "{:<12} {:<16} {:<16} {:<9} {:<30} {:<20}",
            mask_key(&key.key_name),
            or_dash(key.key_alias.as_deref()),
            truncate(team, 16),
            format_spend(key.spend),
            truncate(&join_models(&key.models), 30),
            key.created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    rule(110);
}

pub fn print_user_teams(response: &UserResponse) {
    if response.teams.is_empty() {
        println!("{}", "User is not a member of any teams.".dimmed());
        return;
    }
    let Some(info) = &response.user_info else {
        println!("{}", "No user information available.".dimmed());
        return;
    };

    rule(100);
    println!(
        "{:<38} {:<16} {:<8} {:<18} {:<9}",
        "TEAM ID".bold(),
        "ALIAS".bold(),
        "ROLE".bold(),
        "MODELS".bold(),
        "SPEND".bold()
    );
    rule(100);

    for team in &response.teams {
        for member in &team.members_with_roles {
            if member.user_id == info.user_id {
                println!(
                    "{:<38} {:<16} {:<8} {:<18} {:<9}",
                    team.team_id,
                    or_dash(team.team_alias.as_deref()),
                    member.role,
                    summarize_models(&team.models),
                    format_spend(team.spend),
                );
            }
        }
    }
    rule(100);
}

pub fn print_users(response: &UserResponse) {
    if response.keys.is_empty() && response.user_info.is_none() && response.teams.is_empty() {
        println!("{}", "No users found.".dimmed());
        return;
    }
    // The bare /user/info listing reuses the single-user blocks.
    print_user_info(response);
}

pub fn print_models(models: &[ModelSummary]) {
    if models.is_empty() {
        println!("{}", "No models found.".dimmed());
        return;
    }

    rule(70);
    println!(
        "{:<28} {:<12} {:<20}",
        "ID".bold(),
        "OWNER".bold(),
        "CREATED".bold()
    );
    rule(70);

    for model in models {
        println!(
            "{:<28} {:<12} {:<20}",
            truncate(&model.id, 28),
            truncate(&model.owned_by, 12),
            format_epoch(model.created),
        );
    }
    rule(70);
}

pub fn print_model_info(models: &[ModelInfoItem]) {
    if models.is_empty() {
        println!("{}", "No models found.".dimmed());
        return;
    }

    rule(110);
    println!(
        "{:<20} {:<8} {:<10} {:<11} {:<14} {:<7} {:<7} {:<7} {:<7}",
        "MODEL".bold(),
        "TIER".bold(),
        "MODE".bold(),
        "MAX TOKENS".bold(),
        "PROVIDER".bold(),
        "VISION".bold(),
        "FUNC".bold(),
        "TOOL".bold(),
        "STREAM".bold()
    );
    rule(110);

    for model in models {
        let info = &model.model_info;
        let max_tokens = info
            .max_tokens
            .filter(|t| *t > 0)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<20} {:<8} {:<10} {:<11} {:<14} {:<7} {:<7} {:<7} {:<7}",
            truncate(&model.model_name, 20),
            truncate(or_dash(info.tier.as_deref()), 8),
            truncate(or_dash(info.mode.as_deref()), 10),
            max_tokens,
            truncate(or_dash(info.provider.as_deref()), 14),
            info.supports_vision,
            info.supports_function,
            info.supports_tool,
            info.supports_streaming,
        );
    }
    rule(110);
}

fn print_endpoints(endpoints: &[HealthEndpoint]) {
    if endpoints.is_empty() {
        println!("  {}", "None".dimmed());
        return;
    }

    println!(
        "  {:<42} {:<12} {:<10} {:<12} {:<12}",
        "API BASE".bold(),
        "REGION".bold(),
        "REQ LEFT".bold(),
        "TOKENS LEFT".bold(),
        "PROVIDER".bold()
    );
    rule(92);

    for ep in endpoints {
        println!(
            "  {:<42} {:<12} {:<10} {:<12} {:<12}",
            truncate(or_dash(ep.api_base.as_deref()), 42),
            or_dash(ep.region.as_deref()),
            or_dash(ep.remaining_requests.as_deref()),
            or_dash(ep.remaining_tokens.as_deref()),
            or_dash(ep.provider.as_deref()),
        );
    }
}

pub fn print_model_health(health: &ModelHealth) {
    println!(
        "{} ({})",
        "Healthy Endpoints".bold().green(),
        health.healthy_count
    );
    print_endpoints(&health.healthy_endpoints);

    println!();
    println!(
        "{} ({})",
        "Unhealthy Endpoints".bold().red(),
        health.unhealthy_count
    );
    print_endpoints(&health.unhealthy_endpoints);
}
