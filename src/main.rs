use std::process;

use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};

use gatewayctl::cli_context::CliContext;
use gatewayctl::commands;
use gatewayctl::config::Settings;
use gatewayctl::error::{GatewayError, GatewayResult};
use gatewayctl::logging;

fn team_selector_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("team-id")
            .long("team-id")
            .short('t')
            .global(true)
            .help("Team ID to perform operations on"),
    )
    .arg(
        Arg::new("team-alias")
            .long("team-alias")
            .short('a')
            .global(true)
            .help("Team alias to perform operations on"),
    )
}

fn build_cli() -> Command {
    Command::new("gatewayctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Administer an LLM gateway control plane: keys, models, teams, and users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Config file (default is $HOME/.gatewayctl.yaml)"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Gateway API URL"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .global(true)
                .help("Gateway API key"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .global(true)
                .value_parser(["table", "json"])
                .help("Output format"),
        )
        .subcommand(
            Command::new("key")
                .about("Manage API keys")
                .subcommand_required(true)
                .subcommand(
                    Command::new("info")
                        .about("Get API key info")
                        .arg(
                            Arg::new("key")
                                .long("key")
                                .required(true)
                                .help("API key string to get info for"),
                        ),
                )
                .subcommand(team_selector_args(
                    Command::new("list").about("List API keys, optionally scoped to a team"),
                )),
        )
        .subcommand(
            Command::new("model")
                .about("Manage and inspect available models")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List all available models"))
                .subcommand(
                    Command::new("info")
                        .about("Show detailed info for all models")
                        .arg(
                            Arg::new("model")
                                .long("model")
                                .help("Model name or ID to filter"),
                        ),
                )
                .subcommand(
                    Command::new("health")
                        .about("Show health and endpoint status for a specific model")
                        .arg(
                            Arg::new("model")
                                .long("model")
                                .required(true)
                                .help("Model ID to check health for"),
                        ),
                ),
        )
        .subcommand(
            team_selector_args(
                Command::new("team")
                    .about("Manage teams and their members")
                    .subcommand_required(true),
            )
            .subcommand(Command::new("list").about("List all teams"))
            .subcommand(Command::new("info").about("Display team information"))
            .subcommand(Command::new("keys").about("List API keys for a team"))
            .subcommand(Command::new("members").about("List members in a team"))
            .subcommand(
                Command::new("add-member")
                    .about("Add a member to a team")
                    .arg(
                        Arg::new("user-id")
                            .long("user-id")
                            .short('u')
                            .required(true)
                            .help("User ID to add"),
                    )
                    .arg(
                        Arg::new("email")
                            .long("email")
                            .short('e')
                            .help("User email address"),
                    )
                    .arg(
                        Arg::new("role")
                            .long("role")
                            .short('r')
                            .required(true)
                            .help("Role to assign (admin/user)"),
                    ),
            )
            .subcommand(
                Command::new("remove-member")
                    .about("Remove a member from a team")
                    .arg(
                        Arg::new("user-id")
                            .long("user-id")
                            .short('u')
                            .required(true)
                            .help("User ID to remove"),
                    )
                    .arg(
                        Arg::new("email")
                            .long("email")
                            .short('e')
                            .help("User email address"),
                    ),
            ),
        )
        .subcommand(
            Command::new("user")
                .about("Manage users and their information")
                .subcommand_required(true)
                .arg(
                    Arg::new("user-id")
                        .long("user-id")
                        .short('u')
                        .global(true)
                        .help("User ID to perform operations on"),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .global(true)
                        .help("User email to perform operations on"),
                )
                .subcommand(Command::new("info").about("Display user information"))
                .subcommand(Command::new("keys").about("List API keys associated with a user"))
                .subcommand(Command::new("teams").about("List teams a user belongs to"))
                .subcommand(Command::new("list").about("List users visible to the caller")),
        )
}

fn context(matches: &ArgMatches) -> GatewayResult<CliContext> {
    let settings = Settings::resolve(matches)?;
    CliContext::new(settings)
}

async fn run(matches: &ArgMatches) -> GatewayResult<()> {
    match matches.subcommand() {
        Some(("key", key_matches)) => match key_matches.subcommand() {
            Some(("info", m)) => commands::key::handle_info(&context(m)?, m).await,
            Some(("list", m)) => commands::key::handle_list(&context(m)?, m).await,
            _ => unreachable!("subcommand required"),
        },
        Some(("model", model_matches)) => match model_matches.subcommand() {
            Some(("list", m)) => commands::model::handle_list(&context(m)?, m).await,
            Some(("info", m)) => commands::model::handle_info(&context(m)?, m).await,
            Some(("health", m)) => commands::model::handle_health(&context(m)?, m).await,
            _ => unreachable!("subcommand required"),
        },
        Some(("team", team_matches)) => match team_matches.subcommand() {
            Some(("list", m)) => commands::team::handle_list(&context(m)?, m).await,
            Some(("info", m)) => commands::team::handle_info(&context(m)?, m).await,
            Some(("keys", m)) => commands::team::handle_keys(&context(m)?, m).await,
            Some(("members", m)) => commands::team::handle_members(&context(m)?, m).await,
            Some(("add-member", m)) => commands::team::handle_add_member(&context(m)?, m).await,
            Some(("remove-member", m)) => {
                commands::team::handle_remove_member(&context(m)?, m).await
            }
            _ => unreachable!("subcommand required"),
        },
        Some(("user", user_matches)) => match user_matches.subcommand() {
            Some(("info", m)) => commands::user::handle_info(&context(m)?, m).await,
            Some(("keys", m)) => commands::user::handle_keys(&context(m)?, m).await,
            Some(("teams", m)) => commands::user::handle_teams(&context(m)?, m).await,
            Some(("list", m)) => commands::user::handle_list(&context(m)?, m).await,
            _ => unreachable!("subcommand required"),
        },
        _ => Err(GatewayError::usage("unknown command")),
    }
}

#[tokio::main]
async fn main() {
    // Best-effort; the tool works without a log file.
    let _ = logging::init_logging();

    // Usage errors exit 1 like every other failure; help/version exit 0.
    let matches = build_cli().try_get_matches().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        });
    });

    if let Err(e) = run(&matches).await {
        logging::log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
