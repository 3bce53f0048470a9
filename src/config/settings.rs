use std::env;
use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX};
use crate::error::{GatewayError, GatewayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> GatewayResult<Self> {
        match value {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(GatewayError::usage(format!(
                "invalid output format '{}'. Must be 'table' or 'json'",
                other
            ))),
        }
    }
}

/// Resolved settings for one invocation. Built once in main and passed into
/// every command handler; there is no ambient global configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: String,
    pub output: OutputFormat,
    pub team_id: Option<String>,
    pub team_alias: Option<String>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
}

/// On-disk YAML shape. Every key is optional; missing sections fall through
/// to the next precedence level.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    team: TeamSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    url: Option<String>,
    key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TeamSection {
    id: Option<String>,
    alias: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    format: Option<String>,
}

impl Settings {
    /// Merges flag > environment > config file > default and fails fast when
    /// the API URL or key is still missing afterwards. No network I/O.
    pub fn resolve(matches: &ArgMatches) -> GatewayResult<Self> {
        let file = load_file_config(matches.get_one::<String>("config"))?;

        let api_url = merge(
            flag(matches, "api-url"),
            env_var("API_URL"),
            file.api.url.clone(),
            None,
        )
        .ok_or_else(|| {
            GatewayError::Config(
                "API URL is required. Set api.url in the config file, GATEWAYCTL_API_URL, or use --api-url".into(),
            )
        })?;

        let api_key = merge(
            flag(matches, "api-key"),
            env_var("API_KEY"),
            file.api.key.clone(),
            None,
        )
        .ok_or_else(|| {
            GatewayError::Config(
                "API key is required. Set api.key in the config file, GATEWAYCTL_API_KEY, or use --api-key".into(),
            )
        })?;

        let output = merge(
            flag(matches, "output"),
            env_var("OUTPUT_FORMAT"),
            file.output.format.clone(),
            Some("table".to_string()),
        )
        .expect("output format has a default");
        let output = OutputFormat::parse(&output)?;

        Ok(Settings {
            api_url,
            api_key,
            output,
            team_id: merge(flag(matches, "team-id"), env_var("TEAM_ID"), file.team.id, None),
            team_alias: merge(
                flag(matches, "team-alias"),
                env_var("TEAM_ALIAS"),
                file.team.alias,
                None,
            ),
            user_id: merge(flag(matches, "user-id"), env_var("USER_ID"), None, None),
            user_email: merge(flag(matches, "email"), env_var("USER_EMAIL"), None, None),
        })
    }
}

/// One field's precedence chain: flag > env > file > default. Empty strings
/// count as unset at every level.
fn merge(
    flag: Option<String>,
    env: Option<String>,
    file: Option<String>,
    default: Option<String>,
) -> Option<String> {
    flag.into_iter()
        .chain(env)
        .chain(file)
        .chain(default)
        .find(|v| !v.is_empty())
}

fn flag(matches: &ArgMatches, name: &str) -> Option<String> {
    // Subcommands without the arg defined would panic on get_one, so probe first.
    if matches.try_get_one::<String>(name).is_err() {
        return None;
    }
    matches.get_one::<String>(name).cloned()
}

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, name))
        .ok()
        .filter(|v| !v.is_empty())
}

/// Reads the YAML config. An explicit `--config` path must exist; the default
/// locations (home dir, then current dir) are optional.
fn load_file_config(explicit: Option<&String>) -> GatewayResult<FileConfig> {
    let path = match explicit {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(GatewayError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path)
        }
        None => default_config_path(),
    };

    match path {
        Some(path) => parse_config_file(&path),
        None => Ok(FileConfig::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        let candidate = home.join(CONFIG_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    None
}

fn parse_config_file(path: &PathBuf) -> GatewayResult<FileConfig> {
    let raw = fs::read_to_string(path)?;
    serde_yaml::from_str(&raw)
        .map_err(|e| GatewayError::Config(format!("invalid config file {}: {}", path.display(), e)))
}
