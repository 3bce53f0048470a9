use crate::client::GatewayClient;
use crate::config::Settings;
use crate::error::{GatewayError, GatewayResult};
use crate::models::Team;

/// How the operator pointed at a team, decided once at parse time. Flags win
/// over configured defaults, and an explicit id wins over an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSelector {
    Id(String),
    Alias(String),
}

impl TeamSelector {
    pub fn from_settings(settings: &Settings) -> GatewayResult<Self> {
        match (&settings.team_id, &settings.team_alias) {
            (Some(id), _) => Ok(TeamSelector::Id(id.clone())),
            (None, Some(alias)) => Ok(TeamSelector::Alias(alias.clone())),
            (None, None) => Err(GatewayError::usage(
                "either --team-id or --team-alias is required",
            )),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            TeamSelector::Id(v) | TeamSelector::Alias(v) => v,
        }
    }
}

/// How the operator pointed at a user. A `--user-id` value containing `@` is
/// taken as an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSelector {
    Id(String),
    Email(String),
}

impl UserSelector {
    pub fn from_settings(settings: &Settings) -> GatewayResult<Self> {
        match (&settings.user_id, &settings.user_email) {
            (Some(id), _) if id.contains('@') => Ok(UserSelector::Email(id.clone())),
            (Some(id), _) => Ok(UserSelector::Id(id.clone())),
            (None, Some(email)) => Ok(UserSelector::Email(email.clone())),
            (None, None) => Err(GatewayError::usage(
                "either --user-id or --email is required",
            )),
        }
    }
}

/// Canonical team ids are UUIDs; a cheap shape check (fixed length, dash at a
/// fixed offset) is enough to tell them from aliases.
pub fn looks_like_team_id(identifier: &str) -> bool {
    identifier.len() == 36 && identifier.as_bytes()[8] == b'-'
}

/// First team whose alias matches. Aliases are not guaranteed unique; on
/// duplicates the first listed team wins.
pub fn find_team_by_alias<'a>(teams: &'a [Team], alias: &str) -> Option<&'a Team> {
    teams
        .iter()
        .find(|team| team.team_alias.as_deref() == Some(alias))
}

/// Resolves a selector to a canonical team id. Id-shaped identifiers are
/// returned unchanged without a network call; everything else is matched
/// against the fetched team list.
pub async fn resolve_team(
    client: &GatewayClient,
    selector: &TeamSelector,
) -> GatewayResult<String> {
    let identifier = selector.value();
    if looks_like_team_id(identifier) {
        return Ok(identifier.to_string());
    }

    let teams = client.list_teams().await?;
    find_team_by_alias(&teams, identifier)
        .map(|team| team.team_id.clone())
        .ok_or_else(|| GatewayError::NotFound("team", identifier.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn settings(
        team_id: Option<&str>,
        team_alias: Option<&str>,
        user_id: Option<&str>,
        user_email: Option<&str>,
    ) -> Settings {
        Settings {
            api_url: "https://gw.example.com".into(),
            api_key: "sk-test".into(),
            output: OutputFormat::Table,
            team_id: team_id.map(String::from),
            team_alias: team_alias.map(String::from),
            user_id: user_id.map(String::from),
            user_email: user_email.map(String::from),
        }
    }

    fn team(id: &str, alias: Option<&str>) -> Team {
        Team {
            team_id: id.into(),
            team_alias: alias.map(String::from),
            spend: 0.0,
            models: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn id_shape_heuristic() {
        assert!(looks_like_team_id("0dbaa4dd-8523-4e05-8d43-91b7dd80f671"));
        assert!(!looks_like_team_id("CLINE"));
        assert!(!looks_like_team_id("0dbaa4dd85234e058d4391b7dd80f671aaaa"));
        // Right length, dash in the wrong place.
        assert!(!looks_like_team_id("0dbaa4dd8-523-4e05-8d43-91b7dd80f671"));
    }

    #[test]
    fn team_selector_prefers_id_over_alias() {
        let sel = TeamSelector::from_settings(&settings(Some("t-1"), Some("CHAT"), None, None));
        assert_eq!(sel.unwrap(), TeamSelector::Id("t-1".into()));

        let sel = TeamSelector::from_settings(&settings(None, Some("CHAT"), None, None));
        assert_eq!(sel.unwrap(), TeamSelector::Alias("CHAT".into()));
    }

    #[test]
    fn team_selector_requires_one_flag() {
        let err = TeamSelector::from_settings(&settings(None, None, None, None)).unwrap_err();
        assert!(matches!(err, GatewayError::Usage(_)));
    }

    #[test]
    fn user_selector_detects_email_in_id_flag() {
        let sel = UserSelector::from_settings(&settings(None, None, Some("a@b.io"), None));
        assert_eq!(sel.unwrap(), UserSelector::Email("a@b.io".into()));

        let sel = UserSelector::from_settings(&settings(None, None, Some("user_456"), None));
        assert_eq!(sel.unwrap(), UserSelector::Id("user_456".into()));

        let sel = UserSelector::from_settings(&settings(None, None, None, Some("a@b.io")));
        assert_eq!(sel.unwrap(), UserSelector::Email("a@b.io".into()));
    }

    #[test]
    fn alias_scan_returns_first_match() {
        let teams = vec![
            team("t-1", Some("CHAT")),
            team("t-2", Some("CLINE")),
            team("t-3", Some("CHAT")),
        ];

        let found = find_team_by_alias(&teams, "CHAT").unwrap();
        assert_eq!(found.team_id, "t-1");
        assert!(find_team_by_alias(&teams, "MISSING").is_none());
    }
}
