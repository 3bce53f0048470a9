use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::{API_KEY_HEADER, KEY_LIST_PAGE_SIZE, REQUEST_TIMEOUT_SECS};
use crate::error::{GatewayError, GatewayResult};
use crate::logging::log_debug;
use crate::models::*;
use crate::resolver::UserSelector;

/// HTTP client for the gateway control plane. One instance per invocation;
/// every request carries the auth header and the fixed timeout.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, api_key: &str) -> GatewayResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key)
                .map_err(|_| GatewayError::Config("API key contains invalid characters".into()))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&impl Serialize>,
    ) -> GatewayResult<T> {
        log_debug(&format!("{} {}{}", method, self.base_url, path));

        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;

        if status != StatusCode::OK {
            // The gateway describes its own failures as {code, message};
            // anything else is a malformed response.
            let err: ApiErrorBody = serde_json::from_str(&raw)?;
            return Err(GatewayError::Api {
                code: err.code,
                message: err.message,
            });
        }

        Ok(serde_json::from_str(&raw)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> GatewayResult<T> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> GatewayResult<T> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn get_key_info(&self, key: &str) -> GatewayResult<KeyResponse> {
        self.get("/key/info", &[("key", key)]).await
    }

    /// Full key objects, optionally scoped to one team. A single fixed-size
    /// page; the tool does not paginate.
    pub async fn list_keys(&self, team_id: Option<&str>) -> GatewayResult<KeyListPage> {
        let page_size = KEY_LIST_PAGE_SIZE.to_string();
        let mut query = vec![
            ("page", "1"),
            ("size", page_size.as_str()),
            ("return_full_object", "true"),
            ("include_team_keys", "true"),
            ("sort_order", "desc"),
        ];
        if let Some(team_id) = team_id {
            query.push(("team_id", team_id));
        }
        self.get("/key/list", &query).await
    }

    /// Key identifier strings for one team, used by the `team keys` fan-out.
    pub async fn list_team_key_ids(&self, team_id: &str) -> GatewayResult<KeyPage> {
        let page_size = KEY_LIST_PAGE_SIZE.to_string();
        self.get(
            "/key/list",
            &[
                ("page", "1"),
                ("size", page_size.as_str()),
                ("team_id", team_id),
            ],
        )
        .await
    }

    /// Detailed records for every key of a team: one list call, then one
    /// sequential info call per key. The first failing lookup aborts the
    /// whole listing.
    pub async fn list_team_keys(&self, team_id: &str) -> GatewayResult<Vec<KeyResponse>> {
        let page = self.list_team_key_ids(team_id).await?;

        let mut keys = Vec::with_capacity(page.keys.len());
        for key_id in &page.keys {
            keys.push(self.get_key_info(key_id).await?);
        }
        Ok(keys)
    }

    pub async fn list_teams(&self) -> GatewayResult<Vec<Team>> {
        self.get("/team/list", &[]).await
    }

    /// Team summary matched by id or alias against the full listing.
    pub async fn get_team_info(&self, identifier: &str) -> GatewayResult<Team> {
        let teams = self.list_teams().await?;
        teams
            .into_iter()
            .find(|team| {
                team.team_id == identifier || team.team_alias.as_deref() == Some(identifier)
            })
            .ok_or_else(|| GatewayError::NotFound("team", identifier.to_string()))
    }

    pub async fn list_team_members(&self, team_id: &str) -> GatewayResult<Vec<TeamMember>> {
        let response: TeamResponse = self.get("/team/info", &[("team_id", team_id)]).await?;
        Ok(response.team_info.members_with_roles)
    }

    pub async fn add_team_member(
        &self,
        team_id: &str,
        member: TeamMember,
    ) -> GatewayResult<TeamResponse> {
        let request = AddMemberRequest {
            member: vec![member],
            team_id: team_id.to_string(),
        };
        self.post("/team/member_add", &request).await
    }

    pub async fn remove_team_member(
        &self,
        team_id: &str,
        member: TeamMember,
    ) -> GatewayResult<TeamResponse> {
        let request = RemoveMemberRequest {
            user_id: member.user_id,
            user_email: member.user_email,
            team_id: team_id.to_string(),
        };
        self.post("/team/member_delete", &request).await
    }

    pub async fn get_user_info(&self, selector: &UserSelector) -> GatewayResult<UserResponse> {
        let query = match selector {
            UserSelector::Id(id) => [("user_id", id.as_str())],
            UserSelector::Email(email) => [("email", email.as_str())],
        };
        self.get("/user/info", &query).await
    }

    /// All users the caller may see; same endpoint as `get_user_info`, bare.
    pub async fn list_users(&self) -> GatewayResult<UserResponse> {
        self.get("/user/info", &[]).await
    }

    pub async fn list_models(&self) -> GatewayResult<ModelList> {
        self.get(
            "/models",
            &[
                ("return_wildcard_routes", "false"),
                ("include_model_access_groups", "false"),
            ],
        )
        .await
    }

    pub async fn get_model_info(&self) -> GatewayResult<Vec<ModelInfoItem>> {
        #[derive(serde::Deserialize)]
        struct ModelInfoResponse {
            #[serde(default)]
            data: Vec<ModelInfoItem>,
        }

        let response: ModelInfoResponse = self.get("/model/info", &[]).await?;
        Ok(response.data)
    }

    pub async fn get_model_health(&self, model: &str) -> GatewayResult<ModelHealth> {
        self.get("/health", &[("model", model)]).await
    }
}
