use serde::{Deserialize, Serialize};

use super::key::KeyInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub role: String,
}

/// Summary entry from `/team/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String,
    #[serde(default)]
    pub team_alias: Option<String>,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Detailed team record nested in `/team/info` responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub team_alias: Option<String>,
    #[serde(default)]
    pub members_with_roles: Vec<TeamMember>,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response shape shared by `/team/info` and the member mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub team_alias: Option<String>,
    #[serde(default)]
    pub team_info: TeamInfo,
    #[serde(default)]
    pub keys: Vec<KeyInfo>,
}

/// Request body for `/team/member_add`. The gateway takes a list even for a
/// single member.
#[derive(Debug, Clone, Serialize)]
pub struct AddMemberRequest {
    pub member: Vec<TeamMember>,
    pub team_id: String,
}

/// Request body for `/team/member_delete`.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveMemberRequest {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub team_id: String,
}
