use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Detailed record for a single API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyInfo {
    #[serde(default)]
    pub key_name: String,
    #[serde(default)]
    pub key_alias: Option<String>,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response shape of `/key/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResponse {
    pub key: String,
    pub info: KeyInfo,
}

/// One page of key identifiers from `/key/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPage {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Full key object as returned by `/key/list` with `return_full_object=true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyListEntry {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub key_name: String,
    #[serde(default)]
    pub key_alias: Option<String>,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One page of full key objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyListPage {
    #[serde(default)]
    pub keys: Vec<KeyListEntry>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}
