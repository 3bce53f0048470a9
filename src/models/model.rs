use serde::{Deserialize, Serialize};

/// Entry from the OpenAI-compatible `/models` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: String,
    #[serde(default)]
    pub object: String,
    /// Unix epoch seconds.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub owned_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelSummary>,
    #[serde(default)]
    pub object: String,
}

/// Deployment parameters from `/model/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    #[serde(default)]
    pub input_cost_per_token: f64,
    #[serde(default)]
    pub output_cost_per_token: f64,
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub custom_llm_provider: Option<String>,
}

/// Capability block from `/model/info`. Wire field names follow the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDetails {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub base_model: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u64>,
    #[serde(default, rename = "litellm_provider")]
    pub provider: Option<String>,
    #[serde(default)]
    pub supports_vision: bool,
    #[serde(default, rename = "supports_function_calling")]
    pub supports_function: bool,
    #[serde(default, rename = "supports_tool_choice")]
    pub supports_tool: bool,
    #[serde(default, rename = "supports_native_streaming")]
    pub supports_streaming: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfoItem {
    pub model_name: String,
    #[serde(rename = "litellm_params")]
    pub params: ModelParams,
    pub model_info: ModelDetails,
}

/// One upstream deployment as reported by `/health`. The rate-limit counters
/// come back as header-shaped strings, not numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEndpoint {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default, rename = "custom_llm_provider")]
    pub provider: Option<String>,
    #[serde(default, rename = "x-ms-region")]
    pub region: Option<String>,
    #[serde(default, rename = "x-ratelimit-remaining-requests")]
    pub remaining_requests: Option<String>,
    #[serde(default, rename = "x-ratelimit-remaining-tokens")]
    pub remaining_tokens: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelHealth {
    #[serde(default)]
    pub healthy_endpoints: Vec<HealthEndpoint>,
    #[serde(default)]
    pub unhealthy_endpoints: Vec<HealthEndpoint>,
    #[serde(default)]
    pub healthy_count: u32,
    #[serde(default)]
    pub unhealthy_count: u32,
}
