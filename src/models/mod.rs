pub mod key;
pub mod model;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use key::{KeyInfo, KeyListEntry, KeyListPage, KeyPage, KeyResponse};
pub use model::{
    HealthEndpoint, ModelDetails, ModelHealth, ModelInfoItem, ModelList, ModelParams, ModelSummary,
};
pub use team::{AddMemberRequest, RemoveMemberRequest, Team, TeamInfo, TeamMember, TeamResponse};
pub use user::{UserInfo, UserResponse};

use serde::Deserialize;

/// Error payload the gateway returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
