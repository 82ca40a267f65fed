use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use health_bridge_domain::InitState;

/// Gateway state after an initialize call
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    /// "ios" or "android"
    pub platform: String,

    /// Native store name
    pub store: String,

    /// uninitialized, initializing, ready or failed
    pub state: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl InitializeResponse {
    pub fn new(platform: health_bridge_domain::Platform, state: &InitState) -> Self {
        let (state, reason) = match state {
            InitState::Uninitialized => ("uninitialized", None),
            InitState::Initializing => ("initializing", None),
            InitState::Ready => ("ready", None),
            InitState::Failed(reason) => ("failed", Some(reason.clone())),
        };
        Self {
            platform: platform.as_str().to_string(),
            store: platform.store_name().to_string(),
            state: state.to_string(),
            reason,
        }
    }
}

/// Outcome of a permission request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PermissionsResponse {
    /// Whether the user granted access
    pub granted: bool,
}
