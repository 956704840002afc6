//! Response shapes returned by the backend

use serde::{Deserialize, Serialize};

/// Result of a climate action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<String>,
    /// Backend identifier of the executed action (e.g. "aircon_on")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Result of a lighting action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightResult {
    pub success: bool,
    pub message: String,
    /// Light mode now active (e.g. "all_bright")
    pub mode: String,
}

/// Error body sent with non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Controls the climate backend accepts (`GET /ac/status`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClimateStatus {
    pub available_modes: Vec<String>,
    pub available_temp_controls: Vec<String>,
    pub available_timer_controls: Vec<String>,
}

/// Decoded response of an action chosen at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionResponse {
    Climate(ActionResult),
    Light(LightResult),
}

impl ActionResponse {
    pub fn success(&self) -> bool {
        match self {
            ActionResponse::Climate(r) => r.success,
            ActionResponse::Light(r) => r.success,
        }
    }

    /// Message to show the user
    pub fn message(&self) -> &str {
        match self {
            ActionResponse::Climate(r) => &r.message,
            ActionResponse::Light(r) => &r.message,
        }
    }

    pub fn mode(&self) -> Option<&str> {
        match self {
            ActionResponse::Climate(r) => r.mode.as_deref(),
            ActionResponse::Light(r) => Some(&r.mode),
        }
    }
}

impl From<ActionResult> for ActionResponse {
    fn from(result: ActionResult) -> Self {
        ActionResponse::Climate(result)
    }
}

impl From<LightResult> for ActionResponse {
    fn from(result: LightResult) -> Self {
        ActionResponse::Light(result)
    }
}
