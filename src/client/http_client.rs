//! HTTP client implementation for the home controller backend
//!
//! Every action is a bodyless `POST <base URL><path>` with
//! `Content-Type: application/json`. The client keeps no per-request
//! state: no retries, no caching, no connection bookkeeping beyond what
//! reqwest does internally.

use crate::catalog::{Action, CatalogAction, ClimateAction, LightAction};
use crate::client::models::{ActionResponse, ActionResult, ClimateStatus, ErrorDetail, LightResult};
use crate::client::HomeClient;
use crate::config::ClientConfig;
use crate::error::{ActionError, HomeError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder, Method};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

type ActionOutcome<T> = std::result::Result<T, ActionError>;

/// HTTP client for the home controller backend
#[derive(Debug, Clone)]
pub struct HomeHttpClient {
    /// HTTP client instance
    client: Client,

    /// Base URL, prefixed verbatim to every path
    base_url: String,
}

impl HomeHttpClient {
    /// Create a new HTTP client
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut client_builder =
            ClientBuilder::new().user_agent(format!("home-controller-rust/{}", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| HomeError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Build the URL for a backend path by plain concatenation
    pub fn endpoint(&self, path: &str) -> ActionOutcome<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ActionError::invalid_url(format!("{raw} ({e})")))
    }

    /// POST to `path` without a body and decode the JSON response
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> ActionOutcome<T> {
        self.execute(Method::POST, path).await
    }

    /// GET `path` and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ActionOutcome<T> {
        self.execute(Method::GET, path).await
    }

    /// Invoke a catalog action; its domain fixes the result shape
    pub async fn invoke<A: CatalogAction>(&self, action: A) -> ActionOutcome<A::Output> {
        self.post(&action.path()).await
    }

    async fn execute<T: DeserializeOwned>(&self, method: Method, path: &str) -> ActionOutcome<T> {
        let url = self.endpoint(path)?;
        debug!("{method} {url}");

        let response = self
            .client
            .request(method, url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ActionError::invalid_url(format!("{url} ({e})"))
                } else {
                    ActionError::Transport(e)
                }
            })?;

        let status = response.status();
        debug!("{url} answered {status}");

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                ActionError::Transport(e)
            } else {
                ActionError::invalid_response(format!("failed to read body: {e}"))
            }
        })?;

        decode_response(status.as_u16(), &body)
    }

    // Climate control

    pub async fn turn_on_aircon(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::AirconOn).await
    }

    pub async fn turn_on_heater(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::HeaterOn).await
    }

    pub async fn turn_off_ac(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::Off).await
    }

    pub async fn increase_aircon_temp(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::AirconTempUp).await
    }

    pub async fn increase_heater_temp(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::HeaterTempUp).await
    }

    pub async fn decrease_heater_temp(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::HeaterTempDown).await
    }

    pub async fn turn_on_timer(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::TimerOn).await
    }

    pub async fn increase_timer(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::TimerUp).await
    }

    pub async fn decrease_timer(&self) -> ActionOutcome<ActionResult> {
        self.invoke(ClimateAction::TimerDown).await
    }

    // Light control

    pub async fn set_light_all_bright(&self) -> ActionOutcome<LightResult> {
        self.invoke(LightAction::AllBright).await
    }

    pub async fn set_light_bright(&self) -> ActionOutcome<LightResult> {
        self.invoke(LightAction::Bright).await
    }

    pub async fn set_light_dark(&self) -> ActionOutcome<LightResult> {
        self.invoke(LightAction::Dark).await
    }

    pub async fn turn_on_light(&self) -> ActionOutcome<LightResult> {
        self.invoke(LightAction::On).await
    }

    pub async fn turn_off_light(&self) -> ActionOutcome<LightResult> {
        self.invoke(LightAction::Off).await
    }
}

#[async_trait]
impl HomeClient for HomeHttpClient {
    async fn perform(&self, action: Action) -> ActionOutcome<ActionResponse> {
        match action {
            Action::Climate(a) => self.invoke(a).await.map(ActionResponse::Climate),
            Action::Light(a) => self.invoke(a).await.map(ActionResponse::Light),
        }
    }

    async fn climate_status(&self) -> ActionOutcome<ClimateStatus> {
        self.get("/ac/status").await
    }

    async fn light_modes(&self) -> ActionOutcome<Vec<String>> {
        self.get("/light/modes").await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Map a status code and body to the decoded value or an [`ActionError`]
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> ActionOutcome<T> {
    if !(200..=299).contains(&status) {
        return match serde_json::from_slice::<ErrorDetail>(body) {
            Ok(error) => Err(ActionError::Server(error.detail)),
            Err(_) => Err(ActionError::StatusCode(status)),
        };
    }

    serde_json::from_slice(body).map_err(ActionError::Decoding)
}
