//! WireMock-based backend mocking infrastructure
//!
//! Simulates the home controller backend: every catalog action answers
//! the way the real service does after a successful IR transmission.

use home_controller_rust::catalog::{CLIMATE_ACTIONS, LIGHT_ACTIONS};
use home_controller_rust::CatalogAction;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock home controller backend for testing
pub struct MockHomeBackend {
    pub server: MockServer,
    pub base_url: String,
}

impl MockHomeBackend {
    /// Start an empty mock backend; every request answers 404
    pub async fn start_empty() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Start a mock backend with every endpoint mounted
    pub async fn start() -> Self {
        let backend = Self::start_empty().await;
        backend.setup_default_mocks().await;
        backend
    }

    async fn setup_default_mocks(&self) {
        self.mock_climate_actions().await;
        self.mock_light_actions().await;
        self.mock_status_endpoints().await;
    }

    async fn mock_climate_actions(&self) {
        for action in CLIMATE_ACTIONS {
            let id = action.backend_id();
            Mock::given(method("POST"))
                .and(path(action.path()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "action": id,
                    "success": true,
                    "message": format!("AC control {id} executed successfully")
                })))
                .mount(&self.server)
                .await;
        }
    }

    async fn mock_light_actions(&self) {
        for action in LIGHT_ACTIONS {
            let id = action.backend_id();
            Mock::given(method("POST"))
                .and(path(action.path()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "mode": id,
                    "success": true,
                    "message": format!("Light set to {id} mode successfully")
                })))
                .mount(&self.server)
                .await;
        }
    }

    async fn mock_status_endpoints(&self) {
        Mock::given(method("GET"))
            .and(path("/ac/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available_modes": ["aircon_on", "heater_on", "off"],
                "available_temp_controls": ["aircon_temp_up", "heater_temp_up", "heater_temp_down"],
                "available_timer_controls": ["timer_on", "timer_up", "timer_down"]
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path("/light/modes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!(["all_bright", "bright", "dark", "off", "on"])),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer `path` with `status` and a JSON body, overriding default mocks
    pub async fn mock_json(&self, http_method: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `path` with `status` and a plain-text body, overriding default mocks
    pub async fn mock_text(&self, http_method: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Backend-style error for a missing IR code file
    pub async fn mock_error_detail(&self, endpoint: &str, status: u16, detail: &str) {
        self.mock_json(
            "POST",
            endpoint,
            status,
            json!({ "detail": detail, "error_type": "ResourceNotFoundError" }),
        )
        .await;
    }

    /// Get the mock server's base URL
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
