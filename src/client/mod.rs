//! Client for the home controller backend
//!
//! [`HomeClient`] is the object-safe seam the presentation layer talks to;
//! [`http_client::HomeHttpClient`] is the reqwest-backed implementation.
//! One instance is built at startup with [`create_client`] and shared
//! behind an `Arc` for the lifetime of the process.

pub mod http_client;
pub mod models;

use crate::catalog::Action;
use crate::config::ClientConfig;
use crate::error::{ActionError, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub use http_client::HomeHttpClient;
pub use models::{ActionResponse, ActionResult, ClimateStatus, ErrorDetail, LightResult};

/// Trait for home controller client implementations
#[async_trait]
pub trait HomeClient: Send + Sync {
    /// Perform one catalog action
    async fn perform(&self, action: Action) -> std::result::Result<ActionResponse, ActionError>;

    /// Controls the climate backend accepts
    async fn climate_status(&self) -> std::result::Result<ClimateStatus, ActionError>;

    /// Modes the light backend accepts
    async fn light_modes(&self) -> std::result::Result<Vec<String>, ActionError>;

    /// Base URL every request is sent to
    fn base_url(&self) -> &str;
}

/// Create the shared client for the configured backend
pub fn create_client(config: &ClientConfig) -> Result<Arc<dyn HomeClient>> {
    let client = HomeHttpClient::new(config)?;
    Ok(Arc::new(client))
}
