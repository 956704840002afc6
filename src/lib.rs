//! Home controller client in Rust
//!
//! This crate talks to a small home-automation backend that drives an air
//! conditioner and a ceiling light over infrared. Every device command is
//! a bodyless POST; the backend answers with a short JSON message.
//!
//! # Features
//!
//! - Typed action catalog for the climate (`/ac`) and lighting (`/light`) domains
//! - Async HTTP client with a typed error taxonomy
//! - Action runner with a single-outstanding-action guard
//! - Endpoint sweep for checking a deployed backend
//!
//! ```no_run
//! use home_controller_rust::{catalog::ClimateAction, client::HomeHttpClient, config::ClientConfig};
//!
//! # async fn demo() -> home_controller_rust::Result<()> {
//! let client = HomeHttpClient::new(&ClientConfig::new("http://192.168.1.50:8000"))?;
//! let result = client.invoke(ClimateAction::AirconOn).await?;
//! println!("{}", result.message);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod verify;

// Re-export main types for convenience
pub use catalog::{Action, CatalogAction, ClimateAction, LightAction};
pub use client::{create_client, HomeClient, HomeHttpClient};
pub use config::{AppConfig, ClientConfig};
pub use error::{ActionError, HomeError, Result};
