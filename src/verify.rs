//! Endpoint sweep against a running backend
//!
//! Checks the read-only status endpoints and, on request, every catalog
//! action. Actions drive real devices, so they are opt-in.

use crate::catalog::{Action, CLIMATE_ACTIONS, LIGHT_ACTIONS};
use crate::client::HomeClient;
use serde::Serialize;
use tracing::debug;

/// What to include in a sweep
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Also POST every device action
    pub include_actions: bool,
}

/// Outcome of one endpoint check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointCheck {
    pub method: &'static str,
    pub path: String,
    pub description: String,
    pub passed: bool,
    /// Response message on success, error text on failure
    pub detail: String,
}

/// All checks of one sweep, in execution order
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    pub base_url: String,
    pub checks: Vec<EndpointCheck>,
}

impl VerifyReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

fn action_check(action: Action, result: Result<String, String>) -> EndpointCheck {
    let (passed, detail) = match result {
        Ok(message) => (true, message),
        Err(error) => (false, error),
    };
    EndpointCheck {
        method: "POST",
        path: action.path(),
        description: action.description().to_string(),
        passed,
        detail,
    }
}

async fn run_action(client: &dyn HomeClient, action: Action) -> EndpointCheck {
    let result = client
        .perform(action)
        .await
        .map(|r| r.message().to_string())
        .map_err(|e| e.to_string());
    action_check(action, result)
}

/// Run the sweep: light modes, light actions, climate status, climate actions
pub async fn verify_endpoints(client: &dyn HomeClient, options: VerifyOptions) -> VerifyReport {
    let mut checks = Vec::new();

    let modes = client.light_modes().await;
    checks.push(EndpointCheck {
        method: "GET",
        path: "/light/modes".to_string(),
        description: "list light modes".to_string(),
        passed: modes.is_ok(),
        detail: match modes {
            Ok(modes) => modes.join(", "),
            Err(e) => e.to_string(),
        },
    });

    if options.include_actions {
        for action in LIGHT_ACTIONS {
            checks.push(run_action(client, action.into()).await);
        }
    }

    let status = client.climate_status().await;
    checks.push(EndpointCheck {
        method: "GET",
        path: "/ac/status".to_string(),
        description: "list climate controls".to_string(),
        passed: status.is_ok(),
        detail: match status {
            Ok(status) => format!(
                "{} modes, {} temperature controls, {} timer controls",
                status.available_modes.len(),
                status.available_temp_controls.len(),
                status.available_timer_controls.len()
            ),
            Err(e) => e.to_string(),
        },
    });

    if options.include_actions {
        for action in CLIMATE_ACTIONS {
            checks.push(run_action(client, action.into()).await);
        }
    }

    let report = VerifyReport {
        base_url: client.base_url().to_string(),
        checks,
    };
    debug!(
        "endpoint sweep finished: {} passed, {} failed",
        report.passed(),
        report.failed()
    );
    report
}
