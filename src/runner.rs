//! Runs catalog actions on behalf of a front-end
//!
//! One action may be outstanding at a time; further requests are turned
//! away with [`RunOutcome::Busy`] until it completes. Every completed
//! action produces a [`Notice`] holding the text to show the user.

use crate::catalog::Action;
use crate::client::{ActionResponse, HomeClient};
use crate::error::{ActionError, ErrorKind};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Text shown to the user after an action completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub action: Action,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl Notice {
    fn from_response(action: Action, response: &ActionResponse) -> Self {
        Self {
            action,
            success: response.success(),
            message: response.message().to_string(),
            mode: response.mode().map(str::to_string),
            error_kind: None,
        }
    }

    fn from_error(action: Action, error: &ActionError) -> Self {
        Self {
            action,
            success: false,
            message: error.to_string(),
            mode: None,
            error_kind: Some(error.kind()),
        }
    }
}

/// Result of [`ActionRunner::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The action ran; success or failure is in the notice
    Finished(Notice),
    /// Another action was still outstanding, nothing was sent
    Busy,
}

/// Serializes user-triggered actions against one shared client
pub struct ActionRunner {
    client: Arc<dyn HomeClient>,
    busy: AtomicBool,
}

/// Clears the busy flag on every exit path
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ActionRunner {
    pub fn new(client: Arc<dyn HomeClient>) -> Self {
        Self {
            client,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether an action is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run `action` unless another one is outstanding
    pub async fn run(&self, action: Action) -> RunOutcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return RunOutcome::Busy;
        }
        let _guard = BusyGuard(&self.busy);

        let notice = match self.client.perform(action).await {
            Ok(response) => Notice::from_response(action, &response),
            Err(error) => Notice::from_error(action, &error),
        };

        RunOutcome::Finished(notice)
    }
}
