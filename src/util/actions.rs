//! Register/unregister actions: preconditions, request dispatch, and mapping
//! outcomes to notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Card controls call [`prepare_register`] / [`prepare_unregister`] before any
//! request leaves the browser, then [`submit`] the request and turn the
//! result into a notice with [`outcome`]. The page decides what to do with
//! the outcome (show notice, refresh catalog).

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::config::ClientConfig;
use crate::net::api::{self, ApiError};
use crate::state::notice::Notice;

pub const GENERIC_FAILURE_TEXT: &str = "An error occurred";
pub const LOGIN_FAILED_TEXT: &str = "Login failed!";
pub const LOGIN_ERROR_TEXT: &str = "An error occurred during login.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Register,
    Unregister,
}

impl ActionKind {
    pub fn login_required_text(self) -> &'static str {
        match self {
            Self::Register => "Please login to register.",
            Self::Unregister => "Please login to unregister.",
        }
    }

    pub fn transport_failure_text(self) -> &'static str {
        match self {
            Self::Register => "Failed to sign up. Please try again.",
            Self::Unregister => "Failed to unregister. Please try again.",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "signup",
            Self::Unregister => "unregister",
        }
    }
}

/// Client-side precondition that blocks an action before any request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// Email prompt cancelled or left empty. Aborts silently.
    EmptyEmail,
    MissingToken(ActionKind),
}

impl Precondition {
    /// Text for the blocking alert, if this precondition raises one.
    pub fn alert_text(self) -> Option<&'static str> {
        match self {
            Self::EmptyEmail => None,
            Self::MissingToken(kind) => Some(kind.login_required_text()),
        }
    }
}

/// A validated action ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub activity: String,
    pub email: String,
    pub token: String,
}

/// Result of a sent action as the UI should present it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub notice: Notice,
    /// Refetch the catalog (only after success).
    pub refresh: bool,
}

pub fn register_prompt(activity: &str) -> String {
    format!("Enter your email to register for {activity}:")
}

/// Validate a registration: prompt answer first, then the session token.
///
/// # Errors
///
/// [`Precondition::EmptyEmail`] when the prompt was cancelled or empty,
/// [`Precondition::MissingToken`] when there is no session.
pub fn prepare_register(activity: &str, email: Option<String>, token: Option<String>) -> Result<ActionRequest, Precondition> {
    let email = email.filter(|email| !email.is_empty()).ok_or(Precondition::EmptyEmail)?;
    let token = token.ok_or(Precondition::MissingToken(ActionKind::Register))?;
    Ok(ActionRequest { kind: ActionKind::Register, activity: activity.to_owned(), email, token })
}

/// Validate an unregistration for a rendered participant row.
///
/// # Errors
///
/// [`Precondition::MissingToken`] when there is no session.
pub fn prepare_unregister(activity: &str, email: &str, token: Option<String>) -> Result<ActionRequest, Precondition> {
    let token = token.ok_or(Precondition::MissingToken(ActionKind::Unregister))?;
    Ok(ActionRequest { kind: ActionKind::Unregister, activity: activity.to_owned(), email: email.to_owned(), token })
}

/// Send a prepared action to the server.
///
/// # Errors
///
/// Whatever the underlying API call reports.
pub async fn submit(config: &ClientConfig, request: &ActionRequest) -> Result<String, ApiError> {
    match request.kind {
        ActionKind::Register => api::signup(config, &request.token, &request.activity, &request.email).await,
        ActionKind::Unregister => api::unregister(config, &request.token, &request.activity, &request.email).await,
    }
}

/// Map an action result to its notice and follow-up.
pub fn outcome(kind: ActionKind, result: Result<String, ApiError>) -> ActionOutcome {
    match result {
        Ok(message) => ActionOutcome { notice: Notice::success(message), refresh: true },
        Err(ApiError::Status { detail, .. }) => ActionOutcome {
            notice: Notice::error(detail.unwrap_or_else(|| GENERIC_FAILURE_TEXT.to_owned())),
            refresh: false,
        },
        Err(ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Unavailable) => {
            ActionOutcome { notice: Notice::error(kind.transport_failure_text()), refresh: false }
        }
    }
}

/// Alert text for a failed login attempt.
pub fn login_failure_text(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status { .. } => LOGIN_FAILED_TEXT,
        _ => LOGIN_ERROR_TEXT,
    }
}
