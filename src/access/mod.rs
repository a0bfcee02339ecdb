//! Admin gate for the dashboard.
//!
//! Session issuance lives elsewhere; this module only consumes a session
//! and makes the single `role == "admin"` decision.

use crate::config::Settings;

/// Role string that grants dashboard access.
pub const ADMIN_ROLE: &str = "admin";

/// A signed-in user as seen by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    /// Exact, case-sensitive comparison against [`ADMIN_ROLE`].
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Outcome of the admin gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// No session; send the visitor to sign in.
    SignInRequired,
    /// Signed in without the admin role; send them home.
    Forbidden,
}

impl AccessDecision {
    /// Where the caller should redirect, or `None` to render the page.
    pub fn redirect_target<'a>(&self, settings: &'a Settings) -> Option<&'a str> {
        match self {
            AccessDecision::Granted => None,
            AccessDecision::SignInRequired => Some(&settings.sign_in_path),
            AccessDecision::Forbidden => Some(&settings.home_path),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccessDecision::Granted => "granted",
            AccessDecision::SignInRequired => "sign-in required",
            AccessDecision::Forbidden => "forbidden",
        }
    }
}

/// Decide whether `session` may see the admin dashboard.
pub fn admin_access(session: Option<&Session>) -> AccessDecision {
    let decision = match session {
        None => AccessDecision::SignInRequired,
        Some(s) if s.is_admin() => AccessDecision::Granted,
        Some(_) => AccessDecision::Forbidden,
    };

    tracing::debug!(
        user_id = session.map(|s| s.user_id.as_str()),
        decision = decision.label(),
        "admin gate evaluated"
    );

    decision
}
