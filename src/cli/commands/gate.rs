//! `saltcheck gate` — evaluate the admin dashboard gate.

use crate::access::{admin_access, AccessDecision, Session};
use crate::cli::{load_settings, output, Cli};
use crate::errors::Result;

/// Execute the `gate` command.
pub fn execute(cli: &Cli, user: Option<&str>, role: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;

    let session = user.map(|id| Session::new(id, role.unwrap_or_default()));
    let decision = admin_access(session.as_ref());

    match decision.redirect_target(&settings) {
        None => output::success(&format!("Access {}.", decision.label())),
        Some(target) => {
            output::info(&format!("Access {}: redirect to {target}", decision.label()));
            if decision == AccessDecision::Forbidden {
                output::tip("Only sessions with role \"admin\" may open the dashboard.");
            }
        }
    }

    Ok(())
}
