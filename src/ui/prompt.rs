//! Interactive prompts

use dialoguer::{theme::ColorfulTheme, Password};

use crate::error::{DiscoveryError, Result};

/// Ask for the auth token without echoing it
pub fn prompt_token() -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Sentry auth token")
        .interact()
        .map_err(|e| DiscoveryError::Io(format!("Failed to read token: {}", e)))
}
