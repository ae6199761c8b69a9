use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Prompt for a line of text, pre-filled with `current`.
pub fn text(prompt: &str, current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Read a password without echoing it.
pub fn password(prompt: &str) -> Result<String> {
    Ok(rpassword::prompt_password(prompt)?)
}
