use anyhow::{Result, anyhow};
use inquire::{Password, PasswordDisplayMode};

/// Masked password prompt for decryption.
///
/// No confirmation pass: the user already knows the password, and a wrong
/// one is caught by padding validation during decryption. Empty input is
/// rejected by the pipeline itself.
pub fn decryption_password() -> Result<String> {
    Password::new("Enter decryption password:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .map_err(|e| anyhow!("password input failed: {e}"))
}
