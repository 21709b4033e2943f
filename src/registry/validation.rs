//! Registration input sanitation
//!
//! Checks usernames and passwords before they reach the credential store.
//! Email addresses are stored verbatim and only length-capped.

use crate::config::RegistryConfig;
use crate::error::RegistryError;

/// Performs basic input sanitation to check for malicious or malformed values.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Validates username format and length.
pub fn validate_username(username: &str, config: &RegistryConfig) -> Result<(), RegistryError> {
    // Check for invalid username characters/format
    if username.contains(['@', '#', ',', '%']) || username.starts_with(char::is_numeric) {
        return Err(RegistryError::InvalidUsername(username.to_string()));
    }

    if !is_valid_input(username, config.max_username_length) {
        return Err(RegistryError::MalformedInput(
            "Invalid username format".into(),
        ));
    }

    Ok(())
}

/// Validates password shape. Strength policy is out of scope; only
/// malformed input is rejected here.
pub fn validate_password(password: &str, config: &RegistryConfig) -> Result<(), RegistryError> {
    if !is_valid_input(password, config.max_password_length) {
        return Err(RegistryError::MalformedInput(
            "Invalid password format".into(),
        ));
    }

    Ok(())
}

/// Caps email length. Addresses are otherwise stored as given.
pub fn validate_email(email: &str, config: &RegistryConfig) -> Result<(), RegistryError> {
    if email.len() > config.max_email_length {
        return Err(RegistryError::MalformedInput("Email too long".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        let config = RegistryConfig::default();
        assert!(validate_username("anano", &config).is_ok());
        assert!(validate_username("gio", &config).is_ok());
        assert!(validate_username("user_01", &config).is_ok());
    }

    #[test]
    fn test_rejects_invalid_username_characters() {
        let config = RegistryConfig::default();
        assert!(matches!(
            validate_username("an@no", &config),
            Err(RegistryError::InvalidUsername(_))
        ));
        assert!(matches!(
            validate_username("1user", &config),
            Err(RegistryError::InvalidUsername(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_usernames() {
        let config = RegistryConfig::default();
        assert!(matches!(
            validate_username("", &config),
            Err(RegistryError::MalformedInput(_))
        ));
        assert!(matches!(
            validate_username("   ", &config),
            Err(RegistryError::MalformedInput(_))
        ));
        assert!(matches!(
            validate_username("evil\r\nname", &config),
            Err(RegistryError::MalformedInput(_))
        ));
        let too_long = "a".repeat(config.max_username_length + 1);
        assert!(validate_username(&too_long, &config).is_err());
    }

    #[test]
    fn test_rejects_malformed_passwords() {
        let config = RegistryConfig::default();
        assert!(validate_password("secure123", &config).is_ok());
        assert!(validate_password("", &config).is_err());
        assert!(validate_password("bad\0pass", &config).is_err());
    }

    #[test]
    fn test_email_only_length_capped() {
        let config = RegistryConfig::default();
        // Addresses are not validated for shape, only for length.
        assert!(validate_email("not-an-email", &config).is_ok());
        assert!(validate_email("anano@example.com", &config).is_ok());
        let too_long = "a".repeat(config.max_email_length + 1);
        assert!(validate_email(&too_long, &config).is_err());
    }
}
