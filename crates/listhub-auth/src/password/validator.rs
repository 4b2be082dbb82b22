//! Password policy applied at registration.

use listhub_core::config::AuthConfig;
use listhub_core::error::AppError;

/// Enforces the configured minimum password length. There are no
/// composition rules.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_length() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("1234567").is_err());
        assert!(validator.validate("12345678").is_ok());
        assert!(validator.validate("password").is_ok());
    }
}
