//! # Validation Module
//!
//! Form checks run before a user operation is dispatched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (client)                                         │
//! │  ├── Empty / length / shape checks                                     │
//! │  └── Rejected forms never reach the network                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: REST API (server)                                            │
//! │  ├── "User already exists", "email or password are incorrect"          │
//! │  └── Surfaced verbatim through the user slice's `error`                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use burger_core::validation::{validate_email, validate_password};
//!
//! assert!(validate_email("user@example.com").is_ok());
//! assert!(validate_password("secret").is_ok());
//! assert!(validate_password("123").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{LoginData, RegisterData, ResetPasswordData, UserUpdate};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Maximum length of a display name.
pub const MAX_NAME_LEN: usize = 64;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with text on both sides
/// - Domain part contains a dot that is neither first nor last
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("expected name@domain"));
    }

    match domain.find('.') {
        Some(pos) if pos > 0 && !domain.ends_with('.') => Ok(()),
        _ => Err(invalid("domain must contain a dot")),
    }
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - At least [`MIN_PASSWORD_LEN`] characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

/// Validates a display name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the login form.
pub fn validate_login(data: &LoginData) -> ValidationResult<()> {
    validate_email(&data.email)?;
    if data.password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    Ok(())
}

/// Validates the registration form.
pub fn validate_registration(data: &RegisterData) -> ValidationResult<()> {
    validate_name(&data.name)?;
    validate_email(&data.email)?;
    validate_password(&data.password)
}

/// Validates the profile edit form. Only present fields are checked.
pub fn validate_user_update(update: &UserUpdate) -> ValidationResult<()> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(email) = &update.email {
        validate_email(email)?;
    }
    if let Some(password) = &update.password {
        validate_password(password)?;
    }
    Ok(())
}

/// Validates the reset-password form (new password + emailed code).
pub fn validate_reset_password(data: &ResetPasswordData) -> ValidationResult<()> {
    validate_password(&data.password)?;
    if data.token.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "token".to_string(),
        });
    }
    Ok(())
}
