use super::ValidationError;
use super::policy::FormInput;
use once_cell::sync::Lazy;
use regex::Regex;

// Unanchored: matches something@something.something anywhere in the input.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// A single predicate over a submitted form.
pub trait ValidationRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn check(&self, input: &FormInput<'_>) -> Result<(), ValidationError>;
}

/// Rejects blank values. Shared by the form rules and the project dialog.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Which form field a [`RequiredField`] rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Email,
    Password,
    ConfirmPassword,
}

impl ValidationRule for RequiredField {
    fn name(&self) -> &'static str {
        match self {
            Self::Email => "required_email",
            Self::Password => "required_password",
            Self::ConfirmPassword => "required_confirm_password",
        }
    }

    fn check(&self, input: &FormInput<'_>) -> Result<(), ValidationError> {
        match self {
            Self::Email => require_non_empty("email", input.email),
            Self::Password => require_non_empty("password", input.password),
            Self::ConfirmPassword => {
                require_non_empty("confirm password", input.confirm_password.unwrap_or(""))
            }
        }
    }
}

/// Registration is refused while a session is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotAuthenticated;

impl ValidationRule for NotAuthenticated {
    fn name(&self) -> &'static str {
        "not_authenticated"
    }

    fn check(&self, input: &FormInput<'_>) -> Result<(), ValidationError> {
        if input.already_authenticated {
            Err(ValidationError::AlreadyAuthenticated)
        } else {
            Ok(())
        }
    }
}

/// Loose email shape: a non-blank local part, `@`, a dotted domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailPattern;

impl EmailPattern {
    pub fn matches(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }
}

impl ValidationRule for EmailPattern {
    fn name(&self) -> &'static str {
        "email_pattern"
    }

    fn check(&self, input: &FormInput<'_>) -> Result<(), ValidationError> {
        if Self::matches(input.email) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

/// Password and confirmation must be byte-for-byte equal.
///
/// Forms without a confirmation field pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordsMatch;

impl ValidationRule for PasswordsMatch {
    fn name(&self) -> &'static str {
        "passwords_match"
    }

    fn check(&self, input: &FormInput<'_>) -> Result<(), ValidationError> {
        match input.confirm_password {
            Some(confirm) if confirm != input.password => Err(ValidationError::PasswordMismatch),
            _ => Ok(()),
        }
    }
}
