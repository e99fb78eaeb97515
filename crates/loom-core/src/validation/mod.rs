//! Client-side form validation.
//!
//! Rules are declared once as [`ValidationRule`] predicates and grouped into
//! a [`ValidationPolicy`] per form, so every surface (screen controllers, the
//! CLI, tests) checks input against the same set.

mod policy;
mod rules;

pub use policy::{FormInput, ValidationPolicy};
pub use rules::{
    EmailPattern, NotAuthenticated, PasswordsMatch, RequiredField, ValidationRule,
    require_non_empty,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected form input. The display text is what the screen shows.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("You are already registered and logged in.")]
    AlreadyAuthenticated,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please fill in the {field} field.")]
    EmptyField { field: String },
}
