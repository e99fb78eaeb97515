use super::ValidationError;
use super::rules::{EmailPattern, NotAuthenticated, PasswordsMatch, RequiredField, ValidationRule};

/// The values a rule can look at.
#[derive(Debug, Clone, Copy)]
pub struct FormInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
    /// `None` for forms without a confirmation field
    pub confirm_password: Option<&'a str>,
    pub already_authenticated: bool,
}

impl<'a> FormInput<'a> {
    pub fn login(email: &'a str, password: &'a str) -> Self {
        Self {
            email,
            password,
            confirm_password: None,
            already_authenticated: false,
        }
    }

    pub fn registration(
        email: &'a str,
        password: &'a str,
        confirm_password: &'a str,
        already_authenticated: bool,
    ) -> Self {
        Self {
            email,
            password,
            confirm_password: Some(confirm_password),
            already_authenticated,
        }
    }
}

/// An ordered list of rules. The first failing rule decides the error.
pub struct ValidationPolicy {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationPolicy {
    /// A policy with no rules; everything passes.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the end of the policy.
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Login only requires both fields to be filled in.
    pub fn login() -> Self {
        Self::empty()
            .with_rule(RequiredField::Email)
            .with_rule(RequiredField::Password)
    }

    /// Registration: required fields, then no active session, then email
    /// shape, then matching passwords.
    pub fn registration() -> Self {
        Self::empty()
            .with_rule(RequiredField::Email)
            .with_rule(RequiredField::Password)
            .with_rule(RequiredField::ConfirmPassword)
            .with_rule(NotAuthenticated)
            .with_rule(EmailPattern)
            .with_rule(PasswordsMatch)
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn validate(&self, input: &FormInput<'_>) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(err) = rule.check(input) {
                tracing::debug!("[Validation] rule '{}' rejected input: {}", rule.name(), err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationPolicy")
            .field("rules", &self.rule_names())
            .finish()
    }
}
