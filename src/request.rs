//! Caller-side gate around the validator.
//!
//! Resolves the leading/trailing whitespace policy, then hands the address to
//! [`validate_email_with_options`]. An absent address is an error; any string,
//! even empty, is a validation question answered with a boolean.

use crate::validator::{
    EmailError, ValidationResult, ValidatorOptions, validate_email_with_options,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRequest<'a> {
    pub address: Option<&'a str>,
    /// When true the address is trimmed before validation; when false an
    /// address with surrounding whitespace is invalid.
    pub allow_leading_trailing_whitespace: bool,
    pub options: ValidatorOptions,
}

impl<'a> ValidationRequest<'a> {
    pub fn new(address: &'a str) -> Self {
        Self {
            address: Some(address),
            allow_leading_trailing_whitespace: false,
            options: ValidatorOptions::default(),
        }
    }

    /// Request with no address at all; [`email_validate`] rejects it with
    /// [`EmailError::MissingAddress`].
    pub fn absent() -> Self {
        Self {
            address: None,
            ..Self::new("")
        }
    }

    pub fn with_whitespace(mut self, allow: bool) -> Self {
        self.allow_leading_trailing_whitespace = allow;
        self
    }

    pub fn with_international(mut self, allow: bool) -> Self {
        self.options.allow_international = allow;
        self
    }

    pub fn with_top_level_domains(mut self, allow: bool) -> Self {
        self.options.allow_top_level_domains = allow;
        self
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }
}

pub fn email_validate(request: &ValidationRequest<'_>) -> Result<ValidationResult, EmailError> {
    email_validate_with(request, validate_email_with_options)
}

pub(crate) fn email_validate_with<F>(
    request: &ValidationRequest<'_>,
    validate: F,
) -> Result<ValidationResult, EmailError>
where
    F: Fn(&str, &ValidatorOptions) -> bool,
{
    let address = request.address.ok_or(EmailError::MissingAddress)?;
    let trimmed = address.trim();

    if !request.allow_leading_trailing_whitespace && trimmed.len() != address.len() {
        #[cfg(feature = "with-tracing")]
        tracing::debug!("surrounding whitespace not allowed, skipping validation");
        return Ok(ValidationResult::from(false));
    }

    Ok(ValidationResult::from(validate(trimmed, &request.options)))
}
