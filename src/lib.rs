#![forbid(unsafe_code)]
//! mailsyntax_lib — contrôle syntaxique d'adresses e-mail (RFC 5321/5322,
//! RFC 6531 optionnel). Pas de DNS, pas de SMTP, pas de normalisation.
//!
//! ```
//! use mailsyntax_lib::{ValidatorOptions, validate_email, validate_email_with_options};
//!
//! assert!(validate_email("firstname.lastname@domain.com"));
//! assert!(!validate_email("user..name@domain.com"));
//! assert!(!validate_email_with_options("用户@例子.广告", &ValidatorOptions::default()));
//! let intl = ValidatorOptions::international();
//! assert!(validate_email_with_options("用户@例子.广告", &intl));
//! ```

pub mod request;
pub mod validator;

pub use request::{ValidationRequest, email_validate};
pub use validator::{
    EmailError, MAX_ADDRESS_LEN, MAX_LABEL_LEN, MAX_LOCAL_PART_LEN, ValidationResult,
    ValidatorOptions, validate_email, validate_email_with_options,
};
