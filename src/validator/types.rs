use std::fmt;

use thiserror::Error;

/// RFC 5321 §4.5.3.1.3: path limit (256) minus the surrounding angle brackets.
pub const MAX_ADDRESS_LEN: usize = 254;
/// RFC 5321 §4.5.3.1.1
pub const MAX_LOCAL_PART_LEN: usize = 64;
/// RFC 1035 §2.3.4
pub const MAX_LABEL_LEN: usize = 63;

/// Policy flags for a validation call.
///
/// `Default` accepts single-label domains and rejects non-ASCII input.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Accept non-ASCII code points in atoms, quoted strings and labels (RFC 6531).
    pub allow_international: bool,
    /// Accept domains made of a single label, e.g. `user@localhost`.
    pub allow_top_level_domains: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            allow_international: false,
            allow_top_level_domains: true,
        }
    }
}

impl ValidatorOptions {
    /// ASCII only, dotted domains only.
    pub fn strict() -> Self {
        Self {
            allow_international: false,
            allow_top_level_domains: false,
        }
    }

    pub fn international() -> Self {
        Self {
            allow_international: true,
            ..Self::default()
        }
    }

    pub fn with_international(mut self, allow: bool) -> Self {
        self.allow_international = allow;
        self
    }

    pub fn with_top_level_domains(mut self, allow: bool) -> Self {
        self.allow_top_level_domains = allow;
        self
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
}

impl From<bool> for ValidationResult {
    fn from(valid: bool) -> Self {
        Self { valid }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// The caller did not provide an address at all (distinct from `""`).
    #[error("no address provided")]
    MissingAddress,
}

/// Part of the address the scanner was in when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    LocalPart,
    Domain,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::LocalPart => f.write_str("local part"),
            Section::Domain => f.write_str("domain"),
        }
    }
}

/// First grammar rule an address broke. Never leaves the crate: callers only
/// see a boolean.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    #[error("address is empty")]
    Empty,
    #[error("address exceeds 254 characters")]
    TooLong,
    #[error("local part is empty")]
    EmptyLocalPart,
    #[error("local part exceeds 64 characters")]
    LocalPartTooLong,
    #[error("quoted local part is not terminated")]
    UnterminatedQuote,
    #[error("invalid character in quoted local part")]
    InvalidQuotedChar,
    #[error("missing '@' separator")]
    MissingAt,
    #[error("misplaced dot in {0}")]
    MisplacedDot(Section),
    #[error("unexpected character in {0}")]
    UnexpectedChar(Section),
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain label exceeds 63 characters")]
    LabelTooLong,
    #[error("domain label starts or ends with '-'")]
    LabelHyphen,
    #[error("top label is all digits")]
    NumericTopLabel,
    #[error("single-label domain not allowed")]
    TopLevelDomain,
    #[error("malformed domain literal")]
    DomainLiteral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocalPartKind {
    DotAtom,
    Quoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LiteralKind {
    Ipv4,
    Ipv6,
}

#[cfg_attr(not(any(test, feature = "with-tracing")), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DomainKind {
    /// Number of labels.
    DottedName(usize),
    Literal(LiteralKind),
}

/// Shape of an accepted address.
#[cfg_attr(not(any(test, feature = "with-tracing")), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub local: LocalPartKind,
    pub domain: DomainKind,
}
