mod charset;
mod domain;
mod literal;
mod local;
mod types;

pub use types::{
    EmailError, MAX_ADDRESS_LEN, MAX_LABEL_LEN, MAX_LOCAL_PART_LEN, ValidationResult,
    ValidatorOptions,
};

pub(crate) use types::{Parsed, Rejection};

use domain::parse_domain;
use local::parse_local_part;
use types::Section;

/// Valide `email` avec les options par défaut (ASCII uniquement, domaines à
/// un seul label acceptés).
pub fn validate_email(email: &str) -> bool {
    validate_email_with_options(email, &ValidatorOptions::default())
}

/// Valide la syntaxe de `email` (RFC 5321/5322, RFC 6531 si
/// `allow_international`).
///
/// Aucune normalisation: l'entrée est validée telle quelle, espaces compris.
/// Une entrée malformée donne `false`, jamais une erreur.
pub fn validate_email_with_options(email: &str, options: &ValidatorOptions) -> bool {
    let outcome = scan(email, options);

    #[cfg(feature = "with-tracing")]
    match &outcome {
        Ok(parsed) => tracing::trace!(
            local = ?parsed.local,
            domain = ?parsed.domain,
            "address accepted"
        ),
        Err(reason) => tracing::debug!(
            %reason,
            international = options.allow_international,
            top_level_domains = options.allow_top_level_domains,
            "address rejected"
        ),
    }

    outcome.is_ok()
}

/// Un seul passage de gauche à droite: local-part, `@`, domaine.
pub(crate) fn scan(email: &str, options: &ValidatorOptions) -> Result<Parsed, Rejection> {
    if email.is_empty() {
        return Err(Rejection::Empty);
    }
    // coupe court avant toute analyse sur les entrées trop longues
    if exceeds_chars(email, MAX_ADDRESS_LEN) {
        return Err(Rejection::TooLong);
    }

    let (local, local_len) = parse_local_part(email, options.allow_international)?;
    if exceeds_chars(&email[..local_len], MAX_LOCAL_PART_LEN) {
        return Err(Rejection::LocalPartTooLong);
    }

    let rest = &email[local_len..];
    let domain = match rest.chars().next() {
        Some('@') => parse_domain(&rest[1..], options)?,
        Some(_) => return Err(Rejection::UnexpectedChar(Section::LocalPart)),
        None => return Err(Rejection::MissingAt),
    };

    Ok(Parsed { local, domain })
}

/// `true` si `s` compte plus de `max` caractères; s'arrête au `max + 1`-ième.
fn exceeds_chars(s: &str, max: usize) -> bool {
    s.len() > max && s.chars().nth(max).is_some()
}
