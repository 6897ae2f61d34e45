use super::charset::is_label_char;
use super::literal::parse_domain_literal;
use super::types::{DomainKind, MAX_LABEL_LEN, Rejection, Section, ValidatorOptions};

/// Valide le domaine (tout ce qui suit le `@`): littéral entre crochets ou
/// nom pointé. Tout `input` doit être consommé.
pub(crate) fn parse_domain(
    input: &str,
    options: &ValidatorOptions,
) -> Result<DomainKind, Rejection> {
    if input.is_empty() {
        return Err(Rejection::EmptyDomain);
    }
    if input.starts_with('[') {
        return parse_domain_literal(input).map(DomainKind::Literal);
    }
    parse_dotted_name(input, options).map(DomainKind::DottedName)
}

/// label *("." label); renvoie le nombre de labels.
pub(crate) fn parse_dotted_name(
    input: &str,
    options: &ValidatorOptions,
) -> Result<usize, Rejection> {
    let mut rest = input;
    let mut labels = 0;
    let mut top_numeric;

    loop {
        let len = skip_label(rest, options.allow_international)?;
        top_numeric = rest[..len].bytes().all(|b| b.is_ascii_digit());
        labels += 1;
        rest = &rest[len..];

        match rest.chars().next() {
            None => break,
            Some('.') => {
                rest = &rest[1..];
                if rest.is_empty() {
                    return Err(Rejection::MisplacedDot(Section::Domain));
                }
            }
            Some(_) => return Err(Rejection::UnexpectedChar(Section::Domain)),
        }
    }

    if labels == 1 && !options.allow_top_level_domains {
        return Err(Rejection::TopLevelDomain);
    }
    // une IP sans crochets n'est pas un nom de domaine
    if top_numeric {
        return Err(Rejection::NumericTopLabel);
    }
    Ok(labels)
}

/// Consomme un label (1..=63 caractères, ni `-` initial ni final) et renvoie
/// sa longueur en octets.
fn skip_label(input: &str, international: bool) -> Result<usize, Rejection> {
    let mut count = 0;
    let mut end = 0;
    let mut last = None;

    for (idx, c) in input.char_indices() {
        if !is_label_char(c, international) {
            break;
        }
        if count == 0 && c == '-' {
            return Err(Rejection::LabelHyphen);
        }
        count += 1;
        end = idx + c.len_utf8();
        last = Some(c);
    }

    match last {
        None => Err(match input.chars().next() {
            None | Some('.') => Rejection::MisplacedDot(Section::Domain),
            Some(_) => Rejection::UnexpectedChar(Section::Domain),
        }),
        Some('-') => Err(Rejection::LabelHyphen),
        Some(_) if count > MAX_LABEL_LEN => Err(Rejection::LabelTooLong),
        Some(_) => Ok(end),
    }
}
