use super::charset::{is_atext, is_qtext, is_quoted_pair};
use super::types::{LocalPartKind, Rejection, Section};

/// Consomme la local-part en tête de `input`.
///
/// Renvoie le type de local-part et sa longueur en octets; le caractère
/// suivant (normalement `@`) n'est pas consommé.
pub(crate) fn parse_local_part(
    input: &str,
    international: bool,
) -> Result<(LocalPartKind, usize), Rejection> {
    if input.starts_with('"') {
        parse_quoted(input, international).map(|len| (LocalPartKind::Quoted, len))
    } else {
        parse_dot_atom(input, international).map(|len| (LocalPartKind::DotAtom, len))
    }
}

/// Dot-string: atom *("." atom). Pas de '.' initial, terminal ni "..".
pub(crate) fn parse_dot_atom(input: &str, international: bool) -> Result<usize, Rejection> {
    let mut pos = 0;
    loop {
        let atom = skip_atom(&input[pos..], international);
        if atom == 0 {
            let next = input[pos..].chars().next();
            return Err(match (pos, next) {
                (0, None | Some('@')) => Rejection::EmptyLocalPart,
                (_, None | Some('.' | '@')) => Rejection::MisplacedDot(Section::LocalPart),
                _ => Rejection::UnexpectedChar(Section::LocalPart),
            });
        }
        pos += atom;
        if input[pos..].starts_with('.') {
            pos += 1;
        } else {
            return Ok(pos);
        }
    }
}

fn skip_atom(input: &str, international: bool) -> usize {
    input
        .char_indices()
        .find(|&(_, c)| !is_atext(c, international))
        .map_or(input.len(), |(idx, _)| idx)
}

/// Quoted-string: DQUOTE *(qtext / quoted-pair) DQUOTE.
/// Les points y sont des caractères ordinaires.
pub(crate) fn parse_quoted(input: &str, international: bool) -> Result<usize, Rejection> {
    let mut chars = input.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return Err(Rejection::UnexpectedChar(Section::LocalPart));
    }
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Ok(idx + 1),
            '\\' => match chars.next() {
                Some((_, escaped)) if is_quoted_pair(escaped) => {}
                Some(_) => return Err(Rejection::InvalidQuotedChar),
                None => return Err(Rejection::UnterminatedQuote),
            },
            c if is_qtext(c, international) => {}
            _ => return Err(Rejection::InvalidQuotedChar),
        }
    }
    Err(Rejection::UnterminatedQuote)
}
