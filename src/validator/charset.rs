//! Character classes of the RFC 5321/5322 address grammar.

use phf::phf_set;

/// `atext` symbols (RFC 5322 §3.2.3); letters and digits are checked apart.
static ATEXT_SYMBOLS: phf::Set<char> = phf_set! {
    '!', '#', '$', '%', '&', '\'', '*', '+', '-', '/',
    '=', '?', '^', '_', '`', '{', '|', '}', '~',
};

/// RFC 6531 `UTF8-non-ascii`, minus whitespace and controls which no
/// production accepts.
pub(crate) fn is_utf8_non_ascii(c: char) -> bool {
    !c.is_ascii() && !c.is_whitespace() && !c.is_control()
}

pub(crate) fn is_atext(c: char, international: bool) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || ATEXT_SYMBOLS.contains(&c)
    } else {
        international && is_utf8_non_ascii(c)
    }
}

/// `qtextSMTP`: %d32-33 / %d35-91 / %d93-126
pub(crate) fn is_qtext(c: char, international: bool) -> bool {
    if c.is_ascii() {
        matches!(c, ' '..='~') && c != '"' && c != '\\'
    } else {
        international && is_utf8_non_ascii(c)
    }
}

/// Character allowed after a backslash in `quoted-pairSMTP`.
pub(crate) fn is_quoted_pair(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Letter-digit-hyphen, plus `U-label` code points in international mode.
pub(crate) fn is_label_char(c: char, international: bool) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '-'
    } else {
        international && is_utf8_non_ascii(c)
    }
}
