use super::types::{LiteralKind, Rejection};

const IPV6_TAG: &str = "IPv6:";

/// `address-literal` (RFC 5321 §4.1.3): `[` IPv4 `]` ou `[IPv6:` IPv6 `]`.
///
/// `input` doit être le domaine complet: le `]` final termine l'adresse.
pub(crate) fn parse_domain_literal(input: &str) -> Result<LiteralKind, Rejection> {
    let inner = input
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(Rejection::DomainLiteral)?;

    let kind = match strip_ipv6_tag(inner) {
        Some(addr) => is_ipv6_literal(addr).then_some(LiteralKind::Ipv6),
        None => is_ipv4_literal(inner).then_some(LiteralKind::Ipv4),
    };
    kind.ok_or(Rejection::DomainLiteral)
}

fn strip_ipv6_tag(inner: &str) -> Option<&str> {
    let tag = inner.get(..IPV6_TAG.len())?;
    if tag.eq_ignore_ascii_case(IPV6_TAG) {
        Some(&inner[IPV6_TAG.len()..])
    } else {
        None
    }
}

/// Snum 3("." Snum), Snum = 1*3DIGIT d'une valeur 0..=255.
/// Les zéros de tête sont permis (`010.0.0.1`).
fn is_ipv4_literal(s: &str) -> bool {
    let mut groups = 0;
    for snum in s.split('.') {
        if snum.is_empty() || snum.len() > 3 || !snum.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let value = snum
            .bytes()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        if value > 255 {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/// IPv6-full / IPv6-comp / IPv6v4-full / IPv6v4-comp.
///
/// `::` remplace au moins deux groupes: 6 groupes explicites au plus autour
/// (4 avec une fin IPv4), et exactement 8 (6) sans `::`.
fn is_ipv6_literal(s: &str) -> bool {
    let (hex, max_groups) = match s.rfind(':') {
        Some(idx) if s[idx + 1..].contains('.') => {
            if !is_ipv4_literal(&s[idx + 1..]) {
                return false;
            }
            let head = &s[..=idx];
            // "::1.2.3.4" garde son "::", "1:2:3:4:5:6:1.2.3.4" perd le ':' final
            let head = if head.ends_with("::") {
                head
            } else {
                &head[..idx]
            };
            (head, 6)
        }
        _ => (s, 8),
    };

    match hex.split_once("::") {
        Some((left, right)) => {
            if right.contains("::") {
                return false;
            }
            match (count_hex_groups(left), count_hex_groups(right)) {
                (Some(l), Some(r)) => l + r <= max_groups - 2,
                _ => false,
            }
        }
        None => count_hex_groups(hex) == Some(max_groups),
    }
}

/// IPv6-hex *(":" IPv6-hex), IPv6-hex = 1*4HEXDIG; `None` si malformé.
fn count_hex_groups(s: &str) -> Option<usize> {
    if s.is_empty() {
        return Some(0);
    }
    let mut groups = 0;
    for group in s.split(':') {
        if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        groups += 1;
    }
    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_literals() {
        assert_eq!(parse_domain_literal("[127.0.0.1]"), Ok(LiteralKind::Ipv4));
        assert_eq!(parse_domain_literal("[255.255.255.255]"), Ok(LiteralKind::Ipv4));
        assert_eq!(parse_domain_literal("[256.0.0.1]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[192.168.1]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[1.2.3.4.5]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[1..2.3]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[+1.2.3.4]"), Err(Rejection::DomainLiteral));
    }

    #[test]
    fn ipv4_leading_zeros_allowed() {
        assert_eq!(parse_domain_literal("[010.0.0.1]"), Ok(LiteralKind::Ipv4));
        assert_eq!(parse_domain_literal("[001.002.003.004]"), Ok(LiteralKind::Ipv4));
        assert_eq!(parse_domain_literal("[0001.2.3.4]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[099.2.3.256]"), Err(Rejection::DomainLiteral));
    }

    #[test]
    fn ipv6_literals() {
        assert_eq!(parse_domain_literal("[IPv6:::1]"), Ok(LiteralKind::Ipv6));
        assert_eq!(parse_domain_literal("[IPv6:::]"), Ok(LiteralKind::Ipv6));
        assert_eq!(parse_domain_literal("[ipv6:fe80::1]"), Ok(LiteralKind::Ipv6));
        assert_eq!(
            parse_domain_literal("[IPv6:2001:db8:85a3::8a2e:370:7334]"),
            Ok(LiteralKind::Ipv6)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:2001:db8:85a3:0:0:8a2e:370:7334]"),
            Ok(LiteralKind::Ipv6)
        );
        assert_eq!(parse_domain_literal("[IPv6:1::2::3]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[IPv6:12345::]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[IPv6:1:2:3:4:5:6:7]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[IPv6::1::]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[IPv6::::]"), Err(Rejection::DomainLiteral));
    }

    #[test]
    fn ipv6_compressed_group_limit() {
        // "::" doit remplacer au moins deux groupes
        assert_eq!(
            parse_domain_literal("[IPv6:1:2:3:4:5:6::]"),
            Ok(LiteralKind::Ipv6)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:1:2:3:4:5:6:7::]"),
            Err(Rejection::DomainLiteral)
        );
        assert_eq!(
            parse_domain_literal("[IPv6::2:3:4:5:6:7:8]"),
            Err(Rejection::DomainLiteral)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:1:2:3::5:6:7:8]"),
            Err(Rejection::DomainLiteral)
        );
    }

    #[test]
    fn ipv6_with_ipv4_tail() {
        assert_eq!(
            parse_domain_literal("[IPv6:::ffff:192.0.2.1]"),
            Ok(LiteralKind::Ipv6)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:::192.0.2.1]"),
            Ok(LiteralKind::Ipv6)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:1:2:3:4:5:6:192.0.2.1]"),
            Ok(LiteralKind::Ipv6)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:::ffff:010.000.002.001]"),
            Ok(LiteralKind::Ipv6)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:1:2:3:4:5::192.0.2.1]"),
            Err(Rejection::DomainLiteral)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:1:2:3:4:5:192.0.2.1]"),
            Err(Rejection::DomainLiteral)
        );
        assert_eq!(
            parse_domain_literal("[IPv6:::ffff:192.0.2.256]"),
            Err(Rejection::DomainLiteral)
        );
    }

    #[test]
    fn untagged_ipv6_is_not_a_literal() {
        assert_eq!(parse_domain_literal("[::1]"), Err(Rejection::DomainLiteral));
    }

    #[test]
    fn brackets_must_enclose_the_whole_domain() {
        assert_eq!(parse_domain_literal("[127.0.0.1"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[127.0.0.1]x"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[127.0.0.1]]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[]"), Err(Rejection::DomainLiteral));
        assert_eq!(parse_domain_literal("[tag:content]"), Err(Rejection::DomainLiteral));
    }
}
