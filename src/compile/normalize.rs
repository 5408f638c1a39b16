//! Normalization of catalog records into match rules.

use crate::catalog::{Cidr, DomainKind};
use crate::rule_item::RuleItem;

/// Convert one domain record into its match rules.
///
/// A root-domain record whose value contains a label separator matches both
/// the domain itself and every subdomain, so it expands to an exact rule
/// followed by a suffix rule. A bare label (`localhost`) only gets the
/// suffix rule.
pub fn domain_rules(kind: DomainKind, value: &str) -> Vec<RuleItem> {
    match kind {
        DomainKind::Plain => vec![RuleItem::DomainKeyword(value.to_string())],
        DomainKind::Regex => vec![RuleItem::DomainRegex(value.to_string())],
        DomainKind::Full => vec![RuleItem::DomainExact(value.to_string())],
        DomainKind::RootDomain => {
            let mut rules = Vec::with_capacity(2);
            if value.contains('.') {
                rules.push(RuleItem::DomainExact(value.to_string()));
            }
            rules.push(RuleItem::DomainSuffix(format!(".{value}")));
            rules
        }
    }
}

/// Render a CIDR as canonical address text plus decimal prefix length.
///
/// The prefix length is not range-checked; the decoder already guarantees
/// the address itself is well-typed.
pub fn cidr_string(cidr: &Cidr) -> String {
    format!("{}/{}", cidr.addr, cidr.prefix)
}
