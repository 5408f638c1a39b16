//! Normalized match-rule items.

use std::fmt;

/// One normalized domain match rule.
///
/// Every domain record in the catalog is converted into one or two of these
/// before it enters the category index. Equality is (kind, value), which is
/// exactly the identity the deduplicator works with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleItem {
    /// Exact domain match
    DomainExact(String),
    /// Domain suffix match (value carries the leading dot)
    DomainSuffix(String),
    /// Substring match anywhere in the domain
    DomainKeyword(String),
    /// Regular expression match (pattern passed through verbatim)
    DomainRegex(String),
}

impl RuleItem {
    /// Get the rule value.
    pub fn value(&self) -> &str {
        match self {
            RuleItem::DomainExact(v)
            | RuleItem::DomainSuffix(v)
            | RuleItem::DomainKeyword(v)
            | RuleItem::DomainRegex(v) => v,
        }
    }

    /// Get the canonical kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleItem::DomainExact(_) => "domain",
            RuleItem::DomainSuffix(_) => "domain_suffix",
            RuleItem::DomainKeyword(_) => "domain_keyword",
            RuleItem::DomainRegex(_) => "domain_regex",
        }
    }
}

impl fmt::Display for RuleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_kind() {
        assert_eq!(RuleItem::DomainExact("a.com".into()).value(), "a.com");
        assert_eq!(RuleItem::DomainSuffix(".a.com".into()).kind(), "domain_suffix");
        assert_eq!(RuleItem::DomainKeyword("ads".into()).kind(), "domain_keyword");
        assert_eq!(RuleItem::DomainRegex("^x".into()).kind(), "domain_regex");
    }

    #[test]
    fn test_identity_is_kind_and_value() {
        // Same value under a different kind is a different rule.
        assert_ne!(
            RuleItem::DomainExact("a.com".into()),
            RuleItem::DomainSuffix("a.com".into())
        );
        assert_eq!(
            RuleItem::DomainKeyword("ads".into()),
            RuleItem::DomainKeyword("ads".into())
        );
    }

    #[test]
    fn test_display() {
        let item = RuleItem::DomainExact("example.com".into());
        assert_eq!(item.to_string(), "domain:example.com");
    }
}
