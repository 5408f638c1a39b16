//! Assembled rule-sets and the encode contract.

use std::io::Write;

use crate::rule_item::RuleItem;
use crate::Result;

/// Target rule-set format version written into every emitted file.
pub const RULE_SET_VERSION: u8 = 2;

/// Rule kind tag carried by every emitted rule-set. The compiler only
/// produces plain default rules; logical rule kinds are a downstream
/// engine concern.
pub const RULE_KIND_DEFAULT: u8 = 0;

/// One compiled, deduplicated rule-set for a single category.
///
/// Assembly is the last step that touches the rules: once constructed, a
/// rule-set is handed to the encoder as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledRuleSet {
    /// Domain category: one bucket per match kind, first-seen order.
    Domain {
        domain: Vec<String>,
        domain_suffix: Vec<String>,
        domain_keyword: Vec<String>,
        domain_regex: Vec<String>,
    },
    /// IP category: normalized CIDR strings, first-seen order.
    Ip { ip_cidr: Vec<String> },
}

impl CompiledRuleSet {
    /// Assemble a domain rule-set from already-deduplicated rule items.
    pub fn from_rules(rules: &[RuleItem]) -> Self {
        let mut domain = Vec::new();
        let mut domain_suffix = Vec::new();
        let mut domain_keyword = Vec::new();
        let mut domain_regex = Vec::new();

        for rule in rules {
            match rule {
                RuleItem::DomainExact(v) => domain.push(v.clone()),
                RuleItem::DomainSuffix(v) => domain_suffix.push(v.clone()),
                RuleItem::DomainKeyword(v) => domain_keyword.push(v.clone()),
                RuleItem::DomainRegex(v) => domain_regex.push(v.clone()),
            }
        }

        CompiledRuleSet::Domain {
            domain,
            domain_suffix,
            domain_keyword,
            domain_regex,
        }
    }

    /// Assemble an IP rule-set from already-deduplicated CIDR strings.
    pub fn from_cidrs(cidrs: Vec<String>) -> Self {
        CompiledRuleSet::Ip { ip_cidr: cidrs }
    }

    /// Total number of rules across all buckets.
    pub fn rule_count(&self) -> usize {
        match self {
            CompiledRuleSet::Domain {
                domain,
                domain_suffix,
                domain_keyword,
                domain_regex,
            } => domain.len() + domain_suffix.len() + domain_keyword.len() + domain_regex.len(),
            CompiledRuleSet::Ip { ip_cidr } => ip_cidr.len(),
        }
    }
}

/// Encodes a rule-set object with a format version tag to a byte sink.
///
/// The byte layout stays behind this trait; the compiler only knows it
/// hands over an assembled rule-set and a version.
pub trait RuleSetEncoder {
    /// Encode `rule_set` at format `version` into `sink`.
    fn encode(&self, rule_set: &CompiledRuleSet, version: u8, sink: &mut dyn Write) -> Result<()>;
}
