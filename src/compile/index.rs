//! Category index construction.
//!
//! The index is the category→rules multi-map built once per run from every
//! decoded entry, before any requested category is looked at. Keys are
//! lowercase codes; a record tagged with attributes additionally lands in
//! one `code@attr` bucket per distinct attribute key.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use super::normalize::{cidr_string, domain_rules};
use crate::catalog::{CountryEntry, DomainEntry};
use crate::rule_item::RuleItem;

/// Category index over the site catalog.
#[derive(Debug, Default)]
pub struct DomainIndex {
    buckets: AHashMap<String, Vec<RuleItem>>,
}

impl DomainIndex {
    /// Build the index from every decoded domain entry.
    pub fn build(entries: &[DomainEntry]) -> Self {
        let mut buckets: AHashMap<String, Vec<RuleItem>> = AHashMap::new();

        for entry in entries {
            if entry.code.is_empty() {
                continue;
            }
            let base = entry.code.to_lowercase();
            let rules = domain_rules(entry.kind, &entry.value);

            for attr in distinct_attrs(&entry.attributes) {
                buckets
                    .entry(format!("{base}@{attr}"))
                    .or_default()
                    .extend_from_slice(&rules);
            }

            buckets.entry(base).or_default().extend(rules);
        }

        Self { buckets }
    }

    /// Look up a bucket by its lowercase category key.
    pub fn get(&self, key: &str) -> Option<&[RuleItem]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Number of buckets, attribute sub-categories included.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index holds no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Category index over the IP catalog. Values are normalized CIDR strings.
#[derive(Debug, Default)]
pub struct IpIndex {
    buckets: AHashMap<String, Vec<String>>,
}

impl IpIndex {
    /// Build the index from every decoded country entry.
    pub fn build(entries: &[CountryEntry]) -> Self {
        let mut buckets: AHashMap<String, Vec<String>> = AHashMap::new();

        for entry in entries {
            if entry.code.is_empty() {
                continue;
            }
            buckets
                .entry(entry.code.to_lowercase())
                .or_default()
                .extend(entry.cidrs.iter().map(cidr_string));
        }

        Self { buckets }
    }

    /// Look up a bucket by its lowercase category key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index holds no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Attribute keys in first-seen order, duplicates within one record dropped.
fn distinct_attrs(attrs: &[String]) -> Vec<&String> {
    let mut seen = AHashSet::with_capacity(attrs.len());
    attrs.iter().filter(|a| seen.insert(a.as_str())).collect()
}

/// Drop exact duplicates, keeping the first occurrence of each element and
/// the relative order of survivors.
pub fn dedup<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = AHashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
