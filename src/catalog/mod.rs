//! Typed catalog entries and the decode contract.
//!
//! The vendor ships two binary catalogs: a country→IP-range list and a
//! country→domain list. This module defines the typed shapes the compiler
//! consumes and the [`CatalogDecoder`] seam that turns raw catalog bytes
//! into them. The concrete protobuf decoder lives in [`proto`].

pub mod proto;

pub use proto::DatDecoder;

use std::net::IpAddr;

use crate::Result;

/// How a domain record matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// Substring match
    Plain,
    /// Regular expression match
    Regex,
    /// The domain itself and every subdomain
    RootDomain,
    /// Exact match
    Full,
}

/// One domain record from the site catalog.
///
/// `attributes` holds the attribute keys tagged on the record (`@ads`,
/// `@cn`, ...); most records carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    /// Country or topical code, as stored in the catalog
    pub code: String,
    /// Match kind
    pub kind: DomainKind,
    /// Domain value or pattern
    pub value: String,
    /// Attribute keys on this record
    pub attributes: Vec<String>,
}

/// One CIDR from the IP catalog, already typed by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cidr {
    /// Network address
    pub addr: IpAddr,
    /// Prefix length
    pub prefix: u8,
}

/// One country's IP ranges from the IP catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    /// Country code, as stored in the catalog
    pub code: String,
    /// CIDRs in catalog order
    pub cidrs: Vec<Cidr>,
}

/// Decodes raw catalog bytes into typed entries.
///
/// The byte-level schema stays behind this trait; address bytes the decoder
/// cannot type into an [`IpAddr`] must be dropped here so they never reach
/// the compiler.
pub trait CatalogDecoder {
    /// Decode an IP catalog into country entries.
    fn decode_geoip(&self, data: &[u8]) -> Result<Vec<CountryEntry>>;

    /// Decode a site catalog into one entry per domain record.
    fn decode_geosite(&self, data: &[u8]) -> Result<Vec<DomainEntry>>;
}
