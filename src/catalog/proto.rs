//! Protobuf decoder for the vendor `.dat` catalogs.
//!
//! The catalogs are protobuf-encoded lists keyed by country code. The
//! message set is five small, stable messages, so they are declared here
//! with prost field attributes instead of going through prost-build.

use std::net::{Ipv4Addr, Ipv6Addr};

use prost::Message;

use super::{CatalogDecoder, CountryEntry, DomainEntry, DomainKind};
use crate::{Error, Result};

/// Wire form of one IP range: raw address bytes plus prefix length.
#[derive(Clone, PartialEq, Message)]
pub struct Cidr {
    #[prost(bytes = "vec", tag = "1")]
    pub ip: Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub prefix: u32,
}

/// Wire form of one country's IP ranges.
#[derive(Clone, PartialEq, Message)]
pub struct GeoIp {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, repeated, tag = "2")]
    pub cidr: Vec<Cidr>,
}

/// Wire form of the IP catalog.
#[derive(Clone, PartialEq, Message)]
pub struct GeoIpList {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<GeoIp>,
}

/// Wire form of a domain attribute. Only the key selects sub-categories;
/// the typed value fields of the vendor schema are skipped on decode.
#[derive(Clone, PartialEq, Message)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub key: String,
}

/// Domain match kind on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DomainType {
    Plain = 0,
    Regex = 1,
    RootDomain = 2,
    Full = 3,
}

/// Wire form of one domain record.
#[derive(Clone, PartialEq, Message)]
pub struct Domain {
    #[prost(enumeration = "DomainType", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(message, repeated, tag = "3")]
    pub attribute: Vec<Attribute>,
}

/// Wire form of one country's domain records.
#[derive(Clone, PartialEq, Message)]
pub struct GeoSite {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, repeated, tag = "2")]
    pub domain: Vec<Domain>,
}

/// Wire form of the site catalog.
#[derive(Clone, PartialEq, Message)]
pub struct GeoSiteList {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<GeoSite>,
}

/// Decoder for the vendor `.dat` catalogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DatDecoder;

impl DatDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl CatalogDecoder for DatDecoder {
    fn decode_geoip(&self, data: &[u8]) -> Result<Vec<CountryEntry>> {
        let list = GeoIpList::decode(data).map_err(|e| Error::Decode(e.to_string()))?;

        let entries = list
            .entry
            .into_iter()
            .map(|entry| CountryEntry {
                code: entry.country_code,
                cidrs: entry.cidr.iter().filter_map(typed_cidr).collect(),
            })
            .collect();

        Ok(entries)
    }

    fn decode_geosite(&self, data: &[u8]) -> Result<Vec<DomainEntry>> {
        let list = GeoSiteList::decode(data).map_err(|e| Error::Decode(e.to_string()))?;

        let mut entries = Vec::new();
        for site in list.entry {
            for domain in site.domain {
                let Some(kind) = domain_kind(domain.r#type) else {
                    // Unknown match kind on the wire, drop the record.
                    continue;
                };
                entries.push(DomainEntry {
                    code: site.country_code.clone(),
                    kind,
                    value: domain.value,
                    attributes: domain.attribute.into_iter().map(|a| a.key).collect(),
                });
            }
        }

        Ok(entries)
    }
}

/// Type the raw address bytes. Anything that is not 4 or 16 bytes is
/// untypeable and dropped.
fn typed_cidr(raw: &Cidr) -> Option<super::Cidr> {
    let addr = match raw.ip.len() {
        4 => {
            let octets: [u8; 4] = raw.ip.as_slice().try_into().ok()?;
            Ipv4Addr::from(octets).into()
        }
        16 => {
            let octets: [u8; 16] = raw.ip.as_slice().try_into().ok()?;
            Ipv6Addr::from(octets).into()
        }
        _ => return None,
    };

    Some(super::Cidr {
        addr,
        prefix: raw.prefix as u8,
    })
}

fn domain_kind(wire: i32) -> Option<DomainKind> {
    match DomainType::try_from(wire).ok()? {
        DomainType::Plain => Some(DomainKind::Plain),
        DomainType::Regex => Some(DomainKind::Regex),
        DomainType::RootDomain => Some(DomainKind::RootDomain),
        DomainType::Full => Some(DomainKind::Full),
    }
}
