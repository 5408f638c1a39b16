//! Binary rule-set file writer.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};

use super::format::*;
use crate::ruleset::{CompiledRuleSet, RuleSetEncoder, RULE_KIND_DEFAULT};
use crate::Result;

/// Rule-set file encoder.
///
/// Writes the fixed header followed by a zlib-compressed payload. The
/// payload opens with the rule kind tag and the section count, then one
/// length-prefixed string section per rule bucket.
#[derive(Debug, Default, Clone, Copy)]
pub struct SrsWriter;

impl SrsWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    fn payload(&self, rule_set: &CompiledRuleSet) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64 * rule_set.rule_count() + 16);
        buf.push(RULE_KIND_DEFAULT);

        match rule_set {
            CompiledRuleSet::Domain {
                domain,
                domain_suffix,
                domain_keyword,
                domain_regex,
            } => {
                buf.push(4); // section count
                write_section(&mut buf, SECTION_DOMAIN, domain);
                write_section(&mut buf, SECTION_DOMAIN_SUFFIX, domain_suffix);
                write_section(&mut buf, SECTION_DOMAIN_KEYWORD, domain_keyword);
                write_section(&mut buf, SECTION_DOMAIN_REGEX, domain_regex);
            }
            CompiledRuleSet::Ip { ip_cidr } => {
                buf.push(1);
                write_section(&mut buf, SECTION_IP_CIDR, ip_cidr);
            }
        }

        buf
    }
}

impl RuleSetEncoder for SrsWriter {
    fn encode(&self, rule_set: &CompiledRuleSet, version: u8, sink: &mut dyn Write) -> Result<()> {
        let payload = self.payload(rule_set);
        let checksum: [u8; 32] = Sha256::digest(&payload).into();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload)?;
        let compressed = encoder.finish()?;

        sink.write_all(&MAGIC)?;
        sink.write_all(&[version, FormatFlags::PAYLOAD_COMPRESSED.bits(), 0, 0])?;
        sink.write_all(&checksum)?;
        sink.write_all(&(compressed.len() as u32).to_le_bytes())?;
        sink.write_all(&compressed)?;
        sink.flush()?;

        Ok(())
    }
}

fn write_section(buf: &mut Vec<u8>, kind: u8, values: &[String]) {
    buf.push(kind);
    buf.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for value in values {
        buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
        buf.extend_from_slice(value.as_bytes());
    }
}
