//! Binary format constants and header layout.

use bitflags::bitflags;

use crate::{Error, Result};

/// Magic bytes identifying a rule-set file.
pub const MAGIC: [u8; 4] = *b"SRS\0";

/// Header size in bytes.
pub const HEADER_SIZE: usize = 44;

/// Payload section kinds.
pub(crate) const SECTION_DOMAIN: u8 = 0;
pub(crate) const SECTION_DOMAIN_SUFFIX: u8 = 1;
pub(crate) const SECTION_DOMAIN_KEYWORD: u8 = 2;
pub(crate) const SECTION_DOMAIN_REGEX: u8 = 3;
pub(crate) const SECTION_IP_CIDR: u8 = 4;

bitflags! {
    /// Format flags for rule-set files.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatFlags: u8 {
        /// Payload is zlib compressed.
        const PAYLOAD_COMPRESSED = 0b00000001;
    }
}

/// Parsed rule-set file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Format version tag the rule-set was compiled for
    pub version: u8,
    /// Format flags
    pub flags: FormatFlags,
    /// SHA-256 checksum of the uncompressed payload
    pub checksum: [u8; 32],
    /// Compressed payload length
    pub payload_len: u32,
}

/// Parse and validate a header from the start of `data`.
pub fn read_header(data: &[u8]) -> Result<Header> {
    if data.len() < HEADER_SIZE {
        return Err(Error::Decode(format!(
            "rule-set header truncated: {} bytes",
            data.len()
        )));
    }
    if data[..4] != MAGIC {
        return Err(Error::Decode("invalid rule-set magic bytes".to_string()));
    }

    let mut checksum = [0u8; 32];
    checksum.copy_from_slice(&data[8..40]);

    Ok(Header {
        version: data[4],
        flags: FormatFlags::from_bits_truncate(data[5]),
        checksum,
        payload_len: u32::from_le_bytes([data[40], data[41], data[42], data[43]]),
    })
}
