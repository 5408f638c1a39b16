//! Binary rule-set file format.
//!
//! Every emitted file is a fixed header followed by a zlib-compressed
//! payload of length-prefixed rule sections.
//!
//! # File Structure
//!
//! ```text
//! +------------------+
//! |      HEADER      |  44 bytes (fixed)
//! +------------------+
//! |     PAYLOAD      |  variable, zlib-compressed
//! +------------------+
//! ```
//!
//! The header carries the magic bytes, the format version tag the rule-set
//! was compiled for, format flags, a SHA-256 checksum of the uncompressed
//! payload, and the compressed payload length.

mod format;
mod writer;

pub use format::{read_header, FormatFlags, Header, HEADER_SIZE, MAGIC};
pub use writer::SrsWriter;
