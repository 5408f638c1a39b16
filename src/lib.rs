//! srsgen - compile vendor geo catalogs into binary rule-set files.
//!
//! This crate turns the two vendor-distributed catalogs — a country→IP-range
//! list (`geoip.dat`) and a country→domain list (`geosite.dat`) — into
//! per-category rule-set files for a downstream routing engine.
//!
//! # Pipeline
//!
//! 1. **Decode**: a [`catalog::CatalogDecoder`] turns raw catalog bytes into
//!    typed country/domain entries.
//! 2. **Index**: all entries are grouped by lowercase category key, with
//!    attribute-tagged records fanned out into `code@attr` sub-categories.
//! 3. **Normalize**: each domain record becomes one or two match rules
//!    (exact, suffix, keyword, regex); each IP range becomes a CIDR string.
//! 4. **Assemble**: per requested category, buckets are deduplicated in
//!    first-seen order and packaged into an immutable [`CompiledRuleSet`].
//! 5. **Encode**: a [`RuleSetEncoder`] writes each rule-set, tagged with the
//!    target format version, to its `<prefix>-<category>.srs` file.
//!
//! A requested category missing from the catalog only produces a warning;
//! any decode, encode, or filesystem failure aborts the run.
//!
//! # Quick Start
//!
//! ```ignore
//! use srsgen::catalog::{CatalogDecoder, DatDecoder};
//! use srsgen::{Compiler, SrsWriter};
//!
//! let entries = DatDecoder::new().decode_geosite(&std::fs::read("geosite.dat")?)?;
//! let compiler = Compiler::new(SrsWriter::new(), "output");
//! let report = compiler.compile_geosite(&entries, &["cn".into(), "cn@ads".into()])?;
//! println!("{} written, {} missing", report.written, report.missing);
//! ```

mod config;
mod error;
mod rule_item;
mod ruleset;

pub mod binary;
pub mod catalog;
pub mod compile;
pub mod remote;

// Re-export core types
pub use config::Config;
pub use error::{Error, Result};
pub use rule_item::RuleItem;
pub use ruleset::{CompiledRuleSet, RuleSetEncoder, RULE_SET_VERSION};

// Re-export the pipeline entry points
pub use binary::SrsWriter;
pub use compile::{CompileReport, Compiler};
