//! Category-aware rule-set compilation.
//!
//! One run is strictly sequential: the catalog is decoded once upstream,
//! the category index is built once here, then each requested category is
//! resolved and emitted in request order. A requested category that is not
//! in the index is a soft failure — it is warned about and counted, and
//! the loop moves on. An encoder or filesystem error is fatal and aborts
//! the remaining loop; files already written stay on disk.

mod index;
mod normalize;

pub use index::{dedup, DomainIndex, IpIndex};
pub use normalize::{cidr_string, domain_rules};

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::catalog::{CountryEntry, DomainEntry};
use crate::ruleset::{CompiledRuleSet, RuleSetEncoder, RULE_SET_VERSION};
use crate::Result;

/// File extension of emitted rule-sets.
pub const OUTPUT_EXT: &str = "srs";

/// Per-run outcome counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompileReport {
    /// Categories successfully emitted
    pub written: usize,
    /// Categories requested but absent from the catalog
    pub missing: usize,
}

/// Compiles requested categories into rule-set files.
pub struct Compiler<E> {
    encoder: E,
    out_dir: PathBuf,
}

impl<E: RuleSetEncoder> Compiler<E> {
    /// Create a compiler writing into `out_dir` through `encoder`.
    ///
    /// The output directory must already exist.
    pub fn new(encoder: E, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            encoder,
            out_dir: out_dir.into(),
        }
    }

    /// Compile the requested IP categories.
    pub fn compile_geoip(
        &self,
        entries: &[CountryEntry],
        categories: &[String],
    ) -> Result<CompileReport> {
        let index = IpIndex::build(entries);
        let mut report = CompileReport::default();

        for category in categories {
            let code = category.to_lowercase();
            match index.get(&code) {
                None => {
                    log::warn!("geoip category {category:?} not found in catalog");
                    report.missing += 1;
                }
                Some(cidrs) => {
                    let rule_set = CompiledRuleSet::from_cidrs(dedup(cidrs));
                    self.emit("geoip", &code, &rule_set)?;
                    report.written += 1;
                }
            }
        }

        Ok(report)
    }

    /// Compile the requested domain categories, attribute sub-categories
    /// (`cn@ads`) included.
    pub fn compile_geosite(
        &self,
        entries: &[DomainEntry],
        categories: &[String],
    ) -> Result<CompileReport> {
        let index = DomainIndex::build(entries);
        let mut report = CompileReport::default();

        for category in categories {
            let code = category.to_lowercase();
            match index.get(&code) {
                None => {
                    log::warn!("geosite category {category:?} not found in catalog");
                    report.missing += 1;
                }
                Some(rules) => {
                    let rule_set = CompiledRuleSet::from_rules(&dedup(rules));
                    self.emit("geosite", &code, &rule_set)?;
                    report.written += 1;
                }
            }
        }

        Ok(report)
    }

    fn emit(&self, prefix: &str, code: &str, rule_set: &CompiledRuleSet) -> Result<()> {
        let path = self.out_dir.join(format!("{prefix}-{code}.{OUTPUT_EXT}"));
        let mut sink = BufWriter::new(File::create(&path)?);
        self.encoder.encode(rule_set, RULE_SET_VERSION, &mut sink)?;
        log::info!("wrote {} ({} rules)", path.display(), rule_set.rule_count());
        Ok(())
    }
}
