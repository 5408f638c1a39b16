//! End-to-end tests over the full compilation pipeline: wire-encoded
//! catalogs in, rule-set files out.

use prost::Message;
use tempfile::tempdir;

use srsgen::binary::{read_header, FormatFlags};
use srsgen::catalog::proto::{
    Attribute, DatDecoder, Domain, DomainType, GeoIp, GeoIpList, GeoSite, GeoSiteList,
    Cidr as WireCidr,
};
use srsgen::catalog::CatalogDecoder;
use srsgen::{Compiler, SrsWriter, RULE_SET_VERSION};

fn domain(kind: DomainType, value: &str, attrs: &[&str]) -> Domain {
    Domain {
        r#type: kind as i32,
        value: value.to_string(),
        attribute: attrs
            .iter()
            .map(|k| Attribute { key: k.to_string() })
            .collect(),
    }
}

fn geosite_catalog() -> Vec<u8> {
    GeoSiteList {
        entry: vec![
            GeoSite {
                country_code: "CN".to_string(),
                domain: vec![
                    domain(DomainType::RootDomain, "baidu.com", &[]),
                    domain(DomainType::Full, "www.qq.com", &["ads"]),
                    domain(DomainType::Plain, "cdn", &[]),
                    // Duplicate record, must collapse in the output.
                    domain(DomainType::RootDomain, "baidu.com", &[]),
                ],
            },
            GeoSite {
                country_code: "US".to_string(),
                domain: vec![domain(DomainType::Regex, r"^ads?\.", &[])],
            },
        ],
    }
    .encode_to_vec()
}

fn geoip_catalog() -> Vec<u8> {
    GeoIpList {
        entry: vec![GeoIp {
            country_code: "CN".to_string(),
            cidr: vec![
                WireCidr {
                    ip: vec![1, 2, 3, 4],
                    prefix: 24,
                },
                WireCidr {
                    ip: vec![1, 2, 3, 4],
                    prefix: 24,
                },
            ],
        }],
    }
    .encode_to_vec()
}

#[test]
fn test_geosite_pipeline_end_to_end() {
    let dir = tempdir().unwrap();
    let entries = DatDecoder::new().decode_geosite(&geosite_catalog()).unwrap();
    let compiler = Compiler::new(SrsWriter::new(), dir.path());

    let requested = vec!["cn".to_string(), "us".to_string(), "zz".to_string()];
    let report = compiler.compile_geosite(&entries, &requested).unwrap();

    assert_eq!(report.written, 2);
    assert_eq!(report.missing, 1);
    assert!(dir.path().join("geosite-cn.srs").exists());
    assert!(dir.path().join("geosite-us.srs").exists());
    assert!(!dir.path().join("geosite-zz.srs").exists());
}

#[test]
fn test_attribute_sub_category_is_requestable() {
    let dir = tempdir().unwrap();
    let entries = DatDecoder::new().decode_geosite(&geosite_catalog()).unwrap();
    let compiler = Compiler::new(SrsWriter::new(), dir.path());

    let requested = vec!["cn@ads".to_string()];
    let report = compiler.compile_geosite(&entries, &requested).unwrap();

    assert_eq!(report.written, 1);
    assert!(dir.path().join("geosite-cn@ads.srs").exists());

    // The sub-category holds only the tagged record, so it is strictly
    // smaller than the base category.
    compiler
        .compile_geosite(&entries, &["cn".to_string()])
        .unwrap();
    let sub = std::fs::metadata(dir.path().join("geosite-cn@ads.srs")).unwrap();
    let base = std::fs::metadata(dir.path().join("geosite-cn.srs")).unwrap();
    assert!(sub.len() < base.len());
}

#[test]
fn test_geoip_pipeline_end_to_end() {
    let dir = tempdir().unwrap();
    let entries = DatDecoder::new().decode_geoip(&geoip_catalog()).unwrap();
    let compiler = Compiler::new(SrsWriter::new(), dir.path());

    let report = compiler
        .compile_geoip(&entries, &["CN".to_string()])
        .unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(report.missing, 0);

    let data = std::fs::read(dir.path().join("geoip-cn.srs")).unwrap();
    let header = read_header(&data).unwrap();
    assert_eq!(header.version, RULE_SET_VERSION);
    assert!(header.flags.contains(FormatFlags::PAYLOAD_COMPRESSED));
}

#[test]
fn test_pipeline_is_idempotent() {
    let dir = tempdir().unwrap();
    let site_data = geosite_catalog();
    let decoder = DatDecoder::new();
    let compiler = Compiler::new(SrsWriter::new(), dir.path());
    let requested = vec!["cn".to_string()];

    let entries = decoder.decode_geosite(&site_data).unwrap();
    compiler.compile_geosite(&entries, &requested).unwrap();
    let first = std::fs::read(dir.path().join("geosite-cn.srs")).unwrap();

    let entries = decoder.decode_geosite(&site_data).unwrap();
    compiler.compile_geosite(&entries, &requested).unwrap();
    let second = std::fs::read(dir.path().join("geosite-cn.srs")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_all_missing_still_succeeds() {
    let dir = tempdir().unwrap();
    let entries = DatDecoder::new().decode_geoip(&geoip_catalog()).unwrap();
    let compiler = Compiler::new(SrsWriter::new(), dir.path());

    let requested = vec!["zz".to_string(), "yy".to_string()];
    let report = compiler.compile_geoip(&entries, &requested).unwrap();

    assert_eq!(report.written, 0);
    assert_eq!(report.missing, 2);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
