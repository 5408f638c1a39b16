//! Release metadata fetch and catalog downloads.
//!
//! The vendor publishes the catalogs as assets of a GitHub release. One
//! metadata request resolves the latest tag and its asset list; the two
//! catalog assets are then downloaded into a caller-supplied directory.
//! Both assets are hard preconditions — either one missing from the
//! release fails the run before the compiler ever sees a byte. There is
//! no retry or backoff.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::{Error, Result};

/// Release metadata endpoint for the vendor catalogs.
pub const RELEASE_API_URL: &str =
    "https://api.github.com/repos/runetfreedom/russia-v2ray-rules-dat/releases/latest";

/// Asset name of the site catalog.
pub const GEOSITE_ASSET: &str = "geosite.dat";

/// Asset name of the IP catalog.
pub const GEOIP_ASSET: &str = "geoip.dat";

/// One downloadable asset of a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Release metadata: tag plus named assets.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Download URL of the asset with the given exact name.
    pub fn asset_url(&self, name: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .map(|asset| asset.browser_download_url.as_str())
    }
}

/// Local paths of the two downloaded catalogs.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub geosite: PathBuf,
    pub geoip: PathBuf,
}

/// Client for the release API and asset downloads.
pub struct ReleaseClient {
    api_url: String,
    agent: ureq::Agent,
}

impl ReleaseClient {
    /// Create a client against the default vendor release endpoint.
    pub fn new() -> Self {
        Self::with_api_url(RELEASE_API_URL)
    }

    /// Create a client against a custom release endpoint.
    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(60))
                .build(),
        }
    }

    /// Fetch metadata of the latest release.
    pub fn fetch_latest(&self) -> Result<Release> {
        let response = self
            .agent
            .get(&self.api_url)
            .call()
            .map_err(|e| Error::Fetch(format!("release metadata request failed: {e}")))?;

        let release: Release = response
            .into_json()
            .map_err(|e| Error::Fetch(format!("malformed release metadata: {e}")))?;

        log::info!("latest release: {}", release.tag_name);
        Ok(release)
    }

    /// Download one asset to `dest`, overwriting any existing file.
    pub fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| Error::Fetch(format!("download of {url} failed: {e}")))?;

        let mut reader = response.into_reader();
        let mut file = File::create(dest)?;
        io::copy(&mut reader, &mut file)?;

        log::info!("downloaded {} -> {}", url, dest.display());
        Ok(())
    }

    /// Download both catalogs of the latest release into `dir`.
    pub fn download_latest(&self, dir: &Path) -> Result<CatalogPaths> {
        let release = self.fetch_latest()?;

        let geosite_url = release
            .asset_url(GEOSITE_ASSET)
            .ok_or_else(|| Error::AssetMissing(GEOSITE_ASSET.to_string()))?;
        let geoip_url = release
            .asset_url(GEOIP_ASSET)
            .ok_or_else(|| Error::AssetMissing(GEOIP_ASSET.to_string()))?;

        let paths = CatalogPaths {
            geosite: dir.join(GEOSITE_ASSET),
            geoip: dir.join(GEOIP_ASSET),
        };
        self.download(geosite_url, &paths.geosite)?;
        self.download(geoip_url, &paths.geoip)?;

        Ok(paths)
    }
}

impl Default for ReleaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_JSON: &str = r#"{
        "tag_name": "20250801",
        "assets": [
            {"name": "geoip.dat", "browser_download_url": "https://example.com/geoip.dat"},
            {"name": "geosite.dat", "browser_download_url": "https://example.com/geosite.dat"},
            {"name": "checksums.txt", "browser_download_url": "https://example.com/checksums.txt"}
        ]
    }"#;

    #[test]
    fn test_parse_release_metadata() {
        let release: Release = serde_json::from_str(RELEASE_JSON).unwrap();
        assert_eq!(release.tag_name, "20250801");
        assert_eq!(release.assets.len(), 3);
    }

    #[test]
    fn test_asset_lookup_is_exact() {
        let release: Release = serde_json::from_str(RELEASE_JSON).unwrap();
        assert_eq!(
            release.asset_url(GEOIP_ASSET),
            Some("https://example.com/geoip.dat")
        );
        assert_eq!(release.asset_url("geoip"), None);
    }

    #[test]
    fn test_release_without_assets() {
        let release: Release = serde_json::from_str(r#"{"tag_name": "v1"}"#).unwrap();
        assert!(release.assets.is_empty());
        assert_eq!(release.asset_url(GEOSITE_ASSET), None);
    }
}
