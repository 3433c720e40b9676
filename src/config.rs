use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const EMBEDDED_SITE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/site.json"));

#[derive(Debug, Clone)]
pub struct Config {
    // Site identity (None = embedded content/site.json)
    pub site_config_path: Option<PathBuf>,

    // Content bundles (None = embedded documents)
    pub content_dir: Option<PathBuf>,

    // Locale the selection starts in
    pub initial_locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            site_config_path: std::env::var("SITE_CONFIG_PATH").ok().map(PathBuf::from),
            content_dir: std::env::var("CONTENT_DIR").ok().map(PathBuf::from),
            initial_locale: std::env::var("SITE_LOCALE").unwrap_or_else(|_| "en".to_string()),
        })
    }

    /// Load the site identity this configuration points at.
    pub fn load_site(&self) -> Result<SiteConfig> {
        match &self.site_config_path {
            Some(path) => SiteConfig::from_path(path),
            None => SiteConfig::embedded(),
        }
    }
}

/// Brand colors referenced by content placeholders and page chrome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary_color1: String,
    pub primary_color2: String,
    pub primary_color3: String,
    pub secondary_color1: String,
    pub secondary_color2: String,
    pub background_light: String,
    pub background_dark: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
}

/// Site identity: the source of every placeholder value.
///
/// Loaded once at startup and read-only afterwards. Missing text fields are
/// empty strings, so a placeholder with no configured value renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub slogan: String,
    pub logo: String,
    pub favicon: String,
    pub colors: ColorScheme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            slogan: String::new(),
            logo: "/logo.png".to_string(),
            favicon: "/favicon.ico".to_string(),
            colors: ColorScheme::default(),
        }
    }
}

impl SiteConfig {
    /// The site identity compiled into the binary.
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_SITE).context("Embedded site.json is invalid")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse site config {}", path.display()))
    }
}
