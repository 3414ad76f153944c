//! Shell configuration (from `nexara.toml`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NexaraError, Result};

/// A named link used to seed bookmarks and recent sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub name: String,
    pub url: String,
}

impl SiteEntry {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Top-level shell configuration.
///
/// Every key is optional in the TOML file; missing keys take the values
/// from [`ShellConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Maximum number of entries kept in the recent-sites log.
    pub recent_limit: usize,
    /// How many bookmarks and recents the start page lists.
    pub quick_link_count: usize,
    /// Title shown for a tab whose page has not reported one.
    pub default_title: String,
    /// Title of a tab sitting on the start page.
    pub home_title: String,
    /// Bookmarks present when the session starts.
    pub seed_bookmarks: Vec<SiteEntry>,
    /// Recent sites present when the session starts (most recent first).
    pub seed_recents: Vec<SiteEntry>,
    /// Names shown in the start page's popular-sites grid.
    pub popular_sites: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            recent_limit: 8,
            quick_link_count: 4,
            default_title: "New Tab".to_string(),
            home_title: "Home".to_string(),
            seed_bookmarks: vec![
                SiteEntry::new("Wikipedia", "https://www.wikipedia.org"),
                SiteEntry::new("GitHub", "https://github.com"),
                SiteEntry::new("MDN Web Docs", "https://developer.mozilla.org"),
                SiteEntry::new("Stack Overflow", "https://stackoverflow.com"),
            ],
            seed_recents: vec![
                SiteEntry::new("Wikipedia", "https://www.wikipedia.org"),
                SiteEntry::new("GitHub", "https://github.com"),
            ],
            popular_sites: [
                "Google", "YouTube", "Twitter", "Reddit", "Amazon", "Netflix", "Spotify",
                "LinkedIn",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)
            .map_err(|e| NexaraError::Config(format!("{}: {e}", path.display())))?;
        log::info!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.recent_limit == 0 {
            return Err(NexaraError::Config(
                "recent_limit must be at least 1".to_string(),
            ));
        }
        if self.default_title.trim().is_empty() {
            return Err(NexaraError::Config(
                "default_title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
