//! Page configuration bundled with the app.

use dioxus::logger::tracing::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::share_link::{PlaceholderLink, ShareLinkSource, UserLink};

const BUNDLED_CONFIG: &str = include_str!("../assets/page.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub share_base_url: Option<String>,
    pub user_id: Option<String>,
    pub user_name: String,
    pub is_public: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            share_base_url: None,
            user_id: None,
            user_name: "userABC".to_string(),
            is_public: true,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "falling back to default page config");
                Self::default()
            }
        }
    }

    pub fn share_link_source(&self) -> Box<dyn ShareLinkSource> {
        match (&self.share_base_url, &self.user_id) {
            (Some(base_url), Some(user_id)) => Box::new(UserLink {
                base_url: base_url.clone(),
                user_id: user_id.clone(),
            }),
            _ => Box::new(PlaceholderLink),
        }
    }

    /// Resolves the link to show, falling back to the placeholder on error.
    pub fn share_link(&self) -> String {
        match self.share_link_source().share_link() {
            Ok(link) => link,
            Err(err) => {
                warn!(%err, "share link unavailable, using placeholder");
                crate::share_link::PLACEHOLDER_LINK.to_string()
            }
        }
    }
}
