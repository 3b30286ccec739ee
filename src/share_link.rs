//! Where the link shown in the share widget comes from.
//!
//! Lookups happen before the widget is built; the widget itself only ever
//! sees the resulting string.

use thiserror::Error;

pub const PLACEHOLDER_LINK: &str = "www.example.com/?userId";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareLinkError {
    #[error("share base url is empty")]
    EmptyBaseUrl,
    #[error("user id is empty")]
    EmptyUserId,
}

pub trait ShareLinkSource {
    fn share_link(&self) -> Result<String, ShareLinkError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderLink;

impl ShareLinkSource for PlaceholderLink {
    fn share_link(&self) -> Result<String, ShareLinkError> {
        Ok(PLACEHOLDER_LINK.to_string())
    }
}

/// `{base_url}/?userId={user_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLink {
    pub base_url: String,
    pub user_id: String,
}

impl ShareLinkSource for UserLink {
    fn share_link(&self) -> Result<String, ShareLinkError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ShareLinkError::EmptyBaseUrl);
        }
        let user_id = self.user_id.trim();
        if user_id.is_empty() {
            return Err(ShareLinkError::EmptyUserId);
        }
        Ok(format!(
            "{base}/?userId={}",
            urlencoding::encode(user_id)
        ))
    }
}
