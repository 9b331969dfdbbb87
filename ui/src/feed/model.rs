//! Toot records as returned by the feed endpoint.

use serde::{Deserialize, Serialize};

use crate::core::format;

/// One status update. The canonical URL doubles as the record's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub url: String,
    pub created_at: String,
    #[serde(default)]
    pub content: String,
    pub account: Account,
    #[serde(default)]
    pub media_attachments: Vec<MediaAttachment>,
    /// The re-shared original, when this toot is a boost.
    #[serde(default)]
    pub reblog: Option<Box<Post>>,
}

impl Post {
    /// Attachments to display. A boost shows the original's attachments; the
    /// wrapper itself carries none.
    pub fn visible_attachments(&self) -> &[MediaAttachment] {
        match &self.reblog {
            Some(original) => &original.media_attachments,
            None => &[],
        }
    }

    /// Federated handle derived from the author name and the status URL's
    /// origin host, e.g. `bbc@mastodon.social`.
    pub fn handle(&self) -> String {
        format::mastodon_handle(&self.account.username, &self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub preview_url: String,
}

/// Rendering is polymorphic over three shapes; everything the server may
/// invent beyond image and video (gifv, audio, ...) collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Video,
    #[serde(other)]
    Other,
}
