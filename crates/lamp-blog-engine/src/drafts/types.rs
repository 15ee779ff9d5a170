use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(String);

impl DraftId {
    pub fn new() -> Self {
        Self(format!("draft_{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DraftId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DraftId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub id: DraftId,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    pub last_saved: DateTime<Utc>,
    #[serde(default)]
    pub auto_saved: bool,
}

/// The fields a caller supplies when saving. Anything left `None` (or empty,
/// for the author fields) falls back to a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    pub id: Option<DraftId>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
}

impl DraftInput {
    pub fn with_id(mut self, id: DraftId) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<BlogDraft> for DraftInput {
    fn from(draft: BlogDraft) -> Self {
        Self {
            id: Some(draft.id),
            title: Some(draft.title),
            content: Some(draft.content),
            author_id: Some(draft.author_id),
            author_name: Some(draft.author_name),
            tags: Some(draft.tags),
            category: Some(draft.category),
            thumbnail: Some(draft.thumbnail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Periodic save while the author is typing.
    Auto,
    /// Explicit save by the author.
    Manual,
}

/// Author used for drafts saved without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDefaults {
    pub author_id: String,
    pub author_name: String,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            author_id: "1".to_string(),
            author_name: "SalamPS".to_string(),
        }
    }
}

impl DraftDefaults {
    /// Build a draft from caller input, stamped with `now`.
    pub fn complete(&self, input: DraftInput, mode: SaveMode, now: DateTime<Utc>) -> BlogDraft {
        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        BlogDraft {
            id: input.id.unwrap_or_default(),
            title: input.title.unwrap_or_default(),
            content: input.content.unwrap_or_default(),
            author_id: or_default(input.author_id, &self.author_id),
            author_name: or_default(input.author_name, &self.author_name),
            tags: input.tags.unwrap_or_default(),
            category: input.category.unwrap_or_default(),
            thumbnail: input.thumbnail.unwrap_or_default(),
            last_saved: now,
            auto_saved: mode == SaveMode::Auto,
        }
    }
}
