//! Editor-side state of the create and edit pages.

use serde::{Deserialize, Serialize};

use super::NewBlogPost;
use crate::drafts::{BlogDraft, DraftId, DraftInput};

/// One form field together with its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum BlogField {
    Title(String),
    Content(String),
    Category(String),
    Thumbnail(String),
    Tags(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogForm {
    pub title: String,
    /// Markdown produced from the block editor.
    pub content: String,
    pub tags: Vec<String>,
    pub category: String,
    pub thumbnail: String,
}

impl BlogForm {
    pub fn update(&mut self, field: BlogField) {
        match field {
            BlogField::Title(title) => self.title = title,
            BlogField::Content(content) => self.content = content,
            BlogField::Category(category) => self.category = category,
            BlogField::Thumbnail(thumbnail) => self.thumbnail = thumbnail,
            BlogField::Tags(tags) => self.tags = tags,
        }
    }

    /// Add a tag as typed. Returns `false` if it was blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// Whether there is anything worth keeping as a draft.
    pub fn has_unsaved_changes(&self) -> bool {
        !self.title.trim().is_empty() || !self.content.trim().is_empty()
    }

    pub fn to_draft_input(&self, id: Option<DraftId>) -> DraftInput {
        DraftInput {
            id,
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            author_id: None,
            author_name: None,
            tags: Some(self.tags.clone()),
            category: Some(self.category.clone()),
            thumbnail: Some(self.thumbnail.clone()),
        }
    }

    pub fn into_new_post(self, author_id: &str, author_name: &str) -> NewBlogPost {
        NewBlogPost {
            title: self.title,
            content: self.content,
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            tags: self.tags,
            category: self.category,
            thumbnail: self.thumbnail,
        }
    }
}

impl From<&BlogDraft> for BlogForm {
    fn from(draft: &BlogDraft) -> Self {
        Self {
            title: draft.title.clone(),
            content: draft.content.clone(),
            tags: draft.tags.clone(),
            category: draft.category.clone(),
            thumbnail: draft.thumbnail.clone(),
        }
    }
}
