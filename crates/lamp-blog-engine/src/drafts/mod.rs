//! Unpublished blog drafts, kept per editing context.
//!
//! Every operation takes a [`DraftNamespace`]: the create page and each post's
//! edit page keep separate draft lists and separate "current draft" pointers.

use std::{fmt, path::PathBuf, str::FromStr};

mod file;
mod memory;
mod shelf;
mod types;

pub use file::FileDraftStore;
pub use memory::MemoryDraftStore;
pub use shelf::DraftShelf;
pub use types::{BlogDraft, DraftDefaults, DraftId, DraftInput, SaveMode};

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Failed to access drafts at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Drafts file at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid draft namespace '{0}' (expected 'create' or 'edit:<id>')")]
    InvalidNamespace(String),
}

/// Which editor a draft belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DraftNamespace {
    /// The new-post page.
    Create,
    /// The edit page of an existing post, by post id.
    Edit(String),
}

impl DraftNamespace {
    /// Namespace name as a file stem. ASCII letters, digits and `-` are kept;
    /// every other byte, `_` included, becomes `_XX` (hex), so distinct
    /// namespaces never share a stem.
    pub fn file_stem(&self) -> String {
        let name = self.to_string();
        let mut stem = String::with_capacity(name.len());
        for byte in name.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                stem.push(char::from(byte));
            } else {
                stem.push_str(&format!("_{byte:02X}"));
            }
        }
        stem
    }
}

impl fmt::Display for DraftNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftNamespace::Create => f.write_str("create"),
            DraftNamespace::Edit(post) => write!(f, "edit:{post}"),
        }
    }
}

impl FromStr for DraftNamespace {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "create" => Ok(DraftNamespace::Create),
            Some(("edit", post)) if !post.trim().is_empty() => {
                Ok(DraftNamespace::Edit(post.to_string()))
            }
            _ => Err(DraftError::InvalidNamespace(s.to_string())),
        }
    }
}

/// Storage for drafts.
pub trait DraftStore {
    /// Insert or replace a draft and make it the namespace's current draft.
    /// Returns the draft's id, generating one when the input has none.
    fn save(
        &mut self,
        ns: &DraftNamespace,
        input: DraftInput,
        mode: SaveMode,
    ) -> Result<DraftId, DraftError>;

    fn get(&self, ns: &DraftNamespace, id: &DraftId) -> Result<Option<BlogDraft>, DraftError>;

    /// The draft most recently saved in this namespace, if it still exists.
    fn current(&self, ns: &DraftNamespace) -> Result<Option<BlogDraft>, DraftError>;

    /// All drafts in the namespace, most recently saved first.
    fn list(&self, ns: &DraftNamespace) -> Result<Vec<BlogDraft>, DraftError>;

    /// Delete a draft. Returns `true` if it existed.
    fn delete(&mut self, ns: &DraftNamespace, id: &DraftId) -> Result<bool, DraftError>;

    /// Drop every draft in the namespace along with its current pointer.
    fn clear(&mut self, ns: &DraftNamespace) -> Result<(), DraftError>;
}
