use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{BlogDraft, DraftDefaults, DraftId, DraftInput, SaveMode};

/// The drafts of one namespace plus its current-draft pointer.
///
/// This is the unit the stores keep in memory or write to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftShelf {
    #[serde(default)]
    drafts: Vec<BlogDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current: Option<DraftId>,
}

impl DraftShelf {
    pub fn upsert(
        &mut self,
        input: DraftInput,
        mode: SaveMode,
        defaults: &DraftDefaults,
        now: DateTime<Utc>,
    ) -> DraftId {
        let draft = defaults.complete(input, mode, now);
        let id = draft.id.clone();
        match self.drafts.iter_mut().find(|d| d.id == id) {
            Some(existing) => *existing = draft,
            None => self.drafts.push(draft),
        }
        self.current = Some(id.clone());
        id
    }

    pub fn get(&self, id: &DraftId) -> Option<&BlogDraft> {
        self.drafts.iter().find(|d| &d.id == id)
    }

    pub fn current(&self) -> Option<&BlogDraft> {
        self.current.as_ref().and_then(|id| self.get(id))
    }

    /// Most recently saved first; equal timestamps keep the later save first.
    pub fn list(&self) -> Vec<BlogDraft> {
        let mut drafts: Vec<BlogDraft> = self.drafts.iter().rev().cloned().collect();
        drafts.sort_by(|a, b| b.last_saved.cmp(&a.last_saved));
        drafts
    }

    pub fn delete(&mut self, id: &DraftId) -> bool {
        let before = self.drafts.len();
        self.drafts.retain(|d| &d.id != id);
        if self.current.as_ref() == Some(id) {
            self.current = None;
        }
        self.drafts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty() && self.current.is_none()
    }
}
