use std::collections::HashMap;

use chrono::Utc;

use super::{
    BlogDraft, DraftDefaults, DraftError, DraftId, DraftInput, DraftNamespace, DraftShelf,
    DraftStore, SaveMode,
};

/// Drafts held for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    defaults: DraftDefaults,
    shelves: HashMap<DraftNamespace, DraftShelf>,
}

impl MemoryDraftStore {
    pub fn new(defaults: DraftDefaults) -> Self {
        Self {
            defaults,
            shelves: HashMap::new(),
        }
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(
        &mut self,
        ns: &DraftNamespace,
        input: DraftInput,
        mode: SaveMode,
    ) -> Result<DraftId, DraftError> {
        let shelf = self.shelves.entry(ns.clone()).or_default();
        Ok(shelf.upsert(input, mode, &self.defaults, Utc::now()))
    }

    fn get(&self, ns: &DraftNamespace, id: &DraftId) -> Result<Option<BlogDraft>, DraftError> {
        Ok(self.shelves.get(ns).and_then(|s| s.get(id)).cloned())
    }

    fn current(&self, ns: &DraftNamespace) -> Result<Option<BlogDraft>, DraftError> {
        Ok(self.shelves.get(ns).and_then(DraftShelf::current).cloned())
    }

    fn list(&self, ns: &DraftNamespace) -> Result<Vec<BlogDraft>, DraftError> {
        Ok(self.shelves.get(ns).map(DraftShelf::list).unwrap_or_default())
    }

    fn delete(&mut self, ns: &DraftNamespace, id: &DraftId) -> Result<bool, DraftError> {
        Ok(self.shelves.get_mut(ns).is_some_and(|s| s.delete(id)))
    }

    fn clear(&mut self, ns: &DraftNamespace) -> Result<(), DraftError> {
        self.shelves.remove(ns);
        Ok(())
    }
}
