use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use chrono::Utc;

use super::{
    BlogDraft, DraftDefaults, DraftError, DraftId, DraftInput, DraftNamespace, DraftShelf,
    DraftStore, SaveMode,
};

/// Drafts persisted as one JSON file per namespace.
///
/// Each call reads the namespace file fresh, so several stores (or processes)
/// pointed at the same directory see each other's saves.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    dir: PathBuf,
    defaults: DraftDefaults,
}

impl FileDraftStore {
    pub fn new(dir: impl Into<PathBuf>, defaults: DraftDefaults) -> Self {
        Self {
            dir: dir.into(),
            defaults,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, ns: &DraftNamespace) -> PathBuf {
        self.dir.join(format!("{}.json", ns.file_stem()))
    }

    fn load(&self, ns: &DraftNamespace) -> Result<DraftShelf, DraftError> {
        let path = self.path_for(ns);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DraftShelf::default()),
            Err(source) => return Err(DraftError::Io { path, source }),
        };
        serde_json::from_str(&json).map_err(|source| DraftError::Corrupt { path, source })
    }

    fn store(&self, ns: &DraftNamespace, shelf: &DraftShelf) -> Result<(), DraftError> {
        let path = self.path_for(ns);
        if shelf.is_empty() {
            return self.remove(&path);
        }
        fs::create_dir_all(&self.dir).map_err(|source| DraftError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(shelf).map_err(|source| DraftError::Corrupt {
            path: path.clone(),
            source,
        })?;
        // Written beside the target and renamed over it, so readers never
        // see a half-written file.
        let io_err = |source: std::io::Error| DraftError::Io {
            path: path.clone(),
            source,
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        tmp.write_all(json.as_bytes()).map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;
        log::debug!("Wrote drafts for {ns} to {}", path.display());
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<(), DraftError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(DraftError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl DraftStore for FileDraftStore {
    fn save(
        &mut self,
        ns: &DraftNamespace,
        input: DraftInput,
        mode: SaveMode,
    ) -> Result<DraftId, DraftError> {
        let mut shelf = self.load(ns)?;
        let id = shelf.upsert(input, mode, &self.defaults, Utc::now());
        self.store(ns, &shelf)?;
        Ok(id)
    }

    fn get(&self, ns: &DraftNamespace, id: &DraftId) -> Result<Option<BlogDraft>, DraftError> {
        Ok(self.load(ns)?.get(id).cloned())
    }

    fn current(&self, ns: &DraftNamespace) -> Result<Option<BlogDraft>, DraftError> {
        Ok(self.load(ns)?.current().cloned())
    }

    fn list(&self, ns: &DraftNamespace) -> Result<Vec<BlogDraft>, DraftError> {
        Ok(self.load(ns)?.list())
    }

    fn delete(&mut self, ns: &DraftNamespace, id: &DraftId) -> Result<bool, DraftError> {
        let mut shelf = self.load(ns)?;
        let deleted = shelf.delete(id);
        if deleted {
            self.store(ns, &shelf)?;
        }
        Ok(deleted)
    }

    fn clear(&mut self, ns: &DraftNamespace) -> Result<(), DraftError> {
        log::info!("Clearing drafts for {ns}");
        self.remove(&self.path_for(ns))
    }
}
