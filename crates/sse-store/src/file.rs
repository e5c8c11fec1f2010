//! A JSON array on disk guarded by a mutex.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

pub(crate) struct JsonFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _items: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonFile<T> {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _items: PhantomData,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read all items. Missing or blank files are empty.
    pub(crate) fn read(&self) -> StoreResult<Vec<T>> {
        let _guard = self.guard()?;
        self.load()
    }

    /// Load, mutate, and write back while holding the lock. Nothing is
    /// written when `f` returns `None`.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> Option<R>) -> StoreResult<Option<R>> {
        let _guard = self.guard()?;
        let mut items = self.load()?;
        let result = f(&mut items);
        if result.is_some() {
            self.save(&items)?;
        }
        Ok(result)
    }

    fn guard(&self) -> StoreResult<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| StoreError::Lock(self.path.display().to_string()))
    }

    fn load(&self) -> StoreResult<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, items: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        debug!(path = %self.path.display(), items = items.len(), "Wrote store");
        Ok(())
    }
}
