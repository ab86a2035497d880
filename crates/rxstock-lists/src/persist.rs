//! Durable storage for the shopping list collection.
//!
//! Every store mutation saves the whole collection (replace-and-save); the
//! file is a versioned JSON document written atomically via a temp file
//! plus rename. Loading never fails the app: a missing file means a fresh
//! install, a corrupt file is logged and treated as empty — the backend,
//! not this file, is the system of record.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ShoppingList;

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write shopping lists to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read shopping lists from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode shopping lists: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage contract for the store. Implementations must persist the whole
/// collection on `save` and reconstruct it on `load`.
pub trait ListPersister: Send {
    /// # Errors
    ///
    /// Returns [`PersistError`] if the collection cannot be written.
    fn save(&self, lists: &[ShoppingList]) -> Result<(), PersistError>;

    /// # Errors
    ///
    /// Returns [`PersistError`] only on I/O failures other than a missing
    /// file; absence and corruption both load as an empty collection.
    fn load(&self) -> Result<Vec<ShoppingList>, PersistError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    schema_version: u32,
    lists: Vec<ShoppingList>,
}

/// JSON file persister with atomic writes.
pub struct JsonFilePersister {
    path: PathBuf,
}

impl JsonFilePersister {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl ListPersister for JsonFilePersister {
    fn save(&self, lists: &[ShoppingList]) -> Result<(), PersistError> {
        let document = Document {
            schema_version: SCHEMA_VERSION,
            lists: lists.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| PersistError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &bytes).map_err(|source| PersistError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn load(&self) -> Result<Vec<ShoppingList>, PersistError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PersistError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_slice::<Document>(&bytes) {
            Ok(document) => Ok(document.lists),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "shopping list file is corrupt; starting with an empty collection"
                );
                Ok(Vec::new())
            }
        }
    }
}

/// In-memory persister for tests and previews. Clones share the same
/// backing storage, so a test can hold a handle and inspect what the store
/// saved.
#[derive(Clone, Default)]
pub struct MemoryPersister {
    saved: Arc<Mutex<Vec<ShoppingList>>>,
}

impl MemoryPersister {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection as of the most recent `save`.
    #[must_use]
    pub fn saved(&self) -> Vec<ShoppingList> {
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ListPersister for MemoryPersister {
    fn save(&self, lists: &[ShoppingList]) -> Result<(), PersistError> {
        *self.saved.lock().unwrap_or_else(PoisonError::into_inner) = lists.to_vec();
        Ok(())
    }

    fn load(&self) -> Result<Vec<ShoppingList>, PersistError> {
        Ok(self.saved())
    }
}
