//! services/app/src/adapters/file_store.rs
//!
//! This module contains the storage adapter, which is the concrete
//! implementation of the `StorageService` port from the `core` crate. Each
//! key maps to one JSON file inside the data directory; the store never
//! interprets the payload.

use async_trait::async_trait;
use bookbites_core::ports::{PortError, PortResult, StorageService};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A flat-file adapter that implements the `StorageService` port.
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a new `FileStore` rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// A helper to create the data directory at startup.
    pub async fn ensure_root(&self) -> PortResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| PortError::Storage(e.to_string()))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

//=========================================================================================
// `StorageService` Trait Implementation
//=========================================================================================

#[async_trait]
impl StorageService for FileStore {
    async fn load_raw(&self, key: &str) -> PortResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortError::Storage(e.to_string())),
        }
    }

    async fn save_raw(&self, key: &str, value: &str) -> PortResult<()> {
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| PortError::Storage(e.to_string()))
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortError::Storage(e.to_string())),
        }
    }
}
