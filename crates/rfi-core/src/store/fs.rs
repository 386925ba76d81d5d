//! Filesystem-backed object store: containers are directories under a root.
//!
//! Backs local development and tests; the layout is `{root}/{container}/{key}`.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ObjectStore, TransferError};

#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ObjectStore for FsObjectStore {
    fn fetch(&self, container: &str, key: &str, dest: &Path) -> Result<(), TransferError> {
        let src = self.root.join(container).join(key);
        if !src.is_file() {
            return Err(TransferError::NotFound {
                container: container.to_string(),
                key: key.to_string(),
            });
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, dest)?;
        tracing::debug!("staged {} from {}", dest.display(), src.display());
        Ok(())
    }
}
