//! Object-store access behind a narrow trait.
//!
//! The resolver only depends on [`ObjectStore`] and does not know about HTTP,
//! filesystem, or any other specific backend.

mod fs;
mod http;

pub use fs::FsObjectStore;
pub use http::HttpObjectStore;

use std::path::Path;
use thiserror::Error;

/// Error fetching one object from a store backend.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The object does not exist in the store.
    #[error("object {container}/{key} not found")]
    NotFound { container: String, key: String },
    /// The backend cannot operate at all (e.g. libcurl built without the
    /// required protocol or TLS engine, or no endpoint configured).
    #[error("transfer backend unavailable: {0}")]
    BackendUnavailable(String),
    /// The server answered with a non-success status other than not-found.
    #[error("HTTP {0}")]
    Http(u32),
    /// Transport-level failure (timeout, connection, DNS).
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    /// Writing the staged artifact failed.
    #[error("staging write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads single objects to local staging paths.
pub trait ObjectStore: Send + Sync {
    /// Fetches the object identified by `(container, key)` into the file at
    /// `dest`, creating parent directories as needed.
    fn fetch(&self, container: &str, key: &str, dest: &Path) -> Result<(), TransferError>;
}
