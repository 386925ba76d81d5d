//! HTTP(S) object-store backend over libcurl.
//!
//! Objects are addressed as `{endpoint}/{container}/{key}` and streamed
//! straight to the staging file. Blocking by design; the resolver runs on
//! whatever thread builds the test tree.

use std::io::Write;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::config::TransferConfig;

use super::{ObjectStore, TransferError};

#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    endpoint: Url,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpObjectStore {
    /// Builds a store for the given base URL, taking timeouts from `cfg`.
    pub fn new(endpoint: &str, cfg: &TransferConfig) -> Result<Self, TransferError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            TransferError::BackendUnavailable(format!("invalid endpoint {endpoint:?}: {e}"))
        })?;
        Ok(Self {
            endpoint,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        })
    }

    /// Builds a store from the `[transfer]` config section; fails when no
    /// endpoint is configured.
    pub fn from_config(cfg: &TransferConfig) -> Result<Self, TransferError> {
        let endpoint = cfg.endpoint.as_deref().ok_or_else(|| {
            TransferError::BackendUnavailable("no transfer endpoint configured".to_string())
        })?;
        Self::new(endpoint, cfg)
    }

    fn object_url(&self, container: &str, key: &str) -> Result<Url, TransferError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TransferError::BackendUnavailable(format!(
                    "endpoint {} cannot address objects",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .push(container)
            .push(key);
        Ok(url)
    }
}

impl ObjectStore for HttpObjectStore {
    fn fetch(&self, container: &str, key: &str, dest: &Path) -> Result<(), TransferError> {
        let url = self.object_url(container, key)?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let result = download(&url, dest, self.connect_timeout, self.timeout).and_then(|code| {
            match code {
                200..=299 => Ok(()),
                404 | 410 => Err(TransferError::NotFound {
                    container: container.to_string(),
                    key: key.to_string(),
                }),
                code => Err(TransferError::Http(code)),
            }
        });
        // Never leave a partial staging file behind a failed fetch.
        if result.is_err() {
            let _ = std::fs::remove_file(dest);
        }
        result
    }
}

/// Performs the GET, streaming the body to `dest`. Returns the HTTP status.
fn download(
    url: &Url,
    dest: &Path,
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<u32, TransferError> {
    let mut file = std::fs::File::create(dest)?;
    let mut write_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(timeout)?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    // A staging-write failure aborts the transfer; report it rather than the
    // curl abort that follows from it.
    if let Some(e) = write_error {
        return Err(TransferError::Io(e));
    }
    perform_result.map_err(classify_curl_error)?;
    Ok(easy.response_code()?)
}

/// Maps a curl error to the transfer taxonomy. A libcurl build that cannot
/// speak the required protocol or TLS engine counts as a missing backend,
/// not a transient transfer failure.
fn classify_curl_error(e: curl::Error) -> TransferError {
    if e.is_unsupported_protocol() || e.is_ssl_engine_notfound() || e.is_ssl_connect_error() {
        TransferError::BackendUnavailable(e.to_string())
    } else {
        TransferError::Transfer(e)
    }
}
