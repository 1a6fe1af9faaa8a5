//! Versioned blob persistence
//!
//! Records are stored as JSON envelopes `{ "version": 1, "record": ... }`.
//! Anything that cannot be read back as the current version counts as no
//! prior state.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use derive_more::{Display, Error};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key for the in-progress session blob
pub const SESSION_KEY: &str = "session";

/// Key for the lifetime statistics blob
pub const STATS_KEY: &str = "stats";

/// Current persisted schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Persistence failure
#[derive(Debug, Display, Error)]
pub enum StoreError {
    #[display("failed to create state directory '{}': {}", path.display(), source)]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("failed to access stored '{key}': {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },
    #[display("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// Key-value blob storage with whole-blob replacement
pub trait Storage: fmt::Debug {
    /// Read the blob under `key`, `None` if nothing was ever written
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the backing medium fails.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the blob under `key`
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the backing medium fails.
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    record: &'a T,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    record: T,
}

/// Load the current-version record under `key`
///
/// Returns `None` for absent, unreadable, corrupt, or version-mismatched
/// blobs.
pub fn load_versioned<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Option<T> {
    let bytes = match storage.read(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(key, "No stored record");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "Stored record unreadable, starting fresh");
            return None;
        }
    };

    match serde_json::from_slice::<VersionProbe>(&bytes) {
        Ok(probe) if probe.version == SCHEMA_VERSION => {}
        Ok(probe) => {
            warn!(key, found = probe.version, expected = SCHEMA_VERSION, "Discarding record with wrong schema version");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "Discarding corrupt record");
            return None;
        }
    }

    match serde_json::from_slice::<Envelope<T>>(&bytes) {
        Ok(envelope) => Some(envelope.record),
        Err(e) => {
            warn!(key, error = %e, "Discarding malformed record");
            None
        }
    }
}

/// Store `record` under `key` wrapped in the current-version envelope
///
/// # Errors
/// Returns `StoreError` if encoding or the write fails.
pub fn save_versioned<T: Serialize>(
    storage: &mut impl Storage,
    key: &str,
    record: &T,
) -> Result<(), StoreError> {
    let envelope = EnvelopeRef {
        version: SCHEMA_VERSION,
        record,
    };
    let bytes = serde_json::to_vec_pretty(&envelope).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.write(key, &bytes)?;
    debug!(key, bytes = bytes.len(), "Stored record");
    Ok(())
}
