//! One JSON file per key under a state directory

use super::{StoreError, Storage};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory-backed storage
///
/// Writes land in a temporary sibling file that is then renamed over the
/// target, so a reader sees either the old blob or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the state directory
    ///
    /// # Errors
    /// Returns `StoreError::CreateDir` if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        info!(dir = %dir.display(), "Opened state directory");
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let target = self.path_for(key);
        let staging = self.dir.join(format!(".{key}.json.tmp"));
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };

        fs::write(&staging, bytes).map_err(io_err)?;
        fs::rename(&staging, &target).map_err(io_err)?;
        debug!(path = %target.display(), "Wrote blob");
        Ok(())
    }
}
