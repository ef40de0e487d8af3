//! [`FileStore`] — the file-backed implementation of [`BlobStore`].

use std::{
  fs, io,
  path::{Path, PathBuf},
};

use balai_core::store::BlobStore;

use crate::{Error, Result};

/// A blob store backed by a directory with one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
  dir: PathBuf,
}

impl FileStore {
  /// Open (or create) a store rooted at `dir`.
  pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
    fs::create_dir_all(&dir)?;
    Ok(Self { dir: dir.as_ref().to_path_buf() })
  }

  /// The directory holding the blob files.
  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn key_path(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }
}

impl BlobStore for FileStore {
  type Error = Error;

  fn get(&self, key: &str) -> Result<Option<String>> {
    match fs::read_to_string(self.key_path(key)) {
      Ok(raw) => Ok(Some(raw)),
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err.into()),
    }
  }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    let path = self.key_path(key);
    // Write-then-rename: the previous blob survives an interrupted write.
    let tmp = self.dir.join(format!("{key}.json.tmp"));
    fs::write(&tmp, value)?;
    fs::rename(&tmp, path)?;
    Ok(())
  }
}
