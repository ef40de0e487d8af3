//! The `BlobStore` trait and the in-memory reference implementation.
//!
//! The trait is implemented by storage backends (e.g. `balai-store-file`).
//! [`AppState`](crate::state::AppState) depends on this abstraction, not on
//! any concrete backend, which is what lets the tests run against
//! [`MemoryStore`].

use std::{collections::HashMap, convert::Infallible};

/// Store key for the serialized site content document.
pub const CONTENT_KEY: &str = "siteContent";

/// Store key for the serialized report list.
pub const REPORTS_KEY: &str = "reports";

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the persistence substrate: an opaque key → string-blob
/// store with whole-document replace semantics.
///
/// Operations are synchronous; the system is single-threaded
/// request-response, and the discipline for the shared store is simple
/// last-writer-wins.
pub trait BlobStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the blob stored under `key`, or `None` if absent.
  fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

  /// Store `value` under `key`, replacing any previous blob.
  fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

// ─── In-memory implementation ────────────────────────────────────────────────

/// A blob store backed by a plain map — useful for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  blobs: HashMap<String, String>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl BlobStore for MemoryStore {
  type Error = Infallible;

  fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.blobs.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), Infallible> {
    self.blobs.insert(key.to_owned(), value.to_owned());
    Ok(())
  }
}
