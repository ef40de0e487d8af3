//! Error types for `balai-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// A required submission field was empty or missing.
  #[error("required field is empty: {0}")]
  MissingField(&'static str),

  #[error("report not found: {0}")]
  ReportNotFound(Uuid),

  #[error("unknown content field path: {0:?}")]
  UnknownField(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  /// The store adapter rejected a write. The in-memory state is left at the
  /// previously committed value.
  #[error("store write failed: {0}")]
  Store(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
