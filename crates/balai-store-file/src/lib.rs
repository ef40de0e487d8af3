//! File-backed blob store for the balai site model.
//!
//! One file per key under a data directory, written via a temporary sibling
//! so an interrupted write never clobbers the previous blob.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::FileStore;
