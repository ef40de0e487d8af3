//! Core types and operations for the balai site model: the editable site
//! content, the citizen-report registry, and the application-state
//! coordinator that owns both.
//!
//! This crate is deliberately free of filesystem and CLI dependencies.
//! Persistence goes through the [`store::BlobStore`] abstraction; the
//! production backend lives in `balai-store-file`.

pub mod content;
pub mod edit;
pub mod error;
pub mod report;
pub mod state;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
