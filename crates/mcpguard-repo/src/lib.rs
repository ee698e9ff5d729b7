//! Filesystem adapters: enumerate agent definitions and read documents as text.
//!
//! This crate is allowed to do filesystem IO. Everything it returns is handed to the pure
//! domain crate for evaluation.

#![forbid(unsafe_code)]

mod discover;
mod read;

pub use discover::{DocumentFilter, discover_documents};
pub use read::{DocumentError, read_document, subject_name};
