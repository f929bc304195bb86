//! Contact book engine for Rolodex
//!
//! This crate implements the file-backed contact store:
//! - ContactBook: ordered in-memory records mirrored to one JSON file
//! - persist: whole-file read/write of the on-disk contact array
//!
//! Every successful mutation rewrites the backing file in full, so the file
//! always holds exactly the current records in current order. There is no
//! write-ahead log, no temp-file swap, and no cross-process lock: a crash
//! mid-write can corrupt the file, and two processes sharing one backing
//! file can race. Both are accepted limitations of this system.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod persist;

pub use book::ContactBook;
pub use persist::{load_contacts, store_contacts};

// Re-export core types so users don't need to import rolodex-core
pub use rolodex_core::{Contact, Error, Result};
