//! Contact API Comprehensive Test Suite
//!
//! End-to-end coverage of the public `rolodex` facade: the full
//! add/update/delete/search lifecycle, the file mirror invariant, and the
//! load-time error contract.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test contact_api_comprehensive
//!
//! # Run the lifecycle tests only
//! cargo test --test contact_api_comprehensive lifecycle::
//!
//! # Run with output
//! cargo test --test contact_api_comprehensive -- --nocapture
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rolodex::{Contact, ContactBook, Error};
use tempfile::TempDir;

/// Helper to build a contact in one call
pub fn contact(name: &str, phone: &str, email: &str, address: &str) -> Contact {
    Contact::new(name, phone, email, address)
}

/// Backing-file path inside a test directory
pub fn book_path(dir: &TempDir) -> PathBuf {
    dir.path().join("contacts.json")
}

/// Parse the backing file back into records
pub fn file_records(path: &Path) -> Vec<Contact> {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

mod lifecycle;
mod persistence;
