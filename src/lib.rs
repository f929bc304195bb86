//! Rolodex - File-backed contact book
//!
//! Rolodex manages a small personal contact list: add, update, delete,
//! search, and persist contact records (name, phone, email, address) to a
//! single local JSON file.
//!
//! # Quick Start
//!
//! ```ignore
//! use rolodex::{Contact, ContactBook};
//!
//! // Open a book (missing file starts empty)
//! let mut book = ContactBook::open("contacts.json")?;
//!
//! // Add a contact (the file is rewritten on every mutation)
//! book.add(Contact::new("Ann Lee", "555-0100", "ann@example.com", "1 Oak St"))?;
//!
//! // Search by name, case-insensitively
//! let hits = book.search("ann");
//! ```
//!
//! # Architecture
//!
//! The book is an ordered in-memory list mirrored to its backing file on
//! every successful mutation. It is strictly single-threaded and
//! single-process: the backing file carries no lock, and writes are not
//! atomic. The `rolodex` binary (crate `rolodex-cli`) provides a
//! Redis-style shell/REPL over this API.

// Re-export the public API from rolodex-store
pub use rolodex_store::*;
