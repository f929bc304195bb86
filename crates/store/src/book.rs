//! The contact book
//!
//! `ContactBook` owns the ordered record list and its backing path. Every
//! successful mutation (`add`, and `update`/`delete` when they find their
//! target) performs exactly one full-file rewrite, so the file and the
//! in-memory list never diverge. `search` and the accessors perform no
//! writes.
//!
//! Duplicate names are not prevented. `update` and `delete` scan in
//! insertion order and act on the first exact match only.

use std::path::{Path, PathBuf};

use rolodex_core::{Contact, Result};
use tracing::debug;

use crate::persist::{load_contacts, store_contacts};

/// Ordered, file-backed collection of contacts.
///
/// Created once at application start via [`ContactBook::open`]; lives for
/// the process lifetime. There is no explicit teardown: the final state is
/// whatever was last persisted.
#[derive(Debug)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    path: PathBuf,
}

impl ContactBook {
    /// Open the book backed by `path`, loading any existing records.
    ///
    /// A missing file yields an empty book. A file that exists but cannot
    /// be read or parsed is a fatal load error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contacts = load_contacts(&path)?;
        Ok(Self { contacts, path })
    }

    /// Rewrite the backing file with the current records.
    pub fn save(&self) -> Result<()> {
        store_contacts(&self.path, &self.contacts)
    }

    /// Append `contact` to the end of the book and save.
    ///
    /// No duplicate check is performed; adding a second contact with an
    /// existing name is allowed, and later update/delete calls will only
    /// ever touch the first one.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        debug!(name = %contact.name, "add contact");
        self.contacts.push(contact);
        self.save()
    }

    /// Replace the first contact whose name equals `old_name` exactly.
    ///
    /// The replacement keeps the record's position. Returns `Ok(true)` and
    /// saves on a hit; returns `Ok(false)` and writes nothing when no
    /// record matches.
    pub fn update(&mut self, old_name: &str, new_contact: Contact) -> Result<bool> {
        match self.contacts.iter().position(|c| c.name == old_name) {
            Some(i) => {
                debug!(old_name, new_name = %new_contact.name, index = i, "update contact");
                self.contacts[i] = new_contact;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first contact whose name equals `name` exactly.
    ///
    /// Returns `Ok(true)` and saves on a hit; returns `Ok(false)` and
    /// writes nothing when no record matches.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        match self.contacts.iter().position(|c| c.name == name) {
            Some(i) => {
                debug!(name, index = i, "delete contact");
                self.contacts.remove(i);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// All contacts whose name contains `query` as a case-insensitive
    /// substring, in original order.
    ///
    /// An empty query matches every contact. Never mutates the book or the
    /// file.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let needle = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Current records, in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
